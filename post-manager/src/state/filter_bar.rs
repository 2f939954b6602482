//! Search/filter bar state and its URL synchronization.
//!
//! The bar owns four values (search text, tag, sort field, sort order). Every
//! committed change notifies the parent through [`FilterListener`] and then
//! rewrites the whole query string from the current values.

use posts_api::endpoints::{tags::Tag, SortOrder};

use super::LoadingState;
use crate::location::{build_query, Location, Navigator};

/// Tag selector value meaning "no tag filter".
pub const TAG_ALL: &str = "all";

/// Sort fields offered by the sort selector, in display order.
pub const SORT_FIELDS: [&str; 4] = ["none", "id", "title", "reactions"];

/// Query parameter names, in the order they are written.
pub mod params {
    pub const SEARCH: &str = "search";
    pub const SORT_BY: &str = "sortBy";
    pub const SORT_ORDER: &str = "sortOrder";
    pub const TAG: &str = "tag";
}

/// Callbacks into the component that owns the post list.
///
/// Each method is called synchronously, once per user action.
pub trait FilterListener {
    fn on_search(&mut self, query: &str);
    fn on_tag_select(&mut self, tag: &str);
    fn on_sort_change(&mut self, sort_by: &str, sort_order: SortOrder);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_query: String,
    pub sort_by: String,
    pub sort_order: Option<SortOrder>,
    pub selected_tag: String,
}

impl FilterState {
    /// Read the filter from the location. A missing or unknown `sortOrder`
    /// becomes ascending.
    pub fn from_location(location: &Location) -> Self {
        let sort_order = match location.param(params::SORT_ORDER) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::debug!("{}, defaulting to asc", e);
                SortOrder::Asc
            }),
            None => SortOrder::Asc,
        };

        Self {
            search_query: location.param(params::SEARCH).unwrap_or_default(),
            sort_by: location.param(params::SORT_BY).unwrap_or_default(),
            sort_order: Some(sort_order),
            selected_tag: location.param(params::TAG).unwrap_or_default(),
        }
    }

    /// Query string for the current values, without the leading `?`.
    pub fn query_string(&self) -> String {
        let sort_order = self.sort_order.map(|o| o.as_str()).unwrap_or_default();
        build_query([
            (params::SEARCH, self.search_query.as_str()),
            (params::SORT_BY, self.sort_by.as_str()),
            (params::SORT_ORDER, sort_order),
            (params::TAG, self.selected_tag.as_str()),
        ])
    }

    pub fn effective_sort_order(&self) -> SortOrder {
        self.sort_order.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct FilterBarState {
    pub filter: FilterState,
    pub tags: Vec<Tag>,
    pub tags_loading: LoadingState,
}

impl FilterBarState {
    /// Initial state for a freshly mounted bar. Tags start empty and
    /// arrive later via [`FilterBarState::set_tags`].
    pub fn mount(location: &Location) -> Self {
        Self {
            filter: FilterState::from_location(location),
            tags: Vec::new(),
            tags_loading: LoadingState::NotStarted,
        }
    }

    pub fn set_tags(&mut self, tags: Vec<Tag>) {
        self.tags = tags;
        self.tags_loading = LoadingState::Loaded;
    }

    /// Selector entries: the `all` sentinel followed by every tag slug.
    pub fn tag_options(&self) -> Vec<&str> {
        std::iter::once(TAG_ALL)
            .chain(self.tags.iter().map(|tag| tag.slug.as_str()))
            .collect()
    }

    pub fn cycle_tag(&self, forward: bool) -> String {
        cycle(&self.tag_options(), &self.filter.selected_tag, forward).to_string()
    }

    pub fn cycle_sort_by(&self, forward: bool) -> &'static str {
        cycle(&SORT_FIELDS, &self.filter.sort_by, forward)
    }

    // Typing only edits the buffer; nothing is reported until submit.

    pub fn push_char(&mut self, c: char) {
        self.filter.search_query.push(c);
    }

    pub fn pop_char(&mut self) {
        self.filter.search_query.pop();
    }

    pub fn clear_input(&mut self) {
        self.filter.search_query.clear();
    }

    pub fn submit_search<L, N>(&mut self, listener: &mut L, navigator: &mut N)
    where
        L: FilterListener + ?Sized,
        N: Navigator + ?Sized,
    {
        listener.on_search(&self.filter.search_query);
        self.update_url(navigator);
    }

    pub fn select_tag<L, N>(&mut self, tag: &str, listener: &mut L, navigator: &mut N)
    where
        L: FilterListener + ?Sized,
        N: Navigator + ?Sized,
    {
        self.filter.selected_tag = tag.to_string();
        listener.on_tag_select(tag);
        self.update_url(navigator);
    }

    pub fn change_sort_by<L, N>(&mut self, sort_by: &str, listener: &mut L, navigator: &mut N)
    where
        L: FilterListener + ?Sized,
        N: Navigator + ?Sized,
    {
        self.filter.sort_by = sort_by.to_string();
        listener.on_sort_change(sort_by, self.filter.effective_sort_order());
        self.update_url(navigator);
    }

    pub fn change_sort_order<L, N>(&mut self, order: SortOrder, listener: &mut L, navigator: &mut N)
    where
        L: FilterListener + ?Sized,
        N: Navigator + ?Sized,
    {
        self.filter.sort_order = Some(order);
        listener.on_sort_change(&self.filter.sort_by, order);
        self.update_url(navigator);
    }

    fn update_url<N: Navigator + ?Sized>(&self, navigator: &mut N) {
        navigator.navigate(&format!("?{}", self.filter.query_string()));
    }
}

/// Option after (or before) `current`, wrapping at both ends. An unknown
/// current value starts from the first (or last) option.
fn cycle<'a>(options: &[&'a str], current: &str, forward: bool) -> &'a str {
    let len = options.len();
    if len == 0 {
        return "";
    }
    let index = match options.iter().position(|o| *o == current) {
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
        None if forward => 0,
        None => len - 1,
    };
    options[index]
}
