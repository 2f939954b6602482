//! The post list that owns pagination and reacts to filter changes.

use posts_api::endpoints::{posts::Post, PostsQuery, SortOrder};
use ratatui::widgets::TableState;
use std::cell::RefCell;

use super::filter_bar::{FilterListener, FilterState, TAG_ALL};
use super::pagination::{Pagination, PaginationSetters};
use super::LoadingState;

/// Which listing endpoint a query maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostSource {
    All,
    Search(String),
    Tag(String),
}

/// Everything needed to request one page of posts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostQuery {
    pub search: String,
    pub tag: String,
    pub sort_by: String,
    pub sort_order: SortOrder,
    pub skip: u64,
    pub limit: u64,
}

impl PostQuery {
    pub fn new(limit: u64) -> Self {
        Self {
            search: String::new(),
            tag: String::new(),
            sort_by: String::new(),
            sort_order: SortOrder::Asc,
            skip: 0,
            limit,
        }
    }

    /// Seed the query from the filter the bar was mounted with.
    pub fn from_filter(filter: &FilterState, limit: u64) -> Self {
        Self {
            search: filter.search_query.clone(),
            tag: filter.selected_tag.clone(),
            sort_by: filter.sort_by.clone(),
            sort_order: filter.effective_sort_order(),
            ..Self::new(limit)
        }
    }

    /// Search wins over tag; `all` and empty mean no tag filter.
    pub fn source(&self) -> PostSource {
        if !self.search.is_empty() {
            PostSource::Search(self.search.clone())
        } else if !self.tag.is_empty() && self.tag != TAG_ALL {
            PostSource::Tag(self.tag.clone())
        } else {
            PostSource::All
        }
    }

    pub fn to_api_query(&self) -> PostsQuery {
        let sorted = !self.sort_by.is_empty() && self.sort_by != "none";
        PostsQuery {
            q: None,
            limit: self.limit,
            skip: self.skip,
            sort_by: sorted.then(|| self.sort_by.clone()),
            order: sorted.then_some(self.sort_order),
        }
    }
}

/// Applies widget callbacks to a [`PostQuery`] and records whether the
/// post list has to be fetched again.
pub struct PostsController<'a> {
    query: &'a mut PostQuery,
    reload: bool,
}

impl<'a> PostsController<'a> {
    pub fn new(query: &'a mut PostQuery) -> Self {
        Self {
            query,
            reload: false,
        }
    }

    pub fn reload_requested(&self) -> bool {
        self.reload
    }
}

impl FilterListener for PostsController<'_> {
    fn on_search(&mut self, query: &str) {
        tracing::debug!("Search submitted: {:?}", query);
        self.query.search = query.to_string();
        self.query.skip = 0;
        self.reload = true;
    }

    fn on_tag_select(&mut self, tag: &str) {
        tracing::debug!("Tag selected: {}", tag);
        self.query.tag = tag.to_string();
        self.query.skip = 0;
        self.reload = true;
    }

    fn on_sort_change(&mut self, sort_by: &str, sort_order: SortOrder) {
        tracing::debug!("Sort changed: {} {}", sort_by, sort_order);
        self.query.sort_by = sort_by.to_string();
        self.query.sort_order = sort_order;
        self.reload = true;
    }
}

impl PaginationSetters for PostsController<'_> {
    fn set_skip(&mut self, skip: u64) {
        self.query.skip = skip;
        self.reload = true;
    }

    fn set_limit(&mut self, limit: u64) {
        self.query.limit = limit;
        self.reload = true;
    }
}

#[derive(Debug, Clone)]
pub struct PostsState {
    pub posts: Vec<Post>,
    pub total: u64,
    pub query: PostQuery,
    pub posts_loading: LoadingState,
    pub table_state: RefCell<TableState>,
}

impl PostsState {
    pub fn new(query: PostQuery) -> Self {
        Self {
            posts: Vec::new(),
            total: 0,
            query,
            posts_loading: LoadingState::NotStarted,
            table_state: RefCell::new(TableState::default()),
        }
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.total, self.query.skip, self.query.limit)
    }

    pub fn select_next(&self) {
        if self.posts.is_empty() {
            return;
        }
        let mut table_state = self.table_state.borrow_mut();
        let next = match table_state.selected() {
            Some(i) if i + 1 < self.posts.len() => i + 1,
            Some(i) => i,
            None => 0,
        };
        table_state.select(Some(next));
    }

    pub fn select_prev(&self) {
        if self.posts.is_empty() {
            return;
        }
        let mut table_state = self.table_state.borrow_mut();
        let prev = table_state.selected().map_or(0, |i| i.saturating_sub(1));
        table_state.select(Some(prev));
    }

    pub fn selected_post(&self) -> Option<&Post> {
        self.table_state
            .borrow()
            .selected()
            .and_then(|i| self.posts.get(i))
    }
}
