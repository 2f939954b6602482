pub mod filter_bar;
pub mod pagination;
pub mod posts;
pub mod reducer;

use crate::location::Location;
use filter_bar::FilterBarState;
use posts::{PostQuery, PostsState};
use throbber_widgets_tui::ThrobberState;

/// Represents loading state separate from data state
#[derive(Default, Debug, Clone, PartialEq)]
pub enum LoadingState {
    #[default]
    NotStarted,
    Loading(ThrobberState),
    Loaded,
    Error(String),
}

impl LoadingState {
    pub fn loading() -> Self {
        Self::Loading(ThrobberState::default())
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading(_))
    }
}

/// Which control receives typed characters
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
}

#[derive(Debug, Clone)]
pub struct AppState {
    // Address bar
    pub location: Location,

    // Widgets and the list they drive
    pub filter_bar: FilterBarState,
    pub posts: PostsState,

    // UI state
    pub input_mode: InputMode,
    pub help_visible: bool,

    // System
    pub should_quit: bool,
}

impl AppState {
    /// Mount the screen at `location`. The post query starts from the same
    /// filter the bar reads so the first page matches the URL.
    pub fn new(location: Location, page_size: u64) -> Self {
        let filter_bar = FilterBarState::mount(&location);
        let query = PostQuery::from_filter(&filter_bar.filter, page_size);

        tracing::debug!("Mounted at {} (page size {})", location.href(), page_size);

        Self {
            location,
            filter_bar,
            posts: PostsState::new(query),
            input_mode: InputMode::Normal,
            help_visible: false,
            should_quit: false,
        }
    }

    /// Throbber to advance while either the tags or the posts are in flight
    pub fn loading_state(&mut self) -> Option<&mut ThrobberState> {
        if let LoadingState::Loading(ref mut throbber_state) = self.posts.posts_loading {
            return Some(throbber_state);
        }
        if let LoadingState::Loading(ref mut throbber_state) = self.filter_bar.tags_loading {
            return Some(throbber_state);
        }
        None
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Location::default(), pagination::PAGE_SIZES[0])
    }
}
