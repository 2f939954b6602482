use crate::state::posts::PostQuery;
use posts_api::endpoints::{posts::Post, tags::Tag, SortOrder};

/// Commands to execute (user actions → state changes and background tasks)
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // Post list selection
    SelectNext,
    SelectPrevious,

    // Data loading
    LoadTags,
    LoadPosts,

    // Search input
    EnterSearchMode,
    ExitSearchMode,
    AppendSearchChar(char),
    DeleteSearchChar,
    ClearSearch,
    SubmitSearch,

    // Selectors
    SelectTag(String),
    ChangeSortBy(String),
    ChangeSortOrder(SortOrder),

    // Pagination
    NextPage,
    PreviousPage,
    ChangePageSize(u64),

    // View toggles
    ToggleHelp,

    // System
    Quit,
}

/// Events from background tasks (responses to commands)
#[derive(Debug, Clone)]
pub enum DataEvent {
    TagsLoaded {
        tags: Vec<Tag>,
    },
    TagsLoadFailed,
    /// `query` is the request that produced this page
    PostsLoaded {
        query: PostQuery,
        posts: Vec<Post>,
        total: u64,
        skip: u64,
        limit: u64,
    },
    PostsLoadFailed {
        query: PostQuery,
        error: String,
    },
}
