//! Reusable layout builders for consistent screen structure.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::theme::{
    FILTER_BAR_HEIGHT, HELP_BAR_HEIGHT, PAGINATION_HEIGHT, SCREEN_MARGIN, TITLE_HEIGHT,
};

/// Areas of the posts screen, top to bottom.
#[derive(Debug, Clone, Copy)]
pub struct PostsLayout {
    pub title: Rect,
    pub filter: Rect,
    pub content: Rect,
    pub pagination: Rect,
    pub help: Rect,
}

/// Title, filter bar, post table, pagination row and help bar.
pub fn posts_layout(area: Rect) -> PostsLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(SCREEN_MARGIN)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Length(FILTER_BAR_HEIGHT),
            Constraint::Min(5),
            Constraint::Length(PAGINATION_HEIGHT),
            Constraint::Length(HELP_BAR_HEIGHT),
        ])
        .split(area);

    PostsLayout {
        title: chunks[0],
        filter: chunks[1],
        content: chunks[2],
        pagination: chunks[3],
        help: chunks[4],
    }
}

/// Split the filter bar into search input, tag, sort field and sort order.
///
/// Returns (search_area, tag_area, sort_by_area, sort_order_area)
pub fn filter_bar_layout(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),
            Constraint::Length(20),
            Constraint::Length(20),
            Constraint::Length(20),
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2], chunks[3])
}

/// Split a title area into title text and loading indicator.
///
/// Returns (title_text_area, loading_indicator_area)
pub fn title_with_loading(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(100), Constraint::Length(1)])
        .split(area);

    (chunks[0], chunks[1])
}
