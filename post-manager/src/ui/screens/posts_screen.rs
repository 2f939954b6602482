use itertools::Itertools;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::state::{AppState, LoadingState};
use crate::ui::{
    components::{empty_state, filter_bar, help_bar, pagination, screen_title},
    layouts, theme,
};
use posts_api::endpoints::posts::Post;

pub fn render(f: &mut Frame, state: &AppState) {
    let layout = layouts::posts_layout(f.area());

    screen_title::render_screen_title(
        f,
        layout.title,
        &state.location,
        &state.posts.posts_loading,
    );
    filter_bar::render_filter_bar(f, layout.filter, &state.filter_bar, state.input_mode);
    render_content(f, layout.content, state);
    pagination::render_pagination(f, layout.pagination, &state.posts.pagination());
    help_bar::render_help_bar(f, layout.help, help_bar::help_text(state.input_mode));
}

fn render_content(f: &mut Frame, area: Rect, state: &AppState) {
    let posts = &state.posts;

    match &posts.posts_loading {
        LoadingState::Loading(..) if posts.posts.is_empty() => {
            empty_state::render_loading_state(f, area, "Posts", "Loading posts...");
            return;
        }
        LoadingState::Error(error) if posts.posts.is_empty() => {
            empty_state::render_error_state(f, area, "Posts", error);
            return;
        }
        _ => {}
    }

    if posts.posts.is_empty() {
        empty_state::render_empty_state(
            f,
            area,
            "Posts",
            "No posts found",
            Some("Change the search or tag filter"),
        );
        return;
    }

    let header = Row::new(vec![
        Cell::from(Text::from("ID").right_aligned()),
        Cell::from("Title"),
        Cell::from("Tags"),
        Cell::from(Text::from("Reactions").right_aligned()),
    ])
    .style(theme::header_style())
    .underlined();

    let rows: Vec<Row> = posts.posts.iter().map(post_row).collect();

    let title = match &posts.posts_loading {
        LoadingState::Error(error) => Line::from(vec![
            Span::raw(format!("Posts ({} total) ", posts.total)),
            Span::styled(error.clone(), theme::error_style()),
        ]),
        _ => Line::from(format!("Posts ({} total)", posts.total)),
    };

    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Percentage(50),
            Constraint::Percentage(30),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(title))
    .row_highlight_style(theme::selection_style());

    f.render_stateful_widget(table, area, &mut posts.table_state.borrow_mut());
}

fn post_row(post: &Post) -> Row<'static> {
    let reactions = format!(
        "👍 {} 👎 {}",
        post.reactions.likes(),
        post.reactions.dislikes()
    );

    Row::new(vec![
        Cell::from(Text::from(post.id.to_string()).right_aligned()),
        Cell::from(post.title.clone()),
        Cell::from(post.tags.iter().join(", ")).style(theme::help_text_style()),
        Cell::from(Text::from(reactions).right_aligned()),
    ])
}
