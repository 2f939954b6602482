//! Page-size selector on the left, Previous/Next on the right.

use ratatui::prelude::Rect;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::pagination::Pagination;
use crate::ui::theme;

pub fn render_pagination(f: &mut Frame, area: Rect, pagination: &Pagination) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let page_size = Line::from(vec![
        Span::raw("Show "),
        Span::styled(format!("[{}]", pagination.limit), theme::header_style()),
        Span::raw(" items "),
        Span::styled("(l)", theme::help_text_style()),
    ]);
    f.render_widget(Paragraph::new(page_size), chunks[0]);

    let buttons = Line::from(vec![
        Span::styled(
            format!("page {} of {}  ", pagination.current_page(), pagination.page_count()),
            theme::help_text_style(),
        ),
        button("< Prev (p)", pagination.previous_disabled()),
        Span::raw("  "),
        button("Next (n) >", pagination.next_disabled()),
    ]);
    f.render_widget(
        Paragraph::new(buttons).alignment(Alignment::Right),
        chunks[1],
    );
}

fn button(label: &'static str, disabled: bool) -> Span<'static> {
    let style = if disabled {
        theme::disabled_style()
    } else {
        theme::button_style()
    };
    Span::styled(label, style)
}
