//! Shared help bar component for bottom navigation hints.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::InputMode;
use crate::ui::theme;

/// Render the help bar with the given text, gray and centered in a
/// bordered block.
pub fn render_help_bar(f: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text)
        .style(theme::help_text_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(help, area);
}

pub const HELP_TEXT_DEFAULT: &str =
    "/ search  t tag  s sort  o order  n/p page  l page size  ? help  q quit";

pub const HELP_TEXT_SEARCH: &str = "Enter: search  Esc: done  Ctrl+U: clear";

pub fn help_text(input_mode: InputMode) -> &'static str {
    match input_mode {
        InputMode::Normal => HELP_TEXT_DEFAULT,
        InputMode::Search => HELP_TEXT_SEARCH,
    }
}
