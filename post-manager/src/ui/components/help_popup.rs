use ratatui::{
    prelude::*,
    widgets::{List, ListItem},
    Frame,
};

use super::popup;
use crate::ui::theme;

pub fn render_help_popup(f: &mut Frame) {
    let inner = popup::render_popup(f, popup::HELP_SIZE, " Help (press ? or Esc to close) ");

    let items: Vec<ListItem> = HELP_ITEMS
        .iter()
        .map(|(key, description)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:15}", key), theme::header_style()),
                Span::raw(*description),
            ]))
        })
        .collect();

    let list = List::new(items).style(Style::default().fg(Color::White));

    f.render_widget(list, inner);
}

const HELP_ITEMS: &[(&str, &str)] = &[
    ("↑/k", "Move selection up"),
    ("↓/j", "Move selection down"),
    ("r", "Reload current page"),
    ("", ""),
    ("--- Filter ---", ""),
    ("/", "Edit search text"),
    ("Enter", "Submit search (in search mode)"),
    ("Esc", "Leave search mode without submitting"),
    ("Backspace", "Delete last character"),
    ("Ctrl+U", "Clear search text"),
    ("t / T", "Next / previous tag"),
    ("s / S", "Next / previous sort field"),
    ("o", "Toggle sort order"),
    ("", ""),
    ("--- Pages ---", ""),
    ("n/→", "Next page"),
    ("p/←", "Previous page"),
    ("l", "Cycle page size (10, 20, 30)"),
    ("", ""),
    ("--- Global ---", ""),
    ("?", "Toggle this help"),
    ("q", "Quit application"),
];
