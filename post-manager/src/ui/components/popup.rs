//! Modal frame drawn over the screen.

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    text::Line,
    widgets::{Block, Clear},
    Frame,
};

use crate::ui::theme;

/// Width and height of the help popup, in percent of the screen
pub const HELP_SIZE: (u16, u16) = (80, 80);

/// Clear a centered area, draw an accent border titled `title` and hand
/// back the inner area for the caller to fill.
pub fn render_popup(f: &mut Frame, size: (u16, u16), title: &str) -> Rect {
    let area = popup_area(f.area(), size);
    f.render_widget(Clear, area);

    let block = Block::bordered()
        .title(Line::from(title).centered())
        .border_style(theme::accent_border_style());
    let inner = block.inner(area);
    f.render_widget(block, area);

    inner
}

fn popup_area(parent: Rect, (percent_x, percent_y): (u16, u16)) -> Rect {
    let [area] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(parent);
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(area);
    area
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_is_centered() {
        let area = popup_area(Rect::new(0, 0, 100, 50), HELP_SIZE);
        assert_eq!(area, Rect::new(10, 5, 80, 40));
    }
}
