//! Screen title: the current location, with the loading indicator on the
//! right.

use ratatui::prelude::Rect;
use ratatui::{
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::location::Location;
use crate::state::LoadingState;
use crate::ui::{layouts, theme};

pub fn render_screen_title(
    f: &mut Frame,
    area: Rect,
    location: &Location,
    loading_state: &LoadingState,
) {
    let (title_area, indicator_area) = layouts::title_with_loading(area);

    let title = Line::from(vec![
        Span::styled("Posts ", theme::title_style()),
        Span::styled(location.href(), theme::help_text_style()),
    ]);
    f.render_widget(Paragraph::new(title), title_area);

    super::loading_indicator::render_loading_indicator(f, indicator_area, loading_state);
}
