//! One-cell status glyph for a [`LoadingState`].

use ratatui::{
    layout::{Alignment, Rect},
    text::Span,
    widgets::Paragraph,
    Frame,
};
use throbber_widgets_tui::{Throbber, BRAILLE_EIGHT};

use crate::state::LoadingState;
use crate::ui::theme;

/// Spinner frame while loading, a check or cross once settled, nothing
/// before the first load.
pub fn indicator_span(loading_state: &LoadingState) -> Option<Span<'static>> {
    match loading_state {
        LoadingState::NotStarted => None,
        LoadingState::Loading(throbber_state) => Some(
            Throbber::default()
                .throbber_set(BRAILLE_EIGHT)
                .throbber_style(theme::loading_style())
                .to_symbol_span(throbber_state),
        ),
        LoadingState::Loaded => Some(Span::styled("✓", theme::success_style())),
        LoadingState::Error(_) => Some(Span::styled("x", theme::error_style())),
    }
}

/// Right-aligned indicator, used in the screen title.
pub fn render_loading_indicator(f: &mut Frame, area: Rect, loading_state: &LoadingState) {
    if let Some(span) = indicator_span(loading_state) {
        f.render_widget(Paragraph::new(span).alignment(Alignment::Right), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_per_state() {
        assert!(indicator_span(&LoadingState::NotStarted).is_none());
        assert!(indicator_span(&LoadingState::loading()).is_some());
        assert_eq!(
            indicator_span(&LoadingState::Loaded).map(|s| s.content.into_owned()),
            Some("✓".to_string())
        );
        assert_eq!(
            indicator_span(&LoadingState::Error("boom".to_string()))
                .map(|s| s.content.into_owned()),
            Some("x".to_string())
        );
    }
}
