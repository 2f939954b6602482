pub mod components;
pub mod layouts;
pub mod screens;
pub mod theme;

use crate::state::AppState;
use ratatui::Frame;

/// Pure render entry point.
/// This function is read-only and never mutates state
pub fn render_app(f: &mut Frame, state: &AppState) {
    screens::posts_screen::render(f, state);

    // Render help popup on top if visible
    if state.help_visible {
        components::help_popup::render_help_popup(f);
    }
}
