//! Centralized theme constants and style functions for consistent UI styling.
//!
//! All colors, layout constants, and common styles should be defined here
//! to ensure visual consistency across the screen and its components.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// Colors
// =============================================================================

/// Background color for selected/highlighted rows
pub const COLOR_SELECTION_BG: Color = Color::DarkGray;

/// Color for table headers
pub const COLOR_HEADER: Color = Color::Yellow;

/// Color for help text, placeholders and secondary information
pub const COLOR_HELP_TEXT: Color = Color::Gray;

/// Color for the screen title and accent text
pub const COLOR_TITLE: Color = Color::Cyan;

/// Color for loading/status messages
pub const COLOR_LOADING: Color = Color::Yellow;

/// Color for completed loads
pub const COLOR_SUCCESS: Color = Color::Green;

/// Color for error messages
pub const COLOR_ERROR: Color = Color::Red;

/// Border color for accent/highlighted elements
pub const COLOR_BORDER_ACCENT: Color = Color::Cyan;

/// Color for input fields when focused
pub const COLOR_INPUT_FOCUSED: Color = Color::Yellow;

/// Color for buttons that cannot be pressed
pub const COLOR_DISABLED: Color = Color::DarkGray;

// =============================================================================
// Layout Constants
// =============================================================================

/// Standard margin around screen content
pub const SCREEN_MARGIN: u16 = 1;

/// Height of the title/header area
pub const TITLE_HEIGHT: u16 = 1;

/// Height of the filter bar row
pub const FILTER_BAR_HEIGHT: u16 = 3;

/// Height of the pagination row
pub const PAGINATION_HEIGHT: u16 = 3;

/// Height of the help bar at the bottom
pub const HELP_BAR_HEIGHT: u16 = 3;

// =============================================================================
// Style Functions
// =============================================================================

/// Style for selected/highlighted rows in tables and lists
pub fn selection_style() -> Style {
    Style::default()
        .bg(COLOR_SELECTION_BG)
        .add_modifier(Modifier::BOLD)
}

/// Style for table headers
pub fn header_style() -> Style {
    Style::default()
        .fg(COLOR_HEADER)
        .add_modifier(Modifier::BOLD)
}

/// Style for help bar text
pub fn help_text_style() -> Style {
    Style::default().fg(COLOR_HELP_TEXT)
}

/// Style for placeholder text in empty inputs and selectors
pub fn placeholder_style() -> Style {
    Style::default()
        .fg(COLOR_HELP_TEXT)
        .add_modifier(Modifier::ITALIC)
}

/// Style for the screen title
pub fn title_style() -> Style {
    Style::default()
        .fg(COLOR_TITLE)
        .add_modifier(Modifier::BOLD)
}

/// Style for loading/status messages
pub fn loading_style() -> Style {
    Style::default().fg(COLOR_LOADING)
}

pub fn success_style() -> Style {
    Style::default().fg(COLOR_SUCCESS)
}

pub fn error_style() -> Style {
    Style::default().fg(COLOR_ERROR)
}

/// Border style for the input that currently has focus
pub fn input_focused_style() -> Style {
    Style::default()
        .fg(COLOR_INPUT_FOCUSED)
        .add_modifier(Modifier::BOLD)
}

/// Style for accent borders
pub fn accent_border_style() -> Style {
    Style::default().fg(COLOR_BORDER_ACCENT)
}

/// Style for a pressable button label
pub fn button_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Style for a disabled button label
pub fn disabled_style() -> Style {
    Style::default()
        .fg(COLOR_DISABLED)
        .add_modifier(Modifier::DIM)
}
