use crate::events::AppCommand;
use crate::input::{Key, KeyEvent};
use crate::state::{AppState, InputMode};

/// Map user input (KeyEvent) to AppCommand based on current UI state
/// Returns None if the key should be ignored
pub fn handle_key_input(event: KeyEvent, state: &AppState) -> Option<AppCommand> {
    let key = event.key;

    // Ctrl+C always quits, even while typing
    if event.modifiers.ctrl && key == Key::Char('c') {
        return Some(AppCommand::Quit);
    }

    // Priority 1: search input owns the keyboard
    if state.input_mode == InputMode::Search {
        return handle_search_keys(event);
    }

    // Priority 2: help popup
    if state.help_visible {
        return match key {
            Key::Char('?') | Key::Esc => Some(AppCommand::ToggleHelp),
            Key::Char('q') => Some(AppCommand::Quit),
            _ => None,
        };
    }

    let filter_bar = &state.filter_bar;
    let pagination = state.posts.pagination();

    match key {
        Key::Char('?') => Some(AppCommand::ToggleHelp),
        Key::Char('q') => Some(AppCommand::Quit),

        // Post list
        Key::Up | Key::Char('k') => Some(AppCommand::SelectPrevious),
        Key::Down | Key::Char('j') => Some(AppCommand::SelectNext),
        Key::Char('r') => Some(AppCommand::LoadPosts),

        // Filter bar
        Key::Char('/') => Some(AppCommand::EnterSearchMode),
        Key::Char('t') => Some(AppCommand::SelectTag(filter_bar.cycle_tag(true))),
        Key::Char('T') => Some(AppCommand::SelectTag(filter_bar.cycle_tag(false))),
        Key::Char('s') => Some(AppCommand::ChangeSortBy(
            filter_bar.cycle_sort_by(true).to_string(),
        )),
        Key::Char('S') => Some(AppCommand::ChangeSortBy(
            filter_bar.cycle_sort_by(false).to_string(),
        )),
        Key::Char('o') => Some(AppCommand::ChangeSortOrder(
            filter_bar.filter.effective_sort_order().toggle(),
        )),

        // Pagination (disabled buttons ignore presses)
        Key::Right | Key::Char('n') if !pagination.next_disabled() => Some(AppCommand::NextPage),
        Key::Left | Key::Char('p') if !pagination.previous_disabled() => {
            Some(AppCommand::PreviousPage)
        }
        Key::Char('l') => Some(AppCommand::ChangePageSize(pagination.next_page_size())),

        _ => None,
    }
}

fn handle_search_keys(event: KeyEvent) -> Option<AppCommand> {
    match event.key {
        Key::Enter => Some(AppCommand::SubmitSearch),
        Key::Esc => Some(AppCommand::ExitSearchMode),
        Key::Backspace => Some(AppCommand::DeleteSearchChar),
        Key::Char('u') if event.modifiers.ctrl => Some(AppCommand::ClearSearch),
        Key::Char(c) if !c.is_control() => Some(AppCommand::AppendSearchChar(c)),
        _ => None,
    }
}
