//! Search input plus tag, sort field and sort order selectors.

use convert_case::{Case, Casing};
use ratatui::prelude::Rect;
use ratatui::{
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::loading_indicator;
use crate::state::filter_bar::{FilterBarState, TAG_ALL};
use crate::state::InputMode;
use crate::ui::{layouts, theme};
use posts_api::endpoints::SortOrder;

const SEARCH_PLACEHOLDER: &str = "Search posts...";
const TAG_PLACEHOLDER: &str = "Select tag";
const TAG_LOADING_PLACEHOLDER: &str = "Loading tags";
const SORT_BY_PLACEHOLDER: &str = "Sort by";
const SORT_ORDER_PLACEHOLDER: &str = "Sort order";

pub fn render_filter_bar(f: &mut Frame, area: Rect, state: &FilterBarState, input_mode: InputMode) {
    let (search_area, tag_area, sort_by_area, sort_order_area) =
        layouts::filter_bar_layout(area);
    let filter = &state.filter;

    render_search_input(
        f,
        search_area,
        &filter.search_query,
        input_mode == InputMode::Search,
    );

    let tag_label = (!filter.selected_tag.is_empty()).then(|| tag_label(&filter.selected_tag));
    let (tag_status, tag_placeholder) = if state.tags_loading.is_loading() {
        (
            loading_indicator::indicator_span(&state.tags_loading),
            TAG_LOADING_PLACEHOLDER,
        )
    } else {
        (None, TAG_PLACEHOLDER)
    };
    let mut tag_title = vec![Span::raw(" Tag [t] ")];
    tag_title.extend(tag_status);
    render_selector(f, tag_area, Line::from(tag_title), tag_label.as_deref(), tag_placeholder);

    let sort_by_label = (!filter.sort_by.is_empty()).then(|| sort_field_label(&filter.sort_by));
    render_selector(
        f,
        sort_by_area,
        Line::from(" Sort [s] "),
        sort_by_label.as_deref(),
        SORT_BY_PLACEHOLDER,
    );

    render_selector(
        f,
        sort_order_area,
        Line::from(" Order [o] "),
        filter.sort_order.map(sort_order_label),
        SORT_ORDER_PLACEHOLDER,
    );
}

fn render_search_input(f: &mut Frame, area: Rect, query: &str, focused: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Search [/] ")
        .border_style(if focused {
            theme::input_focused_style()
        } else {
            ratatui::style::Style::default()
        });
    let inner = block.inner(area);

    let text = if query.is_empty() && !focused {
        Line::from(Span::styled(SEARCH_PLACEHOLDER, theme::placeholder_style()))
    } else {
        Line::from(query)
    };
    f.render_widget(Paragraph::new(text).block(block), area);

    if focused {
        let width = query.chars().count() as u16;
        let x = inner.x + width.min(inner.width.saturating_sub(1));
        f.set_cursor_position((x, inner.y));
    }
}

fn render_selector(
    f: &mut Frame,
    area: Rect,
    title: Line<'static>,
    value: Option<&str>,
    placeholder: &str,
) {
    let text = match value {
        Some(value) => Line::from(value),
        None => Line::from(Span::styled(placeholder, theme::placeholder_style())),
    };

    let selector = Paragraph::new(text).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(selector, area);
}

/// Display label for a tag selector value
pub fn tag_label(tag: &str) -> String {
    if tag == TAG_ALL {
        "All tags".to_string()
    } else {
        tag.to_string()
    }
}

/// Display label for a sort field, e.g. `reactions` -> `Reactions`
pub fn sort_field_label(field: &str) -> String {
    match field {
        "id" => "ID".to_string(),
        other => other.to_case(Case::Title),
    }
}

pub fn sort_order_label(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Asc => "Ascending",
        SortOrder::Desc => "Descending",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::LoadingState;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered(state: &FilterBarState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 3)).unwrap();
        terminal
            .draw(|f| render_filter_bar(f, f.area(), state, InputMode::Normal))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_tag_selector_shows_loading_until_tags_arrive() {
        let mut state = FilterBarState {
            tags_loading: LoadingState::loading(),
            ..Default::default()
        };
        assert!(rendered(&state).contains(TAG_LOADING_PLACEHOLDER));

        state.set_tags(Vec::new());
        let text = rendered(&state);
        assert!(!text.contains(TAG_LOADING_PLACEHOLDER));
        assert!(text.contains(TAG_PLACEHOLDER));
    }

    #[test]
    fn test_labels() {
        assert_eq!(tag_label("all"), "All tags");
        assert_eq!(tag_label("history"), "history");
        assert_eq!(sort_field_label("id"), "ID");
        assert_eq!(sort_field_label("none"), "None");
        assert_eq!(sort_field_label("reactions"), "Reactions");
        assert_eq!(sort_order_label(SortOrder::Desc), "Descending");
    }
}
