//! Result card list widget.
//!
//! Renders the filtered result set as a vertical list of cards, one per
//! recipe: title, issue identifiers, category, cover color, and notes.

use crate::app::{App, Focus};
use crate::search::Recipe;
use crate::util::{strip_control_chars, truncate_to_width};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Render the result card list panel.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.focus == Focus::Results;
    let filtered = app.filtered_results();

    let title_width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = filtered
        .iter()
        .enumerate()
        .map(|(i, recipe)| card_item(app, recipe, i == app.selected_result, title_width))
        .collect();

    let border_style = if is_focused {
        app.style("panel_border_focused")
    } else {
        app.style("panel_border")
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" Results ({}) ", filtered.len())),
    );

    // ListState keeps the selected card scrolled into view.
    let mut state = ListState::default();
    if !filtered.is_empty() {
        state.select(Some(app.selected_result.min(filtered.len() - 1)));
    }
    f.render_stateful_widget(list, area, &mut state);
}

/// Build the multi-line list item for one recipe card.
///
/// Field values came off the network, so they are stripped of control
/// characters before being written into the terminal.
fn card_item<'a>(app: &App, recipe: &Recipe, selected: bool, title_width: usize) -> ListItem<'a> {
    let title_style = if selected {
        app.style("card_title_selected")
    } else {
        app.style("card_title")
    };
    let label = app.style("card_label");
    let value = app.style("card_value");

    let title = truncate_to_width(&strip_control_chars(&recipe.title), title_width).into_owned();

    let notes_span = match &recipe.notes {
        Some(url) => Span::styled(
            strip_control_chars(url).into_owned(),
            app.style("card_link"),
        ),
        None => Span::styled("None", app.style("card_placeholder")),
    };

    let lines = vec![
        Line::from(Span::styled(title, title_style)),
        Line::from(vec![
            Span::styled("  Issue: ", label),
            Span::styled(
                strip_control_chars(&recipe.issue_line()).into_owned(),
                value,
            ),
        ]),
        Line::from(vec![
            Span::styled("  Category: ", label),
            Span::styled(strip_control_chars(&recipe.category).into_owned(), value),
        ]),
        Line::from(vec![
            Span::styled("  Cover Color: ", label),
            Span::styled(strip_control_chars(&recipe.cover_color).into_owned(), value),
        ]),
        Line::from(vec![Span::styled("  Notes: ", label), notes_span]),
        Line::default(),
    ];

    ListItem::new(lines)
}
