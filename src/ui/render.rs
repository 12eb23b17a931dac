//! Render functions for the TUI.
//!
//! Lays out the single view: header, search input, optional category filter
//! row, request status region, result cards, and the bottom status bar.

use crate::app::{App, Focus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{results, status};

/// Minimum terminal dimensions required for normal operation.
pub(super) const MIN_WIDTH: u16 = 50;
pub(super) const MIN_HEIGHT: u16 = 12;

/// Loading spinner animation frames.
const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Main render dispatch function.
pub(super) fn render(f: &mut Frame, app: &App) {
    let area = f.area();

    // Guard against zero-size areas to prevent panics
    if area.width < 1 || area.height < 1 {
        return;
    }

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = if area.height < 3 || area.width < 20 {
            Paragraph::new("Too small")
        } else {
            Paragraph::new(format!(
                "Terminal too small\n\nMinimum: {}x{}\nCurrent: {}x{}",
                MIN_WIDTH, MIN_HEIGHT, area.width, area.height
            ))
            .alignment(Alignment::Center)
        };
        f.render_widget(msg, area);
        return;
    }

    // The filter row appears only once the results contain categories.
    let has_filter = !app.categories.is_empty();

    let mut constraints = vec![
        Constraint::Length(1), // header
        Constraint::Length(3), // search input
    ];
    if has_filter {
        constraints.push(Constraint::Length(3)); // category filter
    }
    constraints.push(Constraint::Length(1)); // request status region
    constraints.push(Constraint::Min(0)); // result cards
    constraints.push(Constraint::Length(1)); // status bar

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut row = 0;
    render_header(f, app, chunks[row]);
    row += 1;
    render_search_input(f, app, chunks[row]);
    row += 1;
    if has_filter {
        render_filter_row(f, app, chunks[row]);
        row += 1;
    }
    render_status_region(f, app, chunks[row]);
    row += 1;
    results::render(f, app, chunks[row]);
    row += 1;
    status::render(f, app, chunks[row]);
}

/// Render the title bar: app name on the left, active theme on the right.
fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(16)])
        .split(area);

    let title = Paragraph::new(Span::styled(" Recipe Finder", app.style("header_title")));
    f.render_widget(title, cols[0]);

    let theme = Paragraph::new(Span::styled(
        format!("Theme: {} ", app.theme_variant.name()),
        app.style("header_meta"),
    ))
    .alignment(Alignment::Right);
    f.render_widget(theme, cols[1]);
}

/// Render the search input row.
fn render_search_input(f: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.focus == Focus::Search;

    let border_style = if is_focused {
        app.style("panel_border_focused")
    } else {
        app.style("panel_border")
    };

    let content = if app.query.is_empty() && !is_focused {
        Line::from(Span::styled(
            "Search for a recipe...",
            app.style("input_placeholder"),
        ))
    } else {
        let mut spans = vec![Span::styled(app.query.clone(), app.style("input_text"))];
        if is_focused {
            spans.push(Span::styled("_", app.style("input_text")));
        }
        Line::from(spans)
    };

    let input = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Search "),
    );
    f.render_widget(input, area);
}

/// Render the category filter row: "All Categories" plus every category
/// observed in the current result set, in first-appearance order.
fn render_filter_row(f: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.focus == Focus::Filter;
    let selected = app.filter_index();

    let border_style = if is_focused {
        app.style("panel_border_focused")
    } else {
        app.style("panel_border")
    };

    let mut spans = Vec::with_capacity(app.categories.len() * 2 + 2);
    for (i, name) in std::iter::once("All Categories")
        .chain(app.categories.iter().map(String::as_str))
        .enumerate()
    {
        let style = if i == selected {
            app.style("filter_selected")
        } else {
            app.style("filter_option")
        };
        spans.push(Span::styled(format!(" {} ", name), style));
        spans.push(Span::raw(" "));
    }

    let row = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Filter by Category "),
    );
    f.render_widget(row, area);
}

/// Render the request status region: loading, error, or empty-state text.
///
/// The error message takes precedence over the empty-state message; the
/// card list below renders regardless, so stale results stay visible while
/// a new request is in flight.
fn render_status_region(f: &mut Frame, app: &App, area: Rect) {
    let line = if app.loading {
        Line::from(Span::styled(
            format!(" {} Loading...", SPINNER[app.spinner_frame % SPINNER.len()]),
            app.style("status_loading"),
        ))
    } else if let Some(error) = &app.error {
        Line::from(Span::styled(
            format!(" Error: {}", error),
            app.style("status_error"),
        ))
    } else if app.results.is_empty() && !app.query.is_empty() {
        Line::from(Span::styled(
            " No results found.",
            app.style("status_empty"),
        ))
    } else {
        Line::default()
    };

    f.render_widget(Paragraph::new(line), area);
}
