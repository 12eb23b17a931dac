//! Input handling for the TUI.
//!
//! Processes keyboard input and dispatches to the handler for the focused
//! control. Also owns search submission, since that is where user intent
//! turns into a background task.

use crate::app::{App, AppEvent, Focus};
use crate::util::{validate_url_for_open, MAX_SEARCH_QUERY_LENGTH};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use tokio::sync::mpsc;

use super::Action;

/// Main input dispatch function.
pub(super) fn handle_input(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Result<Action> {
    // Global keys first; the rest depends on focus.
    if modifiers.contains(KeyModifiers::CONTROL) {
        match code {
            KeyCode::Char('c') => return Ok(Action::Quit),
            KeyCode::Char('t') => {
                let name = app.toggle_theme();
                app.set_status(format!("Theme: {}", name));
                return Ok(Action::Continue);
            }
            _ => {}
        }
    }

    match code {
        KeyCode::Esc => return Ok(Action::Quit),
        KeyCode::Tab => {
            cycle_focus(app);
            return Ok(Action::Continue);
        }
        _ => {}
    }

    match app.focus {
        Focus::Search => handle_search_input(app, code, modifiers, event_tx),
        Focus::Filter => handle_filter_input(app, code),
        Focus::Results => handle_results_input(app, code),
    }

    Ok(Action::Continue)
}

/// Cycle focus through the visible controls.
///
/// The filter row only exists while the current results contain at least
/// one non-empty category, so the cycle skips it otherwise.
fn cycle_focus(app: &mut App) {
    let has_filter = !app.categories.is_empty();
    app.focus = match (has_filter, app.focus) {
        (true, Focus::Search) => Focus::Filter,
        (true, Focus::Filter) => Focus::Results,
        (true, Focus::Results) => Focus::Search,
        (false, Focus::Search) => Focus::Results,
        (false, Focus::Results) => Focus::Search,
        (false, Focus::Filter) => Focus::Search,
    };
}

/// Handle input while the search field has focus.
fn handle_search_input(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    event_tx: &mpsc::Sender<AppEvent>,
) {
    match code {
        KeyCode::Enter => spawn_search(app, event_tx),
        KeyCode::Backspace => {
            app.query.pop();
        }
        KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
            if app.query.chars().count() < MAX_SEARCH_QUERY_LENGTH {
                app.query.push(c);
            } else {
                app.set_status(format!(
                    "Search query too long (max {} chars)",
                    MAX_SEARCH_QUERY_LENGTH
                ));
            }
        }
        _ => {}
    }
}

/// Handle input while the category filter row has focus.
fn handle_filter_input(app: &mut App, code: KeyCode) {
    // Option 0 is "All Categories", options 1..=N the observed categories.
    let option_count = app.categories.len() + 1;
    let current = app.filter_index();

    match code {
        KeyCode::Left | KeyCode::Char('h') => {
            app.select_filter_by_index(current.saturating_sub(1));
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.select_filter_by_index((current + 1).min(option_count - 1));
        }
        KeyCode::Enter => {
            app.focus = Focus::Results;
        }
        _ => {}
    }
}

/// Handle input while the result list has focus.
fn handle_results_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Down | KeyCode::Char('j') => app.select_next_result(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev_result(),
        KeyCode::Enter | KeyCode::Char('o') => open_selected_notes(app),
        _ => {}
    }
}

/// Open the selected recipe's notes link in the system browser.
fn open_selected_notes(app: &mut App) {
    let notes = app.selected_recipe().and_then(|r| r.notes.clone());
    match notes {
        Some(url) => {
            // Validate before open::that() so a hostile record cannot launch
            // anything other than a web page.
            match validate_url_for_open(&url) {
                Ok(_) => {
                    if let Err(e) = open::that(&url) {
                        app.set_status(format!("Failed to open browser: {}", e));
                    } else {
                        app.set_status("Opening notes in browser...");
                    }
                }
                Err(e) => app.set_status(e.to_string()),
            }
        }
        None => app.set_status("No notes for this recipe"),
    }
}

/// Submit the current query as a background search task.
///
/// An empty query is a no-op: no request is issued and no state changes.
/// Otherwise the loading flag goes up, any prior error is cleared, and a
/// task is spawned that reports back via [`AppEvent::SearchCompleted`].
///
/// A previous in-flight request is neither cancelled nor guarded against;
/// outcomes apply in arrival order (last write wins).
pub fn spawn_search(app: &mut App, event_tx: &mpsc::Sender<AppEvent>) {
    if app.query.is_empty() {
        return;
    }

    app.loading = true;
    app.error = None;
    app.spinner_frame = 0;
    app.needs_redraw = true;

    let client = app.client.clone();
    let query = app.query.clone();
    let tx = event_tx.clone();

    tracing::debug!(query = %query, "Spawning search task");

    app.search_handle = Some(tokio::spawn(async move {
        let result = client.search(&query).await.map_err(|e| e.to_string());
        if let Err(e) = tx.send(AppEvent::SearchCompleted { query, result }).await {
            tracing::warn!(error = %e, "Failed to send search outcome (receiver dropped)");
        }
    }));
}
