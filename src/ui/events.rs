//! Application event handling.
//!
//! Processes background task completion events and reconciles them into
//! application state.

use crate::app::{App, AppEvent};

/// Handle application events from background tasks.
pub(super) fn handle_app_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::SearchCompleted { query, result } => {
            match &result {
                Ok(recipes) => {
                    tracing::debug!(query = %query, count = recipes.len(), "Search succeeded")
                }
                Err(e) => tracing::debug!(query = %query, error = %e, "Search failed"),
            }
            app.apply_search_outcome(result);
        }
    }
}
