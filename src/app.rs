use crate::config::Config;
use crate::search::{Recipe, SearchClient};
use crate::theme::{StyleMap, ThemeVariant};
use anyhow::Result;
use ratatui::style::Style;
use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

// ============================================================================
// Focus and Event Types
// ============================================================================

/// Which control currently receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The search input; printable keys edit the query.
    Search,
    /// The category filter row; only reachable while categories exist.
    Filter,
    /// The result card list.
    Results,
}

/// Events from background tasks.
pub enum AppEvent {
    /// A search task finished.
    ///
    /// Outcomes are applied in arrival order with no stale-response guard:
    /// if two requests overlap, the last response to arrive wins.
    SearchCompleted {
        query: String,
        result: std::result::Result<Vec<Recipe>, String>,
    },
}

// ============================================================================
// Application State
// ============================================================================

/// Central application state.
///
/// Owns everything the view needs: the query text, the most recent result
/// set, the request outcome flags (`loading`/`error` are mutually exclusive
/// terminal outcomes of the latest attempt), the category list derived from
/// the results, and presentation state (theme, focus, selection).
pub struct App {
    pub client: SearchClient,

    // Theme
    /// Current theme variant (for toggling).
    pub theme_variant: ThemeVariant,
    /// Active style map for all UI rendering.
    pub theme: StyleMap,

    // Search state
    pub query: String,
    /// Result list wrapped in Arc so tests and derived views can hold a
    /// snapshot without cloning every record.
    pub results: Arc<Vec<Recipe>>,
    pub loading: bool,
    pub error: Option<String>,
    /// Non-empty category values from `results`, deduplicated in order of
    /// first appearance. Recomputed whenever `results` is replaced.
    pub categories: Vec<String>,
    /// Active category filter; `None` shows all results.
    pub selected_category: Option<String>,

    // UI state
    pub focus: Focus,
    /// Selection index into the *filtered* result list.
    pub selected_result: usize,
    /// Status message with expiry — Cow avoids allocation for static hints.
    pub status_message: Option<(Cow<'static, str>, Instant)>,
    /// Dirty flag to skip unnecessary frame renders.
    pub needs_redraw: bool,
    /// Current frame of the loading spinner animation.
    pub spinner_frame: usize,

    /// Handle to the most recent search task. Kept only so shutdown can
    /// abort it; a new search does not cancel a previous one.
    pub search_handle: Option<tokio::task::JoinHandle<()>>,
}

impl App {
    pub fn new(config: &Config) -> Result<Self> {
        let client = SearchClient::new(
            &config.search_url,
            Duration::from_secs(config.request_timeout_secs),
        )?;

        let theme_variant = ThemeVariant::from_str_name(&config.theme).unwrap_or(ThemeVariant::Dark);

        Ok(Self {
            client,
            theme_variant,
            theme: StyleMap::from_palette(&theme_variant.palette()),
            query: String::new(),
            results: Arc::new(Vec::new()),
            loading: false,
            error: None,
            categories: Vec::new(),
            selected_category: None,
            focus: Focus::Search,
            selected_result: 0,
            status_message: None,
            needs_redraw: true,
            spinner_frame: 0,
            search_handle: None,
        })
    }

    // ------------------------------------------------------------------
    // Theme
    // ------------------------------------------------------------------

    /// Resolve a semantic role name to its `Style`.
    pub fn style(&self, role: &str) -> Style {
        self.theme.resolve(role)
    }

    /// Switch to a different theme variant at runtime.
    pub fn set_theme(&mut self, variant: ThemeVariant) {
        self.theme_variant = variant;
        self.theme = StyleMap::from_palette(&variant.palette());
        self.needs_redraw = true;
    }

    /// Toggle the theme (Dark ↔ Light).
    ///
    /// Returns the name of the new theme for status display. Toggling twice
    /// restores both the variant and the styles it produced.
    pub fn toggle_theme(&mut self) -> &'static str {
        let next = self.theme_variant.next();
        self.set_theme(next);
        next.name()
    }

    // ------------------------------------------------------------------
    // Search reconciliation
    // ------------------------------------------------------------------

    /// Apply the outcome of a finished search request.
    ///
    /// Success replaces the result set, recomputes the category list, and
    /// clears any prior error. Failure leaves the previous results intact
    /// and records the error text. Either way the loading flag drops last.
    pub fn apply_search_outcome(&mut self, result: std::result::Result<Vec<Recipe>, String>) {
        match result {
            Ok(recipes) => {
                self.categories = unique_categories(&recipes);
                self.results = Arc::new(recipes);
                self.error = None;
                // The filter row may have disappeared from under the cursor.
                if self.categories.is_empty() && self.focus == Focus::Filter {
                    self.focus = Focus::Search;
                }
                self.clamp_selection();
            }
            Err(message) => {
                self.error = Some(message);
            }
        }
        self.loading = false;
        self.needs_redraw = true;
    }

    // ------------------------------------------------------------------
    // Derived views
    // ------------------------------------------------------------------

    /// Results narrowed by the active category filter.
    ///
    /// A pure derivation over current state, recomputed per render: with no
    /// filter it is all of `results` in order, otherwise the subsequence
    /// whose category matches exactly.
    pub fn filtered_results(&self) -> Vec<&Recipe> {
        match &self.selected_category {
            None => self.results.iter().collect(),
            Some(cat) => self.results.iter().filter(|r| &r.category == cat).collect(),
        }
    }

    /// Index of the active filter in the option row: 0 = "All Categories",
    /// i+1 = `categories[i]`. A selected category that vanished from the
    /// current results maps to 0 for display purposes only.
    pub fn filter_index(&self) -> usize {
        match &self.selected_category {
            None => 0,
            Some(cat) => self
                .categories
                .iter()
                .position(|c| c == cat)
                .map(|i| i + 1)
                .unwrap_or(0),
        }
    }

    /// Select a filter option by row index (0 = all, i+1 = `categories[i]`).
    ///
    /// Alters neither `results` nor `categories`.
    pub fn select_filter_by_index(&mut self, index: usize) {
        self.selected_category = if index == 0 {
            None
        } else {
            self.categories.get(index - 1).cloned()
        };
        self.clamp_selection();
        self.needs_redraw = true;
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Clamp the result selection to the filtered list's bounds.
    pub fn clamp_selection(&mut self) {
        let len = self.filtered_results().len();
        self.selected_result = if len == 0 {
            0
        } else {
            self.selected_result.min(len - 1)
        };
    }

    /// Move the card selection down.
    pub fn select_next_result(&mut self) {
        let len = self.filtered_results().len();
        if len > 0 {
            self.selected_result = (self.selected_result + 1).min(len - 1);
        }
    }

    /// Move the card selection up.
    pub fn select_prev_result(&mut self) {
        self.selected_result = self.selected_result.saturating_sub(1);
    }

    /// The currently selected recipe, if any (bounds-checked).
    pub fn selected_recipe(&self) -> Option<&Recipe> {
        self.filtered_results().get(self.selected_result).copied()
    }

    // ------------------------------------------------------------------
    // Status messages
    // ------------------------------------------------------------------

    /// Set a status message (auto-expires after 3 seconds).
    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status_message = Some((msg.into(), Instant::now()));
        self.needs_redraw = true;
    }

    /// Clear the status message if expired. Returns true if one was cleared.
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, time)) = &self.status_message {
            if time.elapsed().as_secs() >= 3 {
                self.status_message = None;
                return true;
            }
        }
        false
    }
}

/// Abort an in-flight search task on shutdown.
///
/// Cleanup only — during normal operation overlapping requests run to
/// completion and their outcomes apply in arrival order.
impl Drop for App {
    fn drop(&mut self) {
        if let Some(handle) = self.search_handle.take() {
            handle.abort();
            tracing::debug!("Aborted search task on App drop");
        }
    }
}

// ============================================================================
// Category derivation
// ============================================================================

/// Non-empty category values in order of first appearance, deduplicated.
pub fn unique_categories(recipes: &[Recipe]) -> Vec<String> {
    let mut seen = Vec::new();
    for recipe in recipes {
        if recipe.category.is_empty() {
            continue;
        }
        if !seen.contains(&recipe.category) {
            seen.push(recipe.category.clone());
        }
    }
    seen
}
