use std::time::{Duration, Instant};

use crate::api::google_books::{MAX_RESULTS, Volume};

/// Quiet window that must elapse after the last keystroke before the
/// debounced query updates.
pub const DEBOUNCE_QUIET: Duration = Duration::from_millis(300);

/// The interaction state machine behind the search input.
///
/// Four pieces of state drive the whole UI: the raw query, its debounced
/// copy, a loading flag and the current result set. The controller never
/// performs a search itself; firing the debounce hands the query back to
/// the caller, which reports the outcome through [`finish_search`].
///
/// [`finish_search`]: QueryController::finish_search
#[derive(Default)]
pub struct QueryController {
    query: String,
    debounced_query: String,
    loading: bool,
    results: Vec<Volume>,
    // Single pending-timer slot, re-armed on every keystroke.
    pending: Option<Instant>,
}

/// Which body the UI should render, selected purely from controller state.
pub enum View<'a> {
    /// A search is pending or in flight.
    Loading,
    /// Nothing typed yet.
    Welcome,
    /// The query matched nothing.
    NoResults,
    /// The current result set, at most [`MAX_RESULTS`] volumes in API order.
    Results(&'a [Volume]),
}

impl QueryController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw query as typed so far.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Records a keystroke: replaces the raw query, sets the loading flag
    /// and re-arms the debounce slot, cancelling any pending update.
    pub fn set_query<S: Into<String>>(&mut self, text: S) {
        self.query = text.into();
        self.loading = true;
        self.pending = Some(Instant::now());
    }

    /// Fires the debounce slot once the quiet window has elapsed.
    ///
    /// Returns the trimmed query to search for. Returns `None` when the
    /// slot is empty, the window has not yet elapsed, or the debounced
    /// query trims to empty — in the last case the result set and loading
    /// flag are cleared and no search happens for this cycle.
    pub fn take_debounced_change(&mut self, quiet: Duration) -> Option<String> {
        let armed = self.pending?;
        if armed.elapsed() < quiet {
            return None;
        }
        self.pending = None;
        self.debounced_query = self.query.clone();

        let trimmed = self.debounced_query.trim();
        if trimmed.is_empty() {
            self.results.clear();
            self.loading = false;
            None
        } else {
            Some(trimmed.to_owned())
        }
    }

    /// Applies a resolved search: clears the loading flag and, when the
    /// response is non-empty, replaces the result set with its first
    /// [`MAX_RESULTS`] entries. An empty response leaves the previous
    /// result set in place.
    ///
    /// Completions are applied in arrival order, so of two overlapping
    /// searches the one resolving last wins.
    pub fn finish_search(&mut self, mut volumes: Vec<Volume>) {
        self.loading = false;
        if !volumes.is_empty() {
            volumes.truncate(MAX_RESULTS);
            self.results = volumes;
        }
    }

    /// Selects the body to render. Pure, no side effects.
    #[must_use]
    pub fn view(&self) -> View<'_> {
        if self.loading {
            View::Loading
        } else if self.query.trim().is_empty() {
            View::Welcome
        } else if self.results.is_empty() {
            View::NoResults
        } else {
            View::Results(&self.results)
        }
    }
}
