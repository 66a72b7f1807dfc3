//! # Search Orchestrator
//!
//! Owns the search query and the result list for the search screen.
//!
//! ```text
//! set_query ──(500ms quiet)──► DebounceElapsed ──► run_search ──► SearchSettled
//!     │                                                │
//!     └── aborts the pending timer                     └── generation N
//! ```
//!
//! Keystrokes update the query immediately. The search itself waits for a
//! quiet period; each keystroke aborts the pending timer and starts a new
//! one, so only the last query in a burst reaches the catalog.
//!
//! Debounced searches, refreshes and retries can all be in flight at once.
//! Each dispatch gets the next generation number and only the settlement of
//! the latest generation touches the result state. Older ones are dropped.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::AbortHandle;

use crate::catalog::{CatalogError, MovieCatalog, MovieSummary};
use crate::core::action::Action;
use crate::core::state::RequestState;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);
pub const DEFAULT_INITIAL_QUERY: &str = "marvel";

pub const EMPTY_RESULTS_MESSAGE: &str = "Nenhum filme encontrado";
pub const NO_QUERY_MESSAGE: &str = "Digite algo para buscar filmes";

#[derive(Debug, Clone)]
pub struct SearchSettings {
    pub debounce: Duration,
    pub initial_query: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            initial_query: DEFAULT_INITIAL_QUERY.to_string(),
        }
    }
}

pub struct SearchOrchestrator {
    catalog: Arc<dyn MovieCatalog>,
    sender: UnboundedSender<Action>,
    debounce: Duration,
    query: String,
    state: RequestState<Vec<MovieSummary>>,
    /// Pull-to-refresh spinner, independent of `state`.
    refreshing: bool,
    /// Debounce timer waiting to fire.
    pending: Option<AbortHandle>,
    /// Token of the most recently scheduled debounce timer.
    debounce_token: u64,
    /// Generation of the most recently dispatched search.
    generation: u64,
}

impl SearchOrchestrator {
    pub fn new(
        catalog: Arc<dyn MovieCatalog>,
        sender: UnboundedSender<Action>,
        settings: SearchSettings,
    ) -> Self {
        Self {
            catalog,
            sender,
            debounce: settings.debounce,
            query: settings.initial_query,
            state: RequestState::Idle,
            refreshing: false,
            pending: None,
            debounce_token: 0,
            generation: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn state(&self) -> &RequestState<Vec<MovieSummary>> {
        &self.state
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn is_searching(&self) -> bool {
        self.state.is_loading()
    }

    pub fn has_pending_search(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    pub fn results(&self) -> &[MovieSummary] {
        self.state.loaded().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Text for an empty list: distinguishes "nothing typed" from "searched".
    pub fn empty_message(&self) -> &'static str {
        if self.query.trim().is_empty() {
            NO_QUERY_MESSAGE
        } else {
            EMPTY_RESULTS_MESSAGE
        }
    }

    /// Schedules the seed query, as if the user had just typed it.
    pub fn begin(&mut self) {
        let query = self.query.clone();
        self.set_query(query);
    }

    /// Records a keystroke and (re)starts the debounce timer.
    ///
    /// Blank queries clear the results at once and never reach the catalog.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.cancel_pending();
        // Invalidates any timer that already fired but is still queued.
        self.debounce_token += 1;

        if self.query.trim().is_empty() {
            debug!("Query cleared, dropping results");
            // Fence off anything still in flight so it cannot repopulate the list.
            self.generation += 1;
            self.state = RequestState::Idle;
            return;
        }

        let query = self.query.clone();
        let token = self.debounce_token;
        let sender = self.sender.clone();
        let deadline = tokio::time::Instant::now() + self.debounce;
        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            if sender.send(Action::DebounceElapsed { token, query }).is_err() {
                warn!("Debounce fired after receiver dropped");
            }
        });
        self.pending = Some(handle.abort_handle());
    }

    /// Timer callback. A timer that fired just before a newer keystroke can
    /// still be queued; only the latest scheduled token runs a search, even
    /// when the query text was edited back to the same value.
    pub fn on_debounce_elapsed(&mut self, token: u64, query: String) {
        if token != self.debounce_token {
            debug!(
                "Skipping superseded debounce #{} for {:?} (latest is #{})",
                token, query, self.debounce_token
            );
            return;
        }
        self.pending = None;
        self.run_search(query, true);
    }

    /// Dispatches one catalog search and returns its generation.
    pub fn run_search(&mut self, text: String, show_loading: bool) -> u64 {
        self.generation += 1;
        let generation = self.generation;

        if text.trim().is_empty() {
            self.state = RequestState::Idle;
            self.refreshing = false;
            return generation;
        }

        if show_loading {
            self.state = RequestState::Loading;
        } else if self.state.is_failed() {
            self.state = RequestState::Idle;
        }

        info!(
            "Dispatching search #{} for {:?} (loading={})",
            generation, text, show_loading
        );

        let catalog = self.catalog.clone();
        let sender = self.sender.clone();
        tokio::spawn(async move {
            let outcome = catalog.search_movies(&text).await;
            if sender
                .send(Action::SearchSettled {
                    generation,
                    outcome,
                })
                .is_err()
            {
                warn!("Search #{} settled after receiver dropped", generation);
            }
        });

        generation
    }

    /// Manual pull-to-refresh: re-runs the current query behind the refresh
    /// spinner instead of the full loading view.
    pub fn refresh(&mut self) {
        self.refreshing = true;
        let query = self.query.clone();
        self.run_search(query, false);
    }

    /// Re-runs the current query with the full loading view.
    pub fn retry(&mut self) {
        let query = self.query.clone();
        self.run_search(query, true);
    }

    /// Applies a finished search. Returns `false` when the result was stale.
    pub fn on_search_settled(
        &mut self,
        generation: u64,
        outcome: Result<Vec<MovieSummary>, CatalogError>,
    ) -> bool {
        self.refreshing = false;

        if generation != self.generation {
            debug!(
                "Discarding search #{} (latest is #{})",
                generation, self.generation
            );
            return false;
        }

        self.state = match outcome {
            Ok(movies) => {
                info!("Search #{} returned {} movies", generation, movies.len());
                RequestState::Loaded(movies)
            }
            Err(err) => {
                warn!("Search #{} failed: {}", generation, err);
                RequestState::Failed(err.user_message())
            }
        };
        true
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for SearchOrchestrator {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
