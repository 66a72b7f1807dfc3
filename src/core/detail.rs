//! # Detail Loader
//!
//! Fetches one movie's full record for the detail view. A loader is created
//! when the view opens and dispatches its lookup right away; it is dropped
//! when the view closes.
//!
//! Settlements carry the movie id and a generation so a late answer for a
//! previous view, or for a superseded retry, is ignored.

use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::mpsc::UnboundedSender;

use crate::catalog::{CatalogError, MovieCatalog, MovieDetail};
use crate::core::action::Action;
use crate::core::state::RequestState;

pub struct DetailLoader {
    catalog: Arc<dyn MovieCatalog>,
    sender: UnboundedSender<Action>,
    id: String,
    state: RequestState<MovieDetail>,
    generation: u64,
}

impl DetailLoader {
    /// Creates the loader for a freshly opened detail view and starts the lookup.
    pub fn open(
        catalog: Arc<dyn MovieCatalog>,
        sender: UnboundedSender<Action>,
        id: impl Into<String>,
    ) -> Self {
        let mut loader = Self {
            catalog,
            sender,
            id: String::new(),
            state: RequestState::Idle,
            generation: 0,
        };
        loader.load(id);
        loader
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> &RequestState<MovieDetail> {
        &self.state
    }

    /// Loaded title, for the screen header.
    pub fn title(&self) -> Option<&str> {
        self.state.loaded().map(MovieDetail::title)
    }

    pub fn load(&mut self, id: impl Into<String>) {
        self.id = id.into();
        self.generation += 1;
        self.state = RequestState::Loading;

        let generation = self.generation;
        let id = self.id.clone();
        info!("Loading details for {} (#{})", id, generation);

        let catalog = self.catalog.clone();
        let sender = self.sender.clone();
        tokio::spawn(async move {
            let outcome = catalog.movie_details(&id).await;
            if sender
                .send(Action::DetailSettled {
                    id,
                    generation,
                    outcome,
                })
                .is_err()
            {
                warn!("Detail lookup #{} settled after receiver dropped", generation);
            }
        });
    }

    /// Re-runs a failed lookup. No-op in any other state.
    pub fn retry(&mut self) {
        if self.state.is_failed() {
            let id = self.id.clone();
            self.load(id);
        }
    }

    /// Applies a finished lookup. Returns `false` when it belonged to another
    /// movie or an older attempt.
    pub fn on_settled(
        &mut self,
        id: &str,
        generation: u64,
        outcome: Result<MovieDetail, CatalogError>,
    ) -> bool {
        if id != self.id || generation != self.generation {
            debug!(
                "Discarding detail {} #{} (showing {} #{})",
                id, generation, self.id, self.generation
            );
            return false;
        }

        self.state = match outcome {
            Ok(detail) => {
                info!("Loaded details for {}: {}", id, detail.title());
                RequestState::Loaded(detail)
            }
            Err(err) => {
                warn!("Detail lookup for {} failed: {}", id, err);
                RequestState::Failed(err.user_message())
            }
        };
        true
    }
}
