//! # Actions
//!
//! Everything that can happen in Cinebusca becomes an `Action`.
//! User types in the search bar? That's `Action::QueryChanged(text)`.
//! The catalog answers? That's `Action::SearchSettled { .. }`.
//!
//! The `update()` function takes the current state and an action,
//! applies it, and tells the caller what to do next via an `Effect`.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! Background work (debounce timers, catalog lookups) is spawned by the
//! orchestrator and loader; its results come back through the same channel
//! as `Action`s, so every state change is serialized through `update()`.
//! Catalog failures arrive as values and end up as error states; nothing
//! propagates out of here.

use log::{debug, info};

use crate::catalog::{CatalogError, MovieDetail, MovieSummary};
use crate::core::detail::DetailLoader;
use crate::core::state::{App, RequestState};

#[derive(Debug)]
pub enum Action {
    // User intents
    QueryChanged(String),
    Refresh,
    Retry,
    OpenDetail(String),
    CloseDetail,
    RetryDetail,
    Quit,

    // Background settlements
    DebounceElapsed {
        token: u64,
        query: String,
    },
    SearchSettled {
        generation: u64,
        outcome: Result<Vec<MovieSummary>, CatalogError>,
    },
    DetailSettled {
        id: String,
        generation: u64,
        outcome: Result<MovieDetail, CatalogError>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::QueryChanged(text) => {
            app.search.set_query(text);
            Effect::None
        }
        Action::Refresh => {
            app.search.refresh();
            app.status_message = String::from("Atualizando...");
            Effect::None
        }
        Action::Retry => {
            app.search.retry();
            Effect::None
        }
        Action::OpenDetail(id) => {
            info!("Opening detail view for {}", id);
            app.detail = Some(DetailLoader::open(
                app.catalog.clone(),
                app.sender.clone(),
                id,
            ));
            Effect::None
        }
        Action::CloseDetail => {
            app.detail = None;
            Effect::None
        }
        Action::RetryDetail => {
            if let Some(detail) = app.detail.as_mut() {
                detail.retry();
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
        Action::DebounceElapsed { token, query } => {
            app.search.on_debounce_elapsed(token, query);
            Effect::None
        }
        Action::SearchSettled {
            generation,
            outcome,
        } => {
            if app.search.on_search_settled(generation, outcome) {
                app.status_message = search_status(app.search.state());
            }
            Effect::None
        }
        Action::DetailSettled {
            id,
            generation,
            outcome,
        } => {
            match app.detail.as_mut() {
                Some(detail) => {
                    if detail.on_settled(&id, generation, outcome)
                        && let Some(title) = detail.title()
                    {
                        app.status_message = title.to_string();
                    }
                }
                None => debug!("Detail {} settled after view closed", id),
            }
            Effect::None
        }
    }
}

fn search_status(state: &RequestState<Vec<MovieSummary>>) -> String {
    match state {
        RequestState::Loaded(movies) if movies.len() == 1 => String::from("1 filme"),
        RequestState::Loaded(movies) => format!("{} filmes", movies.len()),
        RequestState::Failed(_) => String::from("Falha na busca"),
        RequestState::Idle | RequestState::Loading => String::new(),
    }
}
