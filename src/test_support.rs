//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

use crate::catalog::{CatalogError, MovieCatalog, MovieDetail, MovieSummary};
use crate::core::action::Action;
use crate::core::search::SearchSettings;
use crate::core::state::App;

/// A catalog that answers from canned responses and records every call.
/// Unscripted searches return an empty list; unscripted details fail.
#[derive(Default)]
pub struct ScriptedCatalog {
    searches: HashMap<String, Result<Vec<MovieSummary>, CatalogError>>,
    details: HashMap<String, Result<MovieDetail, CatalogError>>,
    search_calls: Mutex<Vec<String>>,
    detail_calls: Mutex<Vec<String>>,
}

impl ScriptedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(
        mut self,
        term: &str,
        outcome: Result<Vec<MovieSummary>, CatalogError>,
    ) -> Self {
        self.searches.insert(term.to_string(), outcome);
        self
    }

    pub fn with_detail(mut self, id: &str, outcome: Result<MovieDetail, CatalogError>) -> Self {
        self.details.insert(id.to_string(), outcome);
        self
    }

    pub fn search_calls(&self) -> Vec<String> {
        self.search_calls.lock().unwrap().clone()
    }

    pub fn detail_calls(&self) -> Vec<String> {
        self.detail_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MovieCatalog for ScriptedCatalog {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn search_movies(&self, term: &str) -> Result<Vec<MovieSummary>, CatalogError> {
        self.search_calls.lock().unwrap().push(term.to_string());
        self.searches.get(term).cloned().unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn movie_details(&self, id: &str) -> Result<MovieDetail, CatalogError> {
        self.detail_calls.lock().unwrap().push(id.to_string());
        self.details
            .get(id)
            .cloned()
            .unwrap_or_else(|| Err(CatalogError::Detail("unscripted".to_string())))
    }
}

pub fn iron_man() -> MovieSummary {
    MovieSummary {
        id: "tt0371746".to_string(),
        title: "Iron Man".to_string(),
        year: "2008".to_string(),
        poster_url: Some("http://x/y.jpg".to_string()),
    }
}

pub fn iron_man_detail() -> MovieDetail {
    MovieDetail {
        summary: iron_man(),
        rating: "7.9".to_string(),
        runtime: "126 min".to_string(),
        rated: "PG-13".to_string(),
        genre: "Action, Adventure, Sci-Fi".to_string(),
        director: "Jon Favreau".to_string(),
        actors: "Robert Downey Jr., Gwyneth Paltrow, Terrence Howard".to_string(),
        plot: "After being held captive in an Afghan cave, billionaire engineer Tony Stark creates a unique weaponized suit of armor to fight evil.".to_string(),
    }
}

/// Creates a test App backed by the given catalog.
pub fn test_app_with(catalog: Arc<dyn MovieCatalog>) -> (App, UnboundedReceiver<Action>) {
    let (tx, rx) = unbounded_channel();
    (App::new(catalog, tx, SearchSettings::default()), rx)
}

/// Creates a test App with an empty ScriptedCatalog.
pub fn test_app() -> (App, UnboundedReceiver<Action>) {
    test_app_with(Arc::new(ScriptedCatalog::new()))
}
