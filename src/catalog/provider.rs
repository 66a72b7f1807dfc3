use std::fmt;

use async_trait::async_trait;

use super::gateway::GatewayError;
use super::types::{MovieDetail, MovieSummary};

/// Errors surfaced by a catalog lookup.
/// Every variant is terminal for the call that produced it; nothing retries.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// The request never produced a usable envelope.
    Gateway(GatewayError),
    /// Provider answered a search with `Response: "False"`.
    Search(String),
    /// Provider answered a detail lookup with `Response: "False"`.
    Detail(String),
}

impl CatalogError {
    /// Text shown to the user in error views.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Gateway(err) => write!(f, "{err}"),
            CatalogError::Search(msg) | CatalogError::Detail(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Gateway(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GatewayError> for CatalogError {
    fn from(err: GatewayError) -> Self {
        CatalogError::Gateway(err)
    }
}

/// Read-only access to a movie database.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Returns the name of the catalog backend.
    fn name(&self) -> &str;

    /// Title search restricted to movies. An explicit "no matches" from the
    /// provider is an error, never an empty success.
    async fn search_movies(&self, term: &str) -> Result<Vec<MovieSummary>, CatalogError>;

    /// Full record for one title.
    async fn movie_details(&self, id: &str) -> Result<MovieDetail, CatalogError>;
}
