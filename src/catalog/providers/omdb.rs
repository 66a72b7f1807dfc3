//! OMDb implementation of [`MovieCatalog`].
//!
//! Two endpoints, both on the same base URL:
//! - search: `s=<term>&type=movie`, results under `Search`
//! - detail: `i=<imdb id>&plot=full`, flat movie fields

use async_trait::async_trait;
use log::{debug, info};

use crate::catalog::gateway::{Envelope, GatewayConfig, GatewayError, HttpGateway};
use crate::catalog::types::{MovieDetail, MovieSummary, SearchPayload};
use crate::catalog::{CatalogError, MovieCatalog};

pub const NO_MOVIES_FOUND: &str = "Nenhum filme encontrado";
pub const DETAILS_NOT_FOUND: &str = "Detalhes do filme não encontrados";

pub struct OmdbCatalog {
    gateway: HttpGateway,
}

impl OmdbCatalog {
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let gateway = HttpGateway::new(config)?;
        info!("OMDb catalog ready: {}", gateway.base_url());
        Ok(Self { gateway })
    }
}

#[async_trait]
impl MovieCatalog for OmdbCatalog {
    fn name(&self) -> &str {
        "omdb"
    }

    async fn search_movies(&self, term: &str) -> Result<Vec<MovieSummary>, CatalogError> {
        info!("OMDb search: term={:?}", term);

        let envelope = self
            .gateway
            .request::<SearchPayload>(&[("s", term), ("type", "movie")])
            .await?;

        match envelope {
            Envelope::Success(payload) => {
                debug!(
                    "OMDb search returned {} results (total={:?})",
                    payload.results.len(),
                    payload.total_results
                );
                Ok(payload.results)
            }
            Envelope::Failure { message } => {
                info!("OMDb search failed: {:?}", message);
                Err(CatalogError::Search(
                    message.unwrap_or_else(|| NO_MOVIES_FOUND.to_string()),
                ))
            }
        }
    }

    async fn movie_details(&self, id: &str) -> Result<MovieDetail, CatalogError> {
        info!("OMDb detail lookup: id={}", id);

        let envelope = self
            .gateway
            .request::<MovieDetail>(&[("i", id), ("plot", "full")])
            .await?;

        match envelope {
            Envelope::Success(detail) => Ok(detail),
            Envelope::Failure { message } => {
                info!("OMDb detail lookup failed: {:?}", message);
                Err(CatalogError::Detail(
                    message.unwrap_or_else(|| DETAILS_NOT_FOUND.to_string()),
                ))
            }
        }
    }
}
