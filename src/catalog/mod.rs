pub mod gateway;
pub mod provider;
pub mod providers;
pub mod types;

pub use gateway::{Envelope, GatewayConfig, GatewayError, HttpGateway};
pub use provider::{CatalogError, MovieCatalog};
pub use providers::OmdbCatalog;
pub use types::{MovieDetail, MovieSummary, POSTER_PLACEHOLDER_URL};
