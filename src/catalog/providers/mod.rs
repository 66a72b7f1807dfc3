pub mod omdb;

pub use omdb::OmdbCatalog;
