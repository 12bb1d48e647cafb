pub mod config;
pub mod models;
pub mod reports;
pub mod services;
pub mod utils;

pub use models::book::BookRecord;
pub use models::error::{CatalogError, PairNotFound, QueryFailure};
pub use services::catalog::Catalog;
pub use services::extract::extract_books;
pub use services::sparql::{load_catalog, run_query, QueryEndpoint, SparqlClient};
