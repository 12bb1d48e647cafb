use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryFailure {
    #[error("invalid endpoint URL '{0}'")]
    InvalidEndpoint(String),
    #[error("endpoint responded with status {0}")]
    Status(reqwest::StatusCode),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed results document: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("SPARQL query failed: {0}")]
    QueryFailure(#[from] QueryFailure),
    #[error("malformed record at binding {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },
    #[error("book \"{0}\" not found")]
    NotFound(String),
}

/// Lookup failures of a two-title comparison, kept by argument position.
#[derive(Error, Debug)]
#[error("title lookup failed in pair comparison")]
pub struct PairNotFound {
    pub first: Option<CatalogError>,
    pub second: Option<CatalogError>,
}

impl PairNotFound {
    pub fn errors(&self) -> impl Iterator<Item = &CatalogError> {
        self.first.iter().chain(self.second.iter())
    }
}
