use crate::models::error::{CatalogError, QueryFailure};
use crate::models::sparql::SparqlResponse;
use crate::services::catalog::Catalog;
use crate::services::extract::extract_books;
use async_trait::async_trait;
use chrono::Utc;
use reqwest::{header::ACCEPT, Client, StatusCode, Url};
use tracing::{error, info};

pub const SPARQL_RESULTS_JSON: &str = "application/sparql-results+json";

#[async_trait]
pub trait QueryEndpoint: Send + Sync {
    async fn run_query(&self, query: &str) -> Result<SparqlResponse, QueryFailure>;
}

pub struct SparqlClient {
    client: Client,
    endpoint: Url,
}

impl SparqlClient {
    pub fn new(endpoint: &str) -> Result<Self, QueryFailure> {
        let url = Url::parse(endpoint)
            .map_err(|_| QueryFailure::InvalidEndpoint(endpoint.to_string()))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(QueryFailure::InvalidEndpoint(endpoint.to_string()));
        }

        Ok(Self {
            client: Client::new(),
            endpoint: url,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl QueryEndpoint for SparqlClient {
    async fn run_query(&self, query: &str) -> Result<SparqlResponse, QueryFailure> {
        info!("Sending query to {}", self.endpoint);

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("query", query), ("format", "json")])
            .header(ACCEPT, SPARQL_RESULTS_JSON)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(QueryFailure::Status(response.status()));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Single GET against `endpoint_url`. No retry.
pub async fn run_query(endpoint_url: &str, query_text: &str) -> Result<SparqlResponse, QueryFailure> {
    SparqlClient::new(endpoint_url)?.run_query(query_text).await
}

/// Fetches and flattens in one step. Either every binding becomes a record
/// or the caller gets an error and no catalog at all.
pub async fn load_catalog(
    endpoint: &dyn QueryEndpoint,
    query: &str,
) -> Result<Catalog, CatalogError> {
    let response = endpoint.run_query(query).await.map_err(|e| {
        error!("Book query failed: {}", e);
        e
    })?;

    let books = extract_books(&response).map_err(|e| {
        error!("Could not flatten query results: {}", e);
        e
    })?;

    info!("Loaded {} books", books.len());
    Ok(Catalog::fetched(books, Utc::now()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sparql::{Binding, BindingValue, SparqlResults};

    struct CannedEndpoint {
        status: Option<u16>,
        bindings: Vec<Binding>,
    }

    #[async_trait]
    impl QueryEndpoint for CannedEndpoint {
        async fn run_query(&self, _query: &str) -> Result<SparqlResponse, QueryFailure> {
            if let Some(code) = self.status {
                let status = StatusCode::from_u16(code).unwrap();
                return Err(QueryFailure::Status(status));
            }
            Ok(SparqlResponse {
                results: SparqlResults {
                    bindings: self.bindings.clone(),
                },
                ..Default::default()
            })
        }
    }

    fn binding(title: &str, pages: Option<&str>) -> Binding {
        let mut row = Binding::new();
        row.insert("titulo".into(), BindingValue::literal(title));
        row.insert("autor".into(), BindingValue::literal("http://dbpedia.org/resource/Frank_Herbert"));
        row.insert("pais".into(), BindingValue::literal("United States"));
        row.insert("genero".into(), BindingValue::literal("http://dbpedia.org/resource/Science_fiction"));
        row.insert("dataLancamento".into(), BindingValue::literal("1965-08-01"));
        row.insert("linguagem".into(), BindingValue::literal("English"));
        if let Some(pages) = pages {
            row.insert("paginas".into(), BindingValue::literal(pages));
        }
        row
    }

    #[test]
    fn rejects_non_http_endpoints() {
        assert!(matches!(
            SparqlClient::new("ftp://dbpedia.org/sparql"),
            Err(QueryFailure::InvalidEndpoint(_))
        ));
        assert!(matches!(
            SparqlClient::new("not a url"),
            Err(QueryFailure::InvalidEndpoint(_))
        ));
        assert!(SparqlClient::new("https://dbpedia.org/sparql").is_ok());
    }

    #[tokio::test]
    async fn load_catalog_flattens_bindings() {
        let endpoint = CannedEndpoint {
            status: None,
            bindings: vec![binding("Dune", Some("412")), binding("Dune Messiah", None)],
        };

        let catalog = load_catalog(&endpoint, "SELECT").await.unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.fetched_at().is_some());
        assert_eq!(catalog.books()[1].page_count, 0);
    }

    #[tokio::test]
    async fn non_ok_status_yields_query_failure() {
        let endpoint = CannedEndpoint {
            status: Some(503),
            bindings: vec![binding("Dune", Some("412"))],
        };

        let err = load_catalog(&endpoint, "SELECT").await.unwrap_err();
        assert!(matches!(
            err,
            CatalogError::QueryFailure(QueryFailure::Status(s)) if s.as_u16() == 503
        ));
    }

    #[tokio::test]
    async fn one_bad_binding_discards_the_whole_batch() {
        let endpoint = CannedEndpoint {
            status: None,
            bindings: vec![binding("Dune", Some("412")), binding("Broken", Some("many"))],
        };

        let err = load_catalog(&endpoint, "SELECT").await.unwrap_err();
        assert!(matches!(err, CatalogError::MalformedRecord { index: 1, .. }));
    }
}
