use crate::utils::query::DEFAULT_LIMIT;
use tracing::warn;

pub const DEFAULT_ENDPOINT: &str = "http://dbpedia.org/sparql";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub endpoint: String,
    pub limit: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            limit: DEFAULT_LIMIT,
        }
    }
}

impl CatalogConfig {
    /// Reads `SPARQL_ENDPOINT` and `SPARQL_LIMIT`.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("SPARQL_ENDPOINT").ok(),
            std::env::var("SPARQL_LIMIT").ok(),
        )
    }

    fn from_vars(endpoint: Option<String>, limit: Option<String>) -> Self {
        let endpoint = endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let limit = match limit {
            Some(raw) => raw.trim().parse::<u32>().unwrap_or_else(|_| {
                warn!("Ignoring SPARQL_LIMIT='{}', using {}", raw, DEFAULT_LIMIT);
                DEFAULT_LIMIT
            }),
            None => DEFAULT_LIMIT,
        };

        Self { endpoint, limit }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        assert_eq!(CatalogConfig::from_vars(None, None), CatalogConfig::default());
    }

    #[test]
    fn overrides_and_bad_limit() {
        let config = CatalogConfig::from_vars(
            Some("http://localhost:8890/sparql".to_string()),
            Some("50".to_string()),
        );
        assert_eq!(config.endpoint, "http://localhost:8890/sparql");
        assert_eq!(config.limit, 50);

        let config = CatalogConfig::from_vars(None, Some("lots".to_string()));
        assert_eq!(config.limit, DEFAULT_LIMIT);
    }
}
