use serde::Deserialize;
use std::collections::HashMap;

/// SPARQL 1.1 JSON results document, restricted to what extraction reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SparqlResponse {
    #[serde(default)]
    pub head: SparqlHead,
    pub results: SparqlResults,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SparqlHead {
    #[serde(default)]
    pub vars: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SparqlResults {
    pub bindings: Vec<Binding>,
}

pub type Binding = HashMap<String, BindingValue>;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BindingValue {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    pub value: String,
    #[serde(rename = "xml:lang", default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub datatype: Option<String>,
}

impl BindingValue {
    pub fn literal(value: impl Into<String>) -> Self {
        Self {
            kind: Some("literal".to_string()),
            value: value.into(),
            lang: None,
            datatype: None,
        }
    }
}
