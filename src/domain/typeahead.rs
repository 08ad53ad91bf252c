use async_trait::async_trait;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum TypeaheadError {
    #[error("typeahead request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("typeahead endpoint answered with status {0}")]
    Status(u16),

    #[error("malformed typeahead response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TypeaheadResponse {
    #[serde(default)]
    pub items: Vec<String>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TypeaheadClient: Send + Sync {
    // Ordered candidate list for `query`
    async fn lookup(&self, query: &str) -> Result<Vec<String>, TypeaheadError>;
}
