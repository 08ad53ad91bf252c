use crate::domain::typeahead::{TypeaheadClient, TypeaheadError, TypeaheadResponse};
use async_trait::async_trait;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// `GET <endpoint>?q=<query>` answering `{"items": [...]}`.
pub struct HttpTypeahead {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTypeahead {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, TypeaheadError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

pub fn decode_response(body: &str) -> Result<Vec<String>, TypeaheadError> {
    let response: TypeaheadResponse = serde_json::from_str(body)?;
    Ok(response.items)
}

#[async_trait]
impl TypeaheadClient for HttpTypeahead {
    async fn lookup(&self, query: &str) -> Result<Vec<String>, TypeaheadError> {
        tracing::debug!(endpoint = %self.endpoint, query, "typeahead lookup");
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TypeaheadError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        decode_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_items() {
        let items = decode_response(r#"{"items": ["fmt", "net/http", "net/http/httptest"]}"#)
            .unwrap();
        assert_eq!(items, vec!["fmt", "net/http", "net/http/httptest"]);
    }

    #[test]
    fn test_decode_missing_items_is_empty() {
        assert!(decode_response("{}").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = decode_response("<html>").unwrap_err();
        assert!(matches!(err, TypeaheadError::Decode(_)));
    }
}
