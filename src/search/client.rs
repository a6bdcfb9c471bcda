//! Serper search client

use super::models::{SearchResult, SerperResponse};
use crate::config::SearchSettings;
use crate::network::HttpClient;
use crate::RESULT_LIMIT;
use thiserror::Error;
use tracing::{debug, warn};

/// Failure modes of one search round trip
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("transport error: {0}")]
    Transport(anyhow::Error),
    #[error("unexpected status {0}")]
    HttpStatus(u16),
    #[error("malformed response: {0}")]
    Decode(serde_json::Error),
}

/// Client for the Serper web search API
pub struct SearchClient {
    http: HttpClient,
    settings: SearchSettings,
}

impl SearchClient {
    pub fn new(http: HttpClient, settings: SearchSettings) -> Self {
        Self { http, settings }
    }

    /// Fetch up to [`RESULT_LIMIT`] organic results for a query.
    ///
    /// Never fails outward: any upstream failure is logged and collapsed to
    /// an empty list, indistinguishable from a legitimately empty result set.
    pub async fn search(&self, query: &str) -> Vec<SearchResult> {
        match self.fetch(query).await {
            Ok(results) => {
                debug!(count = results.len(), "search provider returned results");
                results
            }
            Err(err) => {
                warn!(error = %err, "search provider request failed");
                Vec::new()
            }
        }
    }

    /// One fallible round trip to the search provider
    async fn fetch(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let body = serde_json::json!({ "q": query, "num": RESULT_LIMIT });
        let headers = [
            ("X-API-KEY", self.settings.api_key.as_str()),
            ("Content-Type", "application/json"),
        ];

        let response = self
            .http
            .post_json(&self.settings.endpoint, &headers, &body)
            .await
            .map_err(SearchError::Transport)?;

        if response.status != 200 {
            return Err(SearchError::HttpStatus(response.status));
        }

        let parsed: SerperResponse = response.json().map_err(SearchError::Decode)?;

        let mut organic = parsed.organic;
        organic.truncate(RESULT_LIMIT);
        Ok(organic)
    }
}
