//! HTTP request handlers

use super::state::AppState;
use crate::search::SearchResult;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Request body for `/search`
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// Missing field deserializes to the empty string, which is rejected
    /// the same way an explicit empty query is
    #[serde(default)]
    pub query: String,
}

/// Success response for `/search`
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    pub answer: String,
}

/// Error envelope for the 400/404 cases
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

/// Home page handler
pub async fn index() -> &'static str {
    "Welcome to the AI Assistant API"
}

/// Search handler
///
/// Strictly sequential per request: the search call must complete and return
/// at least one result before the completion call is issued.
pub async fn search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Response {
    debug!(query = %request.query, "received search request");

    if request.query.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("No query provided")),
        )
            .into_response();
    }

    let results = state.search.search(&request.query).await;
    if results.is_empty() {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("No results found")),
        )
            .into_response();
    }

    let snippets: Vec<String> = results.iter().map(|r| r.snippet.clone()).collect();
    let answer = state.answer.generate(&request.query, &snippets).await;

    (StatusCode::OK, Json(SearchResponse { results, answer })).into_response()
}
