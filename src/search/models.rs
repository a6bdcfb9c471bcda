//! Types for the Serper search API

use serde::{Deserialize, Serialize};

/// A single organic search result
///
/// Fields the provider omits deserialize to their empty defaults so that one
/// sparse item does not fail the whole result list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    /// Display title
    pub title: String,
    /// Result URL
    pub link: String,
    /// Short excerpt used as grounding context for answer generation
    pub snippet: String,
    /// Provider-assigned rank position
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

/// Response envelope from a Serper search
#[derive(Debug, Clone, Deserialize)]
pub struct SerperResponse {
    /// Ranked organic results; absent means no results
    #[serde(default)]
    pub organic: Vec<SearchResult>,
}
