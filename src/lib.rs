//! Askweb: a search-grounded answer API.
//!
//! One inbound endpoint glues two outbound services together: a web search
//! provider (Serper) supplies ranked result snippets, and an LLM provider
//! (Groq, OpenAI-compatible chat completions) synthesizes an answer from them.

pub mod answer;
pub mod config;
pub mod network;
pub mod search;
pub mod web;

pub use config::Settings;
pub use search::SearchResult;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of organic results requested from the search provider and
/// forwarded to answer generation
pub const RESULT_LIMIT: usize = 5;
