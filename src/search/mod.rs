//! Search provider client module
//!
//! Fetches ranked organic web results from the Serper API.

mod client;
mod models;

pub use client::{SearchClient, SearchError};
pub use models::{SearchResult, SerperResponse};
