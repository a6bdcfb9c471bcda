//! HTTP networking module
//!
//! Provides HTTP client functionality for making requests to the upstream
//! providers.

mod client;

pub use client::{ApiResponse, HttpClient};
