//! Application state shared across handlers

use crate::answer::AnswerGenerator;
use crate::config::Settings;
use crate::network::HttpClient;
use crate::search::SearchClient;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Search provider client
    pub search: Arc<SearchClient>,
    /// Answer generator
    pub answer: Arc<AnswerGenerator>,
}

impl AppState {
    /// Create new application state
    pub fn new(settings: Settings, client: HttpClient) -> Self {
        let search = Arc::new(SearchClient::new(client.clone(), settings.search.clone()));
        let answer = Arc::new(AnswerGenerator::new(client, settings.answer.clone()));

        Self {
            settings: Arc::new(settings),
            search,
            answer,
        }
    }
}
