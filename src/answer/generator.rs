//! Groq answer generator

use super::models::{ChatMessage, ChatRequest, ChatResponse};
use crate::config::AnswerSettings;
use crate::network::HttpClient;
use thiserror::Error;
use tracing::{debug, error};

/// Sentinel returned when the provider reports an API error
pub const API_ERROR_TEXT: &str = "Error: Failed to generate response from Groq API.";

/// Sentinel returned for any other failure
pub const UNEXPECTED_ERROR_TEXT: &str = "Error: An unexpected error occurred.";

/// Instruction preamble prepended to every prompt
const PROMPT_PREAMBLE: &str =
    "You are an AI assistant. Please answer the following question based on the provided contexts: ";

/// Failure modes of one completion round trip
#[derive(Debug, Error)]
pub enum AnswerError {
    #[error("transport error: {0}")]
    Transport(anyhow::Error),
    #[error("provider returned status {0}")]
    Api(u16),
    #[error("malformed response: {0}")]
    Decode(serde_json::Error),
    #[error("response contained no choices")]
    EmptyChoices,
}

/// Client for the Groq chat completions API
pub struct AnswerGenerator {
    http: HttpClient,
    settings: AnswerSettings,
}

impl AnswerGenerator {
    pub fn new(http: HttpClient, settings: AnswerSettings) -> Self {
        Self { http, settings }
    }

    /// Generate an answer for a query grounded in the given snippets.
    ///
    /// Never fails outward: a provider-reported API error collapses to
    /// [`API_ERROR_TEXT`], anything else to [`UNEXPECTED_ERROR_TEXT`].
    pub async fn generate(&self, query: &str, snippets: &[String]) -> String {
        match self.complete(query, snippets).await {
            Ok(text) => text,
            Err(err @ AnswerError::Api(_)) => {
                error!(error = %err, "answer provider reported an API error");
                API_ERROR_TEXT.to_string()
            }
            Err(err) => {
                error!(error = %err, "answer generation failed");
                UNEXPECTED_ERROR_TEXT.to_string()
            }
        }
    }

    /// One fallible completion round trip
    async fn complete(&self, query: &str, snippets: &[String]) -> Result<String, AnswerError> {
        let prompt = build_prompt(query, snippets);
        debug!(model = %self.settings.model, prompt_len = prompt.len(), "requesting completion");

        let request = ChatRequest {
            model: self.settings.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
        };
        let body = serde_json::to_value(&request).map_err(AnswerError::Decode)?;

        let auth = format!("Bearer {}", self.settings.api_key);
        let headers = [
            ("Authorization", auth.as_str()),
            ("Content-Type", "application/json"),
        ];

        let response = self
            .http
            .post_json(&self.settings.endpoint, &headers, &body)
            .await
            .map_err(AnswerError::Transport)?;

        if !(200..300).contains(&response.status) {
            return Err(AnswerError::Api(response.status));
        }

        let parsed: ChatResponse = response.json().map_err(AnswerError::Decode)?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(AnswerError::EmptyChoices)
    }
}

/// Build the single-shot prompt: preamble, query, then the snippets
/// concatenated without separators
fn build_prompt(query: &str, snippets: &[String]) -> String {
    format!("{}{}\n\n{}", PROMPT_PREAMBLE, query, snippets.concat())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn generator_for(server: &MockServer) -> AnswerGenerator {
        let settings = AnswerSettings {
            endpoint: format!("{}/openai/v1/chat/completions", server.uri()),
            api_key: "test-groq-key".to_string(),
            model: "llama3-8b-8192".to_string(),
        };
        AnswerGenerator::new(HttpClient::new().unwrap(), settings)
    }

    fn snippets() -> Vec<String> {
        vec!["Paris is the capital. ".to_string(), "France's capital is Paris.".to_string()]
    }

    #[test]
    fn test_build_prompt() {
        let prompt = build_prompt("capital of France", &snippets());
        assert_eq!(
            prompt,
            "You are an AI assistant. Please answer the following question based on \
             the provided contexts: capital of France\n\nParis is the capital. \
             France's capital is Paris."
        );
    }

    #[test]
    fn test_build_prompt_no_snippets() {
        let prompt = build_prompt("q", &[]);
        assert!(prompt.ends_with("q\n\n"));
    }

    #[tokio::test]
    async fn test_generate_returns_first_choice() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/openai/v1/chat/completions"))
            .and(header("Authorization", "Bearer test-groq-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [
                    {"message": {"role": "assistant", "content": "The capital of France is Paris."}},
                    {"message": {"role": "assistant", "content": "ignored second choice"}}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let answer = generator_for(&server)
            .generate("capital of France", &snippets())
            .await;
        assert_eq!(answer, "The capital of France is Paris.");
    }

    #[tokio::test]
    async fn test_api_error_collapses_to_sentinel() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": {"message": "Invalid API Key", "type": "invalid_request_error"}
            })))
            .mount(&server)
            .await;

        let answer = generator_for(&server).generate("q", &snippets()).await;
        assert_eq!(answer, API_ERROR_TEXT);
    }

    #[tokio::test]
    async fn test_malformed_body_collapses_to_unexpected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let answer = generator_for(&server).generate("q", &snippets()).await;
        assert_eq!(answer, UNEXPECTED_ERROR_TEXT);
    }

    #[tokio::test]
    async fn test_empty_choices_collapses_to_unexpected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&server)
            .await;

        let answer = generator_for(&server).generate("q", &snippets()).await;
        assert_eq!(answer, UNEXPECTED_ERROR_TEXT);
    }

    #[tokio::test]
    async fn test_transport_failure_collapses_to_unexpected() {
        let settings = AnswerSettings {
            endpoint: "http://127.0.0.1:1/chat".to_string(),
            api_key: "k".to_string(),
            model: "llama3-8b-8192".to_string(),
        };
        let generator = AnswerGenerator::new(HttpClient::new().unwrap(), settings);
        let answer = generator.generate("q", &snippets()).await;
        assert_eq!(answer, UNEXPECTED_ERROR_TEXT);
    }
}
