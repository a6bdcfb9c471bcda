//! Answer generation module
//!
//! Synthesizes a natural-language answer from search snippets via the Groq
//! chat completions API.

mod generator;
mod models;

pub use generator::{AnswerError, AnswerGenerator, API_ERROR_TEXT, UNEXPECTED_ERROR_TEXT};
pub use models::{ChatChoice, ChatMessage, ChatRequest, ChatResponse};
