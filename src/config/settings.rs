//! Settings structures for the askweb configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Main settings structure matching settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub search: SearchSettings,
    pub answer: AnswerSettings,
    pub outgoing: OutgoingSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables
    ///
    /// Server-level options use the `ASKWEB_*` prefix; provider credentials
    /// keep their conventional names (`SERPER_*`, `GROQ_*`).
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("ASKWEB_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("ASKWEB_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Ok(val) = std::env::var("ASKWEB_CORS_ALLOW_ORIGIN") {
            self.server.cors_allow_origin = Some(val);
        }
        if let Ok(val) = std::env::var("SERPER_ENDPOINT") {
            self.search.endpoint = val;
        }
        if let Ok(val) = std::env::var("SERPER_API_KEY") {
            self.search.api_key = val;
        }
        if let Ok(val) = std::env::var("GROQ_ENDPOINT") {
            self.answer.endpoint = val;
        }
        if let Ok(val) = std::env::var("GROQ_API_KEY") {
            self.answer.api_key = val;
        }
        if let Ok(val) = std::env::var("GROQ_MODEL") {
            self.answer.model = val;
        }
    }

    /// Validate settings, returning an error for malformed endpoint URLs
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.search.endpoint)
            .map_err(|e| anyhow::anyhow!("invalid search endpoint {:?}: {}", self.search.endpoint, e))?;
        Url::parse(&self.answer.endpoint)
            .map_err(|e| anyhow::anyhow!("invalid answer endpoint {:?}: {}", self.answer.endpoint, e))?;
        Ok(())
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
    /// Origin allowed to call `/search` from a browser; none = any origin
    pub cors_allow_origin: Option<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 5000,
            bind_address: "127.0.0.1".to_string(),
            cors_allow_origin: None,
        }
    }
}

/// Search provider (Serper) settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Search API endpoint
    pub endpoint: String,
    /// API key sent in the X-API-KEY header
    pub api_key: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://google.serper.dev/search".to_string(),
            api_key: String::new(),
        }
    }
}

/// Answer provider (Groq) settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerSettings {
    /// Chat completions endpoint
    pub endpoint: String,
    /// API key sent as a Bearer token
    pub api_key: String,
    /// Model identifier used for every completion
    pub model: String,
}

impl Default for AnswerSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://api.groq.com/openai/v1/chat/completions".to_string(),
            api_key: String::new(),
            model: "llama3-8b-8192".to_string(),
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds; none = no enforced upper bound
    pub request_timeout: Option<f64>,
    /// Pool max size per host
    pub pool_maxsize: usize,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: None,
            pool_maxsize: 20,
        }
    }
}
