//! Shared plumbing for the Gemini REST API.

use core_config::{ConfigError, FromEnv, env_or_default, env_parse, env_required};
use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::{KnowledgeError, KnowledgeResult};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_ENRICHMENT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-004";

/// Gemini provider configuration
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: String,
    pub enrichment_model: String,
    pub embedding_model: String,
    /// Upper bound for a single provider call, connect to last byte
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            enrichment_model: DEFAULT_ENRICHMENT_MODEL.to_string(),
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub(crate) fn endpoint(&self, model: &str, method: &str) -> String {
        format!(
            "{}/models/{}:{}?key={}",
            self.base_url.trim_end_matches('/'),
            model,
            method,
            self.api_key
        )
    }
}

// Keeps the key out of logs.
impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("enrichment_model", &self.enrichment_model)
            .field("embedding_model", &self.embedding_model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl FromEnv for GeminiConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: env_required("GEMINI_API_KEY")?,
            base_url: env_or_default("GEMINI_BASE_URL", DEFAULT_BASE_URL),
            enrichment_model: env_or_default("GEMINI_ENRICHMENT_MODEL", DEFAULT_ENRICHMENT_MODEL),
            embedding_model: env_or_default("GEMINI_EMBEDDING_MODEL", DEFAULT_EMBEDDING_MODEL),
            timeout: Duration::from_secs(env_parse("GEMINI_TIMEOUT_SECS", "30")?),
        })
    }
}

pub(crate) fn build_http_client(config: &GeminiConfig) -> KnowledgeResult<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Client::builder()
        .default_headers(headers)
        .timeout(config.timeout)
        .build()
        .map_err(|e| KnowledgeError::Config(format!("Failed to build HTTP client: {}", e)))
}

/// POST `body` and decode the JSON reply.
///
/// The error string never contains the request URL, which carries the API key.
pub(crate) async fn post_json<B, T>(client: &Client, url: &str, body: &B) -> Result<T, String>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let response = client
        .post(url)
        .json(body)
        .send()
        .await
        .map_err(|e| describe(e.without_url()))?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        return Err(format!("Gemini API error ({}): {}", status, error_text));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Malformed Gemini response: {}", e.without_url()))
}

fn describe(err: reqwest::Error) -> String {
    if err.is_timeout() {
        "Gemini request timed out".to_string()
    } else {
        format!("Gemini request failed: {}", err)
    }
}
