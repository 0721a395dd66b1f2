use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::instrument;

use super::parse::{MAX_CATEGORIES, MIN_CATEGORIES, parse_enrichment};
use super::prompt::build_prompt;
use super::provider::Enricher;
use crate::error::{KnowledgeError, KnowledgeResult};
use crate::gemini::{GeminiConfig, build_http_client, post_json};
use crate::icons::AVAILABLE_ICONS;
use crate::models::EnrichedFields;

/// Enricher backed by Gemini structured output (`generateContent`).
pub struct GeminiEnricher {
    client: Client,
    url: String,
    model: String,
}

impl GeminiEnricher {
    pub fn new(config: &GeminiConfig) -> KnowledgeResult<Self> {
        Ok(Self {
            client: build_http_client(config)?,
            url: config.endpoint(&config.enrichment_model, "generateContent"),
            model: config.enrichment_model.clone(),
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

/// Schema the model's JSON output must follow.
fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "improved_title": { "type": "STRING" },
            "improved_content": { "type": "STRING" },
            "icon": { "type": "STRING", "format": "enum", "enum": AVAILABLE_ICONS },
            "categories": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "minItems": MIN_CATEGORIES,
                "maxItems": MAX_CATEGORIES,
            },
        },
        "required": ["improved_title", "improved_content", "icon", "categories"],
        "propertyOrdering": ["improved_title", "improved_content", "icon", "categories"],
    })
}

#[async_trait]
impl Enricher for GeminiEnricher {
    #[instrument(skip_all, fields(model = %self.model))]
    async fn enrich(&self, title: &str, content: &str) -> KnowledgeResult<EnrichedFields> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part {
                    text: build_prompt(title, content),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: response_schema(),
            },
        };

        let response: GenerateContentResponse = post_json(&self.client, &self.url, &request)
            .await
            .map_err(KnowledgeError::Enrichment)?;

        let text: String = response
            .candidates
            .into_iter()
            .next()
            .map(|c| c.content.parts.into_iter().map(|p| p.text).collect())
            .ok_or_else(|| KnowledgeError::Enrichment("Gemini returned no candidates".to_string()))?;

        let fields = parse_enrichment(&text)?;
        tracing::debug!(icon = %fields.icon, categories = fields.categories.len(), "Entry enriched");
        Ok(fields)
    }
}
