//! Parse-and-validate step for enrichment model output.

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use thiserror::Error;

use crate::error::KnowledgeError;
use crate::icons::is_known_icon;
use crate::models::EnrichedFields;

pub const MIN_CATEGORIES: usize = 2;
pub const MAX_CATEGORIES: usize = 5;

/// "emoji Label": a pictograph or keycap (optionally followed by modifiers,
/// joiners or more pictographs), whitespace, then a non-empty label.
static CATEGORY_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[\p{Extended_Pictographic}\p{Regional_Indicator}]|[0-9#*]\x{FE0F}?\x{20E3})[^\s\p{L}\p{N}]*\s+\S.*$",
    )
    .unwrap()
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnrichmentParseError {
    #[error("model output is not the expected JSON object: {0}")]
    Malformed(String),

    #[error("field '{0}' is empty")]
    Empty(&'static str),

    #[error("icon '{0}' is not in the catalog")]
    UnknownIcon(String),

    #[error("expected 2 to 5 categories, got {0}")]
    CategoryCount(usize),

    #[error("category '{0}' is not formatted as \"emoji Label\"")]
    CategoryFormat(String),
}

impl From<EnrichmentParseError> for KnowledgeError {
    fn from(err: EnrichmentParseError) -> Self {
        KnowledgeError::Enrichment(err.to_string())
    }
}

#[derive(Deserialize)]
struct Fragment {
    improved_title: String,
    improved_content: String,
    icon: String,
    categories: Vec<String>,
}

/// Parse raw model text into validated [`EnrichedFields`].
///
/// Accepts the bare JSON object, optionally wrapped in a Markdown code fence.
/// String fields are trimmed before validation.
pub fn parse_enrichment(raw: &str) -> Result<EnrichedFields, EnrichmentParseError> {
    let fragment: Fragment = serde_json::from_str(strip_code_fence(raw))
        .map_err(|e| EnrichmentParseError::Malformed(e.to_string()))?;

    let improved_title = non_empty("improved_title", fragment.improved_title)?;
    let improved_content = non_empty("improved_content", fragment.improved_content)?;
    let icon = non_empty("icon", fragment.icon)?;

    if !is_known_icon(&icon) {
        return Err(EnrichmentParseError::UnknownIcon(icon));
    }

    let categories: Vec<String> = fragment
        .categories
        .into_iter()
        .map(|c| c.trim().to_string())
        .collect();

    if !(MIN_CATEGORIES..=MAX_CATEGORIES).contains(&categories.len()) {
        return Err(EnrichmentParseError::CategoryCount(categories.len()));
    }

    if let Some(bad) = categories.iter().find(|c| !CATEGORY_FORMAT.is_match(c)) {
        return Err(EnrichmentParseError::CategoryFormat(bad.clone()));
    }

    Ok(EnrichedFields {
        improved_title,
        improved_content,
        icon,
        categories,
    })
}

fn non_empty(field: &'static str, value: String) -> Result<String, EnrichmentParseError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(EnrichmentParseError::Empty(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}
