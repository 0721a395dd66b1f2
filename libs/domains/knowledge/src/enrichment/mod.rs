mod gemini;
mod parse;
mod prompt;
mod provider;

pub use gemini::GeminiEnricher;
pub use parse::{EnrichmentParseError, MAX_CATEGORIES, MIN_CATEGORIES, parse_enrichment};
pub use prompt::build_prompt;
pub use provider::Enricher;

#[cfg(test)]
pub use provider::MockEnricher;
