use async_trait::async_trait;

use crate::error::KnowledgeResult;
use crate::models::EnrichedFields;

/// Turns a raw title and content into improved fields, an icon and categories.
///
/// One provider call per invocation; implementations do not retry and keep
/// no state between calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Enricher: Send + Sync {
    async fn enrich(&self, title: &str, content: &str) -> KnowledgeResult<EnrichedFields>;
}
