use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::KnowledgeResult;

/// Intended use of an embedding, forwarded to providers that tune vectors per task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum EmbeddingTask {
    /// Text being indexed
    RetrievalDocument,
    /// Text used to search the index
    RetrievalQuery,
}

/// Trait for embedding generation providers
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate the embedding for a single text. Dimensionality is provider-defined.
    async fn embed(&self, text: &str, task: EmbeddingTask) -> KnowledgeResult<Vec<f64>>;
}
