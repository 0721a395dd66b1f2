//! Keyed document mapping entry ids to embedding vectors.

mod json_file;
mod memory;

pub use json_file::JsonFileVectorStore;
pub use memory::InMemoryVectorStore;

use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};

use crate::error::KnowledgeResult;

/// Vector store abstraction.
///
/// At most one vector per entry id; the last write wins. Dimensionality is
/// not checked.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VectorStore: Send + Sync {
    async fn get(&self, entry_id: i32) -> KnowledgeResult<Option<Vec<f64>>>;

    /// Insert or overwrite one vector, leaving every other key untouched.
    async fn upsert(&self, entry_id: i32, vector: Vec<f64>) -> KnowledgeResult<()>;

    /// Every stored vector.
    async fn load_all(&self) -> KnowledgeResult<BTreeMap<i32, Vec<f64>>>;

    /// Write a reindex result in a single step: overwrite every `fresh`
    /// vector, drop the `orphans`, and keep all other keys as currently stored.
    async fn merge_reindexed(
        &self,
        fresh: BTreeMap<i32, Vec<f64>>,
        orphans: BTreeSet<i32>,
    ) -> KnowledgeResult<()>;

    /// Number of stored vectors; doubles as a readability probe.
    async fn count(&self) -> KnowledgeResult<usize>;
}
