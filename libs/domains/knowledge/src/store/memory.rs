use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::VectorStore;
use crate::error::KnowledgeResult;

/// In-memory implementation of VectorStore (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryVectorStore {
    vectors: Arc<RwLock<BTreeMap<i32, Vec<f64>>>>,
}

impl InMemoryVectorStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VectorStore for InMemoryVectorStore {
    async fn get(&self, entry_id: i32) -> KnowledgeResult<Option<Vec<f64>>> {
        Ok(self.vectors.read().await.get(&entry_id).cloned())
    }

    async fn upsert(&self, entry_id: i32, vector: Vec<f64>) -> KnowledgeResult<()> {
        self.vectors.write().await.insert(entry_id, vector);
        Ok(())
    }

    async fn load_all(&self) -> KnowledgeResult<BTreeMap<i32, Vec<f64>>> {
        Ok(self.vectors.read().await.clone())
    }

    async fn merge_reindexed(
        &self,
        fresh: BTreeMap<i32, Vec<f64>>,
        orphans: BTreeSet<i32>,
    ) -> KnowledgeResult<()> {
        let mut vectors = self.vectors.write().await;
        vectors.retain(|id, _| !orphans.contains(id));
        vectors.extend(fresh);
        Ok(())
    }

    async fn count(&self) -> KnowledgeResult<usize> {
        Ok(self.vectors.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_upsert_overwrites_and_merge_drops_orphans() {
        let store = InMemoryVectorStore::new();
        store.upsert(1, vec![0.1]).await.unwrap();
        store.upsert(1, vec![0.2]).await.unwrap();
        store.upsert(2, vec![0.3]).await.unwrap();

        assert_eq!(store.get(1).await.unwrap(), Some(vec![0.2]));
        assert_eq!(store.count().await.unwrap(), 2);

        store
            .merge_reindexed(BTreeMap::from([(9, vec![1.0])]), BTreeSet::from([1]))
            .await
            .unwrap();
        assert_eq!(store.get(1).await.unwrap(), None);
        assert_eq!(store.get(2).await.unwrap(), Some(vec![0.3]));
        assert_eq!(store.count().await.unwrap(), 2);
    }
}
