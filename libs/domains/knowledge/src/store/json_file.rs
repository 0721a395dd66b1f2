use async_trait::async_trait;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use super::VectorStore;
use crate::error::{KnowledgeError, KnowledgeResult};

type Document = BTreeMap<String, Vec<f64>>;

/// Vector store persisted as one JSON object `{ "<entry_id>": [f64, ...] }`.
///
/// Every mutation loads the whole document, changes it and writes it back
/// while holding a process-wide async mutex, so concurrent upserts of
/// different keys all survive. Writes go to a sibling temp file that is then
/// renamed over the document; readers never observe a partial file.
///
/// A missing file is an empty store. A file that is not a valid document is
/// logged and treated as empty; the next write replaces it.
#[derive(Debug)]
pub struct JsonFileVectorStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileVectorStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> KnowledgeResult<Document> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Document::new()),
            Err(e) => {
                return Err(KnowledgeError::StoreWrite(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        match serde_json::from_slice::<Document>(&bytes) {
            Ok(document) => Ok(document),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Vector store document is corrupt, starting from empty"
                );
                Ok(Document::new())
            }
        }
    }

    async fn write_document(&self, document: &Document) -> KnowledgeResult<()> {
        let mut buf = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        document
            .serialize(&mut serializer)
            .map_err(|e| KnowledgeError::StoreWrite(format!("Failed to serialize document: {}", e)))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.write_error(e))?;
        }

        let tmp = self.tmp_path();
        tokio::fs::write(&tmp, &buf)
            .await
            .map_err(|e| self.write_error(e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| self.write_error(e))?;

        tracing::debug!(path = %self.path.display(), vectors = document.len(), "Vector store written");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name: OsString = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn write_error(&self, err: std::io::Error) -> KnowledgeError {
        KnowledgeError::StoreWrite(format!("Failed to write {}: {}", self.path.display(), err))
    }
}

#[async_trait]
impl VectorStore for JsonFileVectorStore {
    async fn get(&self, entry_id: i32) -> KnowledgeResult<Option<Vec<f64>>> {
        let _guard = self.lock.lock().await;
        let mut document = self.read_document().await?;
        Ok(document.remove(&entry_id.to_string()))
    }

    async fn upsert(&self, entry_id: i32, vector: Vec<f64>) -> KnowledgeResult<()> {
        let _guard = self.lock.lock().await;
        let mut document = self.read_document().await?;

        let key = entry_id.to_string();
        if document.get(&key) == Some(&vector) {
            return Ok(());
        }

        document.insert(key, vector);
        self.write_document(&document).await
    }

    async fn load_all(&self) -> KnowledgeResult<BTreeMap<i32, Vec<f64>>> {
        let _guard = self.lock.lock().await;
        let document = self.read_document().await?;

        Ok(document
            .into_iter()
            .filter_map(|(key, vector)| match key.parse::<i32>() {
                Ok(id) => Some((id, vector)),
                Err(_) => {
                    tracing::warn!(key = %key, "Ignoring non-numeric vector store key");
                    None
                }
            })
            .collect())
    }

    // Re-reads under the lock so vectors upserted while the reindex was
    // embedding survive; non-numeric keys are dropped here.
    async fn merge_reindexed(
        &self,
        fresh: BTreeMap<i32, Vec<f64>>,
        orphans: BTreeSet<i32>,
    ) -> KnowledgeResult<()> {
        let _guard = self.lock.lock().await;
        let mut document = self.read_document().await?;

        document.retain(|key, _| key.parse::<i32>().is_ok_and(|id| !orphans.contains(&id)));
        document.extend(fresh.into_iter().map(|(id, vector)| (id.to_string(), vector)));

        self.write_document(&document).await
    }

    async fn count(&self) -> KnowledgeResult<usize> {
        let _guard = self.lock.lock().await;
        Ok(self.read_document().await?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::sync::Arc;

    fn store_in(dir: &tempfile::TempDir) -> JsonFileVectorStore {
        JsonFileVectorStore::new(dir.path().join("data").join("embeddings.json"))
    }

    async fn read_json(store: &JsonFileVectorStore) -> Value {
        let bytes = tokio::fs::read(store.path()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_upsert_creates_missing_file_and_parent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.upsert(7, vec![0.1, 0.2, 0.3]).await.unwrap();

        let json = read_json(&store).await;
        assert_eq!(json.as_object().unwrap().len(), 1);
        assert_eq!(store.get(7).await.unwrap(), Some(vec![0.1, 0.2, 0.3]));
    }

    #[tokio::test]
    async fn test_repeated_upsert_leaves_equivalent_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.upsert(7, vec![0.1, 0.2, 0.3]).await.unwrap();
        let first = tokio::fs::read(store.path()).await.unwrap();
        store.upsert(7, vec![0.1, 0.2, 0.3]).await.unwrap();
        let second = tokio::fs::read(store.path()).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        tokio::fs::create_dir_all(store.path().parent().unwrap())
            .await
            .unwrap();
        tokio::fs::write(store.path(), b"{\"3\": [1.0, oops")
            .await
            .unwrap();

        store.upsert(5, vec![1.0]).await.unwrap();

        let json = read_json(&store).await;
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["5"]);
    }

    #[tokio::test]
    async fn test_concurrent_upserts_all_persist() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(store_in(&dir));

        let tasks: Vec<_> = (1..=16)
            .map(|id| {
                let store = store.clone();
                tokio::spawn(async move { store.upsert(id, vec![id as f64]).await })
            })
            .collect();
        for task in futures::future::join_all(tasks).await {
            task.unwrap().unwrap();
        }

        let all = store.load_all().await.unwrap();
        assert_eq!(all.len(), 16);
        assert_eq!(all[&1], vec![1.0]);
        assert_eq!(all[&2], vec![2.0]);
    }

    #[tokio::test]
    async fn test_document_uses_four_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.upsert(1, vec![0.5]).await.unwrap();

        let text = tokio::fs::read_to_string(store.path()).await.unwrap();
        assert!(text.starts_with("{\n    \"1\": [\n        0.5\n    ]\n}"), "{text}");
    }

    #[tokio::test]
    async fn test_merge_reindexed_keeps_newer_keys_and_drops_foreign_ones() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        tokio::fs::create_dir_all(store.path().parent().unwrap())
            .await
            .unwrap();
        tokio::fs::write(store.path(), br#"{"1": [1.0], "legacy": [2.0]}"#)
            .await
            .unwrap();

        let loaded = store.load_all().await.unwrap();
        assert_eq!(loaded.keys().copied().collect::<Vec<_>>(), vec![1]);

        // Written after the reindex took its snapshot
        store.upsert(9, vec![0.9]).await.unwrap();

        store
            .merge_reindexed(BTreeMap::from([(4, vec![0.4])]), BTreeSet::from([1]))
            .await
            .unwrap();
        let json = read_json(&store).await;
        assert_eq!(json, serde_json::json!({ "4": [0.4], "9": [0.9] }));
    }

    #[tokio::test]
    async fn test_upsert_keeps_full_precision_of_existing_vectors() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        tokio::fs::create_dir_all(store.path().parent().unwrap())
            .await
            .unwrap();
        tokio::fs::write(store.path(), br#"{"1": [0.0123456789012345]}"#)
            .await
            .unwrap();

        store.upsert(2, vec![0.5]).await.unwrap();

        assert_eq!(store.get(1).await.unwrap(), Some(vec![0.0123456789012345]));
        let text = tokio::fs::read_to_string(store.path()).await.unwrap();
        assert!(text.contains("0.0123456789012345"), "{text}");
    }

    #[tokio::test]
    async fn test_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.count().await.unwrap(), 0);
        assert_eq!(store.get(1).await.unwrap(), None);
        assert!(!store.path().exists());
    }
}
