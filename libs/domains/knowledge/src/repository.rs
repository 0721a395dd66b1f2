use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{KnowledgeError, KnowledgeResult};
use crate::models::{KnowledgeEntry, NewKnowledgeEntry, UpdateKnowledgeEntry};

/// Repository trait for knowledge entry persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KnowledgeEntryRepository: Send + Sync {
    /// Persist a new entry; the store assigns `entry_id`
    async fn create(&self, input: NewKnowledgeEntry) -> KnowledgeResult<KnowledgeEntry>;

    async fn get_by_id(&self, entry_id: i32) -> KnowledgeResult<Option<KnowledgeEntry>>;

    /// Patch raw fields; fails with `NotFound` when the id is unknown
    async fn update(
        &self,
        entry_id: i32,
        input: UpdateKnowledgeEntry,
    ) -> KnowledgeResult<KnowledgeEntry>;

    /// Every entry, ordered by id
    async fn list_all(&self) -> KnowledgeResult<Vec<KnowledgeEntry>>;
}

#[derive(Debug, Default)]
struct Table {
    rows: HashMap<i32, KnowledgeEntry>,
    last_id: i32,
}

/// In-memory implementation of KnowledgeEntryRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryKnowledgeEntryRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryKnowledgeEntryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KnowledgeEntryRepository for InMemoryKnowledgeEntryRepository {
    async fn create(&self, input: NewKnowledgeEntry) -> KnowledgeResult<KnowledgeEntry> {
        let mut table = self.table.write().await;
        table.last_id += 1;

        let now = Utc::now();
        let entry = KnowledgeEntry {
            entry_id: table.last_id,
            business_id: input.business_id,
            title: input.title,
            content: input.content,
            content_type: input.content_type,
            improved_title: input.improved_title,
            improved_content: input.improved_content,
            icon: input.icon,
            categories: input.categories,
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(entry.entry_id, entry.clone());

        tracing::info!(entry_id = entry.entry_id, "Created knowledge entry");
        Ok(entry)
    }

    async fn get_by_id(&self, entry_id: i32) -> KnowledgeResult<Option<KnowledgeEntry>> {
        Ok(self.table.read().await.rows.get(&entry_id).cloned())
    }

    async fn update(
        &self,
        entry_id: i32,
        input: UpdateKnowledgeEntry,
    ) -> KnowledgeResult<KnowledgeEntry> {
        let mut table = self.table.write().await;
        let entry = table
            .rows
            .get_mut(&entry_id)
            .ok_or(KnowledgeError::NotFound(entry_id))?;

        if let Some(title) = input.title {
            entry.title = title;
        }
        if let Some(content) = input.content {
            entry.content = content;
        }
        if let Some(content_type) = input.content_type {
            entry.content_type = content_type;
        }
        entry.updated_at = Utc::now();

        tracing::info!(entry_id, "Updated knowledge entry");
        Ok(entry.clone())
    }

    async fn list_all(&self) -> KnowledgeResult<Vec<KnowledgeEntry>> {
        let table = self.table.read().await;
        let mut entries: Vec<KnowledgeEntry> = table.rows.values().cloned().collect();
        entries.sort_by_key(|e| e.entry_id);
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_entry(title: &str) -> NewKnowledgeEntry {
        NewKnowledgeEntry {
            business_id: 1,
            title: title.into(),
            content: "content".into(),
            content_type: "faq".into(),
            improved_title: format!("Improved {}", title),
            improved_content: "Improved content".into(),
            icon: "BookIcon".into(),
            categories: vec!["📚 Docs".into(), "💡 Tips".into()],
        }
    }

    #[tokio::test]
    async fn test_ids_are_sequential() {
        let repo = InMemoryKnowledgeEntryRepository::new();
        let a = repo.create(new_entry("a")).await.unwrap();
        let b = repo.create(new_entry("b")).await.unwrap();

        assert_eq!(a.entry_id, 1);
        assert_eq!(b.entry_id, 2);
        assert_eq!(
            repo.list_all()
                .await
                .unwrap()
                .iter()
                .map(|e| e.entry_id)
                .collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[tokio::test]
    async fn test_update_patches_only_given_fields() {
        let repo = InMemoryKnowledgeEntryRepository::new();
        let created = repo.create(new_entry("hours")).await.unwrap();

        let updated = repo
            .update(
                created.entry_id,
                UpdateKnowledgeEntry {
                    content: Some("new content".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "hours");
        assert_eq!(updated.content, "new content");
        assert_eq!(updated.improved_content, created.improved_content);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let repo = InMemoryKnowledgeEntryRepository::new();
        let err = repo
            .update(42, UpdateKnowledgeEntry::default())
            .await
            .unwrap_err();
        assert!(matches!(err, KnowledgeError::NotFound(42)));
    }
}
