use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::embedding::{EmbeddingProvider, EmbeddingTask};
use crate::enrichment::Enricher;
use crate::error::{KnowledgeError, KnowledgeResult};
use crate::models::{
    CreateKnowledgeEntry, KnowledgeEntry, NewKnowledgeEntry, ReindexReport, UpdateKnowledgeEntry,
};
use crate::repository::KnowledgeEntryRepository;
use crate::store::VectorStore;

/// Service layer for the knowledge entry pipeline
///
/// `create_enriched_entry` runs enrich → persist → embed → store. The first
/// two stages abort the operation on failure. The last two run only once the
/// entry has an id; their failures are logged and never reach the caller.
pub struct KnowledgeService<R: KnowledgeEntryRepository> {
    repository: Arc<R>,
    enricher: Arc<dyn Enricher>,
    embedder: Arc<dyn EmbeddingProvider>,
    store: Arc<dyn VectorStore>,
}

impl<R: KnowledgeEntryRepository> Clone for KnowledgeService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            enricher: self.enricher.clone(),
            embedder: self.embedder.clone(),
            store: self.store.clone(),
        }
    }
}

impl<R: KnowledgeEntryRepository> KnowledgeService<R> {
    pub fn new(
        repository: R,
        enricher: impl Enricher + 'static,
        embedder: impl EmbeddingProvider + 'static,
        store: impl VectorStore + 'static,
    ) -> Self {
        Self {
            repository: Arc::new(repository),
            enricher: Arc::new(enricher),
            embedder: Arc::new(embedder),
            store: Arc::new(store),
        }
    }

    pub fn vector_store(&self) -> Arc<dyn VectorStore> {
        self.store.clone()
    }

    /// Enrich, persist, then index the new entry.
    ///
    /// Returns the persisted entry whether or not indexing succeeded.
    #[instrument(skip(self, input), fields(business_id = input.business_id))]
    pub async fn create_enriched_entry(
        &self,
        input: CreateKnowledgeEntry,
    ) -> KnowledgeResult<KnowledgeEntry> {
        let entry = self.create_entry(input).await?;
        self.index_best_effort(&entry).await;
        Ok(entry)
    }

    /// Enrich and persist without touching the vector store.
    #[instrument(skip(self, input), fields(business_id = input.business_id))]
    pub async fn create_entry(&self, input: CreateKnowledgeEntry) -> KnowledgeResult<KnowledgeEntry> {
        input
            .validate()
            .map_err(|e| KnowledgeError::Validation(e.to_string()))?;

        let enriched = self.enricher.enrich(&input.title, &input.content).await?;

        let record = NewKnowledgeEntry::new(input, enriched);
        record
            .validate()
            .map_err(|e| KnowledgeError::Enrichment(format!("Invalid enrichment: {}", e)))?;

        self.repository.create(record).await
    }

    pub async fn get_entry(&self, entry_id: i32) -> KnowledgeResult<KnowledgeEntry> {
        self.repository
            .get_by_id(entry_id)
            .await?
            .ok_or(KnowledgeError::NotFound(entry_id))
    }

    /// Patch raw fields. Improved fields and the stored vector are left as they are.
    #[instrument(skip(self, input))]
    pub async fn update_entry(
        &self,
        entry_id: i32,
        input: UpdateKnowledgeEntry,
    ) -> KnowledgeResult<KnowledgeEntry> {
        if input.is_empty() {
            return Err(KnowledgeError::Validation(
                "At least one of title, content or content_type must be provided".to_string(),
            ));
        }
        input
            .validate()
            .map_err(|e| KnowledgeError::Validation(e.to_string()))?;

        self.repository.update(entry_id, input).await
    }

    /// Regenerate every entry's vector and drop vectors of vanished entries.
    ///
    /// A failed embedding keeps the entry's previous vector. The document is
    /// written once at the end as a merge, so vectors upserted by creates
    /// running concurrently are kept. Only that write can fail the operation.
    #[instrument(skip(self))]
    pub async fn reindex_all(&self) -> KnowledgeResult<ReindexReport> {
        // Vectors first: an id missing from this snapshot can never be
        // mistaken for an orphan, whenever its entry was created.
        let previous = self.store.load_all().await?;
        let entries = self.repository.list_all().await?;

        let live: HashSet<i32> = entries.iter().map(|e| e.entry_id).collect();
        let orphans: BTreeSet<i32> = previous
            .keys()
            .filter(|id| !live.contains(id))
            .copied()
            .collect();

        let mut fresh = BTreeMap::new();
        let mut report = ReindexReport {
            total: entries.len(),
            removed: orphans.len(),
            ..Default::default()
        };

        for entry in &entries {
            match self
                .embedder
                .embed(&entry.embedding_text(), EmbeddingTask::RetrievalDocument)
                .await
            {
                Ok(vector) => {
                    fresh.insert(entry.entry_id, vector);
                    report.indexed += 1;
                }
                Err(e) => {
                    tracing::warn!(entry_id = entry.entry_id, error = %e, "Skipping entry during reindex");
                    report.failed.push(entry.entry_id);
                }
            }
        }

        self.store.merge_reindexed(fresh, orphans).await?;

        tracing::info!(
            total = report.total,
            indexed = report.indexed,
            failed = report.failed.len(),
            removed = report.removed,
            "Reindex finished"
        );
        Ok(report)
    }

    async fn index_entry(&self, entry: &KnowledgeEntry) -> KnowledgeResult<()> {
        let vector = self
            .embedder
            .embed(&entry.embedding_text(), EmbeddingTask::RetrievalDocument)
            .await?;
        self.store.upsert(entry.entry_id, vector).await
    }

    // No retry path: a failed entry stays unindexed until the next reindex.
    async fn index_best_effort(&self, entry: &KnowledgeEntry) {
        match self.index_entry(entry).await {
            Ok(()) => tracing::info!(entry_id = entry.entry_id, "Indexed knowledge entry"),
            Err(e) => tracing::warn!(
                entry_id = entry.entry_id,
                error = %e,
                "Entry created but indexing failed"
            ),
        }
    }
}
