//! Knowledge Domain
//!
//! Knowledge-base entries for a business, enriched by a generative model and
//! indexed as embedding vectors for retrieval.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← enrich → persist → embed → store
//! └──┬───┬───┬──┘
//!    │   │   │
//!    │   │  ┌▼─────────────┐
//!    │   │  │ VectorStore  │  ← entry_id → vector document
//!    │   │  └──────────────┘
//!    │  ┌▼──────────────────┐
//!    │  │ EmbeddingProvider │  ← text → vector
//!    │  └───────────────────┘
//!   ┌▼───────────┐  ┌────────────┐
//!   │  Enricher  │  │ Repository │  ← relational persistence
//!   └────────────┘  └────────────┘
//! ```
//!
//! Enrichment and persistence failures abort a create. Embedding and store
//! failures happen after the entry exists; they are logged and swallowed.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_knowledge::{
//!     handlers, GeminiConfig, GeminiEmbedder, GeminiEnricher, InMemoryKnowledgeEntryRepository,
//!     JsonFileVectorStore, KnowledgeService,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let gemini = GeminiConfig::new("api-key");
//! let service = KnowledgeService::new(
//!     InMemoryKnowledgeEntryRepository::new(),
//!     GeminiEnricher::new(&gemini)?,
//!     GeminiEmbedder::new(&gemini)?,
//!     JsonFileVectorStore::new("data/embeddings.json"),
//! );
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod embedding;
pub mod enrichment;
pub mod entity;
pub mod error;
pub mod gemini;
pub mod handlers;
pub mod icons;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;
pub mod store;

pub use embedding::{EmbeddingProvider, EmbeddingTask, GeminiEmbedder};
pub use enrichment::{EnrichmentParseError, Enricher, GeminiEnricher, parse_enrichment};
pub use error::{KnowledgeError, KnowledgeResult};
pub use gemini::GeminiConfig;
pub use handlers::ApiDoc;
pub use models::{
    CreateKnowledgeEntry, EnrichedFields, KnowledgeEntry, KnowledgeEntrySummary,
    NewKnowledgeEntry, ReindexReport, UpdateKnowledgeEntry,
};
pub use postgres::PgKnowledgeEntryRepository;
pub use repository::{InMemoryKnowledgeEntryRepository, KnowledgeEntryRepository};
pub use service::KnowledgeService;
pub use store::{InMemoryVectorStore, JsonFileVectorStore, VectorStore};
