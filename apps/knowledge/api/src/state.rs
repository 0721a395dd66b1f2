use crate::config::Config;
use domain_knowledge::{KnowledgeService, PgKnowledgeEntryRepository};
use sea_orm::DatabaseConnection;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Postgres pool, also probed by `/ready`
    pub db: DatabaseConnection,
    /// Enrichment, persistence and indexing pipeline
    pub knowledge: KnowledgeService<PgKnowledgeEntryRepository>,
}
