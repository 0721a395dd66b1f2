use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_knowledge::{
    GeminiEmbedder, GeminiEnricher, JsonFileVectorStore, KnowledgeService,
    PgKnowledgeEntryRepository,
};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Before any fallible operation so startup errors are colored too
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    let db = database::postgres::connect_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    if config.run_migrations {
        database::postgres::run_migrations::<migration::Migrator>(&db, config.app.name)
            .await
            .map_err(|e| eyre::eyre!("Migration failed: {}", e))?;
    }

    info!(
        enrichment_model = %config.gemini.enrichment_model,
        embedding_model = %config.gemini.embedding_model,
        vector_store = %config.vector_store.path.display(),
        "Initializing knowledge pipeline"
    );

    let knowledge = KnowledgeService::new(
        PgKnowledgeEntryRepository::new(db.clone()),
        GeminiEnricher::new(&config.gemini)?,
        GeminiEmbedder::new(&config.gemini)?,
        JsonFileVectorStore::new(&config.vector_store.path),
    );

    let state = AppState {
        config,
        db,
        knowledge,
    };

    let api_routes = api::routes(&state);

    // Docs, middleware and the `/api` prefix
    let router = create_router::<openapi::ApiDoc>(api_routes)?;

    // /health is liveness only, /ready probes postgres and the vector store
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone()));

    info!(address = %state.config.server.address(), "Starting knowledge API");

    create_production_app(app, &state.config.server, async move {
        info!("Shutting down: closing database connection");
        match state.db.close().await {
            Ok(_) => info!("PostgreSQL connection closed successfully"),
            Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Knowledge API shutdown complete");
    Ok(())
}
