use axum::{Router, routing::get};

use crate::state::AppState;

pub mod health;
pub mod knowledge;

pub fn routes(state: &AppState) -> Router {
    Router::new().nest(
        domain_knowledge::entity::Model::URL,
        knowledge::router(state),
    )
}

/// Readiness probe mounted at the root, next to `/health`
pub fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
