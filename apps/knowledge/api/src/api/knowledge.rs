use axum::Router;

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    domain_knowledge::handlers::router(state.knowledge.clone())
}
