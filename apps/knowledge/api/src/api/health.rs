use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};

use crate::state::AppState;

/// Readiness check: the database answers and the vector store document is readable
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let store = state.knowledge.vector_store();

    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![
        (
            "database",
            Box::pin(async {
                database::postgres::check_health(&state.db)
                    .await
                    .map_err(|e| e.to_string())
            }),
        ),
        (
            "vector_store",
            Box::pin(async move { store.count().await.map(|_| ()).map_err(|e| e.to_string()) }),
        ),
    ];

    run_health_checks(checks).await.into_response()
}
