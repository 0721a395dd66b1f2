use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KnowledgeError {
    #[error("Knowledge entry not found: {0}")]
    NotFound(i32),

    #[error("Invalid input: {0}")]
    Validation(String),

    /// The generative model call failed or returned an unusable fragment.
    #[error("Enrichment failed: {0}")]
    Enrichment(String),

    #[error("Persistence failed: {0}")]
    Persistence(String),

    #[error("Embedding failed: {0}")]
    Embedding(String),

    #[error("Vector store write failed: {0}")]
    StoreWrite(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type KnowledgeResult<T> = Result<T, KnowledgeError>;

impl From<sea_orm::DbErr> for KnowledgeError {
    fn from(err: sea_orm::DbErr) -> Self {
        KnowledgeError::Persistence(format!("Database error: {}", err))
    }
}

impl From<KnowledgeError> for AppError {
    fn from(err: KnowledgeError) -> Self {
        match err {
            KnowledgeError::NotFound(id) => {
                AppError::NotFound(format!("Knowledge entry {} not found", id))
            }
            KnowledgeError::Validation(msg) => AppError::BadRequest(msg),
            KnowledgeError::Enrichment(msg) => {
                AppError::Upstream(format!("Failed to create entry: {}", msg))
            }
            KnowledgeError::Embedding(msg) => AppError::Upstream(format!("Embedding error: {}", msg)),
            KnowledgeError::Persistence(msg) => AppError::Database(msg),
            KnowledgeError::StoreWrite(msg) => {
                AppError::InternalServerError(format!("Vector store error: {}", msg))
            }
            KnowledgeError::Config(msg) => {
                AppError::InternalServerError(format!("Config error: {}", msg))
            }
        }
    }
}

impl IntoResponse for KnowledgeError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (KnowledgeError::NotFound(3), StatusCode::NOT_FOUND),
            (KnowledgeError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (KnowledgeError::Enrichment("timeout".into()), StatusCode::BAD_GATEWAY),
            (KnowledgeError::Persistence("down".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (KnowledgeError::StoreWrite("disk full".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
