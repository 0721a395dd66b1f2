use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::{
    IdPath, ValidatedJson,
    errors::responses::{
        BadRequestPathResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse, UpstreamErrorResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity;
use crate::error::KnowledgeResult;
use crate::models::{
    CreateEntryQuery, CreateKnowledgeEntry, KnowledgeEntry, KnowledgeEntrySummary, ReindexReport,
    UpdateKnowledgeEntry,
};
use crate::repository::KnowledgeEntryRepository;
use crate::service::KnowledgeService;

/// OpenAPI documentation for the Knowledge Entries API
#[derive(OpenApi)]
#[openapi(
    paths(create_entry, get_entry, update_entry, reindex),
    components(
        schemas(
            KnowledgeEntry,
            KnowledgeEntrySummary,
            CreateKnowledgeEntry,
            UpdateKnowledgeEntry,
            ReindexReport
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestPathResponse,
            UpstreamErrorResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = entity::Model::TAG, description = "AI-enriched knowledge base entries")
    )
)]
pub struct ApiDoc;

/// Create the knowledge entry router
pub fn router<R: KnowledgeEntryRepository + 'static>(service: KnowledgeService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", post(create_entry))
        .route("/reindex", post(reindex))
        .route("/{entry_id}", get(get_entry).put(update_entry))
        .with_state(shared_service)
}

/// Create an entry, enriched by the generative model and indexed for retrieval
///
/// Indexing failures do not fail the request; the entry is returned either way.
#[utoipa::path(
    post,
    path = "",
    tag = entity::Model::TAG,
    params(CreateEntryQuery),
    request_body = CreateKnowledgeEntry,
    responses(
        (status = 201, description = "Entry created", body = KnowledgeEntry),
        (status = 400, response = BadRequestValidationResponse),
        (status = 502, response = UpstreamErrorResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_entry<R: KnowledgeEntryRepository>(
    State(service): State<Arc<KnowledgeService<R>>>,
    Query(query): Query<CreateEntryQuery>,
    ValidatedJson(input): ValidatedJson<CreateKnowledgeEntry>,
) -> KnowledgeResult<impl IntoResponse> {
    let entry = if query.index {
        service.create_enriched_entry(input).await?
    } else {
        service.create_entry(input).await?
    };

    Ok((StatusCode::CREATED, Json(entry)))
}

/// Get an entry by ID
#[utoipa::path(
    get,
    path = "/{entry_id}",
    tag = entity::Model::TAG,
    params(
        ("entry_id" = i32, Path, description = "Knowledge entry ID")
    ),
    responses(
        (status = 200, description = "Entry found", body = KnowledgeEntry),
        (status = 400, response = BadRequestPathResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_entry<R: KnowledgeEntryRepository>(
    State(service): State<Arc<KnowledgeService<R>>>,
    IdPath(entry_id): IdPath,
) -> KnowledgeResult<Json<KnowledgeEntry>> {
    let entry = service.get_entry(entry_id).await?;
    Ok(Json(entry))
}

/// Patch the raw fields of an entry
///
/// Does not re-run enrichment or re-embed the entry.
#[utoipa::path(
    put,
    path = "/{entry_id}",
    tag = entity::Model::TAG,
    params(
        ("entry_id" = i32, Path, description = "Knowledge entry ID")
    ),
    request_body = UpdateKnowledgeEntry,
    responses(
        (status = 200, description = "Entry updated", body = KnowledgeEntrySummary),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_entry<R: KnowledgeEntryRepository>(
    State(service): State<Arc<KnowledgeService<R>>>,
    IdPath(entry_id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateKnowledgeEntry>,
) -> KnowledgeResult<Json<KnowledgeEntrySummary>> {
    let entry = service.update_entry(entry_id, input).await?;
    Ok(Json(entry.into()))
}

/// Rebuild the vector store from every persisted entry
#[utoipa::path(
    post,
    path = "/reindex",
    tag = entity::Model::TAG,
    responses(
        (status = 200, description = "Reindex finished", body = ReindexReport),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn reindex<R: KnowledgeEntryRepository>(
    State(service): State<Arc<KnowledgeService<R>>>,
) -> KnowledgeResult<Json<ReindexReport>> {
    let report = service.reindex_all().await?;
    Ok(Json(report))
}
