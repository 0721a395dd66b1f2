use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Knowledge API",
        version = "0.1.0",
        description = "Stores knowledge entries enriched by a generative model and indexes them as embeddings"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = domain_knowledge::entity::Model::URL, api = domain_knowledge::ApiDoc)
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_lists_entry_routes() {
        let spec = ApiDoc::openapi();
        let paths: Vec<&String> = spec.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| p.as_str() == "/knowledge-entries/reindex"));
        assert!(paths.iter().any(|p| p.as_str() == "/knowledge-entries/{entry_id}"));
    }
}
