use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::provider::{EmbeddingProvider, EmbeddingTask};
use crate::error::{KnowledgeError, KnowledgeResult};
use crate::gemini::{GeminiConfig, build_http_client, post_json};

/// Embedding provider backed by Gemini `embedContent`.
pub struct GeminiEmbedder {
    client: Client,
    url: String,
    model: String,
}

impl GeminiEmbedder {
    pub fn new(config: &GeminiConfig) -> KnowledgeResult<Self> {
        Ok(Self {
            client: build_http_client(config)?,
            url: config.endpoint(&config.embedding_model, "embedContent"),
            model: format!("models/{}", config.embedding_model),
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EmbedContentRequest<'a> {
    model: &'a str,
    content: EmbedContent<'a>,
    task_type: EmbeddingTask,
}

#[derive(Debug, Serialize)]
struct EmbedContent<'a> {
    parts: [TextPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbedContentResponse {
    embedding: ContentEmbedding,
}

#[derive(Debug, Deserialize)]
struct ContentEmbedding {
    values: Vec<f64>,
}

#[async_trait]
impl EmbeddingProvider for GeminiEmbedder {
    #[instrument(skip_all, fields(model = %self.model, task = %task))]
    async fn embed(&self, text: &str, task: EmbeddingTask) -> KnowledgeResult<Vec<f64>> {
        let request = EmbedContentRequest {
            model: &self.model,
            content: EmbedContent {
                parts: [TextPart { text }],
            },
            task_type: task,
        };

        let response: EmbedContentResponse = post_json(&self.client, &self.url, &request)
            .await
            .map_err(KnowledgeError::Embedding)?;

        if response.embedding.values.is_empty() {
            return Err(KnowledgeError::Embedding(
                "Gemini returned an empty embedding".to_string(),
            ));
        }

        Ok(response.embedding.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, routing::post};
    use serde_json::{Value, json};

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
        format!("http://{}/v1beta", addr)
    }

    #[tokio::test]
    async fn test_embed_sends_document_task() {
        let router = Router::new().route(
            "/v1beta/models/{call}",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["model"], "models/text-embedding-004");
                assert_eq!(body["taskType"], "RETRIEVAL_DOCUMENT");
                assert_eq!(body["content"]["parts"][0]["text"], "Title: T\nContent: C");
                Json(json!({ "embedding": { "values": [0.25, -0.5, 1.0] } }))
            }),
        );
        let base = serve(router).await;
        let embedder = GeminiEmbedder::new(&GeminiConfig::new("k").with_base_url(base)).unwrap();

        let vector = embedder
            .embed("Title: T\nContent: C", EmbeddingTask::RetrievalDocument)
            .await
            .unwrap();
        assert_eq!(vector, vec![0.25, -0.5, 1.0]);
    }

    #[tokio::test]
    async fn test_embed_rejects_malformed_response() {
        let router = Router::new().route(
            "/v1beta/models/{call}",
            post(|| async { Json(json!({ "embeddings": [] })) }),
        );
        let base = serve(router).await;
        let embedder = GeminiEmbedder::new(&GeminiConfig::new("k").with_base_url(base)).unwrap();

        assert!(matches!(
            embedder.embed("x", EmbeddingTask::RetrievalDocument).await,
            Err(KnowledgeError::Embedding(_))
        ));
    }

    #[tokio::test]
    async fn test_embed_rejects_empty_vector() {
        let router = Router::new().route(
            "/v1beta/models/{call}",
            post(|| async { Json(json!({ "embedding": { "values": [] } })) }),
        );
        let base = serve(router).await;
        let embedder = GeminiEmbedder::new(&GeminiConfig::new("k").with_base_url(base)).unwrap();

        assert!(embedder.embed("x", EmbeddingTask::RetrievalDocument).await.is_err());
    }
}
