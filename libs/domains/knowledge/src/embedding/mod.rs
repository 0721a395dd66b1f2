mod gemini;
mod provider;

pub use gemini::GeminiEmbedder;
pub use provider::{EmbeddingProvider, EmbeddingTask};

#[cfg(test)]
pub use provider::MockEmbeddingProvider;
