//! CourseMatch embedding backends
//!
//! Text-to-vector collaborators consumed by the retrieval engine.

mod embedder;
mod hashing;
mod ollama;
mod types;

use std::sync::Arc;

use coursematch_common::{AppConfig, EmbeddingBackend, Result};

pub use embedder::Embedder;
pub use hashing::HashingEmbedder;
pub use ollama::OllamaClient;
pub use types::{EmbedRequest, EmbedResponse};

/// Construct the embedder selected by the configuration
pub fn build_embedder(config: &AppConfig) -> Result<Arc<dyn Embedder>> {
    let embedder: Arc<dyn Embedder> = match config.embedding_backend {
        EmbeddingBackend::Ollama => Arc::new(OllamaClient::new(
            &config.ollama_base_url,
            &config.embedding_model,
        )?),
        EmbeddingBackend::Hashing => Arc::new(HashingEmbedder::new(config.hashing_dimension)),
    };

    tracing::info!(
        "Embedding backend: {} (model={})",
        config.embedding_backend,
        embedder.model_name()
    );

    Ok(embedder)
}
