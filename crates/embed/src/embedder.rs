use async_trait::async_trait;
use coursematch_common::Result;

/// Common trait for text embedding collaborators
///
/// Implementations must be deterministic for identical text and return
/// vectors of one fixed dimensionality for their whole lifetime.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Generate embedding for text
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Model identifier, reported by stats endpoints
    fn model_name(&self) -> &str;

    /// Check the backend is reachable before bulk embedding
    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
