use async_trait::async_trait;
use coursematch_common::{CourseMatchError, Result};
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::embedder::Embedder;
use crate::types::{EmbedRequest, EmbedResponse};

const DEFAULT_MAX_RETRIES: u32 = 3;

/// Ollama embedding API client
#[derive(Debug, Clone)]
pub struct OllamaClient {
    base_url: String,
    model: String,
    client: Client,
    max_retries: u32,
}

impl OllamaClient {
    /// Create new Ollama client
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        info!("Ollama client initialized: {}", base_url);
        Ok(Self {
            base_url,
            model: model.into(),
            client,
            max_retries: DEFAULT_MAX_RETRIES,
        })
    }

    /// Override the number of attempts per embedding call
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }

    /// Test connection to Ollama
    pub async fn test_connection(&self) -> Result<bool> {
        let url = format!("{}/api/tags", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CourseMatchError::network(format!("Failed to connect to Ollama: {}", e)))?;
        Ok(response.status().is_success())
    }

    /// Generate embedding with retry and exponential backoff
    async fn embed_with_retry(&self, text: &str) -> Result<Vec<f32>> {
        let url = format!("{}/api/embeddings", self.base_url);

        debug!(
            "Generating embedding - Model: {}, Text length: {}",
            self.model,
            text.len()
        );

        let request = EmbedRequest {
            model: self.model.clone(),
            prompt: text.to_string(),
        };

        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.try_embed(&url, &request).await {
                Ok(embedding) => {
                    debug!("Received embedding - Dimension: {}", embedding.len());
                    return Ok(embedding);
                }
                Err(e) => {
                    if attempt < self.max_retries {
                        let delay = std::time::Duration::from_secs(2u64.pow(attempt - 1));
                        warn!(
                            "Embedding request failed (attempt {}/{}): {}. Retrying in {:?}...",
                            attempt, self.max_retries, e, delay
                        );
                        tokio::time::sleep(delay).await;
                    }
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| CourseMatchError::embedding("All retries failed")))
    }

    /// Single attempt to generate embedding
    async fn try_embed(&self, url: &str, request: &EmbedRequest) -> Result<Vec<f32>> {
        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                CourseMatchError::embedding(format!("Failed to send embedding request: {}", e))
            })?
            .error_for_status()
            .map_err(|e| CourseMatchError::embedding(format!("Ollama embedding API error: {}", e)))?;

        let result: EmbedResponse = response.json().await.map_err(|e| {
            CourseMatchError::embedding(format!("Failed to parse embedding response: {}", e))
        })?;

        if result.embedding.is_empty() {
            return Err(CourseMatchError::embedding("Empty embedding from Ollama"));
        }

        Ok(result.embedding)
    }
}

#[async_trait]
impl Embedder for OllamaClient {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        self.embed_with_retry(text).await
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    async fn health_check(&self) -> Result<()> {
        if self.test_connection().await? {
            Ok(())
        } else {
            Err(CourseMatchError::network(format!(
                "Ollama at {} is not healthy",
                self.base_url
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = OllamaClient::new("http://localhost:11434/", "all-minilm").unwrap();
        assert_eq!(client.base_url, "http://localhost:11434");
        assert_eq!(client.model_name(), "all-minilm");
    }

    #[test]
    fn test_max_retries_at_least_one() {
        let client = OllamaClient::new("http://localhost:11434", "all-minilm")
            .unwrap()
            .with_max_retries(0);
        assert_eq!(client.max_retries, 1);
    }

    #[tokio::test]
    async fn test_unreachable_server_is_embedding_error() {
        let client = OllamaClient::new("http://127.0.0.1:9", "all-minilm")
            .unwrap()
            .with_max_retries(1);

        let err = client.embed("computer science").await.unwrap_err();
        assert!(matches!(err, CourseMatchError::Embedding(_)), "got {:?}", err);
        assert_eq!(err.status_code(), 500);
    }

    #[tokio::test]
    async fn test_health_check_unreachable() {
        let client = OllamaClient::new("http://127.0.0.1:9", "all-minilm").unwrap();

        assert!(matches!(
            client.test_connection().await,
            Err(CourseMatchError::Network(_))
        ));
        assert!(matches!(
            client.health_check().await,
            Err(CourseMatchError::Network(_))
        ));
    }
}
