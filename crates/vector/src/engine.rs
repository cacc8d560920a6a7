use coursematch_common::{CourseMatchError, Result};
use coursematch_embed::Embedder;
use futures::{stream, StreamExt, TryStreamExt};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

use crate::search::SimilaritySearcher;
use crate::store::VectorStore;
use crate::types::{Item, QueryResult};

/// Recommendation engine: a built [`VectorStore`] plus the embedder used for queries.
///
/// Only constructible in the built state. Cloning shares the same store.
#[derive(Clone)]
pub struct RecommendationEngine {
    store: Arc<VectorStore>,
    embedder: Arc<dyn Embedder>,
}

/// Engine statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineStats {
    pub total_items: usize,
    pub dimension: usize,
    pub embedding_model: String,
}

impl RecommendationEngine {
    /// Embed the whole catalog and build the store.
    ///
    /// Up to `concurrency` embedding calls run at once; catalog order is kept.
    pub async fn build(
        catalog: Vec<Item>,
        embedder: Arc<dyn Embedder>,
        concurrency: usize,
    ) -> Result<Self> {
        if catalog.is_empty() {
            return Err(CourseMatchError::CatalogEmpty);
        }

        info!(
            "Embedding {} catalog items with {} (concurrency={})",
            catalog.len(),
            embedder.model_name(),
            concurrency
        );

        let texts: Vec<String> = catalog.iter().map(Item::embedding_text).collect();
        let model = embedder.as_ref();
        let raw: Vec<Vec<f32>> = stream::iter(texts.iter())
            .map(|text| model.embed(text))
            .buffered(concurrency.max(1))
            .try_collect()
            .await?;

        let store = VectorStore::from_raw(catalog, raw)?;

        Ok(Self::from_store(store, embedder))
    }

    /// Wrap an already built store
    pub fn from_store(store: VectorStore, embedder: Arc<dyn Embedder>) -> Self {
        Self {
            store: Arc::new(store),
            embedder,
        }
    }

    /// Recommend the `k` catalog items closest to `text`
    pub async fn recommend(&self, text: &str, k: usize) -> Result<QueryResult> {
        if k == 0 {
            return Err(CourseMatchError::invalid_input("k must be at least 1"));
        }

        debug!("Recommending for: {} (k={})", text, k);

        let query = self.embedder.embed(text).await?;
        let result = SimilaritySearcher::search_vector(&self.store, query, k)?;

        info!(
            "Recommendation completed - {} results, top score {:?}",
            result.len(),
            result.top().map(|m| m.score)
        );

        Ok(result)
    }

    pub fn store(&self) -> &VectorStore {
        &self.store
    }

    pub fn stats(&self) -> EngineStats {
        EngineStats {
            total_items: self.store.len(),
            dimension: self.store.dimension(),
            embedding_model: self.embedder.model_name().to_string(),
        }
    }
}
