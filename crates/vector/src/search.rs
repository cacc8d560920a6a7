use coursematch_common::{CourseMatchError, Result};
use ndarray::ArrayView1;
use tracing::debug;

use crate::similarity::{dot, l2_normalize, round_score};
use crate::store::VectorStore;
use crate::types::{QueryResult, ScoredItem};

/// Scores within this distance of a tie group's leader rank as equal.
const TIE_RESOLUTION: f64 = 1e-9;

/// Exact top-k cosine search over a [`VectorStore`].
///
/// Stateless: every call is a full O(N·D) scan that only reads the store.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilaritySearcher;

impl SimilaritySearcher {
    /// Embed `query_text` with `embed` and return the `k` most similar items.
    pub fn search<F>(store: &VectorStore, query_text: &str, mut embed: F, k: usize) -> Result<QueryResult>
    where
        F: FnMut(&str) -> Result<Vec<f32>>,
    {
        let raw = embed(query_text)?;
        Self::search_vector(store, raw, k)
    }

    /// Rank the store against an already computed raw query embedding.
    ///
    /// `k` larger than the store is clamped; `k == 0` is rejected.
    pub fn search_vector(store: &VectorStore, mut query: Vec<f32>, k: usize) -> Result<QueryResult> {
        if k == 0 {
            return Err(CourseMatchError::invalid_input("k must be at least 1"));
        }
        if query.len() != store.dimension() {
            return Err(CourseMatchError::dimension_mismatch(
                store.dimension(),
                query.len(),
            ));
        }

        l2_normalize(&mut query)?;
        let query = ArrayView1::from(&query[..]);

        let mut scored: Vec<(usize, f64)> = store
            .vectors()
            .outer_iter()
            .enumerate()
            .map(|(index, row)| (index, dot(query, row)))
            .collect();

        let k = k.min(scored.len());
        scored.sort_unstable_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        let ranked = resolve_ties(&scored, k);

        let mut matches = Vec::with_capacity(k);
        for (index, score) in ranked {
            matches.push(ScoredItem {
                item: store.item_at(index)?.clone(),
                score: round_score(score),
            });
        }

        debug!(
            "Search completed - {} results from {} items, top score {:?}",
            matches.len(),
            store.len(),
            matches.first().map(|m| m.score)
        );

        Ok(QueryResult::new(matches))
    }
}

/// Reorder a descending score list into at least `k` ranked entries.
///
/// Each tie group starts at the highest remaining score (its leader) and takes
/// every following score within `TIE_RESOLUTION` of it. Members are ordered by
/// ascending catalog index and all report the leader's score, so rounded
/// output stays non-increasing.
fn resolve_ties(sorted: &[(usize, f64)], k: usize) -> Vec<(usize, f64)> {
    let mut ranked = Vec::with_capacity(k);
    let mut start = 0;

    while start < sorted.len() && ranked.len() < k {
        let leader = sorted[start].1;
        let end = sorted[start..]
            .iter()
            .position(|&(_, score)| leader - score > TIE_RESOLUTION)
            .map_or(sorted.len(), |offset| start + offset);

        let mut group: Vec<(usize, f64)> = sorted[start..end]
            .iter()
            .map(|&(index, _)| (index, leader))
            .collect();
        group.sort_unstable_by_key(|&(index, _)| index);
        ranked.extend(group);

        start = end;
    }

    ranked.truncate(k);
    ranked
}
