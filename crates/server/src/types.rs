use coursematch_vector::{QueryResult, ScoredItem};
use serde::{Deserialize, Serialize};

/// Recommendation request
#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    /// Free-text interests
    pub text: String,

    /// Number of recommendations (server default when omitted)
    #[serde(default)]
    pub k: Option<usize>,
}

/// One recommended program
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub score: f64,
}

impl From<ScoredItem> for Recommendation {
    fn from(scored: ScoredItem) -> Self {
        Self {
            title: scored.item.title,
            description: scored.item.description,
            score: scored.score,
        }
    }
}

/// Recommendation response
#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<Recommendation>,
}

impl From<QueryResult> for RecommendResponse {
    fn from(result: QueryResult) -> Self {
        Self {
            recommendations: result.into_iter().map(Recommendation::from).collect(),
        }
    }
}

/// Error body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
