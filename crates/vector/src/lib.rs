//! CourseMatch retrieval engine
//!
//! Exact nearest-neighbour search over L2-normalized catalog embeddings.
//! The store is built once and is read-only afterwards, so an `Arc` of it
//! can be shared by any number of concurrent queries without locking.

pub mod catalog;
mod engine;
mod search;
mod similarity;
mod store;
mod types;

pub use catalog::default_catalog;
pub use engine::{EngineStats, RecommendationEngine};
pub use search::SimilaritySearcher;
pub use similarity::{dot, l2_normalize, round_score};
pub use store::VectorStore;
pub use types::{Item, QueryResult, ScoredItem};
