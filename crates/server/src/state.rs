use coursematch_common::AppConfig;
use coursematch_vector::RecommendationEngine;

/// Shared application state
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Built recommendation engine (read-only)
    pub engine: RecommendationEngine,
}

impl AppState {
    /// Create new application state around an already built engine
    pub fn new(config: AppConfig, engine: RecommendationEngine) -> Self {
        Self { config, engine }
    }
}
