use std::sync::Arc;

use crate::config::Config;
use crate::services::RecommendationService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub recommendations: Arc<RecommendationService>,
    /// Bound applied to the recent listing
    pub recent_limit: usize,
    pub test_routes_enabled: bool,
}

impl AppState {
    /// Creates state around an engine, taking limits from config
    pub fn new(recommendations: RecommendationService, config: &Config) -> Self {
        Self {
            recommendations: Arc::new(recommendations),
            recent_limit: config.recent_limit,
            test_routes_enabled: config.enable_test_routes,
        }
    }
}
