use std::sync::Arc;

use crate::config::Config;
use crate::entities::EntityExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Keyword matcher plus the person recognizer chosen at startup.
    pub extractor: Arc<EntityExtractor>,
}
