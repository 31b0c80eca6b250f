use std::sync::Arc;

use crate::llm_client::TextGenerator;
use crate::optimizer::score::ScoreSource;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once at start-up; read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Generation backend. Default: `GeminiClient`.
    pub generator: Arc<dyn TextGenerator>,
    /// Fallback score source for replies with no detectable score.
    pub scores: Arc<dyn ScoreSource>,
}
