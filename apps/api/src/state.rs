use std::sync::Arc;

use crate::generation::client::ContentGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable generator. Default: GenerationClient over the Gemini API.
    pub generator: Arc<dyn ContentGenerator>,
}
