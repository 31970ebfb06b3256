use std::sync::Arc;

use crate::completion::CompletionBackend;
use crate::pdf::PdfExporter;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable completion backend. Default: OpenAiCompletion. Swap via MOCK_MODE env.
    pub completion: Arc<dyn CompletionBackend>,
    pub pdf: PdfExporter,
}
