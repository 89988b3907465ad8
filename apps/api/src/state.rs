use std::sync::Arc;

use crate::llm_client::TextGenerator;
use crate::resumes::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Generative-text client shared by every AI endpoint.
    pub ai: Arc<dyn TextGenerator>,
    pub store: Arc<dyn ResumeStore>,
}
