use std::sync::Arc;

use crate::config::Config;
use crate::parser::ResumeParser;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; every upload is parsed independently.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Extraction pipeline. Tokenizer and PDF backends are fixed at startup.
    pub parser: Arc<ResumeParser>,
}
