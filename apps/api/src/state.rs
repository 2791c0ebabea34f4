use std::sync::Arc;

use crate::config::Config;
use crate::extraction::summary::Summarizer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable summary backend. Default: TermFrequencySummarizer.
    pub summarizer: Arc<dyn Summarizer>,
}
