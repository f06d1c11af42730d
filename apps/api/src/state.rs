use std::sync::Arc;

use crate::chat::profile::ChatProfiles;
use crate::config::Config;
use crate::documents::DocumentStore;
use crate::llm_client::CompletionClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DocumentStore>,
    /// Pluggable completion backend. Default: GroqClient.
    pub llm: Arc<dyn CompletionClient>,
    pub config: Config,
    pub profiles: Arc<ChatProfiles>,
}
