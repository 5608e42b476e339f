//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::cache::{PageCache, RefreshGuard, new_cache};
use crate::config::Config;
use crate::content::ContentClient;
use crate::moderation::ModerationClient;

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Content store query client.
    pub content: ContentClient,

    /// Comment moderation endpoint client.
    pub moderation: ModerationClient,

    /// Application configuration.
    pub config: Arc<Config>,

    /// Rendered-page cache keyed by slug.
    pub cache: PageCache,

    /// Single-flight guard for background page refreshes.
    pub refresh: Arc<RefreshGuard>,
}

impl AppState {
    /// Create a new application state from configuration.
    pub fn new(config: Config) -> Self {
        let content = ContentClient::new(&config);
        let moderation = ModerationClient::new(&config);
        let cache = new_cache();

        tracing::info!(
            revalidate_secs = config.revalidate.as_secs(),
            "application state initialized"
        );

        Self {
            content,
            moderation,
            config: Arc::new(config),
            cache,
            refresh: Arc::new(RefreshGuard::default()),
        }
    }
}
