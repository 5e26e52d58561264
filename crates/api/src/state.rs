use std::sync::Arc;

use siteforge_openai::ChatClient;
use sqlx::PgPool;

use crate::config::AppConfig;

/// Shared application state, passed to all handlers via Axum's `State`
/// extractor. Wrapped in `Arc` so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    pool: PgPool,
    config: AppConfig,
    /// `None` when no API key is configured; generation then always uses
    /// the fallback document.
    openai: Option<ChatClient>,
}

impl AppState {
    pub fn new(pool: PgPool, config: AppConfig, openai: Option<ChatClient>) -> Self {
        Self {
            inner: Arc::new(InnerState {
                pool,
                config,
                openai,
            }),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub fn openai(&self) -> Option<&ChatClient> {
        self.inner.openai.as_ref()
    }
}
