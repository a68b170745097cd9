use std::sync::Arc;

use anyhow::anyhow;
use tracing::error;

use confessly_bot::{DEFAULT_RESPONSE_RATE, Responder};
use confessly_db::Database;

use crate::error::ApiError;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
    pub config: ApiConfig,
    pub responder: Responder,
}

/// Settings the handlers need. Loaded from the environment by the server binary.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub jwt_secret: String,
    pub token_ttl_days: i64,
    /// Schedule a bot reply after every new confession.
    pub auto_reply: bool,
    /// Bounds of the random wait before an automatic reply, in milliseconds.
    pub reply_delay_ms: (u64, u64),
    pub bot_response_rate: f64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "dev-secret-change-me".into(),
            token_ttl_days: 7,
            auto_reply: true,
            reply_delay_ms: (2_000, 12_000),
            bot_response_rate: DEFAULT_RESPONSE_RATE,
        }
    }
}

impl AppStateInner {
    pub fn new(db: Database, config: ApiConfig) -> anyhow::Result<AppState> {
        let responder = Responder::with_response_rate(config.bot_response_rate)?;
        Ok(Arc::new(Self {
            db,
            config,
            responder,
        }))
    }
}

/// Run blocking DB work off the async runtime.
pub async fn run_db<F, T>(state: &AppState, f: F) -> Result<T, ApiError>
where
    F: FnOnce(&Database) -> anyhow::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let state = state.clone();
    tokio::task::spawn_blocking(move || f(&state.db))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            ApiError::Internal(anyhow!("blocking task failed: {}", e))
        })?
        .map_err(ApiError::from)
}
