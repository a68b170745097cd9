use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::warn;

use confessly_api::state::ApiConfig;
use confessly_bot::DEFAULT_RESPONSE_RATE;

/// Placeholder JWT secrets that only belong on a developer machine.
const PLACEHOLDER_SECRETS: &[&str] = &["change-me-to-a-random-string", "dev-secret-change-me"];

pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub frontend_url: String,
    pub api: ApiConfig,
}

impl ServerConfig {
    /// Reads `CONFESSLY_*` variables. Call after `dotenvy::dotenv()`.
    pub fn from_env() -> anyhow::Result<Self> {
        let jwt_secret =
            env::var("CONFESSLY_JWT_SECRET").unwrap_or_else(|_| "dev-secret-change-me".into());
        if jwt_secret.is_empty() || PLACEHOLDER_SECRETS.contains(&jwt_secret.as_str()) {
            warn!("CONFESSLY_JWT_SECRET is unset or a placeholder; tokens are forgeable");
        }

        let host = env::var("CONFESSLY_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port: u16 = env::var("CONFESSLY_PORT")
            .unwrap_or_else(|_| "3001".into())
            .parse()?;
        let db_path: PathBuf = env::var("CONFESSLY_DB_PATH")
            .unwrap_or_else(|_| "confessly.db".into())
            .into();
        let frontend_url =
            env::var("CONFESSLY_FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".into());

        let token_ttl_days: i64 = parsed_or("CONFESSLY_TOKEN_TTL_DAYS", 7);
        let delay_min: u64 = parsed_or("CONFESSLY_BOT_DELAY_MIN_MS", 2_000);
        let delay_max: u64 = parsed_or("CONFESSLY_BOT_DELAY_MAX_MS", 12_000);

        Ok(Self {
            host,
            port,
            db_path,
            frontend_url,
            api: ApiConfig {
                jwt_secret,
                token_ttl_days,
                auto_reply: true,
                reply_delay_ms: (delay_min.min(delay_max), delay_max.max(delay_min)),
                bot_response_rate: DEFAULT_RESPONSE_RATE,
            },
        })
    }

    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

fn parsed_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
