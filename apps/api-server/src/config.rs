//! Application configuration loaded from environment variables.

use std::env;

use scribe_infra::auth::JwtConfig;
use scribe_infra::database::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub jwt: JwtConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("MONGODB_URI").ok().map(|uri| {
            let name = env::var("MONGODB_DATABASE").unwrap_or_else(|_| "scribe".to_string());
            let mut config = DatabaseConfig::new(uri, name);
            if let Some(pool) = env::var("MONGODB_MAX_POOL_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
            {
                config.max_pool_size = pool;
            }
            config
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database,
            jwt: JwtConfig::from_env(),
        }
    }
}
