//! Application state - shared across all handlers.

use std::sync::Arc;

use scribe_core::ports::{AuthorRepository, BlogRepository, PasswordService, TokenService};
use scribe_infra::database::{DatabaseConfig, InMemoryAuthorRepository, InMemoryBlogRepository};

#[cfg(feature = "mongo")]
use scribe_infra::database::{DatabaseConnections, MongoAuthorRepository, MongoBlogRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub authors: Arc<dyn AuthorRepository>,
    pub blogs: Arc<dyn BlogRepository>,
    pub passwords: Arc<dyn PasswordService>,
    pub tokens: Arc<dyn TokenService>,
    /// Which store backs the repositories, reported by the health check.
    pub store: &'static str,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(
        db_config: Option<&DatabaseConfig>,
        passwords: Arc<dyn PasswordService>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        #[cfg(feature = "mongo")]
        if let Some(config) = db_config {
            match DatabaseConnections::init(config).await {
                Ok(connections) => {
                    tracing::info!("Application state initialized (mongodb)");
                    return Self {
                        authors: Arc::new(MongoAuthorRepository::new(&connections.db)),
                        blogs: Arc::new(MongoBlogRepository::new(&connections.db)),
                        passwords,
                        tokens,
                        store: "mongodb",
                    };
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                }
            }
        } else {
            tracing::warn!("MONGODB_URI not set. Running without database (in-memory mode).");
        }

        #[cfg(not(feature = "mongo"))]
        if db_config.is_some() {
            tracing::warn!("Built without mongo feature - ignoring MONGODB_URI");
        }

        tracing::info!("Application state initialized (in-memory)");
        Self::in_memory(passwords, tokens)
    }

    /// State backed by fresh in-memory stores.
    pub fn in_memory(passwords: Arc<dyn PasswordService>, tokens: Arc<dyn TokenService>) -> Self {
        Self {
            authors: Arc::new(InMemoryAuthorRepository::new()),
            blogs: Arc::new(InMemoryBlogRepository::new()),
            passwords,
            tokens,
            store: "memory",
        }
    }
}
