use std::time::Duration;

#[cfg(feature = "mongo")]
use mongodb::{
    Client, Database, IndexModel,
    bson::doc,
    options::{ClientOptions, IndexOptions},
};
#[cfg(feature = "mongo")]
use scribe_core::error::RepoError;

#[cfg(feature = "mongo")]
use super::entity::{AUTHORS, AuthorDocument};

/// Configuration for the document database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub uri: String,
    pub database: String,
    pub max_pool_size: u32,
    pub connect_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(uri: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: database.into(),
            max_pool_size: 100,
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Connection to the MongoDB deployment and the database the app uses.
#[cfg(feature = "mongo")]
#[derive(Clone)]
pub struct DatabaseConnections {
    pub client: Client,
    pub db: Database,
}

#[cfg(feature = "mongo")]
impl DatabaseConnections {
    /// Connect, verify the deployment answers, and make sure indexes exist.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, RepoError> {
        tracing::info!("Initializing database connection...");

        let mut options = ClientOptions::parse(&config.uri)
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;
        options.app_name = Some("scribe-api".to_string());
        options.max_pool_size = Some(config.max_pool_size);
        options.connect_timeout = Some(config.connect_timeout);
        options.server_selection_timeout = Some(config.connect_timeout);

        let client =
            Client::with_options(options).map_err(|e| RepoError::Connection(e.to_string()))?;
        let db = client.database(&config.database);

        db.run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;
        tracing::info!(
            database = %config.database,
            pool = config.max_pool_size,
            "Database connected"
        );

        let connections = Self { client, db };
        connections.ensure_indexes().await?;
        Ok(connections)
    }

    /// Author emails are unique at the store level.
    async fn ensure_indexes(&self) -> Result<(), RepoError> {
        let unique_email = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.db
            .collection::<AuthorDocument>(AUTHORS)
            .create_index(unique_email, None)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(())
    }
}
