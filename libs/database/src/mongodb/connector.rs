use mongodb::{Client, options::ClientOptions};
use std::time::Duration;
use tracing::info;

use super::MongoConfig;
use crate::retry::{RetryConfig, retry_with_backoff};

/// Error type for MongoDB connection handling.
#[derive(Debug, thiserror::Error)]
pub enum MongoError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

/// Connect to MongoDB and verify the connection with a lightweight
/// round trip.
pub async fn connect(config: &MongoConfig) -> Result<Client, MongoError> {
    info!("Connecting to MongoDB at {}", config.url());

    let mut options = ClientOptions::parse(config.url()).await?;
    options.max_pool_size = Some(config.max_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));
    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    let client = Client::with_options(options)?;
    client
        .list_database_names()
        .await
        .map_err(|e| MongoError::ConnectionFailed(e.to_string()))?;

    info!("Successfully connected to MongoDB");
    Ok(client)
}

/// Connect with automatic retry on failure, for transient network
/// issues during startup. Per-request operations are never retried.
pub async fn connect_with_retry(
    config: &MongoConfig,
    retry_config: Option<RetryConfig>,
) -> Result<Client, MongoError> {
    let config = config.clone();
    retry_with_backoff(|| connect(&config), retry_config.unwrap_or_default()).await
}
