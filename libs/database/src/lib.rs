//! Database library providing the MongoDB connector used by the
//! catalog services.
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{MongoConfig, connect_with_retry};
//!
//! let config = MongoConfig::with_database("mongodb://localhost:27017", "gold");
//! let client = connect_with_retry(&config, None).await?;
//! let db = client.database(config.database());
//! ```

pub mod mongodb;
pub mod retry;

pub use retry::RetryConfig;
