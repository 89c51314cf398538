/// MongoDB connection settings.
///
/// Environment parsing lives with the application; this struct only
/// carries the resolved values.
#[derive(Clone, Debug)]
pub struct MongoConfig {
    /// Connection URL, e.g. "mongodb://localhost:27017"
    pub url: String,
    /// Database name to use
    pub database: String,
    /// Optional application name for server logs
    pub app_name: Option<String>,
    /// Maximum number of pooled connections
    pub max_pool_size: u32,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
    /// Server selection timeout in seconds
    pub server_selection_timeout_secs: u64,
}

impl MongoConfig {
    /// Configuration for a URL and database with default pool settings.
    pub fn with_database(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: database.into(),
            ..Self::default()
        }
    }

    /// Set the application name reported to the server.
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn database(&self) -> &str {
        &self.database
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            url: "mongodb://localhost:27017".to_string(),
            database: "default".to_string(),
            app_name: None,
            max_pool_size: 100,
            connect_timeout_secs: 10,
            server_selection_timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_database() {
        let config = MongoConfig::with_database("mongodb://host:27017", "gold");
        assert_eq!(config.url(), "mongodb://host:27017");
        assert_eq!(config.database(), "gold");
        assert_eq!(config.max_pool_size, 100);
    }

    #[test]
    fn test_with_app_name() {
        let config = MongoConfig::default().with_app_name("catalog-api");
        assert_eq!(config.app_name.as_deref(), Some("catalog-api"));
    }
}
