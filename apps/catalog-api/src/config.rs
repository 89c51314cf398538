//! Application configuration loaded from environment variables.

use std::env;
use std::net::Ipv4Addr;

use database::mongodb::MongoConfig;
use eyre::{WrapErr, eyre};

/// Application environment (controls log formatting).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Read `APP_ENV`; anything other than "production" is development.
    pub fn from_env() -> Self {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        if app_env.eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// HTTP server binding configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// `HOST` defaults to 0.0.0.0, `PORT` to 8080.
    pub fn from_env() -> eyre::Result<Self> {
        let host = env_or_default("HOST", &Ipv4Addr::UNSPECIFIED.to_string());
        let port = env_or_default("PORT", "8080")
            .parse()
            .wrap_err("Failed to parse PORT")?;
        Ok(Self { host, port })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Application configuration composed from shared components.
#[derive(Clone, Debug)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub mongodb: MongoConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;

        let url = env_required("MONGODB_URL")?;
        let db_name = env_required("MONGODB_DATABASE")?;
        let mut mongodb = MongoConfig::with_database(url, db_name);
        if let Ok(app_name) = env::var("MONGODB_APP_NAME") {
            mongodb = mongodb.with_app_name(app_name);
        }

        Ok(Self {
            environment,
            server,
            mongodb,
        })
    }
}

fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_required(key: &str) -> eyre::Result<String> {
    env::var(key).map_err(|_| eyre!("Environment variable '{key}' is required but not set"))
}
