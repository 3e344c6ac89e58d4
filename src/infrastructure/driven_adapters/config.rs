//! Application Configuration
//!
//! Loads configuration from files and environment variables.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::domain::models::book::{CoverImageSource, CoverSize};

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Cover image configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CoversConfig {
    pub base_url: String,
    pub size: String,
}

impl Default for CoversConfig {
    fn default() -> Self {
        Self {
            base_url: CoverImageSource::OPEN_LIBRARY.to_string(),
            size: CoverSize::default().as_str().to_string(),
        }
    }
}

impl CoversConfig {
    /// Build the cover image source described by this configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Message` if `size` is not one of S, M or L.
    pub fn source(&self) -> Result<CoverImageSource, ConfigError> {
        let size = CoverSize::parse(&self.size).ok_or_else(|| {
            ConfigError::Message(format!("covers.size must be S, M or L, got '{}'", self.size))
        })?;
        Ok(CoverImageSource::new(self.base_url.clone(), size))
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub covers: CoversConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `config/default` is missing or a value fails to deserialize.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "default".into());

        Config::builder()
            // Start with default config
            .add_source(File::with_name("config/default").required(true))
            // Merge environment-specific config if it exists
            .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
            // Override with environment variables (e.g., APP__SERVER__PORT)
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }
}
