//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `NGO_TOOLS_NEWSLETTER` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use ngo_tools_newsletter::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Settings stored at {}", config.storage.settings_path.display());
//! ```

mod api;
mod error;
mod security;
mod server;
mod storage;

pub use api::ApiConfig;
pub use error::{ConfigError, ValidationError};
pub use security::{SecurityConfig, MIN_SITE_SECRET_LEN};
pub use server::{Environment, ServerConfig};
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Site secret used to derive the token encryption key
    pub security: SecurityConfig,

    /// Outbound NGO Tools API settings (timeout, TLS policy)
    #[serde(default)]
    pub api: ApiConfig,

    /// Settings record location
    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `NGO_TOOLS_NEWSLETTER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `NGO_TOOLS_NEWSLETTER__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `NGO_TOOLS_NEWSLETTER__API__VERIFY_TLS=false` -> `api.verify_tls = false`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("NGO_TOOLS_NEWSLETTER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.security.validate()?;
        self.api.validate()?;
        self.storage.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
