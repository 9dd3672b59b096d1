//! Settings storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the newsletter settings record is persisted
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Path of the YAML settings file
    #[serde(default = "default_settings_path")]
    pub settings_path: PathBuf,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.settings_path.as_os_str().is_empty() {
            return Err(ValidationError::InvalidSettingsPath);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            settings_path: default_settings_path(),
        }
    }
}

fn default_settings_path() -> PathBuf {
    PathBuf::from("./data/newsletter-settings.yaml")
}
