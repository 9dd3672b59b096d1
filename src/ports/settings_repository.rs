//! Settings Repository Port - persistence of the newsletter settings record.

use async_trait::async_trait;

use crate::domain::newsletter::NewsletterSettings;

/// Errors that can occur while reading or writing settings
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsStoreError {
    #[error("Failed to serialize settings: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize settings: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for the single site-wide settings record
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Load the settings.
    ///
    /// A store that has never been written returns
    /// `NewsletterSettings::default()`, not an error.
    async fn load(&self) -> Result<NewsletterSettings, SettingsStoreError>;

    /// Replace the settings atomically.
    ///
    /// Readers see either the previous record or the new one, never a mix.
    async fn save(&self, settings: &NewsletterSettings) -> Result<(), SettingsStoreError>;
}
