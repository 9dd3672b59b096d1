//! In-Memory Settings Repository
//!
//! Keeps the settings record in memory. Useful for testing and development.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::newsletter::NewsletterSettings;
use crate::ports::{SettingsRepository, SettingsStoreError};

/// In-memory storage for the newsletter settings
#[derive(Debug, Clone, Default)]
pub struct InMemorySettingsRepository {
    settings: Arc<RwLock<NewsletterSettings>>,
    saves: Arc<AtomicUsize>,
    failing: Arc<AtomicBool>,
}

impl InMemorySettingsRepository {
    /// Create an empty (unconfigured) store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with settings
    pub fn with_settings(settings: NewsletterSettings) -> Self {
        Self {
            settings: Arc::new(RwLock::new(settings)),
            ..Self::default()
        }
    }

    /// Make every subsequent load and save fail (useful for tests)
    pub fn fail_operations(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Current record, bypassing the failure switch
    pub async fn snapshot(&self) -> NewsletterSettings {
        self.settings.read().await.clone()
    }

    fn check_failing(&self) -> Result<(), SettingsStoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(SettingsStoreError::IoError(
                "simulated storage failure".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl SettingsRepository for InMemorySettingsRepository {
    async fn load(&self) -> Result<NewsletterSettings, SettingsStoreError> {
        self.check_failing()?;
        Ok(self.settings.read().await.clone())
    }

    async fn save(&self, settings: &NewsletterSettings) -> Result<(), SettingsStoreError> {
        self.check_failing()?;
        *self.settings.write().await = settings.clone();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
