//! Security configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Minimum accepted length of the site secret.
pub const MIN_SITE_SECRET_LEN: usize = 16;

/// Security configuration (site-wide secret used for token encryption)
#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    /// Installation secret. The token encryption key is derived from it, so
    /// changing it makes previously stored tokens unreadable.
    pub site_secret: SecretString,
}

impl SecurityConfig {
    /// Create a security configuration from a raw secret
    pub fn new(site_secret: impl Into<String>) -> Self {
        Self {
            site_secret: SecretString::new(site_secret.into()),
        }
    }

    /// Validate security configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let secret = self.site_secret.expose_secret();
        if secret.trim().is_empty() {
            return Err(ValidationError::MissingRequired("SITE_SECRET"));
        }
        if secret.len() < MIN_SITE_SECRET_LEN {
            return Err(ValidationError::SiteSecretTooShort(MIN_SITE_SECRET_LEN));
        }
        Ok(())
    }
}
