//! Key providers.
//!
//! - **SiteSecretKeyProvider** - SHA-256 of the installation secret
//! - **StaticKeyProvider** - fixed key bytes (tests, tooling)

use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};

use crate::ports::{EncryptionKey, KeyProvider, KEY_LENGTH};

/// Derives the key from the site-wide installation secret.
///
/// Changing the secret changes the key, and tokens stored under the old key
/// silently decrypt to nothing.
#[derive(Debug, Clone)]
pub struct SiteSecretKeyProvider {
    site_secret: SecretString,
}

impl SiteSecretKeyProvider {
    pub fn new(site_secret: SecretString) -> Self {
        Self { site_secret }
    }
}

impl KeyProvider for SiteSecretKeyProvider {
    fn encryption_key(&self) -> EncryptionKey {
        let digest = Sha256::digest(self.site_secret.expose_secret().as_bytes());
        let mut bytes = [0u8; KEY_LENGTH];
        bytes.copy_from_slice(&digest);
        EncryptionKey::from_bytes(bytes)
    }
}

/// Always hands out the same key bytes.
pub struct StaticKeyProvider {
    bytes: [u8; KEY_LENGTH],
}

impl StaticKeyProvider {
    pub fn new(bytes: [u8; KEY_LENGTH]) -> Self {
        Self { bytes }
    }
}

impl KeyProvider for StaticKeyProvider {
    fn encryption_key(&self) -> EncryptionKey {
        EncryptionKey::from_bytes(self.bytes)
    }
}

impl std::fmt::Debug for StaticKeyProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("StaticKeyProvider([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_secret_key_is_deterministic() {
        let a = SiteSecretKeyProvider::new(SecretString::new("secret-one-xxxxxxxx".to_string()));
        let b = SiteSecretKeyProvider::new(SecretString::new("secret-one-xxxxxxxx".to_string()));
        assert_eq!(a.encryption_key().as_bytes(), b.encryption_key().as_bytes());
    }

    #[test]
    fn different_secrets_give_different_keys() {
        let a = SiteSecretKeyProvider::new(SecretString::new("secret-one-xxxxxxxx".to_string()));
        let b = SiteSecretKeyProvider::new(SecretString::new("secret-two-xxxxxxxx".to_string()));
        assert_ne!(a.encryption_key().as_bytes(), b.encryption_key().as_bytes());
    }

    #[test]
    fn static_provider_returns_its_bytes() {
        let provider = StaticKeyProvider::new([9u8; KEY_LENGTH]);
        assert_eq!(provider.encryption_key().as_bytes(), &[9u8; KEY_LENGTH]);
        assert!(!format!("{:?}", provider).contains('9'));
    }
}
