//! Key Provider Port - supplies the symmetric key for token encryption.
//!
//! The cipher never reads global state; whoever builds it decides where the
//! key comes from (the site secret in production, a fixed key in tests).

use secrecy::{ExposeSecret, Secret};

/// Key length in bytes (256 bits for AES-256)
pub const KEY_LENGTH: usize = 32;

/// A 256-bit symmetric key, zeroized on drop.
pub struct EncryptionKey(Secret<[u8; KEY_LENGTH]>);

impl EncryptionKey {
    pub fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        Self(Secret::new(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        self.0.expose_secret()
    }
}

impl std::fmt::Debug for EncryptionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("EncryptionKey([REDACTED])")
    }
}

/// Port for obtaining the current encryption key
pub trait KeyProvider: Send + Sync {
    fn encryption_key(&self) -> EncryptionKey;
}
