//! Crypto Adapters
//!
//! Implementations of the `TokenCipher` and `KeyProvider` ports.
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::crypto::{AesCbcTokenCipher, SiteSecretKeyProvider};
//!
//! let keys = SiteSecretKeyProvider::new(config.security.site_secret.clone());
//! let cipher = AesCbcTokenCipher::new(&keys);
//! let blob = cipher.encrypt("bearer-token");
//! ```

mod aes_cbc_cipher;
mod key_providers;

pub use aes_cbc_cipher::AesCbcTokenCipher;
pub use key_providers::{SiteSecretKeyProvider, StaticKeyProvider};
