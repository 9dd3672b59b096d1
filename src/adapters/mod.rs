//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `crypto` - AES-256-CBC token cipher and key providers
//! - `http` - Axum routes for the signup and settings forms
//! - `ngo_tools` - NGO Tools REST API client
//! - `storage` - Settings persistence (YAML file, in-memory)
//! - `transport` - Outbound HTTPS (reqwest, mock)

pub mod crypto;
pub mod http;
pub mod ngo_tools;
pub mod storage;
pub mod transport;

pub use crypto::{AesCbcTokenCipher, SiteSecretKeyProvider, StaticKeyProvider};
pub use ngo_tools::NgoToolsClient;
pub use storage::{FileSettingsRepository, InMemorySettingsRepository};
pub use transport::{MockTransport, ReqwestTransport};
