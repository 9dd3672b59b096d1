//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Outbound
//!
//! - `HttpTransport` - Sends HTTPS requests to the marketing API
//! - `NewsletterApi` - Segment listing and contact subscription
//!
//! ## Persistence and secrets
//!
//! - `SettingsRepository` - Atomic load/save of the settings record
//! - `TokenCipher` - Encryption at rest for the bearer token
//! - `KeyProvider` - Source of the cipher key

mod http_transport;
mod key_provider;
mod newsletter_api;
mod settings_repository;
mod token_cipher;

pub use http_transport::{
    HttpMethod, HttpTransport, TransportError, TransportRequest, TransportResponse,
    JSON_CONTENT_TYPE,
};
pub use key_provider::{EncryptionKey, KeyProvider, KEY_LENGTH};
pub use newsletter_api::NewsletterApi;
pub use settings_repository::{SettingsRepository, SettingsStoreError};
pub use token_cipher::TokenCipher;
