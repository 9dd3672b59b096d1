//! Storage Adapters
//!
//! Implementations of the SettingsRepository port.
//!
//! ## Available Adapters
//!
//! - **FileSettingsRepository** - Stores settings as a YAML file, atomic saves via a unique temp file
//! - **InMemorySettingsRepository** - Stores settings in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileSettingsRepository, InMemorySettingsRepository};
//!
//! // Production: file-based storage
//! let repo = FileSettingsRepository::new("./data/newsletter-settings.yaml");
//!
//! // Testing: in-memory storage
//! let repo = InMemorySettingsRepository::new();
//! ```

mod file_settings_repository;
mod in_memory_settings_repository;

pub use file_settings_repository::FileSettingsRepository;
pub use in_memory_settings_repository::InMemorySettingsRepository;
