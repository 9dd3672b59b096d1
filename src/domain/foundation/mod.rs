//! Foundation module - Shared domain primitives.
//!
//! Contains the error vocabulary shared by every value object.

mod errors;

pub use errors::ValidationError;
