//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared validation error type
//! - `newsletter` - Contacts, segments, settings and subscribe outcomes

pub mod foundation;
pub mod newsletter;
