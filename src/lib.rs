//! NGO Tools Newsletter - signup forms backed by the NGO Tools marketing API
//!
//! Visitors submit a name and email through a public form; the contact is
//! forwarded to a configured audience segment. An admin form stores the
//! organization host, the encrypted API token, the target segment and the
//! confirmation message.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
