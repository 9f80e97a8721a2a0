//! Authentication module
//!
//! The API authenticates with a long-lived API token supplied through the
//! environment; there is no interactive login.

pub mod credentials;
