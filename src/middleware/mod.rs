//! HTTP middleware components.
//!
//! Middleware are functions that run before route handlers.
//! They can:
//! - Derive request context (who is sending)
//! - Modify request/response
//! - Short-circuit requests

/// Sender fingerprint middleware
pub mod fingerprint;
