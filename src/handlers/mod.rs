//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Calls the dare service
//! 3. Returns HTTP response (JSON, status code)

/// Dare lifecycle endpoints
pub mod dares;
/// Liveness probe
pub mod health;
/// Message submission and feed endpoints
pub mod messages;
