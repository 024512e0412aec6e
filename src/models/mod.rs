//! Data models representing database entities.
//!
//! This module contains all data structures that map to database tables,
//! plus the request/response bodies of the dare API.

/// Dare session model
pub mod dare;
/// Anonymous message model
pub mod message;
