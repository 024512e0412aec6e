//! Business logic services.
//!
//! Services contain core business logic separated from HTTP handlers.
//! They validate untrusted input before any storage access and then
//! delegate to the injected `DareStore`.

pub mod dare_service;
