//! Shared application state handed to every handler.

use crate::store::DareStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Storage backend, PostgreSQL in production
    pub store: Arc<dyn DareStore>,

    /// Whether `X-Forwarded-For` decides the sender fingerprint
    pub trust_forwarded_for: bool,
}

impl AppState {
    pub fn new(store: Arc<dyn DareStore>, trust_forwarded_for: bool) -> Self {
        Self {
            store,
            trust_forwarded_for,
        }
    }
}
