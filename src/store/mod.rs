//! Persistence for dares and their messages.
//!
//! Handlers never hold a database handle directly. They receive an
//! `Arc<dyn DareStore>` through application state, which lets tests swap the
//! PostgreSQL store for the in-memory one.
//!
//! # Guarantees every implementation provides
//!
//! - At most one message per `(dare_id, sender_fingerprint)`. The check and
//!   the insert are a single atomic step, so two simultaneous sends from the
//!   same sender store exactly one message.
//! - Deleting a dare removes its messages in the same step.
//! - A send or list racing with a delete sees either the whole dare or
//!   `DareNotFound`, never a partial view.
//! - No retries. Storage failures surface as `StorageUnavailable`.

#[cfg(test)]
pub mod memory;
pub mod postgres;

use crate::{
    error::AppError,
    models::{dare::Dare, message::Message},
};
use async_trait::async_trait;
use uuid::Uuid;

#[cfg(test)]
pub use memory::MemoryDareStore;
pub use postgres::PgDareStore;

#[async_trait]
pub trait DareStore: Send + Sync {
    /// Persist a new dare.
    async fn create_dare(&self) -> Result<Dare, AppError>;

    async fn dare_exists(&self, dare_id: Uuid) -> Result<bool, AppError>;

    /// Store a message under its dare.
    ///
    /// # Errors
    ///
    /// - `DareNotFound`: the dare does not exist (or was deleted concurrently)
    /// - `DuplicateSender`: the sender already has a message on this dare
    async fn insert_message(&self, message: Message) -> Result<Message, AppError>;

    /// All messages of a dare, newest first. Equal timestamps keep arrival order.
    ///
    /// # Errors
    ///
    /// - `DareNotFound`: the dare does not exist
    async fn list_messages(&self, dare_id: Uuid) -> Result<Vec<Message>, AppError>;

    /// Delete a dare and every message it owns.
    ///
    /// Returns whether a dare was actually removed; a missing dare is not an error.
    async fn delete_dare(&self, dare_id: Uuid) -> Result<bool, AppError>;
}
