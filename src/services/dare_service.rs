//! Dare service - the operations behind every dare endpoint.
//!
//! This service handles:
//! - Local validation (dare id format, message body) before storage is touched
//! - The fixed validation order for sends: body, then dare, then sender
//! - Idempotent deletion
//!
//! Ids that are not UUIDs are reported as unknown dares without a query.

use crate::{
    error::AppError,
    middleware::fingerprint::SenderFingerprint,
    models::{
        dare::{Dare, parse_dare_id},
        message::{Message, MessageBody},
    },
    store::DareStore,
};

/// Create a new dare.
///
/// # Errors
///
/// - `StorageUnavailable`: the store could not persist the row
pub async fn create_dare(store: &dyn DareStore) -> Result<Dare, AppError> {
    let dare = store.create_dare().await?;
    tracing::info!(dare_id = %dare.id, "Dare created");
    Ok(dare)
}

/// Confirm that a dare exists.
///
/// # Errors
///
/// - `DareNotFound`: the id is malformed or unknown
pub async fn ensure_dare_exists(store: &dyn DareStore, raw_id: &str) -> Result<(), AppError> {
    let dare_id = parse_dare_id(raw_id).ok_or(AppError::DareNotFound)?;

    if store.dare_exists(dare_id).await? {
        Ok(())
    } else {
        Err(AppError::DareNotFound)
    }
}

/// Submit an anonymous message to a dare.
///
/// # Process
///
/// 1. Validate the body (trimmed, 1 to 200 characters)
/// 2. Resolve the dare id
/// 3. Insert; the store rejects a second message from the same fingerprint
///
/// # Errors
///
/// - `InvalidInput`: body missing, blank, or too long
/// - `DareNotFound`: dare id malformed or unknown
/// - `DuplicateSender`: this fingerprint already sent a message to the dare
pub async fn send_message(
    store: &dyn DareStore,
    raw_id: &str,
    raw_body: Option<&str>,
    fingerprint: &SenderFingerprint,
) -> Result<Message, AppError> {
    let body = MessageBody::parse(raw_body)?;
    let dare_id = parse_dare_id(raw_id).ok_or(AppError::DareNotFound)?;

    let message = Message::new(dare_id, body, fingerprint.as_str().to_string());

    match store.insert_message(message).await {
        Ok(stored) => {
            tracing::info!(dare_id = %dare_id, message_id = %stored.id, "Message stored");
            Ok(stored)
        }
        Err(AppError::DuplicateSender) => {
            tracing::debug!(dare_id = %dare_id, "Rejected duplicate sender");
            Err(AppError::DuplicateSender)
        }
        Err(e) => Err(e),
    }
}

/// All messages of a dare, newest first.
///
/// # Errors
///
/// - `DareNotFound`: dare id malformed or unknown
pub async fn list_messages(store: &dyn DareStore, raw_id: &str) -> Result<Vec<Message>, AppError> {
    let dare_id = parse_dare_id(raw_id).ok_or(AppError::DareNotFound)?;
    store.list_messages(dare_id).await
}

/// Delete a dare together with its messages.
///
/// Anyone holding the id may delete it. Deleting an unknown or malformed id
/// succeeds without doing anything.
pub async fn delete_dare(store: &dyn DareStore, raw_id: &str) -> Result<(), AppError> {
    let Some(dare_id) = parse_dare_id(raw_id) else {
        return Ok(());
    };

    if store.delete_dare(dare_id).await? {
        tracing::info!(dare_id = %dare_id, "Dare deleted");
    }

    Ok(())
}
