//! Message data models and API request/response types.
//!
//! This module defines:
//! - `Message`: Database entity for one anonymous submission
//! - `MessageBody`: A validated, trimmed message text
//! - Request and response bodies for the message endpoints

use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum message length, counted in characters after trimming.
pub const MAX_MESSAGE_CHARS: usize = 200;

/// Represents a message record from the database.
///
/// Messages are never updated. They disappear only when their dare is deleted.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Message {
    pub id: Uuid,

    /// Owning dare
    pub dare_id: Uuid,

    /// Trimmed message text, 1 to 200 characters
    pub body: String,

    /// Hashed network origin of the sender
    ///
    /// Unique together with `dare_id`: one message per sender per dare.
    pub sender_fingerprint: String,

    /// Server-assigned send time
    pub sent_at: DateTime<Utc>,
}

impl Message {
    /// Build a new message with a fresh id, stamped now.
    pub fn new(dare_id: Uuid, body: MessageBody, sender_fingerprint: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            dare_id,
            body: body.into_inner(),
            sender_fingerprint,
            sent_at: Utc::now(),
        }
    }
}

/// Message text that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBody(String);

impl MessageBody {
    /// Trim and validate raw input.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the text is missing, empty, or whitespace-only
    /// - `InvalidInput` if the trimmed text exceeds `MAX_MESSAGE_CHARS`
    pub fn parse(raw: Option<&str>) -> Result<Self, AppError> {
        let trimmed = raw.map(str::trim).unwrap_or_default();

        if trimmed.is_empty() {
            return Err(AppError::InvalidInput("Message is required".to_string()));
        }

        if trimmed.chars().count() > MAX_MESSAGE_CHARS {
            return Err(AppError::InvalidInput(format!(
                "Message exceeds {} characters",
                MAX_MESSAGE_CHARS
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Request body for `POST /api/dares/{id}/messages`.
///
/// ```json
/// { "message": "I dare you to sing at the party" }
/// ```
///
/// A missing `message` field is reported the same way as an empty one.
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    #[serde(default)]
    pub message: Option<String>,
}

/// Response body for a successful send.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageResponse {
    pub success: bool,
    pub message_id: Uuid,
    pub message: &'static str,
}

/// One entry in the message feed.
///
/// ```json
/// { "id": "770e8400-...", "message": "hi", "timestamp": "2025-12-21T16:00:00Z" }
/// ```
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub id: Uuid,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Convert database Message to API MessageResponse.
///
/// The sender fingerprint never leaves the server.
impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            message: message.body,
            timestamp: message.sent_at,
        }
    }
}

/// Response body for `GET /api/dares/{id}/messages`.
#[derive(Debug, Serialize)]
pub struct ListMessagesResponse {
    pub messages: Vec<MessageResponse>,
}
