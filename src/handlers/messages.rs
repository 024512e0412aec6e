//! Message HTTP handlers.
//!
//! - POST /api/dares/:id/messages - Send one anonymous message
//! - GET /api/dares/:id/messages - Message feed, newest first

use crate::{
    error::AppError,
    middleware::fingerprint::SenderFingerprint,
    models::message::{
        ListMessagesResponse, MessageResponse, SendMessageRequest, SendMessageResponse,
    },
    services::dare_service,
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::{Path, State, rejection::JsonRejection},
};

/// Send a message to a dare.
///
/// # Request Body
///
/// ```json
/// { "message": "I dare you to sing at the party" }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: `{ "success": true, "messageId": "...", "message": "Message sent successfully" }`
/// - **Error (400)**: Message missing, blank, over 200 characters, or the body is not
///   a JSON object with a string `message`
/// - **Error (404)**: Unknown dare
/// - **Error (409)**: This sender already sent a message to the dare
///
/// The sender fingerprint comes from the fingerprint middleware, never from the body.
pub async fn send_message(
    State(state): State<AppState>,
    Extension(fingerprint): Extension<SenderFingerprint>,
    Path(dare_id): Path<String>,
    payload: Result<Json<SendMessageRequest>, JsonRejection>,
) -> Result<Json<SendMessageResponse>, AppError> {
    let Json(request) = payload?;

    let message = dare_service::send_message(
        state.store.as_ref(),
        &dare_id,
        request.message.as_deref(),
        &fingerprint,
    )
    .await?;

    Ok(Json(SendMessageResponse {
        success: true,
        message_id: message.id,
        message: "Message sent successfully",
    }))
}

/// List every message of a dare, newest first. No pagination.
///
/// # Response
///
/// ```json
/// {
///   "messages": [
///     { "id": "770e8400-...", "message": "hi", "timestamp": "2025-12-21T16:00:00Z" }
///   ]
/// }
/// ```
pub async fn list_messages(
    State(state): State<AppState>,
    Path(dare_id): Path<String>,
) -> Result<Json<ListMessagesResponse>, AppError> {
    let messages = dare_service::list_messages(state.store.as_ref(), &dare_id).await?;

    Ok(Json(ListMessagesResponse {
        messages: messages.into_iter().map(MessageResponse::from).collect(),
    }))
}
