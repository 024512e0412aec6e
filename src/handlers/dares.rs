//! Dare HTTP handlers.
//!
//! This module implements the dare lifecycle endpoints:
//! - POST /api/dares - Create new dare
//! - GET /api/dares/:id - Check that a dare exists
//! - DELETE /api/dares/:id - Delete a dare and its messages

use crate::{
    error::AppError,
    models::dare::{CreateDareResponse, DareExistsResponse, DeleteDareResponse},
    services::dare_service,
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
};

/// Create a new dare.
///
/// # Response
///
/// - **Success (200 OK)**: `{ "dareId": "550e8400-...", "success": true }`
/// - **Error (500)**: Storage unavailable
pub async fn create_dare(
    State(state): State<AppState>,
) -> Result<Json<CreateDareResponse>, AppError> {
    let dare = dare_service::create_dare(state.store.as_ref()).await?;

    Ok(Json(CreateDareResponse {
        dare_id: dare.id,
        success: true,
    }))
}

/// Check whether a dare exists.
///
/// # Response
///
/// - **Success (200 OK)**: `{ "exists": true }`
/// - **Error (404)**: Unknown or malformed id
pub async fn get_dare(
    State(state): State<AppState>,
    Path(dare_id): Path<String>,
) -> Result<Json<DareExistsResponse>, AppError> {
    dare_service::ensure_dare_exists(state.store.as_ref(), &dare_id).await?;

    Ok(Json(DareExistsResponse { exists: true }))
}

/// Delete a dare and, by cascade, all of its messages.
///
/// No ownership check: whoever holds the id can reset the dare.
/// Deleting an id that does not exist still succeeds.
pub async fn delete_dare(
    State(state): State<AppState>,
    Path(dare_id): Path<String>,
) -> Result<Json<DeleteDareResponse>, AppError> {
    dare_service::delete_dare(state.store.as_ref(), &dare_id).await?;

    Ok(Json(DeleteDareResponse {
        success: true,
        message: "Dare deleted successfully",
    }))
}
