//! HTTP router assembly.

use crate::{handlers, middleware, state::AppState};
use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the application router.
///
/// # Routes
///
/// - `GET /api/health`
/// - `POST /api/dares`
/// - `GET|DELETE /api/dares/{id}`
/// - `POST|GET /api/dares/{id}/messages`
///
/// Only the send route runs the fingerprint middleware.
pub fn router(state: AppState) -> Router {
    let send_message = post(handlers::messages::send_message).route_layer(
        axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::fingerprint::fingerprint_middleware,
        ),
    );

    Router::new()
        .route("/api/health", get(handlers::health::health_check))
        .route("/api/dares", post(handlers::dares::create_dare))
        .route(
            "/api/dares/{id}",
            get(handlers::dares::get_dare).delete(handlers::dares::delete_dare),
        )
        .route(
            "/api/dares/{id}/messages",
            send_message.get(handlers::messages::list_messages),
        )
        // The browser UI is served from another origin
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
