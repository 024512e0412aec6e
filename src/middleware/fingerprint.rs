//! Sender fingerprint middleware.
//!
//! This middleware intercepts message submissions to:
//! 1. Work out the sender's network address (forwarded header or socket peer)
//! 2. Hash it into a `SenderFingerprint`
//! 3. Inject the fingerprint into the request for the handler
//!
//! The fingerprint is never taken from the request body. `X-Forwarded-For` is
//! client-controlled unless a proxy overwrites it, so this is a weak identity
//! signal and not a security boundary.

use crate::state::AppState;
use axum::{
    extract::{ConnectInfo, Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use sha2::{Digest, Sha256};
use std::net::SocketAddr;

const FORWARDED_FOR: &str = "x-forwarded-for";

/// Used when neither the header nor the socket address is available.
const UNKNOWN_ADDRESS: &str = "unknown";

/// Hashed sender address, one message allowed per fingerprint per dare.
///
/// Stored as 64 hex characters so raw addresses never reach the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderFingerprint(String);

impl SenderFingerprint {
    pub fn from_address(address: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(address.as_bytes());
        Self(hex::encode(hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Pick the address that identifies the sender.
///
/// With `trust_forwarded_for`, the first non-blank entry of `X-Forwarded-For`
/// (the original client as reported by the proxy chain) wins. Otherwise, or
/// when the header is absent, the socket peer IP is used.
pub fn client_address(
    headers: &HeaderMap,
    peer: Option<SocketAddr>,
    trust_forwarded_for: bool,
) -> Option<String> {
    let forwarded = trust_forwarded_for
        .then(|| headers.get(FORWARDED_FOR))
        .flatten()
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string);

    forwarded.or_else(|| peer.map(|addr| addr.ip().to_string()))
}

/// Fingerprint middleware function.
///
/// # Flow
///
/// 1. Read `X-Forwarded-For` and the `ConnectInfo` peer address
/// 2. Choose the address per `AppState::trust_forwarded_for`
/// 3. Hash it and insert `SenderFingerprint` into request extensions
/// 4. Call the next handler
///
/// Route handlers extract the fingerprint with `Extension<SenderFingerprint>`.
pub async fn fingerprint_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);

    let address = client_address(request.headers(), peer, state.trust_forwarded_for)
        .unwrap_or_else(|| {
            tracing::warn!("No client address available, using shared fingerprint");
            UNKNOWN_ADDRESS.to_string()
        });

    request
        .extensions_mut()
        .insert(SenderFingerprint::from_address(&address));

    next.run(request).await
}
