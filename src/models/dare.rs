//! Dare data models and API response types.
//!
//! This module defines:
//! - `Dare`: Database entity representing a shareable dare session
//! - Response bodies for the dare endpoints
//! - `parse_dare_id`: local validation of untrusted path ids

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Represents a dare record from the database.
///
/// A dare is either present or absent; there is no expired or partial state.
/// Deleting it deletes every message addressed to it.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Dare {
    /// Opaque identifier shared in the dare link
    pub id: Uuid,

    /// Timestamp when the dare was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last change to the dare row
    pub updated_at: DateTime<Utc>,
}

impl Dare {
    /// A fresh dare with a random v4 id, stamped now.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Parse an untrusted dare id from a URL path.
///
/// Only the exact token that was issued is accepted: lowercase hyphenated
/// form, no padding. Braced, simple, `urn:uuid:` and uppercase spellings of
/// the same UUID return `None`. Callers treat `None` as a dare that does not
/// exist, without touching storage.
pub fn parse_dare_id(raw: &str) -> Option<Uuid> {
    let id = Uuid::try_parse(raw).ok()?;
    (id.hyphenated().to_string() == raw).then_some(id)
}

/// Response body for `POST /api/dares`.
///
/// ```json
/// { "dareId": "550e8400-e29b-41d4-a716-446655440000", "success": true }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDareResponse {
    pub dare_id: Uuid,
    pub success: bool,
}

/// Response body for `GET /api/dares/{id}`.
#[derive(Debug, Serialize)]
pub struct DareExistsResponse {
    pub exists: bool,
}

/// Response body for `DELETE /api/dares/{id}`.
#[derive(Debug, Serialize)]
pub struct DeleteDareResponse {
    pub success: bool,
    pub message: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hyphenated_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(parse_dare_id(&id.to_string()), Some(id));
    }

    #[test]
    fn rejects_alternate_spellings_of_an_issued_id() {
        let id = Uuid::new_v4();
        let issued = id.to_string();

        for alias in [
            id.simple().to_string(),
            id.braced().to_string(),
            id.urn().to_string(),
            issued.to_uppercase(),
            format!(" {}", issued),
            format!("{}\n", issued),
        ] {
            assert_eq!(parse_dare_id(&alias), None, "alias: {:?}", alias);
        }
    }

    #[test]
    fn rejects_malformed_ids() {
        assert_eq!(parse_dare_id(""), None);
        assert_eq!(parse_dare_id("abc123"), None);
        assert_eq!(parse_dare_id("../../etc/passwd"), None);
    }

    #[test]
    fn new_dares_get_distinct_ids() {
        assert_ne!(Dare::new().id, Dare::new().id);
    }

    #[test]
    fn create_response_uses_camel_case() {
        let id = Uuid::new_v4();
        let json = serde_json::to_value(CreateDareResponse {
            dare_id: id,
            success: true,
        })
        .unwrap();

        assert_eq!(json["dareId"], id.to_string());
        assert_eq!(json["success"], true);
    }
}
