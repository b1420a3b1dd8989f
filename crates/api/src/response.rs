//! Shared response bodies that are not entity projections.

use serde::Serialize;

/// `{ "detail": "..." }` body returned by delete endpoints.
#[derive(Debug, Serialize)]
pub struct DetailResponse {
    pub detail: String,
}

impl DetailResponse {
    /// `"<entity> deleted"` confirmation.
    pub fn deleted(entity: &str) -> Self {
        Self {
            detail: format!("{entity} deleted"),
        }
    }
}
