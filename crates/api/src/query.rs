//! Shared query parameter handling for list endpoints.

use axum::extract::Query;
use grandline_core::pagination::PageRequest;
use validator::Validate;

use crate::error::AppResult;

/// Validate `?skip=&limit=` and return the page to fetch.
///
/// Negative `skip` or non-positive `limit` is a 400 `VALIDATION_ERROR`.
pub fn validated_page(Query(page): Query<PageRequest>) -> AppResult<PageRequest> {
    page.validate()?;
    Ok(page)
}
