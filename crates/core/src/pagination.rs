//! `skip` / `limit` windowing for list endpoints.
//!
//! Pages are plain offset windows over id-ordered rows. There is no cursor
//! and no total count, so concurrent inserts or deletes can shift a page.

use serde::Deserialize;
use validator::Validate;

/// Rows skipped when the caller omits `skip`.
pub const DEFAULT_SKIP: i64 = 0;

/// Page size used when the caller omits `limit`.
pub const DEFAULT_LIMIT: i64 = 10;

/// Query parameters accepted by every list endpoint (`?skip=&limit=`).
#[derive(Debug, Clone, Copy, Default, Deserialize, Validate)]
pub struct PageRequest {
    #[validate(range(min = 0, message = "skip must be zero or greater"))]
    pub skip: Option<i64>,
    #[validate(range(min = 1, message = "limit must be greater than zero"))]
    pub limit: Option<i64>,
}

impl PageRequest {
    pub fn new(skip: i64, limit: i64) -> Self {
        Self {
            skip: Some(skip),
            limit: Some(limit),
        }
    }

    /// Number of rows to skip, falling back to [`DEFAULT_SKIP`].
    pub fn offset(&self) -> i64 {
        self.skip.unwrap_or(DEFAULT_SKIP)
    }

    /// Maximum number of rows to return, falling back to [`DEFAULT_LIMIT`].
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::error::CoreError;

    #[test]
    fn defaults_apply_when_params_omitted() {
        let page = PageRequest::default();
        assert!(page.validate().is_ok());
        assert_eq!(page.offset(), 0);
        assert_eq!(page.limit(), 10);
    }

    #[test]
    fn explicit_values_pass_through() {
        let page = PageRequest::new(20, 5);
        assert!(page.validate().is_ok());
        assert_eq!(page.offset(), 20);
        assert_eq!(page.limit(), 5);
    }

    #[test]
    fn negative_skip_is_rejected() {
        let page = PageRequest {
            skip: Some(-1),
            limit: None,
        };
        let err = CoreError::from(page.validate().unwrap_err());
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("skip"));
    }

    #[test]
    fn zero_limit_is_rejected() {
        let page = PageRequest {
            skip: None,
            limit: Some(0),
        };
        let err = CoreError::from(page.validate().unwrap_err());
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("limit"));
    }
}
