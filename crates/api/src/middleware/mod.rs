//! Request extractors that guard handlers.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated username from a JWT Bearer token.

pub mod auth;
