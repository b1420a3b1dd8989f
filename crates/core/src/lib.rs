//! Shared domain types for the Grand Line catalogue service.
//!
//! This crate performs no I/O. It holds the id/timestamp aliases, the
//! domain error taxonomy, and the pagination request type shared by the
//! repository and HTTP layers.

pub mod error;
pub mod pagination;
pub mod types;
