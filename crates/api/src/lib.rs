//! Grand Line catalogue API server library.
//!
//! Exposes config, state, error handling and routes so integration tests
//! and the binary entrypoint can both access them.

pub mod auth;
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod projection;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
