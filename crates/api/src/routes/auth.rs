//! Route definitions for authentication and accounts.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{auth, users};
use crate::state::AppState;

/// ```text
/// POST /token        -> login (no auth)
/// GET  /protected/   -> protected
/// POST /users/       -> users::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/token", post(auth::login))
        .route("/protected/", get(auth::protected))
        .route("/users/", post(users::create))
}
