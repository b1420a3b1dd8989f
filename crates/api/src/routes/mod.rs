pub mod auth;
pub mod catalogue;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree, mounted by the caller under the configured prefix.
///
/// Route hierarchy:
///
/// ```text
/// /token                                  login (public, form body)
/// /protected/                             echo the token subject
/// /users/                                 create account
///
/// /mangas/                                list, create
/// /mangas/{id}                            get, patch
///
/// /characters/  /devilfruits/  /devilfruit-types/  /weapons/
/// /haki/  /haki-types/  /boats/  /crews/  /islands/  /regions/  /ranks/
///                                         list, create
/// .../{id}                                get, put, delete
/// ```
///
/// Collection paths keep their trailing slash.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(catalogue::router())
}
