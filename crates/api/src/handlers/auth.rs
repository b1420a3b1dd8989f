//! Handlers for token issuance and the authenticated echo endpoint.

use axum::extract::State;
use axum::{Form, Json};
use grandline_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Message shared by the unknown-user and wrong-password paths so the two
/// are indistinguishable to the caller.
const BAD_CREDENTIALS: &str = "Incorrect username or password";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Form body for `POST /token` (OAuth2 password-grant field names).
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

/// Successful token response.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Always `"bearer"`.
    pub token_type: &'static str,
    /// Token lifetime in seconds.
    pub expires_in: i64,
}

/// Body of `GET /protected/`.
#[derive(Debug, Serialize)]
pub struct ProtectedResponse {
    pub message: &'static str,
    pub user: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /token
///
/// Exchange a username and password for a bearer token valid for 30 minutes.
pub async fn login(
    State(state): State<AppState>,
    Form(input): Form<TokenRequest>,
) -> AppResult<Json<TokenResponse>> {
    let user = match UserRepo::find_by_name(&state.pool, &input.username).await? {
        Some(user) => user,
        None => {
            tracing::warn!(username = %input.username, "Login failed: unknown user");
            return Err(AppError::unauthorized(BAD_CREDENTIALS));
        }
    };

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        tracing::warn!(username = %user.name, "Login failed: wrong password");
        return Err(AppError::unauthorized(BAD_CREDENTIALS));
    }

    let access_token = generate_access_token(&user.name, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, username = %user.name, "Issued access token");

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer",
        expires_in: state.config.jwt.expires_in_secs(),
    }))
}

/// GET /protected/
///
/// Echo the token subject back to an authenticated caller.
pub async fn protected(user: AuthUser) -> Json<ProtectedResponse> {
    Json(ProtectedResponse {
        message: "This is a protected endpoint",
        user: user.username,
    })
}
