//! Handlers for the `/users` resource.
//!
//! There is no open registration: creating an account requires a valid
//! bearer token held by an existing user.

use axum::extract::State;
use axum::Json;
use grandline_db::models::user::{CreateUser, UserResponse};
use grandline_db::repositories::UserRepo;
use serde::Deserialize;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /users/`.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// POST /users/
///
/// Store a new account with an Argon2id digest of the password. A taken
/// name or email is a 409.
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = create_user(&state, input).await?;
    tracing::info!(
        user_id = user.id,
        created_by = %auth_user.username,
        "User created"
    );
    Ok(Json(user))
}

/// Hash the password and insert the user row.
///
/// Shared by the HTTP handler and the startup bootstrap.
pub async fn create_user(state: &AppState, input: CreateUserRequest) -> AppResult<UserResponse> {
    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let dto = CreateUser {
        name: input.name,
        email: input.email,
        password_hash,
    };

    let user = UserRepo::create(&state.pool, &dto).await?;
    Ok(UserResponse::from(user))
}
