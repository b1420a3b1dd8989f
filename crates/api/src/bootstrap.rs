//! Startup seeding of the first account.

use grandline_db::repositories::UserRepo;

use crate::config::BootstrapUser;
use crate::error::AppResult;
use crate::handlers::users::{create_user, CreateUserRequest};
use crate::state::AppState;

/// Create the configured bootstrap account unless a user with that name
/// already exists.
///
/// Returns `true` when a row was inserted.
pub async fn ensure_bootstrap_user(state: &AppState, user: &BootstrapUser) -> AppResult<bool> {
    if UserRepo::find_by_name(&state.pool, &user.name).await?.is_some() {
        tracing::debug!(name = %user.name, "Bootstrap user already present");
        return Ok(false);
    }

    let created = create_user(
        state,
        CreateUserRequest {
            name: user.name.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
        },
    )
    .await?;

    tracing::info!(user_id = created.id, name = %created.name, "Bootstrap user created");
    Ok(true)
}
