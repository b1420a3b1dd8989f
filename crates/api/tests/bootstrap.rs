//! Tests for seeding the first account at startup.

mod common;

use axum::http::StatusCode;
use common::{api, post_form, test_state};
use grandline_api::bootstrap::ensure_bootstrap_user;
use grandline_api::config::BootstrapUser;
use grandline_db::repositories::UserRepo;
use sqlx::PgPool;

fn captain() -> BootstrapUser {
    BootstrapUser {
        name: "luffy".into(),
        email: "luffy@sunny.sea".into(),
        password: "meat".into(),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn bootstrap_creates_user_once(pool: PgPool) {
    let state = test_state(pool.clone());

    assert!(ensure_bootstrap_user(&state, &captain()).await.unwrap());
    assert!(!ensure_bootstrap_user(&state, &captain()).await.unwrap());

    let user = UserRepo::find_by_name(&pool, "luffy").await.unwrap().unwrap();
    assert_eq!(user.email, "luffy@sunny.sea");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn bootstrap_user_can_log_in(pool: PgPool) {
    ensure_bootstrap_user(&test_state(pool.clone()), &captain())
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let response = post_form(
        app,
        &api("/token"),
        &[("username", "luffy"), ("password", "meat")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
}
