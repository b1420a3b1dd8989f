//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server is
//! involved. Only the unique-violation conversion needs a database.

use axum::http::header::WWW_AUTHENTICATE;
use axum::http::StatusCode;
use assert_matches::assert_matches;
use axum::response::IntoResponse;
use grandline_api::error::AppError;
use grandline_core::error::CoreError;
use grandline_db::models::manga::CreateManga;
use grandline_db::repositories::MangaRepo;
use http_body_util::BodyExt;
use sqlx::PgPool;

/// Convert an `AppError` into its status code, `WWW-Authenticate` header and JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, Option<String>, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let challenge = response
        .headers()
        .get(WWW_AUTHENTICATE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, challenge, json)
}

#[tokio::test]
async fn not_found_names_the_entity() {
    let (status, challenge, json) = error_to_response(AppError::not_found("Devil Fruit", 7)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(challenge.is_none());
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Devil Fruit not found");
}

#[tokio::test]
async fn unauthorized_carries_bearer_challenge() {
    let (status, challenge, json) =
        error_to_response(AppError::unauthorized("Could not validate credentials")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(challenge.as_deref(), Some("Bearer"));
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["error"], "Could not validate credentials");
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("limit: must be at least 1".into()));

    let (status, _, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "limit: must be at least 1");
}

#[tokio::test]
async fn conflict_error_returns_409() {
    let err = AppError::Core(CoreError::Conflict("duplicate name".into()));

    let (status, _, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
}

#[tokio::test]
async fn internal_error_is_sanitized() {
    let err = AppError::InternalError("secret connection string leaked".into());

    let (status, _, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn row_not_found_maps_to_404() {
    let (status, _, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn other_database_errors_are_sanitized() {
    let (status, _, json) = error_to_response(AppError::Database(sqlx::Error::PoolTimedOut)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "An internal error occurred");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unique_violation_converts_to_conflict(pool: PgPool) {
    let input = CreateManga {
        name: "One Piece".into(),
        image: "cover.png".into(),
    };
    MangaRepo::create(&pool, &input).await.unwrap();
    let err = AppError::from(MangaRepo::create(&pool, &input).await.unwrap_err());

    assert_matches!(
        &err,
        AppError::Core(CoreError::Conflict(msg)) if msg.contains("uq_manga_name")
    );

    let (status, _, json) = error_to_response(err).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
}
