//! HTTP-level integration tests for registration, login, and profile access.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json, put_json_auth, register_user};
use sqlx::PgPool;

/// Registration returns 201 with a token and the user (sans password hash).
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_success(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/auth/register",
        serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "password": "a-long-password"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert!(json["token"].is_string());
    assert_eq!(json["user"]["name"], "Ada");
    assert_eq!(json["user"]["email"], "ada@example.com");
    assert!(
        json["user"].get("passwordHash").is_none() && json["user"].get("password_hash").is_none(),
        "password hash must never be serialized"
    );
}

/// Registering the same email twice returns 409.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_duplicate_email(pool: PgPool) {
    let app = common::build_test_app(pool);

    register_user(app.clone(), "Ada", "ada@example.com").await;

    let response = post_json(
        app,
        "/api/v1/auth/register",
        serde_json::json!({
            "name": "Other Ada",
            "email": "ada@example.com",
            "password": "another-password"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

/// Invalid registration payloads are rejected with field errors.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_validation_errors(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/auth/register",
        serde_json::json!({
            "name": "",
            "email": "not-an-email",
            "password": "short"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert!(json["errors"].is_array());
}

/// Login with correct credentials returns a token.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let app = common::build_test_app(pool);
    register_user(app.clone(), "Ada", "ada@example.com").await;

    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({ "email": "ada@example.com", "password": "test_password_123!" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["token"].is_string());
    assert_eq!(json["user"]["email"], "ada@example.com");
}

/// A wrong password and an unknown email both return the same 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_rejections(pool: PgPool) {
    let app = common::build_test_app(pool);
    register_user(app.clone(), "Ada", "ada@example.com").await;

    let wrong_password = post_json(
        app.clone(),
        "/api/v1/auth/login",
        serde_json::json!({ "email": "ada@example.com", "password": "incorrect" }),
    )
    .await;
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);

    let unknown_email = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({ "email": "ghost@example.com", "password": "whatever" }),
    )
    .await;
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);
}

/// GET /auth/me returns the account behind the token.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_me(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token, user_id) = register_user(app.clone(), "Ada", "ada@example.com").await;

    let response = get_auth(app, "/api/v1/auth/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["user"]["id"], user_id);
    assert_eq!(json["user"]["email"], "ada@example.com");
}

/// Requests without a token, or with a garbage token, are 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_auth_required(pool: PgPool) {
    let app = common::build_test_app(pool);

    let missing = common::get(app.clone(), "/api/v1/auth/me").await;
    assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);

    let garbage = get_auth(app, "/api/v1/auth/me", "not-a-jwt").await;
    assert_eq!(garbage.status(), StatusCode::UNAUTHORIZED);
}

/// Profile update changes the name; taking another account's email is 409.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_profile_update(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token, _) = register_user(app.clone(), "Ada", "ada@example.com").await;
    register_user(app.clone(), "Grace", "grace@example.com").await;

    let response = put_json_auth(
        app.clone(),
        "/api/v1/users/profile",
        &token,
        serde_json::json!({ "name": "Ada Lovelace" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["user"]["name"], "Ada Lovelace");

    let conflict = put_json_auth(
        app,
        "/api/v1/users/profile",
        &token,
        serde_json::json!({ "email": "grace@example.com" }),
    )
    .await;
    assert_eq!(conflict.status(), StatusCode::CONFLICT);
}
