//! HTTP-level integration tests for register, login and `/auth/me`.

mod common;

use axum::http::StatusCode;
use common::{
    assert_error, body_bytes, body_json, create_user, get_auth, post_json, test_config,
    TEST_PASSWORD,
};
use helpdesk_api::auth::jwt::validate_token;
use helpdesk_db::models::user::UserRole;
use helpdesk_db::repositories::UserRepo;
use sqlx::PgPool;

fn registration(username: &str, email: &str) -> serde_json::Value {
    serde_json::json!({
        "username": username,
        "email": email,
        "password": "s3cure-pass"
    })
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_creates_student(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;

    let response = post_json(app, "/auth/register", registration("alice", "alice@campus.edu")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"User registered successfully");

    let user = UserRepo::find_by_username(&pool, "alice")
        .await
        .unwrap()
        .expect("user should exist");
    assert_eq!(user.role, UserRole::Student);
    assert_eq!(user.email, "alice@campus.edu");
    assert!(user.password_hash.starts_with("$argon2id$"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_duplicate_username_is_rejected(pool: PgPool) {
    let first = post_json(
        common::build_test_app(pool.clone()).await,
        "/auth/register",
        registration("alice", "alice@campus.edu"),
    )
    .await;
    assert_eq!(first.status(), StatusCode::OK);

    let second = post_json(
        common::build_test_app(pool.clone()).await,
        "/auth/register",
        registration("alice", "other@campus.edu"),
    )
    .await;
    assert_error(second, StatusCode::BAD_REQUEST, "CONFLICT").await;

    assert_eq!(UserRepo::count(&pool).await.unwrap(), 1);
    let kept = UserRepo::find_by_username(&pool, "alice").await.unwrap().unwrap();
    assert_eq!(kept.email, "alice@campus.edu");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_duplicate_email_is_rejected(pool: PgPool) {
    create_user(&pool, "bob", UserRole::Student).await;
    let app = common::build_test_app(pool).await;

    let response = post_json(app, "/auth/register", registration("robert", "bob@campus.test")).await;

    assert_error(response, StatusCode::BAD_REQUEST, "CONFLICT").await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_validates_input(pool: PgPool) {
    let cases = [
        serde_json::json!({"username": "   ", "email": "a@campus.edu", "password": "long-enough"}),
        serde_json::json!({"username": "carol", "email": "not-an-email", "password": "long-enough"}),
        serde_json::json!({"username": "carol", "email": "c@campus.edu", "password": "short"}),
    ];
    for body in cases {
        let app = common::build_test_app(pool.clone()).await;
        let response = post_json(app, "/auth/register", body).await;
        assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
    }
    assert_eq!(UserRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_returns_bearer_token(pool: PgPool) {
    let (user, _) = create_user(&pool, "dave", UserRole::Student).await;
    let app = common::build_test_app(pool).await;

    let body = serde_json::json!({"username": "dave", "password": TEST_PASSWORD});
    let response = post_json(app, "/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["tokenType"], "Bearer");
    assert_eq!(json["expiresIn"], 3600);

    let claims = validate_token(json["token"].as_str().unwrap(), &test_config().jwt).unwrap();
    assert_eq!(claims.sub, user.id);
    assert_eq!(claims.role, "STUDENT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_accepts_padded_username_used_at_registration(pool: PgPool) {
    let body = registration(" alice ", "alice@campus.edu");
    let response = post_json(common::build_test_app(pool.clone()).await, "/auth/register", body.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_json(common::build_test_app(pool.clone()).await, "/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let claims = validate_token(json["token"].as_str().unwrap(), &test_config().jwt).unwrap();

    let user = UserRepo::find_by_username(&pool, "alice").await.unwrap().unwrap();
    assert_eq!(claims.sub, user.id);

    let body = serde_json::json!({"username": "alice", "password": "s3cure-pass"});
    let response = post_json(common::build_test_app(pool).await, "/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    create_user(&pool, "erin", UserRole::Student).await;
    let app = common::build_test_app(pool).await;

    let body = serde_json::json!({"username": "erin", "password": "incorrect_password"});
    let response = post_json(app, "/auth/login", body).await;

    assert_error(response, StatusCode::UNAUTHORIZED, "UNAUTHENTICATED").await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_unknown_user_gives_same_message(pool: PgPool) {
    create_user(&pool, "frank", UserRole::Student).await;

    let wrong_password = post_json(
        common::build_test_app(pool.clone()).await,
        "/auth/login",
        serde_json::json!({"username": "frank", "password": "nope-nope"}),
    )
    .await;
    let unknown_user = post_json(
        common::build_test_app(pool).await,
        "/auth/login",
        serde_json::json!({"username": "ghost", "password": "nope-nope"}),
    )
    .await;

    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(wrong_password).await, body_json(unknown_user).await);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_me_returns_profile_without_hash(pool: PgPool) {
    let (user, token) = create_user(&pool, "grace", UserRole::Admin).await;
    let app = common::build_test_app(pool).await;

    let response = get_auth(app, "/auth/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], user.id);
    assert_eq!(json["username"], "grace");
    assert_eq!(json["role"], "ADMIN");
    assert!(json["createdAt"].is_string());
    assert!(json.get("passwordHash").is_none());
}
