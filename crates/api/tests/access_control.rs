//! Role-gate tests that run without a database.
//!
//! Every request here is rejected by an extractor before any query is
//! issued, so the app is built over a pool that never connects.

mod common;

use axum::http::StatusCode;
use chrono::Utc;
use common::{
    assert_error, body_json, delete_auth, get, get_auth, lazy_pool, post_json, post_json_auth,
    put_json_auth, token_for, TEST_SECRET,
};
use helpdesk_api::auth::jwt::Claims;
use helpdesk_core::roles::{ROLE_ADMIN, ROLE_STUDENT};
use jsonwebtoken::{encode, EncodingKey, Header};

async fn assert_forbidden(response: axum::http::Response<axum::body::Body>) {
    assert_error(response, StatusCode::FORBIDDEN, "FORBIDDEN").await;
}

async fn app() -> axum::Router {
    common::build_test_app(lazy_pool()).await
}

fn signed_with(secret: &str, exp_offset_secs: i64) -> String {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: 1,
        role: ROLE_ADMIN.to_string(),
        exp: now + exp_offset_secs,
        iat: now,
        jti: "test".to_string(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

#[tokio::test]
async fn missing_token_is_forbidden() {
    let uris = [
        "/requests",
        "/requests/my",
        "/locations",
        "/feedback",
        "/announcements",
        "/auth/me",
    ];
    for uri in uris {
        let response = get(app().await, uri).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN, "GET {uri}");
    }
}

#[tokio::test]
async fn malformed_authorization_header_is_forbidden() {
    let request = axum::http::Request::get("/requests")
        .header("authorization", "Token abc")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app().await, request).await.unwrap();
    assert_error(response, StatusCode::FORBIDDEN, "FORBIDDEN").await;
}

#[tokio::test]
async fn expired_token_is_forbidden() {
    let token = signed_with(TEST_SECRET, -3600);
    let response = get_auth(app().await, "/requests", &token).await;
    assert_error(response, StatusCode::FORBIDDEN, "FORBIDDEN").await;
}

#[tokio::test]
async fn token_signed_with_another_secret_is_forbidden() {
    let token = signed_with("some-other-secret", 3600);
    let response = get_auth(app().await, "/requests", &token).await;
    assert_error(response, StatusCode::FORBIDDEN, "FORBIDDEN").await;
}

#[tokio::test]
async fn student_cannot_use_admin_routes() {
    let token = token_for(7, ROLE_STUDENT);
    let body = serde_json::json!({});

    assert_forbidden(get_auth(app().await, "/requests", &token).await).await;
    assert_forbidden(get_auth(app().await, "/feedback", &token).await).await;
    assert_forbidden(get_auth(app().await, "/requests/1/feedback", &token).await).await;
    assert_forbidden(put_json_auth(app().await, "/requests/1", body.clone(), &token).await).await;
    assert_forbidden(delete_auth(app().await, "/requests/1", &token).await).await;
    assert_forbidden(post_json_auth(app().await, "/locations", body.clone(), &token).await).await;
    assert_forbidden(delete_auth(app().await, "/announcements/1", &token).await).await;
}

#[tokio::test]
async fn admin_cannot_use_student_routes() {
    let token = token_for(1, ROLE_ADMIN);
    let body = serde_json::json!({
        "title": "Broken AC",
        "description": "Room 204",
        "priority": "HIGH",
        "locationId": 3
    });

    assert_forbidden(get_auth(app().await, "/requests/my", &token).await).await;
    assert_forbidden(get_auth(app().await, "/feedback/my", &token).await).await;
    assert_forbidden(post_json_auth(app().await, "/requests", body, &token).await).await;
}

#[tokio::test]
async fn malformed_json_body_is_rejected() {
    let token = token_for(1, ROLE_ADMIN);
    let request = axum::http::Request::post("/locations")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(axum::body::Body::from("{not json"))
        .unwrap();
    let response = tower::ServiceExt::oneshot(app().await, request).await.unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn health_reports_degraded_without_database() {
    let response = get(app().await, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["dbHealthy"], false);
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let response = post_json(app().await, "/auth/login", serde_json::json!({})).await;
    assert!(response.headers().contains_key("x-request-id"));
}
