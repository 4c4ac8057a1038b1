//! Integration tests for the `/characters` surface that stop before
//! the database: authentication and creation-payload validation. The
//! shared test app uses a lazy pool, so any request that would reach
//! PostgreSQL is out of scope here (covered by environment-backed
//! tests against a provisioned database).

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{bearer_token, build_test_app};

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Authentication gate
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_without_token_returns_401() {
    let app = build_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/characters")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn non_bearer_authorization_returns_401() {
    let app = build_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/characters")
                .header(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn garbage_token_returns_401() {
    let app = build_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/characters")
                .header(header::AUTHORIZATION, "Bearer not-a-real-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid or expired token");
}

// ---------------------------------------------------------------------------
// Creation payload validation (runs before any database access)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_with_empty_payload_reports_all_required_fields() {
    let app = build_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/characters")
                .header(header::AUTHORIZATION, bearer_token(1))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let fields: Vec<&str> = json["violations"]
        .as_array()
        .expect("violations must be an array")
        .iter()
        .map(|v| v["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["name", "race", "class"]);
}

#[tokio::test]
async fn create_reports_every_violation_in_one_response() {
    let app = build_test_app();

    let payload = json!({
        "name": "Arannis",
        "race": "Elf",
        "class": "Wizard",
        "level": 25,
        "strength": 0,
        "hitPoints": 12,
        "maxHitPoints": 8,
        "goldPieces": -10
    });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/characters")
                .header(header::AUTHORIZATION, bearer_token(1))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;

    let fields: Vec<&str> = json["violations"]
        .as_array()
        .expect("violations must be an array")
        .iter()
        .map(|v| v["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["level", "strength", "hitPoints", "goldPieces"]);
}

#[tokio::test]
async fn create_with_malformed_json_returns_400() {
    let app = build_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/characters")
                .header(header::AUTHORIZATION, bearer_token(1))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{ not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Health endpoint degrades gracefully without a database
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_reports_degraded_without_database() {
    let app = build_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
}
