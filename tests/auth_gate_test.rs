//! Authentication gate integration tests
//!
//! A bare `/protected` route behind `require_auth` records every subject it
//! sees, so each test can tell whether the handler ran.

#[macro_use]
mod common;

use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    http::{header::AUTHORIZATION, Method, Request, StatusCode},
    middleware::from_fn_with_state,
    routing::get,
    Extension, Json, Router,
};
use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use quillpad::backend::auth::gate::{AuthFailureKind, AuthGate, AuthResult};
use quillpad::backend::middleware::{require_auth, AuthUser};
use serde_json::json;

use common::{build_request, send, sign_payload, test_secret, token_for, TestResponse, TEST_SECRET};

type Seen = Arc<Mutex<Vec<String>>>;

fn protected_app() -> (Router, Seen) {
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));
    let gate = Arc::new(AuthGate::new(&test_secret()));

    let router = Router::new()
        .route(
            "/protected",
            get(
                |Extension(seen): Extension<Seen>, AuthUser(identity): AuthUser| async move {
                    seen.lock().unwrap().push(identity.subject_id().to_string());
                    Json(json!({ "subject_id": identity.subject_id() }))
                },
            ),
        )
        .route_layer(from_fn_with_state(gate, require_auth))
        .layer(Extension(seen.clone()));

    (router, seen)
}

async fn call_with_header(value: Option<&str>) -> (TestResponse, Vec<String>) {
    let (router, seen) = protected_app();
    let mut builder = Request::builder().method(Method::GET).uri("/protected");
    if let Some(value) = value {
        builder = builder.header(AUTHORIZATION, value);
    }
    let response = send(&router, builder.body(Body::empty()).unwrap()).await;
    let seen = seen.lock().unwrap().clone();
    (response, seen)
}

async fn call_with_token(token: &str) -> (TestResponse, Vec<String>) {
    call_with_header(Some(&format!("Bearer {}", token))).await
}

#[tokio::test]
async fn test_missing_header_rejected_without_running_handler() {
    let (response, seen) = call_with_header(None).await;
    assert_unauthorized!(response, "Unauthorized: Missing JWT");
    assert_eq!(response.body["status"], 401);
    assert!(seen.is_empty());
}

#[tokio::test]
async fn test_valid_token_exposes_subject() {
    let (response, seen) = call_with_token(&sign_payload(TEST_SECRET, &json!({ "id": 7 }))).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["subject_id"], "7");
    assert_eq!(seen, vec!["7".to_string()]);
}

#[tokio::test]
async fn test_string_subject_is_kept_verbatim() {
    let (response, seen) =
        call_with_token(&sign_payload(TEST_SECRET, &json!({ "id": "user-abc" }))).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(seen, vec!["user-abc".to_string()]);
}

#[tokio::test]
async fn test_issued_token_round_trip_and_tamper() {
    let token = token_for(42);

    let (response, seen) = call_with_token(&token).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(seen, vec!["42".to_string()]);

    let mut tampered = token.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'A' { 'Q' } else { 'A' });

    let (response, seen) = call_with_token(&tampered).await;
    assert_unauthorized!(response, "Unauthorized: Token verification failed");
    assert!(seen.is_empty());
}

#[tokio::test]
async fn test_other_secret_rejected_regardless_of_payload() {
    for payload in [json!({ "id": 1 }), json!({ "id": "admin" }), json!({})] {
        let (response, seen) = call_with_token(&sign_payload("some-other-secret", &payload)).await;
        assert_unauthorized!(response, "Unauthorized: Token verification failed");
        assert!(seen.is_empty());
    }
}

#[tokio::test]
async fn test_payload_without_usable_id_rejected() {
    for payload in [
        json!({ "sub": "42" }),
        json!({ "id": null }),
        json!({ "id": "" }),
        json!({ "id": { "nested": 1 } }),
        json!({ "id": [1, 2] }),
    ] {
        let (response, seen) = call_with_token(&sign_payload(TEST_SECRET, &payload)).await;
        assert_unauthorized!(response, "Unauthorized: Invalid token payload");
        assert!(seen.is_empty(), "handler ran for {}", payload);
    }
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let now = jsonwebtoken::get_current_timestamp();
    let token = sign_payload(TEST_SECRET, &json!({ "id": 1, "iat": now - 7200, "exp": now - 3600 }));
    let (response, seen) = call_with_token(&token).await;
    assert_unauthorized!(response, "Unauthorized: Token verification failed");
    assert!(seen.is_empty());
}

#[tokio::test]
async fn test_algorithm_mismatch_rejected() {
    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::new(jsonwebtoken::Algorithm::HS512),
        &json!({ "id": 1 }),
        &jsonwebtoken::EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();
    let (response, seen) = call_with_token(&token).await;
    assert_unauthorized!(response, "Unauthorized: Token verification failed");
    assert!(seen.is_empty());
}

#[tokio::test]
async fn test_malformed_headers_rejected() {
    let token = token_for(1);
    let cases = [
        "Basic abc123".to_string(),
        format!("bearer {}", token),
        format!("Bearer  {}", token),
        format!("Bearer {} extra", token),
        "Bearer".to_string(),
        "Bearer ".to_string(),
        token.clone(),
    ];

    for header in cases {
        let (response, seen) = call_with_header(Some(&header)).await;
        assert_unauthorized!(response, "Unauthorized: Invalid JWT format");
        assert!(seen.is_empty(), "handler ran for {:?}", header);
    }
}

#[tokio::test]
async fn test_basic_scheme_and_bad_signature_are_distinct_kinds() {
    let gate = AuthGate::new(&test_secret());

    let basic = gate.authenticate(Some("Basic abc123"));
    assert_matches!(basic, AuthResult::Denied(ref err) if err.kind() == AuthFailureKind::MalformedCredential);

    let forged = format!("Bearer {}", sign_payload("another-secret", &json!({ "id": 1 })));
    let forged = gate.authenticate(Some(&forged));
    assert_matches!(forged, AuthResult::Denied(ref err) if err.kind() == AuthFailureKind::InvalidCredential);
}

#[tokio::test]
async fn test_gate_only_covers_routed_paths() {
    let (router, _) = protected_app();
    let response = send(&router, build_request(Method::GET, "/elsewhere", None, None)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
