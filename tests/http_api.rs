// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! End-to-end tests for the HTTP adapter, driven through the full router.

mod common;

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use smiles_gateway::api::router;
use smiles_gateway::auth::API_KEY_HEADER;
use tower::ServiceExt;

use common::{test_state, TEST_API_KEY};

fn app() -> Router {
    router(test_state())
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn transform_request(key: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/transform-smiles")
        .header(CONTENT_TYPE, "application/json");
    if let Some(key) = key {
        builder = builder.header(API_KEY_HEADER, key);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

#[tokio::test]
async fn ethanol_normalizes_with_valid_key() {
    let response = app()
        .oneshot(transform_request(Some(TEST_API_KEY), json!({"smiles": "CCO"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"smiles": "CCO"}));
}

#[tokio::test]
async fn cyclohexane_normalizes_with_valid_key() {
    let response = app()
        .oneshot(transform_request(
            Some(TEST_API_KEY),
            json!({"smiles": "C1CCCCC1"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["smiles"], "C1CCCCC1");
}

#[tokio::test]
async fn repairable_molecule_returns_success_shape() {
    // "0" is not a vocabulary token; strict fails, repair drops it.
    let response = app()
        .oneshot(transform_request(Some(TEST_API_KEY), json!({"smiles": "CC0"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"smiles": "CC"}));
}

#[tokio::test]
async fn overlong_molecule_is_rejected_before_transform() {
    let response = app()
        .oneshot(transform_request(
            Some(TEST_API_KEY),
            json!({"smiles": "C".repeat(60)}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["error_code"], "too_long");
}

#[tokio::test]
async fn missing_key_is_rejected_before_payload_parsing() {
    // The body is deliberately overlong: if validation ran first, the error
    // code would be `too_long` rather than the uniform auth failure.
    let response = app()
        .oneshot(transform_request(None, json!({"smiles": "C".repeat(60)})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["error_code"], "invalid_api_key");
}

#[tokio::test]
async fn wrong_key_matches_missing_key_response() {
    let missing = app()
        .oneshot(transform_request(None, json!({"smiles": "CCO"})))
        .await
        .unwrap();
    let wrong = app()
        .oneshot(transform_request(Some("wrong-key"), json!({"smiles": "CCO"})))
        .await
        .unwrap();

    assert_eq!(missing.status(), StatusCode::FORBIDDEN);
    assert_eq!(wrong.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(missing).await, body_json(wrong).await);
}

#[tokio::test]
async fn unnormalizable_molecule_is_never_a_success() {
    let response = app()
        .oneshot(transform_request(Some(TEST_API_KEY), json!({"smiles": "@@@@"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Not a valid SMILES!");
    assert_eq!(body["error_code"], "invalid_smiles");
}

#[tokio::test]
async fn missing_field_yields_validation_error() {
    let response = app()
        .oneshot(transform_request(Some(TEST_API_KEY), json!({"molecule": "CCO"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["error_code"], "missing_field");
}

#[tokio::test]
async fn index_requires_valid_key() {
    let ok = app()
        .oneshot(
            Request::builder()
                .uri("/")
                .header(API_KEY_HEADER, TEST_API_KEY)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(ok.status(), StatusCode::OK);
    assert_eq!(body_json(ok).await, json!({"info": "SMILES-API up"}));

    let forbidden = app()
        .oneshot(
            Request::builder()
                .uri("/")
                .header(API_KEY_HEADER, "wrong-key")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn health_is_unauthenticated() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"status": "ok"}));
}
