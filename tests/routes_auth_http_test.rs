// ABOUTME: HTTP integration tests for authentication routes
// ABOUTME: Covers token issuance, self-registration, and the claims carried by issued tokens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};

#[tokio::test]
async fn test_token_for_valid_credentials() {
    let fixtures = common::setup().await.unwrap();

    let response = AxumTestRequest::post("/auth/token")
        .json(&json!({ "username": "u1", "password": "password1" }))
        .send(fixtures.router())
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    let token = body["token"].as_str().unwrap();

    let claims = fixtures.resources.auth_manager.validate_token(token).unwrap();
    assert_eq!(claims.username, "u1");
    assert!(claims.is_admin);
}

#[tokio::test]
async fn test_token_for_unknown_user() {
    let fixtures = common::setup().await.unwrap();

    let response = AxumTestRequest::post("/auth/token")
        .json(&json!({ "username": "no-such-user", "password": "password1" }))
        .send(fixtures.router())
        .await;

    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn test_token_for_wrong_password() {
    let fixtures = common::setup().await.unwrap();

    let response = AxumTestRequest::post("/auth/token")
        .json(&json!({ "username": "u1", "password": "nope" }))
        .send(fixtures.router())
        .await;

    assert_eq!(response.status(), 401);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "AUTH_INVALID");
    assert_eq!(body["error"]["message"], "Invalid username/password");
}

#[tokio::test]
async fn test_token_with_malformed_body() {
    let fixtures = common::setup().await.unwrap();

    for body in [
        json!({ "username": "u1" }),
        json!({ "username": 42, "password": "above-is-a-number" }),
    ] {
        let response = AxumTestRequest::post("/auth/token")
            .json(&body)
            .send(fixtures.router())
            .await;

        assert_eq!(response.status(), 400, "body {body} should be rejected");
    }
}

#[tokio::test]
async fn test_register_new_user() {
    let fixtures = common::setup().await.unwrap();

    let response = AxumTestRequest::post("/auth/register")
        .json(&json!({
            "username": "new",
            "firstName": "first",
            "lastName": "last",
            "password": "password",
            "email": "new@email.com"
        }))
        .send(fixtures.router())
        .await;

    assert_eq!(response.status(), 201);
    let body: Value = response.json();
    let claims = fixtures
        .resources
        .auth_manager
        .validate_token(body["token"].as_str().unwrap())
        .unwrap();
    assert_eq!(claims.username, "new");
    assert!(!claims.is_admin);
}

#[tokio::test]
async fn test_register_cannot_claim_admin() {
    let fixtures = common::setup().await.unwrap();

    let response = AxumTestRequest::post("/auth/register")
        .json(&json!({
            "username": "sneaky",
            "firstName": "first",
            "lastName": "last",
            "password": "password",
            "email": "sneaky@email.com",
            "isAdmin": true
        }))
        .send(fixtures.router())
        .await;

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_register_with_missing_fields() {
    let fixtures = common::setup().await.unwrap();

    let response = AxumTestRequest::post("/auth/register")
        .json(&json!({ "username": "new" }))
        .send(fixtures.router())
        .await;

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_register_with_invalid_email() {
    let fixtures = common::setup().await.unwrap();

    let response = AxumTestRequest::post("/auth/register")
        .json(&json!({
            "username": "new",
            "firstName": "first",
            "lastName": "last",
            "password": "password",
            "email": "not-an-email"
        }))
        .send(fixtures.router())
        .await;

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let fixtures = common::setup().await.unwrap();

    let response = AxumTestRequest::post("/auth/register")
        .json(&json!({
            "username": "u1",
            "firstName": "first",
            "lastName": "last",
            "password": "password",
            "email": "dup@email.com"
        }))
        .send(fixtures.router())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["message"], "Duplicate username: u1");
}

#[tokio::test]
async fn test_tampered_token_is_treated_as_anonymous() {
    let fixtures = common::setup().await.unwrap();
    let tampered = format!("{}x", fixtures.admin_bearer());

    let response = AxumTestRequest::get("/users")
        .header("authorization", &tampered)
        .send(fixtures.router())
        .await;

    assert_eq!(response.status(), 401);

    let response = AxumTestRequest::get("/companies")
        .header("authorization", &tampered)
        .send(fixtures.router())
        .await;

    assert_eq!(response.status(), 200);
}
