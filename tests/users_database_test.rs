// ABOUTME: Integration tests for the users database manager
// ABOUTME: Covers authentication, registration, profile updates, removal, and job applications
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(missing_docs, clippy::unwrap_used)]

mod common;

use jobly_api::errors::ErrorCode;
use jobly_api::models::{NewUser, UpdateUser};

fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_owned(),
        password: "password".to_owned(),
        first_name: "Test".to_owned(),
        last_name: "Tester".to_owned(),
        email: "test@test.com".to_owned(),
        is_admin: false,
    }
}

#[tokio::test]
async fn test_authenticate_valid_credentials() {
    let fixtures = common::setup().await.unwrap();

    let user = fixtures
        .resources
        .users()
        .authenticate("u1", "password1")
        .await
        .unwrap();

    assert_eq!(user.username, "u1");
    assert_eq!(user.first_name, "U1F");
    assert_eq!(user.last_name, "U1L");
    assert_eq!(user.email, "user1@user.com");
    assert!(user.is_admin);
}

#[tokio::test]
async fn test_authenticate_unknown_user() {
    let fixtures = common::setup().await.unwrap();

    let err = fixtures
        .resources
        .users()
        .authenticate("nope", "password")
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::AuthInvalid);
}

#[tokio::test]
async fn test_authenticate_wrong_password() {
    let fixtures = common::setup().await.unwrap();

    let err = fixtures
        .resources
        .users()
        .authenticate("u1", "wrong")
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::AuthInvalid);
    assert_eq!(err.message, "Invalid username/password");
}

#[tokio::test]
async fn test_register_user() {
    let fixtures = common::setup().await.unwrap();
    let users = fixtures.resources.users();

    let user = users.register(&new_user("new")).await.unwrap();

    assert_eq!(user.username, "new");
    assert!(!user.is_admin);
    assert!(users.authenticate("new", "password").await.is_ok());
}

#[tokio::test]
async fn test_register_admin() {
    let fixtures = common::setup().await.unwrap();
    let request = NewUser {
        is_admin: true,
        ..new_user("boss")
    };

    let user = fixtures.resources.users().register(&request).await.unwrap();

    assert!(user.is_admin);
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let fixtures = common::setup().await.unwrap();
    let users = fixtures.resources.users();

    users.register(&new_user("dup")).await.unwrap();
    let err = users.register(&new_user("dup")).await.unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(err.message, "Duplicate username: dup");
}

#[tokio::test]
async fn test_find_all_users_ordered() {
    let fixtures = common::setup().await.unwrap();

    let users = fixtures.resources.users().find_all().await.unwrap();

    let names: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, ["u1", "u2", "u3"]);
}

#[tokio::test]
async fn test_get_user_with_applications() {
    let fixtures = common::setup().await.unwrap();

    let detail = fixtures.resources.users().get("u2").await.unwrap();

    assert_eq!(detail.user.username, "u2");
    assert!(!detail.user.is_admin);
    assert_eq!(detail.jobs, vec![fixtures.job_ids[0]]);
}

#[tokio::test]
async fn test_get_user_without_applications() {
    let fixtures = common::setup().await.unwrap();

    let detail = fixtures.resources.users().get("u3").await.unwrap();

    assert!(detail.jobs.is_empty());
}

#[tokio::test]
async fn test_get_missing_user() {
    let fixtures = common::setup().await.unwrap();

    let err = fixtures.resources.users().get("nope").await.unwrap_err();

    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_update_user_fields() {
    let fixtures = common::setup().await.unwrap();
    let update = UpdateUser {
        first_name: Some("NewF".to_owned()),
        email: Some("new@email.com".to_owned()),
        is_admin: Some(true),
        ..UpdateUser::default()
    };

    let user = fixtures
        .resources
        .users()
        .update("u2", &update)
        .await
        .unwrap();

    assert_eq!(user.first_name, "NewF");
    assert_eq!(user.last_name, "U2L");
    assert_eq!(user.email, "new@email.com");
    assert!(user.is_admin);
}

#[tokio::test]
async fn test_update_password_is_rehashed() {
    let fixtures = common::setup().await.unwrap();
    let users = fixtures.resources.users();
    let update = UpdateUser {
        password: Some("new-password".to_owned()),
        ..UpdateUser::default()
    };

    users.update("u3", &update).await.unwrap();

    assert!(users.authenticate("u3", "new-password").await.is_ok());
    assert_eq!(
        users.authenticate("u3", "password3").await.unwrap_err().code,
        ErrorCode::AuthInvalid
    );
}

#[tokio::test]
async fn test_update_missing_user() {
    let fixtures = common::setup().await.unwrap();
    let update = UpdateUser {
        first_name: Some("X".to_owned()),
        ..UpdateUser::default()
    };

    let err = fixtures
        .resources
        .users()
        .update("nope", &update)
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_update_user_with_no_data() {
    let fixtures = common::setup().await.unwrap();

    let err = fixtures
        .resources
        .users()
        .update("u1", &UpdateUser::default())
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_remove_user() {
    let fixtures = common::setup().await.unwrap();
    let users = fixtures.resources.users();

    users.remove("u2").await.unwrap();

    assert_eq!(
        users.get("u2").await.unwrap_err().code,
        ErrorCode::ResourceNotFound
    );
    assert_eq!(
        users.remove("u2").await.unwrap_err().code,
        ErrorCode::ResourceNotFound
    );
}

#[tokio::test]
async fn test_apply_to_job() {
    let fixtures = common::setup().await.unwrap();
    let users = fixtures.resources.users();

    users.apply_to_job("u3", fixtures.job_ids[2]).await.unwrap();
    users.apply_to_job("u3", fixtures.job_ids[0]).await.unwrap();

    let detail = users.get("u3").await.unwrap();
    assert_eq!(detail.jobs, vec![fixtures.job_ids[0], fixtures.job_ids[2]]);
}

#[tokio::test]
async fn test_apply_twice_is_idempotent() {
    let fixtures = common::setup().await.unwrap();
    let users = fixtures.resources.users();

    users.apply_to_job("u2", fixtures.job_ids[0]).await.unwrap();

    assert_eq!(users.get("u2").await.unwrap().jobs.len(), 1);
}

#[tokio::test]
async fn test_apply_to_missing_job_or_user() {
    let fixtures = common::setup().await.unwrap();
    let users = fixtures.resources.users();

    let err = users.apply_to_job("u1", 0).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);

    let err = users
        .apply_to_job("nope", fixtures.job_ids[0])
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_removing_job_drops_applications() {
    let fixtures = common::setup().await.unwrap();

    fixtures
        .resources
        .jobs()
        .remove(fixtures.job_ids[0])
        .await
        .unwrap();

    let detail = fixtures.resources.users().get("u2").await.unwrap();
    assert!(detail.jobs.is_empty());
}
