// ABOUTME: User entity, user detail with applied jobs, and account request bodies
// ABOUTME: Password fields only appear on inbound bodies and are never serialized back out
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::check_text;
use crate::constants::limits;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique login name
    pub username: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Contact address
    pub email: String,
    /// Whether the user may manage companies, jobs, and other users
    pub is_admin: bool,
}

/// A user together with the ids of the jobs they applied to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetail {
    /// User fields, flattened into the same JSON object
    #[serde(flatten)]
    pub user: User,
    /// Applied job ids in ascending order
    pub jobs: Vec<i64>,
}

/// Body of `POST /auth/token`
#[derive(Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    /// Login name
    pub username: String,
    /// Plain-text password
    pub password: String,
}

/// Body of `POST /auth/register`; self-registered accounts are never admins
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RegisterUser {
    /// Login name
    pub username: String,
    /// Plain-text password
    pub password: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Contact address
    pub email: String,
}

impl From<RegisterUser> for NewUser {
    fn from(body: RegisterUser) -> Self {
        Self {
            username: body.username,
            password: body.password,
            first_name: body.first_name,
            last_name: body.last_name,
            email: body.email,
            is_admin: false,
        }
    }
}

/// Body of `POST /users`, issued by an admin
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewUser {
    /// Login name
    pub username: String,
    /// Plain-text password
    pub password: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Contact address
    pub email: String,
    /// Grant admin rights
    #[serde(default)]
    pub is_admin: bool,
}

impl NewUser {
    /// Check field formats and lengths
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the first offending field.
    pub fn validate(&self) -> AppResult<()> {
        check_text("username", &self.username, limits::USERNAME_MAX_LEN)?;
        check_password(&self.password)?;
        check_text("firstName", &self.first_name, limits::NAME_MAX_LEN)?;
        check_text("lastName", &self.last_name, limits::NAME_MAX_LEN)?;
        check_email(&self.email)
    }
}

/// Body of `PATCH /users/:username`; the username is immutable
#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateUser {
    /// New given name
    pub first_name: Option<String>,
    /// New family name
    pub last_name: Option<String>,
    /// New contact address
    pub email: Option<String>,
    /// Grant or revoke admin rights (admins only)
    pub is_admin: Option<bool>,
    /// New plain-text password
    pub password: Option<String>,
}

impl UpdateUser {
    /// Check the fields that were supplied
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the first offending field.
    pub fn validate(&self) -> AppResult<()> {
        if let Some(first_name) = &self.first_name {
            check_text("firstName", first_name, limits::NAME_MAX_LEN)?;
        }
        if let Some(last_name) = &self.last_name {
            check_text("lastName", last_name, limits::NAME_MAX_LEN)?;
        }
        if let Some(email) = &self.email {
            check_email(email)?;
        }
        if let Some(password) = &self.password {
            check_password(password)?;
        }
        Ok(())
    }
}

fn check_password(password: &str) -> AppResult<()> {
    let len = password.chars().count();
    if len < limits::PASSWORD_MIN_LEN {
        return Err(AppError::invalid_input(format!(
            "password must be at least {} characters",
            limits::PASSWORD_MIN_LEN
        )));
    }
    if password.len() > limits::PASSWORD_MAX_LEN {
        return Err(AppError::invalid_input(format!(
            "password must be at most {} bytes",
            limits::PASSWORD_MAX_LEN
        )));
    }
    Ok(())
}

fn check_email(email: &str) -> AppResult<()> {
    check_text("email", email, limits::EMAIL_MAX_LEN)?;
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(AppError::invalid_input("email is not a valid address")),
    }
}
