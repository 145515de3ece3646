// ABOUTME: Central authorization guards for routes requiring a login, admin rights, or ownership
// ABOUTME: Every refusal is a 401 so callers cannot probe which rule rejected them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Authorization Guards
//!
//! Handlers resolve the caller with `AuthManager::authenticate` and pass the
//! result here instead of repeating inline checks.
//!
//! # Usage
//!
//! ```rust,no_run
//! use jobly_api::auth::Claims;
//! use jobly_api::middleware::admin_guard::require_admin;
//!
//! fn admin_handler(claims: Option<&Claims>) -> Result<String, jobly_api::errors::AppError> {
//!     let admin = require_admin(claims)?;
//!     Ok(format!("Welcome admin: {}", admin.username))
//! }
//! ```

use crate::auth::Claims;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;

/// Message returned to anonymous or non-admin callers of admin routes
pub const ADMIN_REQUIRED: &str = "YOU MUST BE AN ADMIN TO DO THAT";

/// Require any valid token
///
/// # Errors
///
/// Returns `AuthRequired` for anonymous callers.
pub fn require_logged_in(claims: Option<&Claims>) -> AppResult<&Claims> {
    claims.ok_or_else(|| {
        AppLogger::log_security_event("login_required", "anonymous caller", None);
        AppError::auth_required("Authentication required")
    })
}

/// Require a token carrying admin rights
///
/// # Errors
///
/// Returns `AuthRequired` for anonymous or non-admin callers.
pub fn require_admin(claims: Option<&Claims>) -> AppResult<&Claims> {
    match claims {
        Some(claims) if claims.is_admin => Ok(claims),
        other => {
            AppLogger::log_security_event(
                "admin_required",
                "non-admin caller on admin route",
                other.map(|c| c.username.as_str()),
            );
            Err(AppError::auth_required(ADMIN_REQUIRED))
        }
    }
}

/// Require an admin or the user named `username`
///
/// # Errors
///
/// Returns `AuthRequired` for anonymous callers and for other non-admin users.
pub fn require_admin_or_self<'a>(
    claims: Option<&'a Claims>,
    username: &str,
) -> AppResult<&'a Claims> {
    let claims = require_logged_in(claims)?;
    if claims.is_admin || claims.username == username {
        return Ok(claims);
    }

    AppLogger::log_security_event(
        "owner_required",
        &format!("caller may not act on user {username}"),
        Some(&claims.username),
    );
    Err(AppError::auth_required(
        "YOU MUST BE AN ADMIN OR THE SAME USER TO DO THAT",
    ))
}
