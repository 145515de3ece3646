// ABOUTME: Entities returned by the API and the request bodies that create or modify them
// ABOUTME: Shared validation helpers keep every body's checks consistent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Entities serialize with camelCase keys (`numEmployees`, `companyHandle`,
//! `isAdmin`) while storage columns are snake case; the data managers own
//! that mapping.
//!
//! Update bodies distinguish an absent field from an explicit `null` with
//! `Option<Option<T>>`: the outer `None` leaves the column alone, and
//! `Some(None)` clears it.

/// Companies and their request bodies
pub mod company;
/// Job postings and their request bodies
pub mod job;
/// Users, credentials, and their request bodies
pub mod user;

pub use company::{Company, CompanyDetail, NewCompany, UpdateCompany};
pub use job::{Job, JobSummary, NewJob, UpdateJob};
pub use jobly_core::query::{CompanyFilter, JobFilter};
pub use user::{LoginRequest, NewUser, RegisterUser, UpdateUser, User, UserDetail};

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Deserializer};

/// Deserialize a present field as `Some`, so a JSON `null` becomes `Some(None)`
///
/// Combine with `#[serde(default)]` so a missing field stays `None`.
///
/// # Errors
///
/// Propagates the inner deserializer's error.
pub fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

fn check_text(field: &str, value: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::invalid_input(format!("{field} must not be empty")));
    }
    if value.chars().count() > max_len {
        return Err(AppError::invalid_input(format!(
            "{field} must be at most {max_len} characters"
        )));
    }
    Ok(())
}

fn check_non_negative(field: &str, value: i64) -> AppResult<()> {
    if value < 0 {
        return Err(AppError::invalid_input(format!(
            "{field} must not be negative"
        )));
    }
    Ok(())
}

/// Lowercase ASCII letters, digits, and hyphens
fn check_slug(field: &str, value: &str, max_len: usize) -> AppResult<()> {
    check_text(field, value, max_len)?;
    if !value
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(AppError::invalid_input(format!(
            "{field} may only contain lowercase letters, digits, and hyphens"
        )));
    }
    Ok(())
}
