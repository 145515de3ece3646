// ABOUTME: User persistence: registration, credential checks, partial update, job applications
// ABOUTME: Passwords are stored as bcrypt hashes and never returned from this layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::bind_values;
use crate::auth::{hash_password, verify_password};
use crate::constants::tables;
use crate::errors::{AppError, AppResult};
use crate::models::{NewUser, UpdateUser, User, UserDetail};
use jobly_core::query::{sql_for_partial_update, FieldNameMap, UpdatePayload};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::{debug, info, warn};

/// JSON field names that differ from their columns
const USER_COLUMNS: FieldNameMap<'static> = FieldNameMap::new(&[
    ("firstName", "first_name"),
    ("lastName", "last_name"),
    ("isAdmin", "is_admin"),
]);

const USER_FIELDS: &str = "username, first_name, last_name, email, is_admin";

/// User database operations manager
pub struct UsersManager {
    pool: SqlitePool,
    bcrypt_cost: u32,
}

impl UsersManager {
    /// Create a new users manager
    #[must_use]
    pub const fn new(pool: SqlitePool, bcrypt_cost: u32) -> Self {
        Self { pool, bcrypt_cost }
    }

    /// Check a username/password pair
    ///
    /// # Errors
    ///
    /// Returns `AuthInvalid` if the user is unknown or the password does not
    /// match, or a database error.
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<User> {
        let row = sqlx::query(&format!(
            "SELECT {USER_FIELDS}, password FROM users WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to look up user: {e}")))?;

        if let Some(row) = row {
            let hash: String = row.try_get("password")?;
            if verify_password(password.to_owned(), hash).await? {
                return row_to_user(&row);
            }
        }

        warn!(%username, "Rejected login attempt");
        Err(AppError::auth_invalid("Invalid username/password"))
    }

    /// Register a user
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the username is taken, or a database or
    /// hashing error.
    pub async fn register(&self, user: &NewUser) -> AppResult<User> {
        let existing = sqlx::query("SELECT username FROM users WHERE username = $1")
            .bind(&user.username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to check username: {e}")))?;
        if existing.is_some() {
            return Err(AppError::invalid_input(format!(
                "Duplicate username: {}",
                user.username
            )));
        }

        let hash = hash_password(user.password.clone(), self.bcrypt_cost).await?;

        let row = sqlx::query(&format!(
            "INSERT INTO users (username, password, first_name, last_name, email, is_admin) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {USER_FIELDS}"
        ))
        .bind(&user.username)
        .bind(&hash)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(user.is_admin)
        .fetch_one(&self.pool)
        .await?;

        info!(username = %user.username, is_admin = user.is_admin, "Registered user");
        row_to_user(&row)
    }

    /// List all users, ordered by username
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        let rows = sqlx::query(&format!(
            "SELECT {USER_FIELDS} FROM users ORDER BY username"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list users: {e}")))?;

        rows.iter().map(row_to_user).collect()
    }

    /// Get a user and the ids of the jobs they applied to
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no user has `username`, or a database error.
    pub async fn get(&self, username: &str) -> AppResult<UserDetail> {
        let row = sqlx::query(&format!(
            "SELECT {USER_FIELDS} FROM users WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get user: {e}")))?
        .ok_or_else(|| AppError::not_found(format!("User {username}")))?;

        let user = row_to_user(&row)?;

        let jobs = sqlx::query_scalar::<_, i64>(
            "SELECT job_id FROM applications WHERE username = $1 ORDER BY job_id",
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get applications: {e}")))?;

        Ok(UserDetail { user, jobs })
    }

    /// Apply a partial update; a new password is hashed before storage
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `update` has no fields, `ResourceNotFound`
    /// if no user has `username`, or a database or hashing error.
    pub async fn update(&self, username: &str, update: &UpdateUser) -> AppResult<User> {
        let mut payload = UpdatePayload::new();
        payload.set_present("firstName", update.first_name.as_deref());
        payload.set_present("lastName", update.last_name.as_deref());
        payload.set_present("email", update.email.as_deref());
        payload.set_present("isAdmin", update.is_admin);
        if let Some(password) = &update.password {
            payload.set(
                "password",
                hash_password(password.clone(), self.bcrypt_cost).await?,
            );
        }

        let (sql, values) = sql_for_partial_update(&payload, USER_COLUMNS)?.into_update(
            tables::USERS,
            "username",
            username,
            USER_FIELDS,
        );
        debug!(fields = payload.len(), "Updating user");

        let row = bind_values(sqlx::query(&sql), &values)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {username}")))?;

        info!(%username, "Updated user");
        row_to_user(&row)
    }

    /// Delete a user and, by cascade, their applications
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no user has `username`, or a database error.
    pub async fn remove(&self, username: &str) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE username = $1")
            .bind(username)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete user: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("User {username}")));
        }

        info!(%username, "Deleted user");
        Ok(())
    }

    /// Record that `username` applied to job `job_id`; applying twice is a no-op
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the user or job does not exist, or a
    /// database error.
    pub async fn apply_to_job(&self, username: &str, job_id: i64) -> AppResult<()> {
        let user = sqlx::query("SELECT 1 FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to look up user: {e}")))?;
        if user.is_none() {
            return Err(AppError::not_found(format!("User {username}")));
        }

        let job = sqlx::query("SELECT 1 FROM jobs WHERE id = $1")
            .bind(job_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to look up job: {e}")))?;
        if job.is_none() {
            return Err(AppError::not_found(format!("Job {job_id}")));
        }

        sqlx::query(&format!(
            "INSERT INTO {} (username, job_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
            tables::APPLICATIONS
        ))
        .bind(username)
        .bind(job_id)
        .execute(&self.pool)
        .await?;

        info!(%username, job_id, "Recorded job application");
        Ok(())
    }
}

fn row_to_user(row: &SqliteRow) -> AppResult<User> {
    Ok(User {
        username: row.try_get("username")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        email: row.try_get("email")?,
        is_admin: row.try_get("is_admin")?,
    })
}
