// ABOUTME: Database pool, schema migrations, and access to the per-entity managers
// ABOUTME: SQLite through sqlx; in-memory databases share one connection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database Management
//!
//! [`Database`] owns the connection pool and creates the schema on startup.
//! Each entity has a manager holding a clone of the pool:
//! [`CompaniesManager`], [`JobsManager`], and [`UsersManager`].

mod bind;
mod companies;
mod jobs;
mod users;

pub use companies::CompaniesManager;
pub use jobs::JobsManager;
pub use users::UsersManager;

pub(crate) use bind::bind_values;

use crate::constants::defaults;
use crate::errors::AppResult;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::{debug, info};

/// Database handle shared by all requests
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to `database_url`, creating the file if needed, and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the connection fails, or a
    /// migration statement fails.
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        // Every connection to `:memory:` opens a separate database
        let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(defaults::DB_MAX_CONNECTIONS)
        };

        let pool = pool_options.connect_with(options).await?;
        info!(in_memory, "Connected to SQLite database");

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Company data access
    #[must_use]
    pub fn companies(&self) -> CompaniesManager {
        CompaniesManager::new(self.pool.clone())
    }

    /// Job data access
    #[must_use]
    pub fn jobs(&self) -> JobsManager {
        JobsManager::new(self.pool.clone())
    }

    /// User data access, hashing new passwords at `bcrypt_cost`
    #[must_use]
    pub fn users(&self, bcrypt_cost: u32) -> UsersManager {
        UsersManager::new(self.pool.clone(), bcrypt_cost)
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if a schema statement fails.
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS companies (
                handle TEXT PRIMARY KEY CHECK (handle = lower(handle)),
                name TEXT UNIQUE NOT NULL,
                name_search TEXT NOT NULL,
                num_employees INTEGER CHECK (num_employees >= 0),
                description TEXT NOT NULL,
                logo_url TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS jobs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                title_search TEXT NOT NULL,
                salary INTEGER CHECK (salary >= 0),
                equity REAL CHECK (equity >= 0 AND equity <= 1.0),
                company_handle TEXT NOT NULL REFERENCES companies(handle) ON DELETE CASCADE
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                username TEXT PRIMARY KEY,
                password TEXT NOT NULL,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                email TEXT NOT NULL CHECK (instr(email, '@') > 1),
                is_admin BOOLEAN NOT NULL DEFAULT FALSE
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS applications (
                username TEXT NOT NULL REFERENCES users(username) ON DELETE CASCADE,
                job_id INTEGER NOT NULL REFERENCES jobs(id) ON DELETE CASCADE,
                PRIMARY KEY (username, job_id)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_jobs_company ON jobs(company_handle)")
            .execute(&self.pool)
            .await?;

        debug!("Database schema ready");
        Ok(())
    }
}
