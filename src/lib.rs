// ABOUTME: Main library entry point for the Jobly job-board API
// ABOUTME: Exposes configuration, persistence, auth, and HTTP routing for companies, jobs, and users
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Jobly API
//!
//! A REST backend for a job board: companies post jobs, users browse and
//! apply. Mutating routes are gated by JWT bearer tokens.
//!
//! ## Architecture
//!
//! - **Query builders** (`jobly_core::query`): partial-update `SET` clauses
//!   and filtered-listing `WHERE` clauses with `$n` placeholders
//! - **Database**: `SQLite` through `sqlx`, one manager per entity
//! - **Routes**: axum routers per resource, sharing [`resources::ServerResources`]
//! - **Auth**: HS256 tokens and bcrypt password hashes
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use jobly_api::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Jobly configured on port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Authentication tokens and password hashing
pub mod auth;

/// Environment-driven server configuration
pub mod config;

/// Constants shared with the foundation crate
pub mod constants;

/// Connection pool, schema, and per-entity data managers
pub mod database;

/// Unified error types
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware: authorization guards and CORS
pub mod middleware;

/// Entities and request bodies
pub mod models;

/// Shared server state
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// HTTP server lifecycle
pub mod server;
