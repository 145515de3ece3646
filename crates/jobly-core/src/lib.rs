// ABOUTME: Core types for the Jobly job-board API
// ABOUTME: Foundation crate with error handling, SQL fragment builders, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Jobly Core
//!
//! Foundation crate providing shared types for the Jobly API. Nothing in here
//! performs I/O: the query builders turn typed request data into
//! parameterized SQL fragments plus ordered bind values, and the caller
//! executes them.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **query**: Partial-update `SET` builder and filtered-listing `WHERE` builder
//! - **constants**: Table names, field limits, and defaults

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Parameterized SQL fragment builders
pub mod query;

/// Application constants organized by domain
pub mod constants;
