// ABOUTME: Configuration module root
// ABOUTME: Environment-variable driven settings for the HTTP server, database, and auth
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment-based server configuration
pub mod environment;
