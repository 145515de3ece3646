// ABOUTME: HTTP middleware module root
// ABOUTME: Authorization guards used by handlers and the CORS layer used by the router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Login, admin, and ownership guards
pub mod admin_guard;
/// Cross-origin configuration
pub mod cors;

pub use admin_guard::{require_admin, require_admin_or_self, require_logged_in};
pub use cors::setup_cors;
