// ABOUTME: Route module root and router assembly
// ABOUTME: Merges per-resource routers and applies tracing, request-id, CORS, and limit layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # HTTP Routes
//!
//! Each resource has a unit struct exposing `routes(resources)`.
//! [`build_router`] merges them and wraps the result in the shared layers.

/// Token issuance and self-registration
pub mod auth;
/// Company CRUD
pub mod companies;
/// Liveness check
pub mod health;
/// Job CRUD
pub mod jobs;
/// User management and job applications
pub mod users;

pub use auth::AuthRoutes;
pub use companies::CompanyRoutes;
pub use health::HealthRoutes;
pub use jobs::JobRoutes;
pub use users::UserRoutes;

use crate::errors::{AppError, AppResult};
use crate::middleware::setup_cors;
use crate::resources::ServerResources;
use axum::Router;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Body of delete responses: `{"deleted": "<key>"}`
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    /// Key of the removed record
    pub deleted: String,
}

/// Turn an extractor rejection into a 400 with the same error body as
/// every other failure
pub(crate) fn extracted<T, R: std::fmt::Display>(extraction: Result<T, R>) -> AppResult<T> {
    extraction.map_err(|rejection| AppError::invalid_input(rejection.to_string()))
}

/// Build the complete application router
#[must_use]
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let config = Arc::clone(&resources.config);

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(AuthRoutes::routes(Arc::clone(&resources)))
        .merge(CompanyRoutes::routes(Arc::clone(&resources)))
        .merge(JobRoutes::routes(Arc::clone(&resources)))
        .merge(UserRoutes::routes(resources))
        .layer(RequestBodyLimitLayer::new(config.http.max_body_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.http.request_timeout_secs,
        )))
        .layer(setup_cors(&config))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
