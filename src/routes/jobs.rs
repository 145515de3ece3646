// ABOUTME: Job route handlers: public listing and lookup, admin-only create, update, delete
// ABOUTME: Non-numeric job ids and unknown filter fields are rejected with 400
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{extracted, DeletedResponse};
use crate::errors::AppError;
use crate::middleware::require_admin;
use crate::models::{Job, JobFilter, NewJob, UpdateJob};
use crate::resources::ServerResources;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

/// Body of `GET /jobs`
#[derive(Debug, Serialize)]
pub struct JobsResponse {
    /// Matching jobs ordered by title
    pub jobs: Vec<Job>,
}

/// Body of single-job responses
#[derive(Debug, Serialize)]
pub struct JobResponse {
    /// The job
    pub job: Job,
}

/// Job routes implementation
pub struct JobRoutes;

impl JobRoutes {
    /// Create all job routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/jobs", get(Self::handle_list).post(Self::handle_create))
            .route(
                "/jobs/:id",
                get(Self::handle_get)
                    .patch(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    /// Handle POST /jobs - Create a job (admin)
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        body: Result<Json<NewJob>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let claims = resources.auth_manager.authenticate(&headers);
        require_admin(claims.as_ref())?;

        let Json(request) = extracted(body)?;
        request.validate()?;

        let job = resources.jobs().create(&request).await?;

        Ok((StatusCode::CREATED, Json(JobResponse { job })).into_response())
    }

    /// Handle GET /jobs - List jobs, optionally filtered
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        query: Result<Query<JobFilter>, QueryRejection>,
    ) -> Result<Response, AppError> {
        let Query(filter) = extracted(query)?;

        let jobs = resources.jobs().find_all(&filter).await?;

        Ok((StatusCode::OK, Json(JobsResponse { jobs })).into_response())
    }

    /// Handle GET /jobs/:id - Look up one job
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        id: Result<Path<i64>, PathRejection>,
    ) -> Result<Response, AppError> {
        let Path(id) = extracted(id)?;

        let job = resources.jobs().get(id).await?;

        Ok((StatusCode::OK, Json(JobResponse { job })).into_response())
    }

    /// Handle PATCH /jobs/:id - Partial update of title, salary, equity (admin)
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        id: Result<Path<i64>, PathRejection>,
        body: Result<Json<UpdateJob>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let claims = resources.auth_manager.authenticate(&headers);
        require_admin(claims.as_ref())?;

        let Path(id) = extracted(id)?;
        let Json(update) = extracted(body)?;
        update.validate()?;

        let job = resources.jobs().update(id, &update).await?;

        Ok((StatusCode::OK, Json(JobResponse { job })).into_response())
    }

    /// Handle DELETE /jobs/:id - Delete a job (admin)
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        id: Result<Path<i64>, PathRejection>,
    ) -> Result<Response, AppError> {
        let claims = resources.auth_manager.authenticate(&headers);
        require_admin(claims.as_ref())?;

        let Path(id) = extracted(id)?;
        resources.jobs().remove(id).await?;

        Ok((StatusCode::OK, Json(DeletedResponse {
            deleted: id.to_string(),
        }))
        .into_response())
    }
}
