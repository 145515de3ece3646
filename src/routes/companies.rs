// ABOUTME: Company route handlers: public listing and detail, admin-only create, update, delete
// ABOUTME: Query-string filters and JSON bodies reject unknown fields with 400
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{extracted, DeletedResponse};
use crate::errors::AppError;
use crate::middleware::require_admin;
use crate::models::{Company, CompanyDetail, CompanyFilter, NewCompany, UpdateCompany};
use crate::resources::ServerResources;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

/// Body of `GET /companies`
#[derive(Debug, Serialize)]
pub struct CompaniesResponse {
    /// Matching companies ordered by name
    pub companies: Vec<Company>,
}

/// Body of single-company responses
#[derive(Debug, Serialize)]
pub struct CompanyResponse<T> {
    /// The company
    pub company: T,
}

/// Company routes implementation
pub struct CompanyRoutes;

impl CompanyRoutes {
    /// Create all company routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/companies",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                "/companies/:handle",
                get(Self::handle_get)
                    .patch(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    /// Handle POST /companies - Create a company (admin)
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        body: Result<Json<NewCompany>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let claims = resources.auth_manager.authenticate(&headers);
        require_admin(claims.as_ref())?;

        let Json(request) = extracted(body)?;
        request.validate()?;

        let company = resources.companies().create(&request).await?;

        Ok((StatusCode::CREATED, Json(CompanyResponse { company })).into_response())
    }

    /// Handle GET /companies - List companies, optionally filtered
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        query: Result<Query<CompanyFilter>, QueryRejection>,
    ) -> Result<Response, AppError> {
        let Query(filter) = extracted(query)?;

        let companies = resources.companies().find_all(&filter).await?;

        Ok((StatusCode::OK, Json(CompaniesResponse { companies })).into_response())
    }

    /// Handle GET /companies/:handle - Company detail with its jobs
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(handle): Path<String>,
    ) -> Result<Response, AppError> {
        let company: CompanyDetail = resources.companies().get(&handle).await?;

        Ok((StatusCode::OK, Json(CompanyResponse { company })).into_response())
    }

    /// Handle PATCH /companies/:handle - Partial update (admin)
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(handle): Path<String>,
        body: Result<Json<UpdateCompany>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let claims = resources.auth_manager.authenticate(&headers);
        require_admin(claims.as_ref())?;

        let Json(update) = extracted(body)?;
        update.validate()?;

        let company = resources.companies().update(&handle, &update).await?;

        Ok((StatusCode::OK, Json(CompanyResponse { company })).into_response())
    }

    /// Handle DELETE /companies/:handle - Delete a company (admin)
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(handle): Path<String>,
    ) -> Result<Response, AppError> {
        let claims = resources.auth_manager.authenticate(&headers);
        require_admin(claims.as_ref())?;

        resources.companies().remove(&handle).await?;

        Ok((StatusCode::OK, Json(DeletedResponse { deleted: handle })).into_response())
    }
}
