// ABOUTME: User route handlers: admin account management, self-service profile, job applications
// ABOUTME: Profile routes admit admins or the user named in the path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{extracted, DeletedResponse};
use crate::errors::AppError;
use crate::middleware::{require_admin, require_admin_or_self};
use crate::models::{NewUser, UpdateUser, User, UserDetail};
use crate::resources::ServerResources;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

/// Body of `POST /users`
#[derive(Debug, Serialize)]
pub struct CreatedUserResponse {
    /// The new user
    pub user: User,
    /// Token for the new user
    pub token: String,
}

/// Body of `GET /users`
#[derive(Debug, Serialize)]
pub struct UsersResponse {
    /// All users ordered by username
    pub users: Vec<User>,
}

/// Body of single-user responses
#[derive(Debug, Serialize)]
pub struct UserResponse<T> {
    /// The user
    pub user: T,
}

/// Body of `POST /users/:username/jobs/:id`
#[derive(Debug, Serialize)]
pub struct AppliedResponse {
    /// Job applied to
    pub applied: i64,
}

/// User routes implementation
pub struct UserRoutes;

impl UserRoutes {
    /// Create all user routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/users", get(Self::handle_list).post(Self::handle_create))
            .route(
                "/users/:username",
                get(Self::handle_get)
                    .patch(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .route("/users/:username/jobs/:id", post(Self::handle_apply))
            .with_state(resources)
    }

    /// Handle POST /users - Create a user, possibly an admin (admin)
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        body: Result<Json<NewUser>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let claims = resources.auth_manager.authenticate(&headers);
        require_admin(claims.as_ref())?;

        let Json(request) = extracted(body)?;
        request.validate()?;

        let user = resources.users().register(&request).await?;
        let token = resources.auth_manager.generate_token(&user)?;

        Ok((
            StatusCode::CREATED,
            Json(CreatedUserResponse { user, token }),
        )
            .into_response())
    }

    /// Handle GET /users - List all users (admin)
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let claims = resources.auth_manager.authenticate(&headers);
        require_admin(claims.as_ref())?;

        let users = resources.users().find_all().await?;

        Ok((StatusCode::OK, Json(UsersResponse { users })).into_response())
    }

    /// Handle GET /users/:username - Profile with applied job ids
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(username): Path<String>,
    ) -> Result<Response, AppError> {
        let claims = resources.auth_manager.authenticate(&headers);
        require_admin_or_self(claims.as_ref(), &username)?;

        let user: UserDetail = resources.users().get(&username).await?;

        Ok((StatusCode::OK, Json(UserResponse { user })).into_response())
    }

    /// Handle PATCH /users/:username - Partial profile update
    ///
    /// Only admins may change `isAdmin`.
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(username): Path<String>,
        body: Result<Json<UpdateUser>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let claims = resources.auth_manager.authenticate(&headers);
        let caller = require_admin_or_self(claims.as_ref(), &username)?;

        let Json(update) = extracted(body)?;
        if update.is_admin.is_some() {
            require_admin(Some(caller))?;
        }
        update.validate()?;

        let user = resources.users().update(&username, &update).await?;

        Ok((StatusCode::OK, Json(UserResponse { user })).into_response())
    }

    /// Handle DELETE /users/:username - Delete an account
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(username): Path<String>,
    ) -> Result<Response, AppError> {
        let claims = resources.auth_manager.authenticate(&headers);
        require_admin_or_self(claims.as_ref(), &username)?;

        resources.users().remove(&username).await?;

        Ok((StatusCode::OK, Json(DeletedResponse { deleted: username })).into_response())
    }

    /// Handle POST /users/:username/jobs/:id - Apply to a job
    async fn handle_apply(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        path: Result<Path<(String, i64)>, PathRejection>,
    ) -> Result<Response, AppError> {
        let Path((username, job_id)) = extracted(path)?;

        let claims = resources.auth_manager.authenticate(&headers);
        require_admin_or_self(claims.as_ref(), &username)?;

        resources.users().apply_to_job(&username, job_id).await?;

        Ok((StatusCode::OK, Json(AppliedResponse { applied: job_id })).into_response())
    }
}
