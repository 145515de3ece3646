// ABOUTME: Authentication route handlers for login and self-registration
// ABOUTME: Both endpoints answer with a signed token for the resulting user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::extracted;
use crate::errors::AppError;
use crate::logging::AppLogger;
use crate::models::{LoginRequest, NewUser, RegisterUser};
use crate::resources::ServerResources;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

/// Body of token responses
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    /// Signed bearer token
    pub token: String,
}

/// Authentication routes implementation
pub struct AuthRoutes;

impl AuthRoutes {
    /// Create all authentication routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/auth/token", post(Self::handle_token))
            .route("/auth/register", post(Self::handle_register))
            .with_state(resources)
    }

    /// Handle POST /auth/token - Exchange credentials for a token
    async fn handle_token(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<LoginRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = extracted(body)?;

        let user = match resources
            .users()
            .authenticate(&request.username, &request.password)
            .await
        {
            Ok(user) => user,
            Err(e) => {
                AppLogger::log_auth_event(&request.username, "login", false, Some(&e.message));
                return Err(e);
            }
        };

        let token = resources.auth_manager.generate_token(&user)?;
        AppLogger::log_auth_event(&user.username, "login", true, None);

        Ok((StatusCode::OK, Json(TokenResponse { token })).into_response())
    }

    /// Handle POST /auth/register - Create a non-admin account and sign it in
    async fn handle_register(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<RegisterUser>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = extracted(body)?;
        let new_user = NewUser::from(request);
        new_user.validate()?;

        let user = resources.users().register(&new_user).await?;
        let token = resources.auth_manager.generate_token(&user)?;
        AppLogger::log_auth_event(&user.username, "register", true, None);

        Ok((StatusCode::CREATED, Json(TokenResponse { token })).into_response())
    }
}
