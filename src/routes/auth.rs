// ABOUTME: Authentication routes for sign-in, sign-up, logout and the current session
// ABOUTME: Thin handlers over SessionManager
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors

use super::AppResources;
use crate::auth::{SignInRequest, SignUpRequest};
use crate::errors::AppError;
use crate::models::Session;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Current session state
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    /// Signed-in session, if any
    pub session: Option<Session>,
    /// Email remembered from a previous sign-in
    pub remembered_email: Option<String>,
}

/// Authentication routes handler
pub struct AuthRoutes;

impl AuthRoutes {
    /// Create all authentication routes
    pub fn routes(resources: Arc<AppResources>) -> Router {
        Router::new()
            .route("/api/auth/signin", post(Self::handle_sign_in))
            .route("/api/auth/signup", post(Self::handle_sign_up))
            .route("/api/auth/logout", post(Self::handle_logout))
            .route("/api/auth/session", get(Self::handle_session))
            .with_state(resources)
    }

    /// Handle POST /api/auth/signin - Sign in an existing account
    async fn handle_sign_in(
        State(resources): State<Arc<AppResources>>,
        Json(request): Json<SignInRequest>,
    ) -> Result<Response, AppError> {
        let session = resources.sessions.sign_in(&request).await?;
        Ok((StatusCode::OK, Json(session)).into_response())
    }

    /// Handle POST /api/auth/signup - Create an account and sign in
    async fn handle_sign_up(
        State(resources): State<Arc<AppResources>>,
        Json(request): Json<SignUpRequest>,
    ) -> Result<Response, AppError> {
        let session = resources.sessions.sign_up(&request).await?;
        Ok((StatusCode::CREATED, Json(session)).into_response())
    }

    /// Handle POST /api/auth/logout - End the session and clear the food log
    async fn handle_logout(
        State(resources): State<Arc<AppResources>>,
    ) -> Result<Response, AppError> {
        resources.sessions.logout().await?;
        Ok((StatusCode::NO_CONTENT, ()).into_response())
    }

    /// Handle GET /api/auth/session - Current session and remembered email
    async fn handle_session(
        State(resources): State<Arc<AppResources>>,
    ) -> Result<Response, AppError> {
        let response = SessionResponse {
            session: resources.sessions.current().await?,
            remembered_email: resources.sessions.remembered_email().await?,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
