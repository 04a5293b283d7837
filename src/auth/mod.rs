// ABOUTME: Authentication contract, local account table and session management
// ABOUTME: Email/password in, authenticated user or failure out
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors

//! # Authentication
//!
//! One contract ([`Authenticator`]) for both sign-in and sign-up. The
//! [`SessionManager`] validates form input, calls the authenticator and owns
//! the local session record. Nutrition code never sees identity.

/// Local bcrypt-backed account table
pub mod local;
/// Session record lifecycle
pub mod session;
/// Credential input validation
pub mod validation;

pub use local::LocalAuthenticator;
pub use session::SessionManager;
pub use validation::{validate_confirmation, validate_email, validate_password};

use crate::errors::AppResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sign-in request
#[derive(Debug, Clone, Deserialize)]
pub struct SignInRequest {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
    /// Remember the email for the next sign-in
    #[serde(default)]
    pub remember: bool,
}

/// Sign-up request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    /// Account email
    pub email: String,
    /// Chosen password
    pub password: String,
    /// Password typed a second time
    pub confirm_password: String,
}

/// Identity returned by a successful authentication
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    /// Account identifier
    pub user_id: Uuid,
    /// Account email
    pub email: String,
}

/// Email/password authentication contract
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Verify credentials of an existing account
    async fn sign_in(&self, email: &str, password: &str) -> AppResult<AuthenticatedUser>;

    /// Create an account and return its identity
    async fn sign_up(&self, email: &str, password: &str) -> AppResult<AuthenticatedUser>;
}
