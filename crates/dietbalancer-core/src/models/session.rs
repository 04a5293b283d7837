// ABOUTME: Local session record written after a successful sign-in or sign-up
// ABOUTME: Session, UserRole and LoginType definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role carried by a session
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// May edit the food catalog
    Admin,
    /// Regular user
    User,
}

impl UserRole {
    /// Whether this role may use the catalog editor
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Stable string form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

/// How the session was obtained
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LoginType {
    /// Existing account signed in
    Login,
    /// Account created and signed in
    Signup,
}

/// Authoritative local session record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Account email
    pub email: String,
    /// Account identifier issued by the authenticator
    pub user_id: Uuid,
    /// Role derived from the account
    pub role: UserRole,
    /// Opaque session token
    pub token: String,
    /// Sign-in or sign-up
    pub login_type: LoginType,
    /// When the session was created
    pub created_at: DateTime<Utc>,
}

/// Email remembered for the next sign-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RememberedLogin {
    /// Remembered email address
    pub email: String,
}
