// ABOUTME: Session lifecycle over the local store: sign-in, sign-up, guards and logout
// ABOUTME: Writes dietbalancer_auth and dietbalancer_login, clears foodLogs on logout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors

use super::validation::{validate_confirmation, validate_email, validate_password};
use super::{AuthenticatedUser, Authenticator, SignInRequest, SignUpRequest};
use crate::constants::{auth, demo, storage_keys};
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::models::{LoginType, RememberedLogin, Session, UserRole};
use crate::storage::{read_json, write_json, FoodLogRepository, LocalStore};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Owns the local session record
#[derive(Clone)]
pub struct SessionManager {
    store: Arc<dyn LocalStore>,
    authenticator: Arc<dyn Authenticator>,
    food_log: Arc<dyn FoodLogRepository>,
}

impl SessionManager {
    /// Create a manager over the given collaborators
    #[must_use]
    pub fn new(
        store: Arc<dyn LocalStore>,
        authenticator: Arc<dyn Authenticator>,
        food_log: Arc<dyn FoodLogRepository>,
    ) -> Self {
        Self {
            store,
            authenticator,
            food_log,
        }
    }

    /// Validate and sign in, writing the session record
    ///
    /// With `remember` the email is stored for the next sign-in; without it
    /// any remembered email is forgotten.
    ///
    /// # Errors
    ///
    /// Returns a validation error for malformed input, `AuthInvalid` for
    /// rejected credentials, or a storage error
    pub async fn sign_in(&self, request: &SignInRequest) -> AppResult<Session> {
        validate_email(&request.email)?;
        validate_password(&request.password)?;

        let user = self
            .authenticator
            .sign_in(&request.email, &request.password)
            .await?;

        if request.remember {
            let remembered = RememberedLogin {
                email: request.email.clone(),
            };
            write_json(
                self.store.as_ref(),
                storage_keys::REMEMBERED_LOGIN,
                &remembered,
            )
            .await?;
        } else {
            self.store
                .remove_item(storage_keys::REMEMBERED_LOGIN)
                .await?;
        }

        self.start_session(user, LoginType::Login).await
    }

    /// Validate, create the account and sign in
    ///
    /// # Errors
    ///
    /// Returns a validation error for malformed input or a mismatched
    /// confirmation, `ResourceAlreadyExists` for a taken email, or a storage error
    pub async fn sign_up(&self, request: &SignUpRequest) -> AppResult<Session> {
        validate_email(&request.email)?;
        validate_password(&request.password)?;
        validate_confirmation(&request.password, &request.confirm_password)?;

        let user = self
            .authenticator
            .sign_up(&request.email, &request.password)
            .await?;

        self.store
            .remove_item(storage_keys::REMEMBERED_LOGIN)
            .await?;

        self.start_session(user, LoginType::Signup).await
    }

    /// Current session, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the session record cannot be read
    pub async fn current(&self) -> AppResult<Option<Session>> {
        read_json(self.store.as_ref(), storage_keys::AUTH_SESSION).await
    }

    /// Current session or `AuthRequired`
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` when nobody is signed in
    pub async fn require_session(&self) -> AppResult<Session> {
        self.current().await?.ok_or_else(AppError::auth_required)
    }

    /// Current admin session
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` when nobody is signed in and `PermissionDenied`
    /// for a non-admin session
    pub async fn require_admin(&self) -> AppResult<Session> {
        let session = self.require_session().await?;
        if !session.role.is_admin() {
            AppLogger::log_security_event(
                "admin_access_denied",
                "catalog editor requires the admin role",
                Some(&session.email),
            );
            return Err(AppError::permission_denied(
                "Catalog editing requires an admin account",
            ));
        }
        Ok(session)
    }

    /// Email remembered from a previous sign-in
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be read
    pub async fn remembered_email(&self) -> AppResult<Option<String>> {
        let remembered: Option<RememberedLogin> =
            read_json(self.store.as_ref(), storage_keys::REMEMBERED_LOGIN).await?;
        Ok(remembered.map(|r| r.email))
    }

    /// Remove the session, the remembered email and the food log
    ///
    /// # Errors
    ///
    /// Returns a storage error if any record cannot be removed
    pub async fn logout(&self) -> AppResult<()> {
        let email = self.current().await.ok().flatten().map(|s| s.email);

        self.store.remove_item(storage_keys::AUTH_SESSION).await?;
        self.store
            .remove_item(storage_keys::REMEMBERED_LOGIN)
            .await?;
        self.food_log.clear().await?;

        AppLogger::log_auth_event(email.as_deref().unwrap_or("anonymous"), "logout", true, None);
        Ok(())
    }

    async fn start_session(
        &self,
        user: AuthenticatedUser,
        login_type: LoginType,
    ) -> AppResult<Session> {
        let role = role_for(&user.email);
        let session = Session {
            email: user.email,
            user_id: user.user_id,
            role,
            token: format!("{}{}", auth::SESSION_TOKEN_PREFIX, Uuid::new_v4().simple()),
            login_type,
            created_at: Utc::now(),
        };

        write_json(self.store.as_ref(), storage_keys::AUTH_SESSION, &session).await?;
        info!(email = %session.email, role = session.role.as_str(), "Session started");
        Ok(session)
    }
}

/// Role carried by sessions for `email`
#[must_use]
pub fn role_for(email: &str) -> UserRole {
    if email == demo::ADMIN_EMAIL {
        UserRole::Admin
    } else {
        UserRole::User
    }
}
