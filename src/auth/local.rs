// ABOUTME: Local account table with bcrypt password hashes, seeded with the demo account
// ABOUTME: Optionally persisted through a LocalStore so accounts survive restarts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors

use super::{AuthenticatedUser, Authenticator};
use crate::constants::demo;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::storage::{read_json, write_json, LocalStore};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task;
use tracing::info;
use uuid::Uuid;

/// Store key for persisted accounts
pub const ACCOUNTS_KEY: &str = "dietbalancer_accounts";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountRecord {
    user_id: Uuid,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl AccountRecord {
    fn identity(&self) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: self.user_id,
            email: self.email.clone(),
        }
    }
}

/// In-process account table
pub struct LocalAuthenticator {
    accounts: RwLock<HashMap<String, AccountRecord>>,
    store: Option<Arc<dyn LocalStore>>,
    bcrypt_cost: u32,
}

impl LocalAuthenticator {
    /// Memory-only table holding the demo account
    ///
    /// # Errors
    ///
    /// Returns an error if the demo password cannot be hashed
    pub async fn new(bcrypt_cost: u32) -> AppResult<Self> {
        let demo = AccountRecord {
            user_id: Uuid::new_v4(),
            email: demo::ADMIN_EMAIL.to_owned(),
            password_hash: hash_password(demo::PASSWORD, bcrypt_cost).await?,
            created_at: Utc::now(),
        };

        let mut accounts = HashMap::new();
        accounts.insert(demo.email.clone(), demo);

        Ok(Self {
            accounts: RwLock::new(accounts),
            store: None,
            bcrypt_cost,
        })
    }

    /// Table persisted under [`ACCOUNTS_KEY`], loading existing accounts
    ///
    /// # Errors
    ///
    /// Returns an error if stored accounts cannot be read or the demo
    /// password cannot be hashed
    pub async fn persistent(store: Arc<dyn LocalStore>, bcrypt_cost: u32) -> AppResult<Self> {
        let mut authenticator = Self::new(bcrypt_cost).await?;
        let stored: Vec<AccountRecord> = read_json(store.as_ref(), ACCOUNTS_KEY)
            .await?
            .unwrap_or_default();

        {
            let accounts = authenticator.accounts.get_mut();
            for record in stored {
                accounts.entry(record.email.clone()).or_insert(record);
            }
            info!(accounts = accounts.len(), "Loaded local accounts");
        }

        authenticator.store = Some(store);
        Ok(authenticator)
    }

    async fn persist(&self, accounts: &HashMap<String, AccountRecord>) -> AppResult<()> {
        let Some(store) = &self.store else {
            return Ok(());
        };
        let records: Vec<&AccountRecord> = accounts
            .values()
            .filter(|record| record.email != demo::ADMIN_EMAIL)
            .collect();
        write_json(store.as_ref(), ACCOUNTS_KEY, &records).await
    }
}

#[async_trait]
impl Authenticator for LocalAuthenticator {
    async fn sign_in(&self, email: &str, password: &str) -> AppResult<AuthenticatedUser> {
        let record = self.accounts.read().await.get(email).cloned();
        let Some(record) = record else {
            AppLogger::log_auth_event(email, "sign_in", false, Some("unknown account"));
            return Err(AppError::auth_invalid("Invalid email or password"));
        };

        if !verify_password(password, &record.password_hash).await {
            AppLogger::log_auth_event(email, "sign_in", false, Some("wrong password"));
            return Err(AppError::auth_invalid("Invalid email or password"));
        }

        AppLogger::log_auth_event(email, "sign_in", true, None);
        Ok(record.identity())
    }

    async fn sign_up(&self, email: &str, password: &str) -> AppResult<AuthenticatedUser> {
        if self.accounts.read().await.contains_key(email) {
            AppLogger::log_auth_event(email, "sign_up", false, Some("already registered"));
            return Err(AppError::already_exists(format!("Account {email}")));
        }

        let password_hash = hash_password(password, self.bcrypt_cost).await?;
        let record = AccountRecord {
            user_id: Uuid::new_v4(),
            email: email.to_owned(),
            password_hash,
            created_at: Utc::now(),
        };
        let identity = record.identity();

        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(email) {
            return Err(AppError::already_exists(format!("Account {email}")));
        }
        accounts.insert(email.to_owned(), record);
        if let Err(e) = self.persist(&accounts).await {
            accounts.remove(email);
            AppLogger::log_auth_event(email, "sign_up", false, Some("account not saved"));
            return Err(e);
        }
        drop(accounts);

        AppLogger::log_auth_event(email, "sign_up", true, None);
        Ok(identity)
    }
}

/// Hash a password on the blocking pool
async fn hash_password(password: &str, cost: u32) -> AppResult<String> {
    let password = password.to_owned();
    task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
        .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))
}

/// Verify a password against a bcrypt hash on the blocking pool
async fn verify_password(password: &str, hash: &str) -> bool {
    let password = password.to_owned();
    let hash = hash.to_owned();

    task::spawn_blocking(move || bcrypt::verify(&password, &hash).unwrap_or(false))
        .await
        .unwrap_or(false)
}
