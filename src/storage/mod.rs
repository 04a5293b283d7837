// ABOUTME: Local key/value storage abstraction and the repositories built on it
// ABOUTME: LocalStore trait with memory and file backends, plus the food log repository
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors

//! # Local Storage
//!
//! Data lives on the local device as string values under fixed keys
//! (`foodLogs`, `dietbalancer_auth`, `dietbalancer_login`). A missing key reads
//! as absent; a document that cannot be parsed is a serialization error.

/// File-backed store, one JSON document per key
pub mod file;
/// Store-backed food log repository
pub mod food_log_repository;
/// In-memory store for tests and ephemeral sessions
pub mod memory;

pub use file::FileStore;
pub use food_log_repository::FoodLogRepositoryImpl;
pub use memory::MemoryStore;

use crate::errors::AppResult;
use crate::models::LogEntry;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// String key/value store with local-device semantics
#[async_trait]
pub trait LocalStore: Send + Sync {
    /// Value stored under `key`, if any
    async fn get_item(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set_item(&self, key: &str, value: &str) -> AppResult<()>;

    /// Delete `key`; deleting a missing key succeeds
    async fn remove_item(&self, key: &str) -> AppResult<()>;
}

/// Read and deserialize a JSON document
///
/// # Errors
///
/// Returns a storage error if the read fails and a serialization error if
/// the document is not valid JSON for `T`
pub async fn read_json<T: DeserializeOwned>(
    store: &dyn LocalStore,
    key: &str,
) -> AppResult<Option<T>> {
    match store.get_item(key).await? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Serialize and write a JSON document
///
/// # Errors
///
/// Returns a serialization error if `value` cannot be encoded and a storage
/// error if the write fails
pub async fn write_json<T: Serialize + Sync>(
    store: &dyn LocalStore,
    key: &str,
    value: &T,
) -> AppResult<()> {
    let raw = serde_json::to_string(value)?;
    store.set_item(key, &raw).await
}

/// Persistence collaborator for the food log
#[async_trait]
pub trait FoodLogRepository: Send + Sync {
    /// Stored entries; an absent log is empty
    async fn load(&self) -> AppResult<Vec<LogEntry>>;

    /// Replace the stored log
    async fn save(&self, entries: &[LogEntry]) -> AppResult<()>;

    /// Delete the stored log
    async fn clear(&self) -> AppResult<()>;
}
