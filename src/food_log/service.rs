// ABOUTME: Load-mutate-save workflow over the food log repository
// ABOUTME: Serializes mutations so concurrent callers never lose an entry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors

use super::{add_entry, clear_log, custom_add, quick_add, remove_entry, EntryIdGenerator};
use crate::catalog::CustomFoodForm;
use crate::errors::AppResult;
use crate::logging::AppLogger;
use crate::models::{EntryId, FoodItem, LogEntry};
use crate::storage::FoodLogRepository;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Applies food log mutations and persists the result
pub struct FoodLogService {
    repository: Arc<dyn FoodLogRepository>,
    ids: EntryIdGenerator,
    write_lock: Mutex<()>,
}

impl FoodLogService {
    /// Service over `repository` with a wall-clock id generator
    #[must_use]
    pub fn new(repository: Arc<dyn FoodLogRepository>) -> Self {
        Self::with_ids(repository, EntryIdGenerator::default())
    }

    /// Service with an explicit id generator
    #[must_use]
    pub fn with_ids(repository: Arc<dyn FoodLogRepository>, ids: EntryIdGenerator) -> Self {
        Self {
            repository,
            ids,
            write_lock: Mutex::new(()),
        }
    }

    /// Current entries
    ///
    /// # Errors
    ///
    /// Returns an error if the log cannot be loaded
    pub async fn entries(&self) -> AppResult<Vec<LogEntry>> {
        self.repository.load().await
    }

    /// Log a food snapshot
    ///
    /// # Errors
    ///
    /// Returns an error if the log cannot be loaded or saved
    pub async fn add(&self, food: FoodItem) -> AppResult<Vec<LogEntry>> {
        let _guard = self.write_lock.lock().await;
        let entries = self.repository.load().await?;
        let next = add_entry(&entries, food, &self.ids);
        let added = next.last().map(|entry| entry.id);
        self.commit("add", next, added).await
    }

    /// Log the catalog food named `name`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown name, or a storage error
    pub async fn quick_add(&self, catalog: &[FoodItem], name: &str) -> AppResult<Vec<LogEntry>> {
        let _guard = self.write_lock.lock().await;
        let entries = self.repository.load().await?;
        let next = quick_add(&entries, catalog, name, &self.ids)?;
        let added = next.last().map(|entry| entry.id);
        self.commit("quick_add", next, added).await
    }

    /// Validate and log a custom food
    ///
    /// # Errors
    ///
    /// Returns a validation error for a bad form, or a storage error
    pub async fn custom_add(&self, form: CustomFoodForm) -> AppResult<Vec<LogEntry>> {
        let _guard = self.write_lock.lock().await;
        let entries = self.repository.load().await?;
        let next = custom_add(&entries, form, &self.ids)?;
        let added = next.last().map(|entry| entry.id);
        self.commit("custom_add", next, added).await
    }

    /// Remove an entry; an unknown id leaves the log unchanged
    ///
    /// # Errors
    ///
    /// Returns an error if the log cannot be loaded or saved
    pub async fn remove(&self, id: EntryId) -> AppResult<Vec<LogEntry>> {
        let _guard = self.write_lock.lock().await;
        let entries = self.repository.load().await?;
        let next = remove_entry(&entries, id);
        if next.len() == entries.len() {
            return Ok(entries);
        }
        self.commit("remove", next, None).await
    }

    /// Empty the log and drop its stored document
    ///
    /// # Errors
    ///
    /// Returns an error if the stored log cannot be removed
    pub async fn clear(&self) -> AppResult<Vec<LogEntry>> {
        let _guard = self.write_lock.lock().await;
        self.repository.clear().await?;
        let entries = clear_log();
        AppLogger::log_food_log_event("clear", None, entries.len());
        Ok(entries)
    }

    async fn commit(
        &self,
        event: &str,
        entries: Vec<LogEntry>,
        added: Option<EntryId>,
    ) -> AppResult<Vec<LogEntry>> {
        self.repository.save(&entries).await?;
        AppLogger::log_food_log_event(event, added.map(EntryId::get), entries.len());
        Ok(entries)
    }
}
