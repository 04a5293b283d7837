// ABOUTME: Food log repository implementation over a LocalStore
// ABOUTME: Stores the entry list as one JSON array under the foodLogs key, skipping unreadable records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors

use super::{read_json, write_json, FoodLogRepository, LocalStore};
use crate::constants::storage_keys;
use crate::errors::AppResult;
use crate::models::LogEntry;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// `LocalStore` implementation of `FoodLogRepository`
#[derive(Clone)]
pub struct FoodLogRepositoryImpl {
    store: Arc<dyn LocalStore>,
}

impl FoodLogRepositoryImpl {
    /// Create a repository over the given store
    #[must_use]
    pub fn new(store: Arc<dyn LocalStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl FoodLogRepository for FoodLogRepositoryImpl {
    async fn load(&self) -> AppResult<Vec<LogEntry>> {
        let records: Vec<Value> = read_json(self.store.as_ref(), storage_keys::FOOD_LOGS)
            .await?
            .unwrap_or_default();

        let total = records.len();
        let entries: Vec<LogEntry> = records
            .into_iter()
            .enumerate()
            .filter_map(|(position, record)| match serde_json::from_value(record) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(position, error = %e, "Skipping unreadable food log record");
                    None
                }
            })
            .collect();
        debug!(entries = entries.len(), skipped = total - entries.len(), "Loaded food log");
        Ok(entries)
    }

    async fn save(&self, entries: &[LogEntry]) -> AppResult<()> {
        write_json(self.store.as_ref(), storage_keys::FOOD_LOGS, &entries).await?;
        debug!(entries = entries.len(), "Saved food log");
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        self.store.remove_item(storage_keys::FOOD_LOGS).await
    }
}
