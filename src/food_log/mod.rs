// ABOUTME: Food log mutations returning new entry lists for the caller to persist
// ABOUTME: Entry id generation, add, quick add, custom add, remove and clear
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors

//! # Food Log
//!
//! Pure transformations over a list of [`LogEntry`] values. Nothing here
//! touches storage; callers load the log, apply a mutation and save the result.

/// Load-mutate-save workflow over a repository
pub mod service;

pub use service::FoodLogService;

use crate::catalog::{find_by_name, CustomFoodForm};
use crate::errors::{AppError, AppResult};
use crate::models::{EntryId, FoodItem, LogEntry};
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Issues entry ids from the wall-clock millisecond timestamp
///
/// Each id is at least one greater than the previous one, so two entries
/// added within the same millisecond still differ.
#[derive(Debug)]
pub struct EntryIdGenerator {
    last: AtomicU64,
    clock: fn() -> u64,
}

impl Default for EntryIdGenerator {
    fn default() -> Self {
        Self::with_clock(now_millis)
    }
}

impl EntryIdGenerator {
    /// Generator reading time from `clock`
    #[must_use]
    pub const fn with_clock(clock: fn() -> u64) -> Self {
        Self {
            last: AtomicU64::new(0),
            clock,
        }
    }

    /// Next id, strictly greater than the previous id and than `floor`
    pub fn next_id(&self, floor: Option<EntryId>) -> EntryId {
        let now = (self.clock)();
        let floor = floor.map_or(0, |id| id.get().saturating_add(1));
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(last.saturating_add(1)).max(floor);
            match self
                .last
                .compare_exchange_weak(last, candidate, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => return EntryId(candidate),
                Err(actual) => last = actual,
            }
        }
    }
}

fn now_millis() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default()
}

/// Append a snapshot of `food` with a fresh id
///
/// The id exceeds every id already in `entries`.
#[must_use]
pub fn add_entry(entries: &[LogEntry], food: FoodItem, ids: &EntryIdGenerator) -> Vec<LogEntry> {
    let max_live = entries.iter().map(|entry| entry.id).max();
    let mut next = entries.to_vec();
    next.push(LogEntry {
        id: ids.next_id(max_live),
        food,
    });
    next
}

/// Entries without `id`; an unknown id leaves the list unchanged
#[must_use]
pub fn remove_entry(entries: &[LogEntry], id: EntryId) -> Vec<LogEntry> {
    entries
        .iter()
        .filter(|entry| entry.id != id)
        .cloned()
        .collect()
}

/// An empty log
#[must_use]
pub const fn clear_log() -> Vec<LogEntry> {
    Vec::new()
}

/// Log the catalog food named exactly `name`
///
/// # Errors
///
/// Returns `ResourceNotFound` if no catalog food has that name
pub fn quick_add(
    entries: &[LogEntry],
    catalog: &[FoodItem],
    name: &str,
    ids: &EntryIdGenerator,
) -> AppResult<Vec<LogEntry>> {
    let food = find_by_name(catalog, name)
        .ok_or_else(|| AppError::not_found(format!("Food '{name}'")))?
        .clone();
    Ok(add_entry(entries, food, ids))
}

/// Validate a custom food form and log it
///
/// # Errors
///
/// Returns an error if the form fails validation
pub fn custom_add(
    entries: &[LogEntry],
    form: CustomFoodForm,
    ids: &EntryIdGenerator,
) -> AppResult<Vec<LogEntry>> {
    let food = form.into_food_item()?;
    Ok(add_entry(entries, food, ids))
}
