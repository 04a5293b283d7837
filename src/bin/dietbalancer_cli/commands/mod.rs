// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors
// ABOUTME: Command modules for dietbalancer-cli
// ABOUTME: Authentication, catalog, food log and summary commands

pub mod auth;
pub mod catalog;
pub mod log;
pub mod summary;

use dietbalancer::{
    auth::SessionManager, config::NutritionConfig, errors::AppResult, food_log::FoodLogService,
};

pub type Result<T> = AppResult<T>;

/// Collaborators shared by every command
pub struct CliContext {
    pub nutrition: NutritionConfig,
    pub sessions: SessionManager,
    pub food_log: FoodLogService,
}
