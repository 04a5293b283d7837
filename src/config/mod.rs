// ABOUTME: Configuration management module for server settings and nutrition parameters
// ABOUTME: Handles environment configs, daily targets, and catalog editor policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors

//! Configuration module for DietBalancer
//!
//! - **Environment**: Server configuration from environment variables
//! - **Nutrition**: Daily targets, zero-target fallback, progress bands, index policy

/// Environment and server configuration
pub mod environment;
/// Nutrition targets and editor policy
pub mod nutrition;

pub use environment::{Environment, LogLevel, ServerConfig};
pub use nutrition::{ConfigError, IndexPolicy, NutritionConfig, ProgressBandsConfig, ZeroTargetPolicy};
