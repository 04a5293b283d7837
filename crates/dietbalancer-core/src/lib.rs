// ABOUTME: Core types and constants for the DietBalancer nutrition tracker
// ABOUTME: Foundation crate with error handling, nutrition models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors

#![deny(unsafe_code)]

//! # DietBalancer Core
//!
//! Foundation crate providing shared types and constants. It changes rarely,
//! so the main crate recompiles without touching it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Foods, log entries, totals, daily targets and sessions
//! - **constants**: Daily target defaults, storage keys, demo account

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (FoodItem, LogEntry, Totals, Rda, Session)
pub mod models;
