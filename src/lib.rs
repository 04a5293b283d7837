// ABOUTME: Main library entry point for the DietBalancer nutrition tracker
// ABOUTME: Food log, nutrient totals against daily targets, catalog editing and local sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors

#![deny(unsafe_code)]

//! # DietBalancer
//!
//! Users log foods, see accumulated daily totals against recommended daily
//! allowances, and get suggestions for nutrients that fall short.
//! Administrators edit an in-memory working copy of the food catalog.
//!
//! ## Architecture
//!
//! - **Intelligence**: pure aggregation over the food log (totals,
//!   percentages, progress bands, suggestions)
//! - **Catalog**: reference foods, filtering, and the admin editor
//! - **Food log**: entry id generation and log mutations
//! - **Storage**: local key/value store and the food log repository
//! - **Auth**: credential validation, local accounts and the session record
//! - **Routes**: axum HTTP shell; the CLI binary drives the same library
//!
//! ## Example Usage
//!
//! ```rust
//! use dietbalancer::catalog::reference_catalog;
//! use dietbalancer::food_log::{add_entry, EntryIdGenerator};
//! use dietbalancer::intelligence::{compute_totals, derive_recommendations};
//! use dietbalancer::models::Rda;
//!
//! let ids = EntryIdGenerator::default();
//! let catalog = reference_catalog();
//! let log = add_entry(&[], catalog[0].clone(), &ids);
//! let totals = compute_totals(&log);
//! let suggestions = derive_recommendations(&totals, &Rda::default());
//! assert_eq!(suggestions.len(), 4);
//! ```

/// Credential validation, local accounts and session lifecycle
pub mod auth;

/// Reference catalog, filtering, forms and the admin editor
pub mod catalog;

/// Configuration management
pub mod config;

/// Application constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// Food log mutations and id generation
pub mod food_log;

/// Nutrition aggregation
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Core data models
pub mod models;

/// HTTP routes
pub mod routes;

/// Local key/value storage
pub mod storage;
