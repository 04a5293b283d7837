// ABOUTME: Core data models for the DietBalancer nutrition tracker
// ABOUTME: Re-exports nutrition and session types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors

//! # Data Models
//!
//! - `FoodItem`: a catalog food with four nutrient values
//! - `LogEntry`: a logged snapshot of a food plus its `EntryId`
//! - `Totals` / `Rda`: summed intake and daily targets, keyed by `Nutrient`
//! - `Session`: the local record of who is signed in

mod nutrition;
mod session;

// Nutrition domain
pub use nutrition::{EntryId, FoodItem, LogEntry, Nutrient, Rda, Totals};

// Session domain
pub use session::{LoginType, RememberedLogin, Session, UserRole};
