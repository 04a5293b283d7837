// ABOUTME: Re-exports nutrition and session models from dietbalancer-core
// ABOUTME: FoodItem, LogEntry, Totals, Rda and Session share one definition workspace-wide
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors

pub use dietbalancer_core::models::*;
