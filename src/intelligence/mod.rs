// ABOUTME: Intelligence module for nutrition analysis over the food log
// ABOUTME: Totals, percentages of daily targets, progress bands and suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors

//! # Intelligence Module
//!
//! Pure, synchronous analysis of a food log against daily targets. Every read
//! recomputes from the full entry list; nothing is cached or persisted.

/// Totals, percentages, recommendations and the combined summary
pub mod nutrition_aggregator;

pub use nutrition_aggregator::{
    compute_totals, derive_recommendations, percentage_of, progress_band, summarize, Averages,
    DietStatus, NutrientProgress, NutritionSummary, ProgressBand, Recommendation,
};
