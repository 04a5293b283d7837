// ABOUTME: Nutrition aggregation over the food log against daily targets
// ABOUTME: Totals, clamped percentages, progress bands, suggestions and summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors

//! Nutrition Aggregator
//!
//! Computes per-nutrient totals over logged entries and compares them against
//! the daily targets. All functions are pure: they never mutate their inputs
//! and always return a defined value (empty logs sum to zero, zero targets
//! fall back to the configured [`ZeroTargetPolicy`]).

use crate::config::nutrition::{NutritionConfig, ProgressBandsConfig, ZeroTargetPolicy};
use crate::models::{LogEntry, Nutrient, Rda, Totals};
use serde::Serialize;

/// Qualitative progress toward a daily target
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProgressBand {
    /// At or above the on-track threshold (90% by default)
    OnTrack,
    /// At or above the close threshold (70% by default)
    Close,
    /// Below the close threshold
    Low,
}

/// Overall verdict on the day's intake
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DietStatus {
    /// Every nutrient met its target
    WellBalanced,
    /// At least one nutrient is short
    NeedsAttention,
}

impl DietStatus {
    /// Message shown to the user
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::WellBalanced => "Your diet is well balanced!",
            Self::NeedsAttention => "Some nutrients are below your daily target",
        }
    }
}

/// Suggestion for a nutrient below its daily target
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Recommendation {
    /// Nutrient that fell short
    pub nutrient: Nutrient,
    /// Fixed suggestion text
    pub suggestion: &'static str,
}

impl From<Nutrient> for Recommendation {
    fn from(nutrient: Nutrient) -> Self {
        Self {
            nutrient,
            suggestion: nutrient.suggestion(),
        }
    }
}

/// Progress of a single nutrient
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct NutrientProgress {
    /// Nutrient
    pub nutrient: Nutrient,
    /// Display label
    pub label: &'static str,
    /// Display unit
    pub unit: &'static str,
    /// Logged total
    pub current: f64,
    /// Daily target
    pub target: f64,
    /// Percentage of target, clamped to 0-100
    pub percent: f64,
    /// Percentage rounded for display
    pub rounded_percent: u32,
    /// Qualitative band
    pub band: ProgressBand,
}

/// Rounded per-item averages over the log
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Averages {
    /// Average energy per entry (kcal, rounded)
    pub calories: f64,
    /// Average protein per entry (grams, rounded)
    pub protein: f64,
}

/// Everything the dashboard shows for the current log
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NutritionSummary {
    /// Number of logged entries
    pub entry_count: usize,
    /// Summed nutrients
    pub totals: Totals,
    /// Daily targets used
    pub targets: Rda,
    /// Per-nutrient progress in canonical order
    pub progress: Vec<NutrientProgress>,
    /// Suggestions for nutrients below target, in canonical order
    pub recommendations: Vec<Recommendation>,
    /// Overall verdict
    pub status: DietStatus,
    /// Per-item averages; absent for an empty log
    pub averages: Option<Averages>,
}

/// Sum the four nutrients across all entries
///
/// An empty slice yields all zeros. The result does not depend on entry order
/// beyond floating-point rounding.
#[must_use]
pub fn compute_totals(entries: &[LogEntry]) -> Totals {
    entries.iter().fold(Totals::default(), |mut totals, entry| {
        totals.accumulate(&entry.food);
        totals
    })
}

/// Percentage of `target` reached by `current`, clamped to `[0, 100]`
///
/// A zero target yields the percentage chosen by `zero_target`. Ratios that
/// overflow to positive infinity count as met; NaN or negative ratios are 0.
#[must_use]
pub fn percentage_of(current: f64, target: f64, zero_target: ZeroTargetPolicy) -> f64 {
    if target == 0.0 {
        return zero_target.percentage();
    }

    let percent = current / target * 100.0;
    if percent.is_nan() || percent <= 0.0 {
        return 0.0;
    }
    percent.min(100.0)
}

/// Band for a percentage given the configured thresholds
#[must_use]
pub fn progress_band(percent: f64, bands: &ProgressBandsConfig) -> ProgressBand {
    if percent >= bands.on_track_percent {
        ProgressBand::OnTrack
    } else if percent >= bands.close_percent {
        ProgressBand::Close
    } else {
        ProgressBand::Low
    }
}

/// One suggestion per nutrient strictly below its target, in canonical order
///
/// An empty result means the diet is well balanced.
#[must_use]
pub fn derive_recommendations(totals: &Totals, targets: &Rda) -> Vec<Recommendation> {
    Nutrient::ALL
        .into_iter()
        .filter(|&nutrient| totals.get(nutrient) < targets.get(nutrient))
        .map(Recommendation::from)
        .collect()
}

/// Build the complete dashboard summary for a log
#[must_use]
pub fn summarize(entries: &[LogEntry], config: &NutritionConfig) -> NutritionSummary {
    let totals = compute_totals(entries);
    let targets = config.targets;

    let progress = Nutrient::ALL
        .into_iter()
        .map(|nutrient| {
            let current = totals.get(nutrient);
            let target = targets.get(nutrient);
            let percent = percentage_of(current, target, config.zero_target);
            NutrientProgress {
                nutrient,
                label: nutrient.label(),
                unit: nutrient.unit(),
                current,
                target,
                percent,
                rounded_percent: percent.round() as u32,
                band: progress_band(percent, &config.progress_bands),
            }
        })
        .collect();

    let recommendations = derive_recommendations(&totals, &targets);
    let status = if recommendations.is_empty() {
        DietStatus::WellBalanced
    } else {
        DietStatus::NeedsAttention
    };

    let averages = (!entries.is_empty()).then(|| {
        let count = entries.len() as f64;
        Averages {
            calories: (totals.calories / count).round(),
            protein: (totals.protein / count).round(),
        }
    });

    NutritionSummary {
        entry_count: entries.len(),
        totals,
        targets,
        progress,
        recommendations,
        status,
        averages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryId, FoodItem};

    fn entry(id: u64, food: FoodItem) -> LogEntry {
        LogEntry {
            id: EntryId(id),
            food,
        }
    }

    #[test]
    fn test_percentage_caps_at_hundred() {
        assert!((percentage_of(3000.0, 2000.0, ZeroTargetPolicy::Empty) - 100.0).abs() < 1e-9);
        assert!((percentage_of(1000.0, 2000.0, ZeroTargetPolicy::Empty) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_percentage_zero_target_uses_policy() {
        assert!(percentage_of(5.0, 0.0, ZeroTargetPolicy::Empty).abs() < f64::EPSILON);
        assert!((percentage_of(5.0, 0.0, ZeroTargetPolicy::Full) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_percentage_negative_and_nan_clamp_to_zero() {
        assert!(percentage_of(-10.0, 50.0, ZeroTargetPolicy::Empty).abs() < f64::EPSILON);
        assert!(percentage_of(f64::NAN, 50.0, ZeroTargetPolicy::Empty).abs() < f64::EPSILON);
    }

    #[test]
    fn test_percentage_overflow_counts_as_met() {
        let huge = percentage_of(f64::MAX, 0.5, ZeroTargetPolicy::Empty);
        assert!((huge - 100.0).abs() < f64::EPSILON);
        let tiny_target = percentage_of(10.0, f64::MIN_POSITIVE, ZeroTargetPolicy::Empty);
        assert!((tiny_target - 100.0).abs() < f64::EPSILON);
        assert!(percentage_of(f64::MAX, -0.5, ZeroTargetPolicy::Empty).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_band_thresholds() {
        let bands = ProgressBandsConfig::default();
        assert_eq!(progress_band(90.0, &bands), ProgressBand::OnTrack);
        assert_eq!(progress_band(89.9, &bands), ProgressBand::Close);
        assert_eq!(progress_band(70.0, &bands), ProgressBand::Close);
        assert_eq!(progress_band(69.9, &bands), ProgressBand::Low);
    }

    #[test]
    fn test_summary_averages_absent_for_empty_log() {
        let summary = summarize(&[], &NutritionConfig::default());

        assert_eq!(summary.entry_count, 0);
        assert!(summary.averages.is_none());
        assert_eq!(summary.recommendations.len(), 4);
        assert_eq!(summary.status, DietStatus::NeedsAttention);
    }

    #[test]
    fn test_summary_rounds_averages() {
        let entries = vec![
            entry(1, FoodItem::new("Apple", 52.0, 0.3, 0.1, 5.0)),
            entry(2, FoodItem::new("Egg", 155.0, 13.0, 1.2, 0.0)),
        ];

        let averages = summarize(&entries, &NutritionConfig::default())
            .averages
            .unwrap();

        assert!((averages.calories - 104.0).abs() < f64::EPSILON);
        assert!((averages.protein - 7.0).abs() < f64::EPSILON);
    }
}
