// ABOUTME: Integration tests for the nutrition aggregator
// ABOUTME: Totals, percentages, progress bands, suggestions and dashboard summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, entry};
use dietbalancer::{
    catalog::reference_catalog,
    config::{NutritionConfig, ProgressBandsConfig, ZeroTargetPolicy},
    intelligence::{
        compute_totals, derive_recommendations, percentage_of, progress_band, summarize,
        DietStatus, ProgressBand,
    },
    models::{FoodItem, LogEntry, Nutrient, Rda},
};

fn apple() -> FoodItem {
    reference_catalog()[0].clone()
}

fn egg() -> FoodItem {
    reference_catalog()[1].clone()
}

fn apple_and_egg() -> Vec<LogEntry> {
    vec![entry(1, apple()), entry(2, egg())]
}

#[test]
fn test_apple_and_egg_totals() {
    let totals = compute_totals(&apple_and_egg());

    assert_close(totals.calories, 207.0);
    assert_close(totals.protein, 13.3);
    assert_close(totals.iron, 1.3);
    assert_close(totals.vitamin_c, 5.0);
}

#[test]
fn test_apple_and_egg_needs_every_suggestion_in_order() {
    let totals = compute_totals(&apple_and_egg());
    let suggestions: Vec<&str> = derive_recommendations(&totals, &Rda::default())
        .iter()
        .map(|r| r.suggestion)
        .collect();

    assert_eq!(
        suggestions,
        vec![
            "Increase calorie intake",
            "Add protein-rich foods",
            "Eat leafy greens or meat",
            "Add fruits like oranges",
        ]
    );
}

#[test]
fn test_empty_log_is_all_zero() {
    let totals = compute_totals(&[]);
    assert_close(totals.calories, 0.0);
    assert_close(totals.protein, 0.0);
    assert_close(totals.iron, 0.0);
    assert_close(totals.vitamin_c, 0.0);

    let summary = summarize(&[], &NutritionConfig::default());
    assert_eq!(summary.entry_count, 0);
    assert_eq!(summary.recommendations.len(), 4);
    assert_eq!(summary.status, DietStatus::NeedsAttention);
    assert!(summary.averages.is_none());
    assert!(summary.progress.iter().all(|p| p.rounded_percent == 0));
}

#[test]
fn test_totals_ignore_entry_order() {
    let catalog = reference_catalog();
    let forward: Vec<LogEntry> = catalog
        .iter()
        .enumerate()
        .map(|(i, food)| entry(i as u64, food.clone()))
        .collect();
    let mut reversed = forward.clone();
    reversed.reverse();

    let a = compute_totals(&forward);
    let b = compute_totals(&reversed);
    assert_close(a.calories, b.calories);
    assert_close(a.protein, b.protein);
    assert_close(a.iron, b.iron);
    assert_close(a.vitamin_c, b.vitamin_c);
}

#[test]
fn test_percentage_stays_within_bounds() {
    for (current, target) in [(0.0, 2000.0), (207.0, 2000.0), (5000.0, 2000.0), (-10.0, 50.0)] {
        let pct = percentage_of(current, target, ZeroTargetPolicy::Empty);
        assert!((0.0..=100.0).contains(&pct), "{current}/{target} gave {pct}");
    }
}

#[test]
fn test_zero_target_follows_policy() {
    assert_close(percentage_of(10.0, 0.0, ZeroTargetPolicy::Empty), 0.0);
    assert_close(percentage_of(10.0, 0.0, ZeroTargetPolicy::Full), 100.0);
}

#[test]
fn test_single_shortfall_yields_one_suggestion() {
    // Calories, protein and iron met; vitamin C short
    let food = FoodItem::new("Steak dinner", 2100.0, 60.0, 20.0, 10.0);
    let recommendations = derive_recommendations(&compute_totals(&[entry(1, food)]), &Rda::default());

    assert_eq!(recommendations.len(), 1);
    assert_eq!(recommendations[0].nutrient, Nutrient::VitaminC);
    assert_eq!(recommendations[0].suggestion, "Add fruits like oranges");
}

#[test]
fn test_exact_target_is_not_a_shortfall() {
    let food = FoodItem::new("Perfect day", 2000.0, 50.0, 18.0, 75.0);
    let summary = summarize(&[entry(1, food)], &NutritionConfig::default());

    assert!(summary.recommendations.is_empty());
    assert_eq!(summary.status, DietStatus::WellBalanced);
    assert!(summary.progress.iter().all(|p| p.band == ProgressBand::OnTrack));
}

#[test]
fn test_progress_bands_use_thresholds() {
    let bands = ProgressBandsConfig::default();
    assert_eq!(progress_band(95.0, &bands), ProgressBand::OnTrack);
    assert_eq!(progress_band(90.0, &bands), ProgressBand::OnTrack);
    assert_eq!(progress_band(75.0, &bands), ProgressBand::Close);
    assert_eq!(progress_band(69.9, &bands), ProgressBand::Low);
}

#[test]
fn test_summary_progress_and_averages() {
    let summary = summarize(&apple_and_egg(), &NutritionConfig::default());

    let labels: Vec<&str> = summary.progress.iter().map(|p| p.label).collect();
    assert_eq!(labels, vec!["Calories", "Protein", "Iron", "Vitamin C"]);

    // 207 / 2000 = 10.35%
    assert_eq!(summary.progress[0].rounded_percent, 10);
    assert_eq!(summary.progress[0].band, ProgressBand::Low);
    // 13.3 / 50 = 26.6%
    assert_eq!(summary.progress[1].rounded_percent, 27);

    let averages = summary.averages.expect("averages for a non-empty log");
    assert_close(averages.calories, 104.0);
    assert_close(averages.protein, 7.0);
}

#[test]
fn test_summary_uses_configured_targets() {
    let config = NutritionConfig {
        targets: Rda {
            calories: 200.0,
            protein: 10.0,
            iron: 1.0,
            vitamin_c: 5.0,
        },
        ..NutritionConfig::default()
    };

    let summary = summarize(&apple_and_egg(), &config);
    assert!(summary.recommendations.is_empty());
    assert_eq!(summary.status, DietStatus::WellBalanced);
    assert_eq!(summary.status.message(), "Your diet is well balanced!");
}
