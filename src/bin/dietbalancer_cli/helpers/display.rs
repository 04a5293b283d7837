// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors
// ABOUTME: Display helper functions for CLI output formatting
// ABOUTME: Formats sessions, foods, log entries and nutrition summaries for terminal display

use dietbalancer::intelligence::{NutritionSummary, ProgressBand};
use dietbalancer::models::{FoodItem, LogEntry, Session};

const BAR_WIDTH: usize = 20;

/// Display the signed-in session
pub fn display_session(session: &Session) {
    println!("Email:   {}", session.email);
    println!("Role:    {}", session.role.as_str());
    println!("Since:   {}", session.created_at.format("%Y-%m-%d %H:%M:%S UTC"));
}

/// Display the signed-out state with any remembered email
pub fn display_signed_out(remembered_email: Option<&str>) {
    println!("Not signed in.");
    if let Some(email) = remembered_email {
        println!("Remembered email: {email}");
    }
}

/// Display catalog foods in a table
pub fn display_foods(foods: &[FoodItem]) {
    println!(
        "{:<20} {:>10} {:>10} {:>8} {:>10}",
        "Name", "Calories", "Protein", "Iron", "Vitamin C"
    );
    println!("{}", "-".repeat(62));
    for food in foods {
        println!(
            "{:<20} {:>10.1} {:>9.1}g {:>6.1}mg {:>8.1}mg",
            food.name, food.calories, food.protein, food.iron, food.vitamin_c
        );
    }
}

/// Display logged entries with their ids
pub fn display_entries(entries: &[LogEntry]) {
    if entries.is_empty() {
        println!("Food log is empty.");
        return;
    }

    println!("{:<15} {:<20} {:>10} {:>10}", "Id", "Name", "Calories", "Protein");
    println!("{}", "-".repeat(58));
    for entry in entries {
        println!(
            "{:<15} {:<20} {:>10.1} {:>9.1}g",
            entry.id, entry.food.name, entry.food.calories, entry.food.protein
        );
    }
    println!("{} entries", entries.len());
}

/// Display totals, progress bars, suggestions and the overall status
pub fn display_summary(summary: &NutritionSummary) {
    println!("{}", "=".repeat(60));
    println!("Daily Nutrition Summary ({} entries)", summary.entry_count);
    println!("{}", "=".repeat(60));

    for progress in &summary.progress {
        println!(
            "{:<10} {:>8.1} / {:<6} {:<4} [{}] {:>3}% {}",
            progress.label,
            progress.current,
            progress.target,
            progress.unit,
            progress_bar(progress.percent),
            progress.rounded_percent,
            band_marker(progress.band)
        );
    }

    if let Some(averages) = summary.averages {
        println!();
        println!(
            "Average per item: {} kcal, {} g protein",
            averages.calories, averages.protein
        );
    }

    println!();
    if summary.recommendations.is_empty() {
        println!("No suggestions.");
    } else {
        println!("Suggestions:");
        for recommendation in &summary.recommendations {
            println!("  - {}", recommendation.suggestion);
        }
    }

    println!();
    println!("{}", summary.status.message());
}

fn progress_bar(percent: f64) -> String {
    let filled = (percent.clamp(0.0, 100.0) / 100.0 * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

const fn band_marker(band: ProgressBand) -> &'static str {
    match band {
        ProgressBand::OnTrack => "on track",
        ProgressBand::Close => "close",
        ProgressBand::Low => "low",
    }
}
