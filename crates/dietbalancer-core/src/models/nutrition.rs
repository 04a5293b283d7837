// ABOUTME: Nutrition tracking models for food logging and daily totals
// ABOUTME: FoodItem, LogEntry, EntryId, Totals, Rda and the Nutrient enumeration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors

use crate::constants::rda;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Tracked nutrient, in canonical display and recommendation order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    /// Energy in kcal
    Calories,
    /// Protein in grams
    Protein,
    /// Iron in milligrams
    Iron,
    /// Vitamin C in milligrams
    VitaminC,
}

impl Nutrient {
    /// All nutrients in canonical order
    pub const ALL: [Self; 4] = [Self::Calories, Self::Protein, Self::Iron, Self::VitaminC];

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Calories => "Calories",
            Self::Protein => "Protein",
            Self::Iron => "Iron",
            Self::VitaminC => "Vitamin C",
        }
    }

    /// Display unit
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Calories => "kcal",
            Self::Protein => "g",
            Self::Iron | Self::VitaminC => "mg",
        }
    }

    /// Fixed suggestion shown when the daily total falls short of target
    #[must_use]
    pub const fn suggestion(self) -> &'static str {
        match self {
            Self::Calories => "Increase calorie intake",
            Self::Protein => "Add protein-rich foods",
            Self::Iron => "Eat leafy greens or meat",
            Self::VitaminC => "Add fruits like oranges",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Reference food with per-serving nutritional values
///
/// Field names serialize as the browser client stored them (`vitaminC`), so
/// previously saved logs load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Food name, unique within a catalog
    pub name: String,
    /// Energy per serving (kcal)
    pub calories: f64,
    /// Protein per serving (grams)
    pub protein: f64,
    /// Iron per serving (milligrams)
    #[serde(default)]
    pub iron: f64,
    /// Vitamin C per serving (milligrams)
    #[serde(rename = "vitaminC", default)]
    pub vitamin_c: f64,
}

impl FoodItem {
    /// Create a food item with all four nutrient values
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        calories: f64,
        protein: f64,
        iron: f64,
        vitamin_c: f64,
    ) -> Self {
        Self {
            name: name.into(),
            calories,
            protein,
            iron,
            vitamin_c,
        }
    }

    /// Value of a single nutrient
    #[must_use]
    pub const fn amount(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Iron => self.iron,
            Nutrient::VitaminC => self.vitamin_c,
        }
    }
}

/// Identifier of a logged entry
///
/// Derived from the wall-clock millisecond timestamp at log time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u64);

impl EntryId {
    /// Raw numeric value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// One recorded instance of a food being consumed
///
/// Holds a snapshot of the food; catalog edits never reach logged entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Unique identifier among live entries
    pub id: EntryId,
    /// Nutritional snapshot taken at log time
    #[serde(flatten)]
    pub food: FoodItem,
}

/// Summed nutrient values across a food log
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    /// Total energy (kcal)
    pub calories: f64,
    /// Total protein (grams)
    pub protein: f64,
    /// Total iron (milligrams)
    pub iron: f64,
    /// Total vitamin C (milligrams)
    #[serde(rename = "vitaminC")]
    pub vitamin_c: f64,
}

impl Totals {
    /// Value of a single nutrient
    #[must_use]
    pub const fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Iron => self.iron,
            Nutrient::VitaminC => self.vitamin_c,
        }
    }

    /// Add one food's values into the running totals
    pub fn accumulate(&mut self, food: &FoodItem) {
        self.calories += food.calories;
        self.protein += food.protein;
        self.iron += food.iron;
        self.vitamin_c += food.vitamin_c;
    }
}

/// Recommended daily allowance per nutrient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rda {
    /// Daily energy target (kcal)
    pub calories: f64,
    /// Daily protein target (grams)
    pub protein: f64,
    /// Daily iron target (milligrams)
    pub iron: f64,
    /// Daily vitamin C target (milligrams)
    #[serde(rename = "vitaminC")]
    pub vitamin_c: f64,
}

impl Rda {
    /// Target for a single nutrient
    #[must_use]
    pub const fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Iron => self.iron,
            Nutrient::VitaminC => self.vitamin_c,
        }
    }
}

impl Default for Rda {
    fn default() -> Self {
        Self {
            calories: rda::CALORIES_KCAL,
            protein: rda::PROTEIN_G,
            iron: rda::IRON_MG,
            vitamin_c: rda::VITAMIN_C_MG,
        }
    }
}
