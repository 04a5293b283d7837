// ABOUTME: Nutrition configuration for daily targets, percentage fallbacks and editor policy
// ABOUTME: Loads defaults, applies environment overrides, and validates the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors

//! Nutrition Configuration
//!
//! Provides the daily targets (RDA) used as percentage denominators, the
//! fallback used when a target is zero, the progress band thresholds, and
//! the policy the catalog editor applies to out-of-range indices.

use dietbalancer_core::constants::progress;
use dietbalancer_core::models::Rda;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., percentage not between 0-100)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error for {key}: {message}")]
    Parse {
        /// Environment variable name
        key: &'static str,
        /// Parser message
        message: String,
    },

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

/// Percentage reported when a daily target is zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroTargetPolicy {
    /// Report 0%
    #[default]
    Empty,
    /// Report 100%
    Full,
}

impl ZeroTargetPolicy {
    /// Percentage this policy yields
    #[must_use]
    pub const fn percentage(self) -> f64 {
        match self {
            Self::Empty => 0.0,
            Self::Full => 100.0,
        }
    }
}

impl FromStr for ZeroTargetPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "empty" | "zero" | "0" => Ok(Self::Empty),
            "full" | "100" => Ok(Self::Full),
            other => Err(format!("expected 'empty' or 'full', got '{other}'")),
        }
    }
}

/// Catalog editor behavior for an index outside the current bounds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexPolicy {
    /// Leave the catalog untouched and report success
    #[default]
    Ignore,
    /// Fail with a not-found error
    Reject,
}

impl FromStr for IndexPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "reject" | "error" => Ok(Self::Reject),
            other => Err(format!("expected 'ignore' or 'reject', got '{other}'")),
        }
    }
}

/// Progress band thresholds (percent of daily target)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressBandsConfig {
    /// On track at or above this percentage: 90
    pub on_track_percent: f64,
    /// Close to target at or above this percentage: 70
    pub close_percent: f64,
}

impl Default for ProgressBandsConfig {
    fn default() -> Self {
        Self {
            on_track_percent: progress::ON_TRACK_PERCENT,
            close_percent: progress::CLOSE_PERCENT,
        }
    }
}

/// Nutrition Configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Daily targets
    pub targets: Rda,
    /// Fallback for zero targets
    pub zero_target: ZeroTargetPolicy,
    /// Catalog editor index policy
    pub index_policy: IndexPolicy,
    /// Progress band thresholds
    pub progress_bands: ProgressBandsConfig,
}

impl NutritionConfig {
    /// Load configuration from defaults and environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        Self::default().apply_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from a variable lookup, then validate
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or validation fails
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = parse_override(&lookup, "DIETBALANCER_RDA_CALORIES")? {
            self.targets.calories = v;
        }
        if let Some(v) = parse_override(&lookup, "DIETBALANCER_RDA_PROTEIN")? {
            self.targets.protein = v;
        }
        if let Some(v) = parse_override(&lookup, "DIETBALANCER_RDA_IRON")? {
            self.targets.iron = v;
        }
        if let Some(v) = parse_override(&lookup, "DIETBALANCER_RDA_VITAMIN_C")? {
            self.targets.vitamin_c = v;
        }
        if let Some(v) = parse_override(&lookup, "DIETBALANCER_ZERO_TARGET")? {
            self.zero_target = v;
        }
        if let Some(v) = parse_override(&lookup, "DIETBALANCER_INDEX_POLICY")? {
            self.index_policy = v;
        }
        if let Some(v) = parse_override(&lookup, "DIETBALANCER_BAND_ON_TRACK")? {
            self.progress_bands.on_track_percent = v;
        }
        if let Some(v) = parse_override(&lookup, "DIETBALANCER_BAND_CLOSE")? {
            self.progress_bands.close_percent = v;
        }

        self.validate()?;
        Ok(self)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for a negative or non-finite target
    /// and `ConfigError::InvalidRange` for inverted or out-of-range band thresholds
    pub fn validate(&self) -> Result<(), ConfigError> {
        let targets = [
            self.targets.calories,
            self.targets.protein,
            self.targets.iron,
            self.targets.vitamin_c,
        ];
        if targets.iter().any(|t| !t.is_finite() || *t < 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "daily targets must be finite and non-negative",
            ));
        }

        let bands = &self.progress_bands;
        if !(0.0..=100.0).contains(&bands.close_percent)
            || !(0.0..=100.0).contains(&bands.on_track_percent)
        {
            return Err(ConfigError::InvalidRange(
                "progress band thresholds must be within 0-100",
            ));
        }
        if bands.close_percent >= bands.on_track_percent {
            return Err(ConfigError::InvalidRange(
                "close threshold must be < on-track threshold",
            ));
        }

        Ok(())
    }
}

fn parse_override<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: ToString,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.trim().parse::<T>().map_err(|e| ConfigError::Parse {
                key,
                message: e.to_string(),
            })
        })
        .transpose()
}
