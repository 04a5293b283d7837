// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Daily targets, storage keys, demo account and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one flat list.

/// Recommended daily allowance defaults
pub mod rda {
    /// Daily energy target (kcal)
    pub const CALORIES_KCAL: f64 = 2000.0;
    /// Daily protein target (grams)
    pub const PROTEIN_G: f64 = 50.0;
    /// Daily iron target (milligrams)
    pub const IRON_MG: f64 = 18.0;
    /// Daily vitamin C target (milligrams)
    pub const VITAMIN_C_MG: f64 = 75.0;
}

/// Progress band thresholds, in percent of daily target
pub mod progress {
    /// At or above this percentage a nutrient is on track
    pub const ON_TRACK_PERCENT: f64 = 90.0;
    /// At or above this percentage a nutrient is close to target
    pub const CLOSE_PERCENT: f64 = 70.0;
}

/// Keys used in the local key/value store
pub mod storage_keys {
    /// Logged food entries
    pub const FOOD_LOGS: &str = "foodLogs";
    /// Current session record
    pub const AUTH_SESSION: &str = "dietbalancer_auth";
    /// Remembered sign-in email
    pub const REMEMBERED_LOGIN: &str = "dietbalancer_login";
}

/// Built-in demo account
pub mod demo {
    /// Demo administrator email; sessions for this address carry the admin role
    pub const ADMIN_EMAIL: &str = "demo@dietbalancer.com";
    /// Demo password, exempt from the strength rules
    pub const PASSWORD: &str = "Demo@123456";
}

/// Credential rules
pub mod auth {
    /// Minimum password length
    pub const MIN_PASSWORD_LENGTH: usize = 8;
    /// Special characters accepted (and one required) in passwords
    pub const PASSWORD_SPECIAL_CHARS: &str = "@$!%*?&";
    /// Prefix of issued session tokens
    pub const SESSION_TOKEN_PREFIX: &str = "session_";
}

/// Service identifiers
pub mod service_names {
    /// HTTP server
    pub const DIETBALANCER_SERVER: &str = "dietbalancer-server";
    /// Command-line client
    pub const DIETBALANCER_CLI: &str = "dietbalancer-cli";
}

/// Network defaults
pub mod ports {
    /// Default HTTP port (the port the browser client called)
    pub const DEFAULT_HTTP_PORT: u16 = 3000;
}
