// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors

//! Environment-based configuration management

use super::nutrition::NutritionConfig;
use crate::constants::{ports, service_names};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Default data directory for the file-backed store
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Default bind host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bcrypt cost for stored password hashes
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational (default)
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (default)
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Server configuration loaded from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Service name reported in logs and health checks
    pub service_name: String,
    /// Bind host
    pub host: String,
    /// HTTP port
    pub http_port: u16,
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// Directory of the file-backed key/value store
    pub data_dir: PathBuf,
    /// Allowed CORS origins; empty allows any origin
    pub cors_origins: Vec<String>,
    /// bcrypt cost for new password hashes
    pub bcrypt_cost: u32,
    /// Nutrition targets and editor policy
    pub nutrition: NutritionConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            service_name: service_names::DIETBALANCER_SERVER.to_owned(),
            host: DEFAULT_HOST.to_owned(),
            http_port: ports::DEFAULT_HTTP_PORT,
            log_level: LogLevel::default(),
            environment: Environment::default(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            cors_origins: Vec::new(),
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            nutrition: NutritionConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an unparsable value or the
    /// nutrition configuration fails validation
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            service_name: env_var_or("SERVICE_NAME", service_names::DIETBALANCER_SERVER),
            host: env_var_or("HOST", DEFAULT_HOST),
            http_port: env_var_or("HTTP_PORT", &ports::DEFAULT_HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            log_level: LogLevel::from_str_or_default(&env_var_or("LOG_LEVEL", "info")),
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            data_dir: PathBuf::from(env_var_or("DIETBALANCER_DATA_DIR", DEFAULT_DATA_DIR)),
            cors_origins: parse_origins(&env_var_or("CORS_ORIGINS", "")),
            bcrypt_cost: env_var_or("DIETBALANCER_BCRYPT_COST", &DEFAULT_BCRYPT_COST.to_string())
                .parse()
                .context("Invalid DIETBALANCER_BCRYPT_COST value")?,
            nutrition: NutritionConfig::load().context("Invalid nutrition configuration")?,
        })
    }

    /// Socket address string to bind
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        let targets = &self.nutrition.targets;
        format!(
            "DietBalancer Server Configuration:\n\
             - Bind: {}\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Data Dir: {}\n\
             - CORS: {}\n\
             - Daily Targets: {} kcal, {} g protein, {} mg iron, {} mg vitamin C\n\
             - Zero Target Policy: {:?}\n\
             - Index Policy: {:?}",
            self.bind_address(),
            self.environment,
            self.log_level,
            self.data_dir.display(),
            if self.cors_origins.is_empty() {
                "Any origin".to_owned()
            } else {
                self.cors_origins.join(", ")
            },
            targets.calories,
            targets.protein,
            targets.iron,
            targets.vitamin_c,
            self.nutrition.zero_target,
            self.nutrition.index_policy,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse comma-separated origins
fn parse_origins(origins: &str) -> Vec<String> {
    origins
        .split(',')
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_fallback() {
        assert_eq!(LogLevel::from_str_or_default("DEBUG"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_or_default("verbose"), LogLevel::Info);
    }

    #[test]
    fn test_environment_aliases() {
        assert_eq!(
            Environment::from_str_or_default("prod"),
            Environment::Production
        );
        assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
        assert_eq!(
            Environment::from_str_or_default("staging"),
            Environment::Development
        );
    }

    #[test]
    fn test_parse_origins_skips_blanks() {
        assert_eq!(
            parse_origins(" http://a.test, ,http://b.test "),
            vec!["http://a.test".to_owned(), "http://b.test".to_owned()]
        );
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn test_default_bind_address() {
        assert_eq!(ServerConfig::default().bind_address(), "127.0.0.1:3000");
    }
}
