// ABOUTME: Logging configuration and structured logging setup for the server and CLI
// ABOUTME: Configures log levels, formatters, and output destinations for tracing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors

//! Structured logging configuration

use crate::config::ServerConfig;
use crate::constants::service_names;
use anyhow::{anyhow, Result};
use serde_json::json;
use std::env;
use std::io;
use tracing::{info, warn};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Where log lines are written
    pub writer: LogWriter,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include span information for tracing
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, testing, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for terminals
    Compact,
}

/// Log output destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogWriter {
    /// Standard output (server)
    Stdout,
    /// Standard error (CLI, keeps stdout for command output)
    Stderr,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            writer: LogWriter::Stdout,
            include_location: false,
            include_spans: false,
            service_name: service_names::DIETBALANCER_SERVER.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Logging configuration for the HTTP server
    ///
    /// Level and environment come from the loaded [`ServerConfig`];
    /// `RUST_LOG` still overrides the level, and `LOG_FORMAT`,
    /// `LOG_INCLUDE_LOCATION` and `LOG_INCLUDE_SPANS` select the output.
    #[must_use]
    pub fn for_server(config: &ServerConfig) -> Self {
        let is_production = config.environment.is_production();

        Self {
            level: env::var("RUST_LOG").unwrap_or_else(|_| config.log_level.to_string()),
            format: format_from_env(),
            writer: LogWriter::Stdout,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_spans: is_production || env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_name: config.service_name.clone(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: config.environment.to_string(),
        }
    }

    /// Quiet configuration for the command-line client
    ///
    /// Logs go to stderr at `warn` unless `RUST_LOG` says otherwise.
    #[must_use]
    pub fn for_cli() -> Self {
        Self {
            level: env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
            format: LogFormat::Compact,
            writer: LogWriter::Stderr,
            service_name: service_names::DIETBALANCER_CLI.into(),
            ..Self::default()
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let env_filter = EnvFilter::new(&self.level)
            .add_directive(
                "hyper=warn"
                    .parse()
                    .unwrap_or_else(|_| tracing::Level::WARN.into()),
            )
            .add_directive(
                "tower_http=info"
                    .parse()
                    .unwrap_or_else(|_| tracing::Level::INFO.into()),
            );

        let registry = tracing_subscriber::registry().with(env_filter);
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        let result = match (self.format, self.writer) {
            (LogFormat::Json, LogWriter::Stdout) => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stdout)
                        .with_span_events(span_events)
                        .json(),
                )
                .try_init(),
            (LogFormat::Json, LogWriter::Stderr) => registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_writer(io::stderr)
                        .json(),
                )
                .try_init(),
            (LogFormat::Pretty, LogWriter::Stdout) => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stdout)
                        .with_span_events(span_events),
                )
                .try_init(),
            (LogFormat::Pretty, LogWriter::Stderr) => registry
                .with(fmt::layer().with_target(true).with_writer(io::stderr))
                .try_init(),
            (LogFormat::Compact, LogWriter::Stdout) => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_writer(io::stdout),
                )
                .try_init(),
            (LogFormat::Compact, LogWriter::Stderr) => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_writer(io::stderr),
                )
                .try_init(),
        };
        result.map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;

        if self.writer == LogWriter::Stdout {
            self.log_startup_info();
        }

        Ok(())
    }

    /// Log structured startup information
    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "DietBalancer starting up"
        );

        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "features": {
                    "location": self.include_location,
                    "spans": self.include_spans
                }
            }
        });

        info!("Configuration loaded: {}", config_summary);
    }
}

fn format_from_env() -> LogFormat {
    match env::var("LOG_FORMAT").as_deref() {
        Ok("json") => LogFormat::Json,
        Ok("compact") => LogFormat::Compact,
        _ => LogFormat::Pretty,
    }
}

/// Application-specific logging utilities
pub struct AppLogger;

impl AppLogger {
    /// Log user authentication events
    pub fn log_auth_event(email: &str, event: &str, success: bool, details: Option<&str>) {
        info!(
            user.email = %email,
            auth.event = %event,
            auth.success = %success,
            auth.details = details.unwrap_or(""),
            "Authentication event"
        );
    }

    /// Log food log mutations
    pub fn log_food_log_event(event: &str, entry_id: Option<u64>, entry_count: usize) {
        info!(
            food_log.event = %event,
            food_log.entry_id = entry_id.unwrap_or_default(),
            food_log.entries = %entry_count,
            "Food log event"
        );
    }

    /// Log catalog editor operations
    pub fn log_catalog_event(operation: &str, food_name: &str, catalog_size: usize) {
        info!(
            catalog.operation = %operation,
            catalog.food = %food_name,
            catalog.size = %catalog_size,
            "Catalog event"
        );
    }

    /// Log key/value store operations
    pub fn log_storage_operation(operation: &str, key: &str, success: bool) {
        info!(
            storage.operation = %operation,
            storage.key = %key,
            storage.success = %success,
            "Storage operation"
        );
    }

    /// Log security events
    pub fn log_security_event(event_type: &str, details: &str, email: Option<&str>) {
        warn!(
            security.event = %event_type,
            security.details = %details,
            user.email = email.unwrap_or("unknown"),
            "Security event"
        );
    }
}
