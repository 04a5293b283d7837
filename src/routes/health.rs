// ABOUTME: Health check route handlers for service monitoring
// ABOUTME: Provides liveness and readiness endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors

//! Health check routes for service monitoring

use crate::constants::service_names;
use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde_json::{json, Value};

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes() -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .route("/ready", get(Self::handle_ready))
    }

    async fn handle_health() -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "service": service_names::DIETBALANCER_SERVER,
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": Utc::now().to_rfc3339()
        }))
    }

    async fn handle_ready() -> Json<Value> {
        Json(json!({
            "status": "ready",
            "timestamp": Utc::now().to_rfc3339()
        }))
    }
}
