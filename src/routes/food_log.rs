// ABOUTME: Food log routes for listing, quick add, custom add, removal and clearing
// ABOUTME: Every endpoint requires a signed-in session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors

use super::AppResources;
use crate::catalog::CustomFoodForm;
use crate::errors::AppError;
use crate::models::{EntryId, LogEntry};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Quick add request body
#[derive(Debug, Deserialize)]
pub struct QuickAddRequest {
    /// Exact catalog food name
    pub name: String,
}

/// Food log listing
#[derive(Debug, Serialize, Deserialize)]
pub struct FoodLogResponse {
    /// Entries in insertion order
    pub entries: Vec<LogEntry>,
    /// Number of entries
    pub total: usize,
}

impl From<Vec<LogEntry>> for FoodLogResponse {
    fn from(entries: Vec<LogEntry>) -> Self {
        Self {
            total: entries.len(),
            entries,
        }
    }
}

/// Food log routes handler
pub struct FoodLogRoutes;

impl FoodLogRoutes {
    /// Create all food log routes
    pub fn routes(resources: Arc<AppResources>) -> Router {
        Router::new()
            .route("/api/log", get(Self::handle_list).delete(Self::handle_clear))
            .route("/api/log/quick", post(Self::handle_quick_add))
            .route("/api/log/custom", post(Self::handle_custom_add))
            .route("/api/log/:id", delete(Self::handle_remove))
            .with_state(resources)
    }

    /// Handle GET /api/log - List logged entries
    async fn handle_list(
        State(resources): State<Arc<AppResources>>,
    ) -> Result<Response, AppError> {
        resources.sessions.require_session().await?;
        let entries = resources.food_log.entries().await?;
        Ok((StatusCode::OK, Json(FoodLogResponse::from(entries))).into_response())
    }

    /// Handle POST /api/log/quick - Log a catalog food by name
    async fn handle_quick_add(
        State(resources): State<Arc<AppResources>>,
        Json(body): Json<QuickAddRequest>,
    ) -> Result<Response, AppError> {
        resources.sessions.require_session().await?;
        let catalog = resources.catalog.read().await.items().to_vec();
        let entries = resources.food_log.quick_add(&catalog, &body.name).await?;
        Ok((StatusCode::CREATED, Json(FoodLogResponse::from(entries))).into_response())
    }

    /// Handle POST /api/log/custom - Log a user-entered food
    async fn handle_custom_add(
        State(resources): State<Arc<AppResources>>,
        Json(form): Json<CustomFoodForm>,
    ) -> Result<Response, AppError> {
        resources.sessions.require_session().await?;
        let entries = resources.food_log.custom_add(form).await?;
        Ok((StatusCode::CREATED, Json(FoodLogResponse::from(entries))).into_response())
    }

    /// Handle DELETE /api/log/:id - Remove one entry
    async fn handle_remove(
        State(resources): State<Arc<AppResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        resources.sessions.require_session().await?;
        let id: EntryId = id
            .parse()
            .map_err(|_| AppError::invalid_format(format!("Invalid entry id '{id}'")))?;
        let entries = resources.food_log.remove(id).await?;
        Ok((StatusCode::OK, Json(FoodLogResponse::from(entries))).into_response())
    }

    /// Handle DELETE /api/log - Remove every entry
    async fn handle_clear(
        State(resources): State<Arc<AppResources>>,
    ) -> Result<Response, AppError> {
        resources.sessions.require_session().await?;
        let entries = resources.food_log.clear().await?;
        Ok((StatusCode::OK, Json(FoodLogResponse::from(entries))).into_response())
    }
}
