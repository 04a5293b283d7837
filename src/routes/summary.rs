// ABOUTME: Nutrition summary route recomputed from the full food log on every read
// ABOUTME: Totals, progress against daily targets, suggestions and averages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors

use super::AppResources;
use crate::errors::AppError;
use crate::intelligence::summarize;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

/// Summary routes handler
pub struct SummaryRoutes;

impl SummaryRoutes {
    /// Create all summary routes
    pub fn routes(resources: Arc<AppResources>) -> Router {
        Router::new()
            .route("/api/summary", get(Self::handle_summary))
            .with_state(resources)
    }

    /// Handle GET /api/summary - Dashboard summary for the current log
    async fn handle_summary(
        State(resources): State<Arc<AppResources>>,
    ) -> Result<Response, AppError> {
        resources.sessions.require_session().await?;
        let entries = resources.food_log.entries().await?;
        let summary = summarize(&entries, &resources.nutrition);
        Ok((StatusCode::OK, Json(summary)).into_response())
    }
}
