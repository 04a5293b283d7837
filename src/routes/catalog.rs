// ABOUTME: Catalog browsing routes with case-insensitive name filtering
// ABOUTME: Public endpoint; no session required
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors

use super::AppResources;
use crate::catalog::filter_catalog;
use crate::errors::AppError;
use crate::models::FoodItem;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Query parameters for catalog search
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    /// Case-insensitive name substring
    #[serde(default)]
    pub q: String,
}

/// Catalog listing
#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogResponse {
    /// Matching foods in catalog order
    pub foods: Vec<FoodItem>,
    /// Number of matches
    pub total: usize,
}

/// Catalog routes handler
pub struct CatalogRoutes;

impl CatalogRoutes {
    /// Create all catalog routes
    pub fn routes(resources: Arc<AppResources>) -> Router {
        Router::new()
            .route("/api/catalog", get(Self::handle_search))
            .with_state(resources)
    }

    /// Handle GET /api/catalog?q= - Filter foods by name
    async fn handle_search(
        State(resources): State<Arc<AppResources>>,
        Query(query): Query<CatalogQuery>,
    ) -> Result<Response, AppError> {
        let foods = filter_catalog(resources.catalog.read().await.items(), &query.q);
        let response = CatalogResponse {
            total: foods.len(),
            foods,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
