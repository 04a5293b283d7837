// ABOUTME: Admin catalog editor routes for listing, adding, updating, deleting and resetting foods
// ABOUTME: Every endpoint requires a session carrying the admin role
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors

use super::AppResources;
use crate::catalog::{AdminFoodForm, CatalogEditor};
use crate::config::nutrition::IndexPolicy;
use crate::errors::{AppError, AppResult};
use crate::models::FoodItem;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Working copy listing after an admin operation
#[derive(Debug, Serialize, Deserialize)]
pub struct AdminCatalogResponse {
    /// Current working copy
    pub foods: Vec<FoodItem>,
    /// Number of foods
    pub total: usize,
    /// Whether the operation changed the catalog
    pub changed: bool,
}

impl AdminCatalogResponse {
    fn new(editor: &CatalogEditor, changed: bool) -> Self {
        Self {
            foods: editor.items().to_vec(),
            total: editor.items().len(),
            changed,
        }
    }
}

/// Admin routes handler
pub struct AdminRoutes;

impl AdminRoutes {
    /// Create all admin catalog routes
    pub fn routes(resources: Arc<AppResources>) -> Router {
        Router::new()
            .route(
                "/api/admin/catalog",
                get(Self::handle_list).post(Self::handle_add),
            )
            .route(
                "/api/admin/catalog/:index",
                put(Self::handle_update).delete(Self::handle_delete),
            )
            .route("/api/admin/catalog/reset", post(Self::handle_reset))
            .with_state(resources)
    }

    /// Resolve a path index
    ///
    /// Any well-formed integer is an index; negative or overflowing values
    /// are out of range and follow the configured policy.
    fn parse_index(raw: &str, policy: IndexPolicy) -> AppResult<Option<usize>> {
        let trimmed = raw.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::invalid_format(format!(
                "Invalid catalog index '{raw}'"
            )));
        }

        match digits.parse::<usize>() {
            Ok(index) if !negative || index == 0 => Ok(Some(index)),
            _ => match policy {
                IndexPolicy::Ignore => Ok(None),
                IndexPolicy::Reject => Err(AppError::not_found(format!("Catalog item {trimmed}"))),
            },
        }
    }

    /// Handle GET /api/admin/catalog - List the working copy
    async fn handle_list(
        State(resources): State<Arc<AppResources>>,
    ) -> Result<Response, AppError> {
        resources.sessions.require_admin().await?;
        let editor = resources.catalog.read().await;
        let response = AdminCatalogResponse::new(&editor, false);
        drop(editor);
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle POST /api/admin/catalog - Append a food
    async fn handle_add(
        State(resources): State<Arc<AppResources>>,
        Json(form): Json<AdminFoodForm>,
    ) -> Result<Response, AppError> {
        resources.sessions.require_admin().await?;
        let mut editor = resources.catalog.write().await;
        editor.add_from_form(form)?;
        let response = AdminCatalogResponse::new(&editor, true);
        drop(editor);
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    /// Handle PUT /api/admin/catalog/:index - Replace the food at an index
    async fn handle_update(
        State(resources): State<Arc<AppResources>>,
        Path(index): Path<String>,
        Json(form): Json<AdminFoodForm>,
    ) -> Result<Response, AppError> {
        resources.sessions.require_admin().await?;
        let mut editor = resources.catalog.write().await;
        let changed = match Self::parse_index(&index, editor.policy())? {
            Some(index) => editor.update_from_form(index, form)?,
            None => false,
        };
        let response = AdminCatalogResponse::new(&editor, changed);
        drop(editor);
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle DELETE /api/admin/catalog/:index - Remove the food at an index
    async fn handle_delete(
        State(resources): State<Arc<AppResources>>,
        Path(index): Path<String>,
    ) -> Result<Response, AppError> {
        resources.sessions.require_admin().await?;
        let mut editor = resources.catalog.write().await;
        let changed = match Self::parse_index(&index, editor.policy())? {
            Some(index) => editor.delete_item_at(index)?,
            None => false,
        };
        let response = AdminCatalogResponse::new(&editor, changed);
        drop(editor);
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle POST /api/admin/catalog/reset - Restore the reference foods
    async fn handle_reset(
        State(resources): State<Arc<AppResources>>,
    ) -> Result<Response, AppError> {
        resources.sessions.require_admin().await?;
        let mut editor = resources.catalog.write().await;
        editor.reset();
        let response = AdminCatalogResponse::new(&editor, true);
        drop(editor);
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
