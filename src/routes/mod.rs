// ABOUTME: Route module organization for the DietBalancer HTTP endpoints
// ABOUTME: Shared resources, router assembly, tracing and CORS layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors

//! Route module for the DietBalancer HTTP shell
//!
//! Each domain module contains route definitions and thin handlers that
//! delegate to the catalog, food log, aggregator and session layers. The
//! server represents one local device, so there is one session at a time.

/// Admin catalog editor routes
pub mod admin;
/// Sign-in, sign-up, logout and session routes
pub mod auth;
/// Catalog browsing routes
pub mod catalog;
/// Food log routes
pub mod food_log;
/// Health check routes
pub mod health;
/// Nutrition summary routes
pub mod summary;

pub use admin::AdminRoutes;
pub use auth::AuthRoutes;
pub use catalog::CatalogRoutes;
pub use food_log::FoodLogRoutes;
pub use health::HealthRoutes;
pub use summary::SummaryRoutes;

use crate::auth::{Authenticator, SessionManager};
use crate::catalog::CatalogEditor;
use crate::config::nutrition::NutritionConfig;
use crate::food_log::FoodLogService;
use crate::storage::{FoodLogRepository, FoodLogRepositoryImpl, LocalStore};
use axum::http::{HeaderValue, Method};
use axum::Router;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Shared state behind every handler
pub struct AppResources {
    /// Nutrition targets and editor policy
    pub nutrition: NutritionConfig,
    /// Admin working copy of the catalog, also served to users
    pub catalog: RwLock<CatalogEditor>,
    /// Food log workflow
    pub food_log: FoodLogService,
    /// Session lifecycle
    pub sessions: SessionManager,
}

impl AppResources {
    /// Wire resources over a store and an authenticator
    #[must_use]
    pub fn new(
        nutrition: NutritionConfig,
        store: Arc<dyn LocalStore>,
        authenticator: Arc<dyn Authenticator>,
    ) -> Self {
        let repository: Arc<dyn FoodLogRepository> =
            Arc::new(FoodLogRepositoryImpl::new(Arc::clone(&store)));

        Self {
            nutrition,
            catalog: RwLock::new(CatalogEditor::new(nutrition.index_policy)),
            food_log: FoodLogService::new(Arc::clone(&repository)),
            sessions: SessionManager::new(store, authenticator, repository),
        }
    }
}

/// Assemble every route with tracing and CORS layers
#[must_use]
pub fn build_router(resources: Arc<AppResources>, cors_origins: &[String]) -> Router {
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(CatalogRoutes::routes(Arc::clone(&resources)))
        .merge(FoodLogRoutes::routes(Arc::clone(&resources)))
        .merge(SummaryRoutes::routes(Arc::clone(&resources)))
        .merge(AdminRoutes::routes(Arc::clone(&resources)))
        .merge(AuthRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origins))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let methods = [Method::GET, Method::POST, Method::PUT, Method::DELETE];
    let base = CorsLayer::new().allow_methods(methods).allow_headers(Any);

    if origins.is_empty() {
        return base.allow_origin(Any);
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    base.allow_origin(parsed)
}
