// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, in-memory stores, authenticators and signed-in resources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `dietbalancer`
//!
//! Common setup functions so integration tests build resources the same way
//! the server binary does, only over an in-memory store.

use dietbalancer::{
    auth::{LocalAuthenticator, SessionManager, SignInRequest, SignUpRequest},
    config::NutritionConfig,
    constants::demo,
    food_log::FoodLogService,
    models::{EntryId, FoodItem, LogEntry},
    routes::AppResources,
    storage::{FoodLogRepository, FoodLogRepositoryImpl, LocalStore, MemoryStore},
};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Lowest bcrypt cost, keeps account hashing fast in tests
pub const TEST_BCRYPT_COST: u32 = 4;

/// Password that satisfies every strength rule
pub const STRONG_PASSWORD: &str = "Str0ng@Pass";

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fresh in-memory store
pub fn memory_store() -> Arc<dyn LocalStore> {
    Arc::new(MemoryStore::new())
}

/// Food log service over `store`
pub fn food_log_service(store: &Arc<dyn LocalStore>) -> FoodLogService {
    FoodLogService::new(food_log_repository(store))
}

/// Food log repository over `store`
pub fn food_log_repository(store: &Arc<dyn LocalStore>) -> Arc<dyn FoodLogRepository> {
    Arc::new(FoodLogRepositoryImpl::new(Arc::clone(store)))
}

/// Session manager with a memory-only authenticator holding the demo account
pub async fn session_manager(store: &Arc<dyn LocalStore>) -> SessionManager {
    init_test_logging();
    let authenticator = Arc::new(
        LocalAuthenticator::new(TEST_BCRYPT_COST)
            .await
            .expect("Failed to create authenticator"),
    );
    SessionManager::new(Arc::clone(store), authenticator, food_log_repository(store))
}

/// Server resources over a fresh in-memory store
pub async fn test_resources() -> Arc<AppResources> {
    test_resources_with(NutritionConfig::default()).await
}

/// Server resources with a custom nutrition configuration
pub async fn test_resources_with(nutrition: NutritionConfig) -> Arc<AppResources> {
    init_test_logging();
    let authenticator = Arc::new(
        LocalAuthenticator::new(TEST_BCRYPT_COST)
            .await
            .expect("Failed to create authenticator"),
    );
    Arc::new(AppResources::new(nutrition, memory_store(), authenticator))
}

/// Demo admin credentials
pub fn demo_sign_in(remember: bool) -> SignInRequest {
    SignInRequest {
        email: demo::ADMIN_EMAIL.to_owned(),
        password: demo::PASSWORD.to_owned(),
        remember,
    }
}

/// Sign-up request for a regular user
pub fn user_sign_up(email: &str) -> SignUpRequest {
    SignUpRequest {
        email: email.to_owned(),
        password: STRONG_PASSWORD.to_owned(),
        confirm_password: STRONG_PASSWORD.to_owned(),
    }
}

/// Log entry with a fixed id
pub fn entry(id: u64, food: FoodItem) -> LogEntry {
    LogEntry {
        id: EntryId(id),
        food,
    }
}

/// Approximate float comparison
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
