// ABOUTME: HTTP integration tests for the DietBalancer router
// ABOUTME: Session gating, food log flow, summary, catalog search and admin editor access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use common::{test_resources, test_resources_with, STRONG_PASSWORD};
use dietbalancer::{
    config::{IndexPolicy, NutritionConfig},
    constants::demo,
    routes::{build_router, AppResources},
};
use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};
use std::sync::Arc;

fn app(resources: &Arc<AppResources>) -> axum::Router {
    build_router(Arc::clone(resources), &[])
}

async fn sign_in_demo(resources: &Arc<AppResources>) {
    let response = AxumTestRequest::post("/api/auth/signin")
        .json(&json!({
            "email": demo::ADMIN_EMAIL,
            "password": demo::PASSWORD,
            "remember": true
        }))
        .send(app(resources))
        .await;
    assert_eq!(response.status(), 200);
}

async fn sign_up_user(resources: &Arc<AppResources>) {
    let response = AxumTestRequest::post("/api/auth/signup")
        .json(&json!({
            "email": "user@example.com",
            "password": STRONG_PASSWORD,
            "confirmPassword": STRONG_PASSWORD
        }))
        .send(app(resources))
        .await;
    assert_eq!(response.status(), 201);
}

#[tokio::test]
async fn test_health_endpoints() {
    let resources = test_resources().await;

    let response = AxumTestRequest::get("/health").send(app(&resources)).await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");

    let response = AxumTestRequest::get("/ready").send(app(&resources)).await;
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_catalog_search_is_public() {
    let resources = test_resources().await;

    let response = AxumTestRequest::get("/api/catalog?q=EGG")
        .send(app(&resources))
        .await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["total"], 1);
    assert_eq!(body["foods"][0]["name"], "Egg");

    let body: Value = AxumTestRequest::get("/api/catalog")
        .send(app(&resources))
        .await
        .json();
    assert_eq!(body["total"], 4);
}

#[tokio::test]
async fn test_food_log_requires_session() {
    let resources = test_resources().await;

    let response = AxumTestRequest::get("/api/log").send(app(&resources)).await;
    assert_eq!(response.status(), 401);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "AUTH_REQUIRED");

    let response = AxumTestRequest::get("/api/summary")
        .send(app(&resources))
        .await;
    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn test_log_and_summary_flow() {
    let resources = test_resources().await;
    sign_in_demo(&resources).await;

    let response = AxumTestRequest::post("/api/log/quick")
        .json(&json!({ "name": "Apple" }))
        .send(app(&resources))
        .await;
    assert_eq!(response.status(), 201);

    let response = AxumTestRequest::post("/api/log/quick")
        .json(&json!({ "name": "Egg" }))
        .send(app(&resources))
        .await;
    assert_eq!(response.status(), 201);
    let body: Value = response.json();
    assert_eq!(body["total"], 2);

    let summary: Value = AxumTestRequest::get("/api/summary")
        .send(app(&resources))
        .await
        .json();
    assert_eq!(summary["entry_count"], 2);
    assert_eq!(summary["totals"]["calories"], 207.0);
    assert_eq!(summary["recommendations"].as_array().unwrap().len(), 4);
    assert_eq!(summary["status"], "needs_attention");
}

#[tokio::test]
async fn test_custom_add_validation_and_remove() {
    let resources = test_resources().await;
    sign_in_demo(&resources).await;

    let response = AxumTestRequest::post("/api/log/custom")
        .json(&json!({ "name": "Toast", "calories": "abc", "protein": "3" }))
        .send(app(&resources))
        .await;
    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_NUMERIC_INPUT");

    let body: Value = AxumTestRequest::post("/api/log/custom")
        .json(&json!({ "name": "Toast", "calories": 80 }))
        .send(app(&resources))
        .await
        .json();
    let id = body["entries"][0]["id"].as_u64().unwrap();

    let response = AxumTestRequest::delete("/api/log/12345")
        .send(app(&resources))
        .await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["total"], 1);

    let body: Value = AxumTestRequest::delete(&format!("/api/log/{id}"))
        .send(app(&resources))
        .await
        .json();
    assert_eq!(body["total"], 0);

    let response = AxumTestRequest::delete("/api/log/not-an-id")
        .send(app(&resources))
        .await;
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_quick_add_unknown_food_is_not_found() {
    let resources = test_resources().await;
    sign_in_demo(&resources).await;

    let response = AxumTestRequest::post("/api/log/quick")
        .json(&json!({ "name": "Pizza" }))
        .send(app(&resources))
        .await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_admin_editor_forbidden_for_regular_user() {
    let resources = test_resources().await;
    sign_up_user(&resources).await;

    let response = AxumTestRequest::get("/api/admin/catalog")
        .send(app(&resources))
        .await;
    assert_eq!(response.status(), 403);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "PERMISSION_DENIED");
}

#[tokio::test]
async fn test_admin_edits_reach_catalog_search() {
    let resources = test_resources().await;
    sign_in_demo(&resources).await;

    let response = AxumTestRequest::post("/api/admin/catalog")
        .json(&json!({ "name": "Orange", "calories": "47", "protein": "0.9", "vitaminC": "53" }))
        .send(app(&resources))
        .await;
    assert_eq!(response.status(), 201);

    let body: Value = AxumTestRequest::get("/api/catalog?q=orange")
        .send(app(&resources))
        .await
        .json();
    assert_eq!(body["total"], 1);

    let body: Value = AxumTestRequest::delete("/api/admin/catalog/0")
        .send(app(&resources))
        .await
        .json();
    assert_eq!(body["changed"], true);
    assert_eq!(body["total"], 4);

    let body: Value = AxumTestRequest::delete("/api/admin/catalog/99")
        .send(app(&resources))
        .await
        .json();
    assert_eq!(body["changed"], false);

    let response = AxumTestRequest::delete("/api/admin/catalog/99999999999999999999")
        .send(app(&resources))
        .await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["changed"], false);
    assert_eq!(body["total"], 4);

    let body: Value = AxumTestRequest::post("/api/admin/catalog/reset")
        .send(app(&resources))
        .await
        .json();
    assert_eq!(body["foods"][0]["name"], "Apple");
    assert_eq!(body["total"], 4);
}

#[tokio::test]
async fn test_admin_reject_policy_returns_not_found() {
    let config = NutritionConfig {
        index_policy: IndexPolicy::Reject,
        ..NutritionConfig::default()
    };
    let resources = test_resources_with(config).await;
    sign_in_demo(&resources).await;

    let response = AxumTestRequest::put("/api/admin/catalog/-1")
        .json(&json!({ "name": "Ghost", "calories": "1", "protein": "1" }))
        .send(app(&resources))
        .await;
    assert_eq!(response.status(), 404);

    let response = AxumTestRequest::delete("/api/admin/catalog/18446744073709551616")
        .send(app(&resources))
        .await;
    assert_eq!(response.status(), 404);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
}

#[tokio::test]
async fn test_session_and_logout() {
    let resources = test_resources().await;
    sign_in_demo(&resources).await;

    let body: Value = AxumTestRequest::get("/api/auth/session")
        .send(app(&resources))
        .await
        .json();
    assert_eq!(body["session"]["role"], "admin");
    assert_eq!(body["rememberedEmail"], demo::ADMIN_EMAIL);

    AxumTestRequest::post("/api/log/quick")
        .json(&json!({ "name": "Apple" }))
        .send(app(&resources))
        .await;

    let response = AxumTestRequest::post("/api/auth/logout")
        .send(app(&resources))
        .await;
    assert_eq!(response.status(), 204);

    let body: Value = AxumTestRequest::get("/api/auth/session")
        .send(app(&resources))
        .await
        .json();
    assert!(body["session"].is_null());
    assert!(resources.food_log.entries().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_sign_in_with_bad_credentials() {
    let resources = test_resources().await;

    let response = AxumTestRequest::post("/api/auth/signin")
        .json(&json!({ "email": demo::ADMIN_EMAIL, "password": "Wrong@Pass1" }))
        .send(app(&resources))
        .await;
    assert_eq!(response.status(), 401);

    let response = AxumTestRequest::post("/api/auth/signin")
        .json(&json!({ "email": "not-an-email", "password": "Wrong@Pass1" }))
        .send(app(&resources))
        .await;
    assert_eq!(response.status(), 400);
}
