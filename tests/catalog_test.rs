// ABOUTME: Integration tests for catalog filtering and the admin catalog editor
// ABOUTME: Case-insensitive search, index policies, form validation and reset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::assert_close;
use dietbalancer::{
    catalog::{filter_catalog, reference_catalog, AdminFoodForm, CatalogEditor},
    config::IndexPolicy,
    errors::ErrorCode,
    models::FoodItem,
};

fn names(foods: &[FoodItem]) -> Vec<&str> {
    foods.iter().map(|f| f.name.as_str()).collect()
}

fn admin_form(name: &str, calories: &str, protein: &str) -> AdminFoodForm {
    AdminFoodForm {
        name: name.to_owned(),
        calories: calories.to_owned(),
        protein: protein.to_owned(),
        iron: None,
        vitamin_c: None,
    }
}

#[test]
fn test_search_ignores_case() {
    let catalog = reference_catalog();
    assert_eq!(names(&filter_catalog(&catalog, "APPLE")), vec!["Apple"]);
    assert_eq!(names(&filter_catalog(&catalog, "spin")), vec!["Spinach (100g)"]);
}

#[test]
fn test_empty_query_returns_whole_catalog() {
    let catalog = reference_catalog();
    assert_eq!(filter_catalog(&catalog, ""), catalog);
}

#[test]
fn test_unmatched_query_is_empty() {
    assert!(filter_catalog(&reference_catalog(), "pizza").is_empty());
}

#[test]
fn test_editor_starts_from_reference_catalog() {
    let editor = CatalogEditor::default();
    assert_eq!(editor.items(), reference_catalog().as_slice());
    assert_eq!(editor.policy(), IndexPolicy::Ignore);
}

#[test]
fn test_add_update_delete_and_reset() {
    let mut editor = CatalogEditor::new(IndexPolicy::Ignore);

    let added = editor
        .add_from_form(admin_form("Banana", "89", "1.1"))
        .unwrap();
    assert_eq!(added.name, "Banana");
    assert_close(added.iron, 0.0);
    assert_eq!(editor.items().len(), 5);

    assert!(editor
        .update_from_form(0, admin_form("Green Apple", "50", "0.4"))
        .unwrap());
    // Micronutrients left out of the form keep the previous values
    assert_close(editor.items()[0].vitamin_c, 5.0);
    assert_eq!(editor.items()[0].name, "Green Apple");

    assert!(editor.delete_item_at(1).unwrap());
    assert_eq!(
        names(editor.items()),
        vec!["Green Apple", "Rice (1 cup)", "Spinach (100g)", "Banana"]
    );

    editor.reset();
    assert_eq!(editor.items(), reference_catalog().as_slice());
}

#[test]
fn test_out_of_range_ignored_by_default() {
    let mut editor = CatalogEditor::new(IndexPolicy::Ignore);

    assert!(!editor.delete_item_at(10).unwrap());
    assert!(!editor
        .update_item_at(4, FoodItem::new("Ghost", 1.0, 1.0, 0.0, 0.0))
        .unwrap());
    assert_eq!(editor.items(), reference_catalog().as_slice());
}

#[test]
fn test_out_of_range_rejected_under_reject_policy() {
    let mut editor = CatalogEditor::new(IndexPolicy::Reject);

    let err = editor.delete_item_at(4).unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert_eq!(editor.items().len(), 4);
}

#[test]
fn test_invalid_admin_form_leaves_catalog_unchanged() {
    let mut editor = CatalogEditor::default();

    let err = editor
        .add_from_form(admin_form("Bad", "abc", "1"))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidNumericInput);

    let err = editor.add_from_form(admin_form("  ", "10", "1")).unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);

    let err = editor.add_from_form(admin_form("No protein", "10", "")).unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);

    assert_eq!(editor.items(), reference_catalog().as_slice());
}

#[test]
fn test_admin_form_accepts_json_numbers() {
    let form: AdminFoodForm = serde_json::from_str(
        r#"{"name":"Orange","calories":47,"protein":"0.9","iron":0.1,"vitaminC":53.2}"#,
    )
    .unwrap();

    let food = form.into_food_item(None).unwrap();
    assert_eq!(food, FoodItem::new("Orange", 47.0, 0.9, 0.1, 53.2));
}
