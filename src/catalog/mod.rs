// ABOUTME: Food catalog with the reference foods and name filtering
// ABOUTME: Admin working copy editor and text form parsing live in submodules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors

//! # Food Catalog
//!
//! The reference catalog is fixed. Administrators edit a working copy
//! ([`CatalogEditor`]) that lives only as long as the process.

/// In-memory admin working copy
pub mod editor;
/// Text form parsing for custom and admin food entry
pub mod form;

pub use editor::CatalogEditor;
pub use form::{parse_nutrient_field, AdminFoodForm, CustomFoodForm};

use crate::models::FoodItem;

/// The four reference foods
#[must_use]
pub fn reference_catalog() -> Vec<FoodItem> {
    vec![
        FoodItem::new("Apple", 52.0, 0.3, 0.1, 5.0),
        FoodItem::new("Egg", 155.0, 13.0, 1.2, 0.0),
        FoodItem::new("Rice (1 cup)", 206.0, 4.3, 0.8, 0.0),
        FoodItem::new("Spinach (100g)", 23.0, 2.9, 2.7, 28.0),
    ]
}

/// Foods whose name contains `query`, ignoring case, in catalog order
///
/// The query is matched as given; an empty query returns every food.
#[must_use]
pub fn filter_catalog(catalog: &[FoodItem], query: &str) -> Vec<FoodItem> {
    if query.is_empty() {
        return catalog.to_vec();
    }

    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|food| food.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Exact-name lookup
#[must_use]
pub fn find_by_name<'a>(catalog: &'a [FoodItem], name: &str) -> Option<&'a FoodItem> {
    catalog.iter().find(|food| food.name == name)
}
