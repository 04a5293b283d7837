// ABOUTME: Admin working copy of the food catalog with index-based editing
// ABOUTME: Add, update, delete and reset under a configurable out-of-range policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors

use super::form::AdminFoodForm;
use super::reference_catalog;
use crate::config::nutrition::IndexPolicy;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::models::FoodItem;
use tracing::debug;

/// Editable copy of the catalog, initialized from the reference foods
///
/// Edits are held in memory only and never reach logged entries.
#[derive(Debug, Clone)]
pub struct CatalogEditor {
    items: Vec<FoodItem>,
    policy: IndexPolicy,
}

impl Default for CatalogEditor {
    fn default() -> Self {
        Self::new(IndexPolicy::default())
    }
}

impl CatalogEditor {
    /// Working copy of the reference catalog
    #[must_use]
    pub fn new(policy: IndexPolicy) -> Self {
        Self {
            items: reference_catalog(),
            policy,
        }
    }

    /// Current items in display order
    #[must_use]
    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    /// Active out-of-range policy
    #[must_use]
    pub const fn policy(&self) -> IndexPolicy {
        self.policy
    }

    /// Append a food
    pub fn add_item(&mut self, food: FoodItem) {
        AppLogger::log_catalog_event("add", &food.name, self.items.len() + 1);
        self.items.push(food);
    }

    /// Replace the food at `index`
    ///
    /// Returns whether the catalog changed.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an out-of-range index under `IndexPolicy::Reject`
    pub fn update_item_at(&mut self, index: usize, food: FoodItem) -> AppResult<bool> {
        let size = self.items.len();
        let Some(slot) = self.items.get_mut(index) else {
            return self.out_of_range(index);
        };
        AppLogger::log_catalog_event("update", &food.name, size);
        *slot = food;
        Ok(true)
    }

    /// Remove the food at `index`, shifting later items down
    ///
    /// Returns whether the catalog changed.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an out-of-range index under `IndexPolicy::Reject`
    pub fn delete_item_at(&mut self, index: usize) -> AppResult<bool> {
        if index >= self.items.len() {
            return self.out_of_range(index);
        }
        let removed = self.items.remove(index);
        AppLogger::log_catalog_event("delete", &removed.name, self.items.len());
        Ok(true)
    }

    /// Validate an admin form and append it
    ///
    /// # Errors
    ///
    /// Returns an error if the form fails validation
    pub fn add_from_form(&mut self, form: AdminFoodForm) -> AppResult<FoodItem> {
        let food = form.into_food_item(None)?;
        self.add_item(food.clone());
        Ok(food)
    }

    /// Validate an admin form and write it over the food at `index`
    ///
    /// Micronutrients the form leaves out keep their current values.
    ///
    /// # Errors
    ///
    /// Returns an error if the form fails validation, or the index is out of
    /// range under `IndexPolicy::Reject`
    pub fn update_from_form(&mut self, index: usize, form: AdminFoodForm) -> AppResult<bool> {
        let food = form.into_food_item(self.items.get(index))?;
        self.update_item_at(index, food)
    }

    /// Discard every edit and restore the reference foods
    pub fn reset(&mut self) {
        self.items = reference_catalog();
        AppLogger::log_catalog_event("reset", "", self.items.len());
    }

    fn out_of_range(&self, index: usize) -> AppResult<bool> {
        match self.policy {
            IndexPolicy::Ignore => {
                debug!(index, size = self.items.len(), "Catalog index out of range, ignored");
                Ok(false)
            }
            IndexPolicy::Reject => Err(AppError::not_found(format!("Catalog item {index}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_shifts_following_items() {
        let mut editor = CatalogEditor::default();
        assert!(editor.delete_item_at(0).unwrap());

        assert_eq!(editor.items().len(), 3);
        assert_eq!(editor.items()[0].name, "Egg");
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut editor = CatalogEditor::default();
        let toast = FoodItem::new("Toast", 80.0, 3.0, 0.0, 0.0);
        assert!(editor.update_item_at(2, toast.clone()).unwrap());

        assert_eq!(editor.items().len(), 4);
        assert_eq!(editor.items()[2], toast);
    }

    #[test]
    fn test_reset_restores_reference() {
        let mut editor = CatalogEditor::default();
        editor.add_item(FoodItem::new("Toast", 80.0, 3.0, 0.0, 0.0));
        editor.reset();

        assert_eq!(editor.items(), reference_catalog().as_slice());
    }
}
