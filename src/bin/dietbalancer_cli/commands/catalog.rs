// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors
// ABOUTME: Catalog command for dietbalancer-cli
// ABOUTME: Lists reference foods filtered by a case-insensitive name query

use crate::helpers::display::display_foods;
use dietbalancer::catalog::{filter_catalog, reference_catalog};

pub fn search(query: &str) {
    let foods = filter_catalog(&reference_catalog(), query);
    if foods.is_empty() {
        println!("No foods match '{query}'.");
        return;
    }
    display_foods(&foods);
}
