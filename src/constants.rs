// ABOUTME: Re-exports domain constants from dietbalancer-core
// ABOUTME: Daily target defaults, storage keys, demo account and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors

pub use dietbalancer_core::constants::*;
