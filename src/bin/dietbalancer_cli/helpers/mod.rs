// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors
// ABOUTME: Helper modules for dietbalancer-cli
// ABOUTME: Provides display formatting utilities

pub mod display;
