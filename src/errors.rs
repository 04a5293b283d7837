// ABOUTME: Re-exports error types from dietbalancer-core for unified type identity
// ABOUTME: Ensures AppError/ErrorCode are the same type across all workspace crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors

pub use dietbalancer_core::errors::*;
