// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors
// ABOUTME: Food log commands for dietbalancer-cli
// ABOUTME: list, quick, custom, remove and clear; all require a session

use super::{CliContext, Result};
use crate::helpers::display::display_entries;
use dietbalancer::{
    catalog::{reference_catalog, CustomFoodForm},
    errors::AppError,
    models::EntryId,
};

pub async fn list(ctx: &CliContext) -> Result<()> {
    ctx.sessions.require_session().await?;
    let entries = ctx.food_log.entries().await?;
    display_entries(&entries);
    Ok(())
}

pub async fn quick(ctx: &CliContext, name: &str) -> Result<()> {
    ctx.sessions.require_session().await?;
    let entries = ctx.food_log.quick_add(&reference_catalog(), name).await?;
    println!("Logged {name}.");
    display_entries(&entries);
    Ok(())
}

pub async fn custom(ctx: &CliContext, name: String, calories: String, protein: String) -> Result<()> {
    ctx.sessions.require_session().await?;
    let form = CustomFoodForm {
        name,
        calories,
        protein,
    };
    let entries = ctx.food_log.custom_add(form).await?;
    println!("Logged custom food.");
    display_entries(&entries);
    Ok(())
}

pub async fn remove(ctx: &CliContext, id: &str) -> Result<()> {
    ctx.sessions.require_session().await?;
    let id: EntryId = id
        .parse()
        .map_err(|_| AppError::invalid_format(format!("Invalid entry id '{id}'")))?;
    let entries = ctx.food_log.remove(id).await?;
    display_entries(&entries);
    Ok(())
}

pub async fn clear(ctx: &CliContext) -> Result<()> {
    ctx.sessions.require_session().await?;
    ctx.food_log.clear().await?;
    println!("Food log cleared.");
    Ok(())
}
