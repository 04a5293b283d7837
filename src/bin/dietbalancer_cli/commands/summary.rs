// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors
// ABOUTME: Summary command for dietbalancer-cli
// ABOUTME: Totals, progress bars against daily targets and suggestions

use super::{CliContext, Result};
use crate::helpers::display::display_summary;
use dietbalancer::intelligence::summarize;

pub async fn show(ctx: &CliContext) -> Result<()> {
    ctx.sessions.require_session().await?;
    let entries = ctx.food_log.entries().await?;
    display_summary(&summarize(&entries, &ctx.nutrition));
    Ok(())
}
