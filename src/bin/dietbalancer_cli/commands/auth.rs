// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors
// ABOUTME: Session commands for dietbalancer-cli
// ABOUTME: login, signup, logout and whoami

use super::{CliContext, Result};
use crate::helpers::display::{display_session, display_signed_out};
use dietbalancer::auth::{SignInRequest, SignUpRequest};

pub async fn login(ctx: &CliContext, email: String, password: String, remember: bool) -> Result<()> {
    let request = SignInRequest {
        email,
        password,
        remember,
    };
    let session = ctx.sessions.sign_in(&request).await?;
    println!("Signed in.");
    display_session(&session);
    Ok(())
}

pub async fn signup(
    ctx: &CliContext,
    email: String,
    password: String,
    confirm_password: String,
) -> Result<()> {
    let request = SignUpRequest {
        email,
        password,
        confirm_password,
    };
    let session = ctx.sessions.sign_up(&request).await?;
    println!("Account created.");
    display_session(&session);
    Ok(())
}

pub async fn logout(ctx: &CliContext) -> Result<()> {
    ctx.sessions.logout().await?;
    println!("Signed out. Food log cleared.");
    Ok(())
}

pub async fn whoami(ctx: &CliContext) -> Result<()> {
    match ctx.sessions.current().await? {
        Some(session) => display_session(&session),
        None => {
            let remembered = ctx.sessions.remembered_email().await?;
            display_signed_out(remembered.as_deref());
        }
    }
    Ok(())
}
