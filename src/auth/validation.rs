// ABOUTME: Credential input validation for sign-in and sign-up forms
// ABOUTME: Email format, password strength with demo exemption, confirmation match
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors

use crate::constants::{auth, demo};
use crate::errors::{AppError, AppResult, ErrorCode};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

static PASSWORD_CHARSET: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\d@$!%*?&]+$").ok());

/// Message shown when a password misses a required character class
pub const PASSWORD_RULES: &str =
    "Must include: uppercase, lowercase, number, special character (@$!%*?&)";

/// Validate an email address
///
/// # Errors
///
/// Returns `MissingRequiredField` for a blank email and `InvalidFormat` when
/// it does not look like `name@domain.tld`
pub fn validate_email(email: &str) -> AppResult<()> {
    if email.is_empty() {
        return Err(AppError::missing_field("Email"));
    }

    let matches = EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(email));
    if !matches {
        return Err(AppError::invalid_format("Please enter a valid email address"));
    }
    Ok(())
}

/// Validate password strength
///
/// The demo password is exempt from the character class rules.
///
/// # Errors
///
/// Returns `MissingRequiredField` for a blank password and `InvalidInput` for
/// a short or weak one
pub fn validate_password(password: &str) -> AppResult<()> {
    if password.is_empty() {
        return Err(AppError::missing_field("Password"));
    }
    if password.chars().count() < auth::MIN_PASSWORD_LENGTH {
        return Err(AppError::invalid_input(format!(
            "Password must be at least {} characters",
            auth::MIN_PASSWORD_LENGTH
        )));
    }
    if password == demo::PASSWORD || is_strong(password) {
        return Ok(());
    }
    Err(AppError::invalid_input(PASSWORD_RULES))
}

/// Validate the sign-up confirmation field
///
/// # Errors
///
/// Returns `MissingRequiredField` when blank and `InvalidInput` when it
/// differs from `password`
pub fn validate_confirmation(password: &str, confirmation: &str) -> AppResult<()> {
    if confirmation.is_empty() {
        return Err(AppError::new(
            ErrorCode::MissingRequiredField,
            "Please confirm your password",
        ));
    }
    if confirmation != password {
        return Err(AppError::invalid_input("Passwords do not match"));
    }
    Ok(())
}

fn is_strong(password: &str) -> bool {
    let allowed = PASSWORD_CHARSET
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(password));

    allowed
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password
            .chars()
            .any(|c| auth::PASSWORD_SPECIAL_CHARS.contains(c))
}
