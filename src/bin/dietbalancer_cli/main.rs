// ABOUTME: DietBalancer CLI - command-line presentation shell over the nutrition library
// ABOUTME: Handles sign-in, catalog browsing, food logging and daily summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors
//!
//! Usage:
//! ```bash
//! # Sign in with the demo account and remember the email
//! dietbalancer-cli login --email demo@dietbalancer.com --password 'Demo@123456' --remember
//!
//! # Browse the catalog
//! dietbalancer-cli catalog spin
//!
//! # Log foods
//! dietbalancer-cli log quick Apple
//! dietbalancer-cli log custom --name Toast --calories 80 --protein 3
//!
//! # Show totals, progress and suggestions
//! dietbalancer-cli summary
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dietbalancer::{
    auth::{LocalAuthenticator, SessionManager},
    config::ServerConfig,
    food_log::FoodLogService,
    logging::LoggingConfig,
    storage::{FileStore, FoodLogRepository, FoodLogRepositoryImpl, LocalStore},
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

use commands::CliContext;

#[derive(Parser)]
#[command(
    name = "dietbalancer-cli",
    about = "DietBalancer nutrition tracker",
    long_about = "Log foods, track daily totals against recommended daily allowances, and get suggestions."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Data directory override (defaults to DIETBALANCER_DATA_DIR or ./data)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Sign in to an existing account
    Login {
        /// Account email
        #[arg(long)]
        email: String,

        /// Account password
        #[arg(long)]
        password: String,

        /// Remember the email for the next sign-in
        #[arg(long)]
        remember: bool,
    },

    /// Create an account and sign in
    Signup {
        /// Account email
        #[arg(long)]
        email: String,

        /// Password
        #[arg(long)]
        password: String,

        /// Password again
        #[arg(long)]
        confirm_password: String,
    },

    /// Sign out and clear the food log
    Logout,

    /// Show the current session
    Whoami,

    /// List catalog foods, optionally filtered by name
    Catalog {
        /// Case-insensitive name filter
        query: Option<String>,
    },

    /// Food log commands
    Log {
        #[command(subcommand)]
        action: LogCommand,
    },

    /// Totals, progress against daily targets and suggestions
    Summary,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum LogCommand {
    /// List logged entries
    List,

    /// Log a catalog food by exact name
    Quick {
        /// Catalog food name
        name: String,
    },

    /// Log a custom food
    Custom {
        /// Food name
        #[arg(long)]
        name: String,

        /// Calories (kcal)
        #[arg(long)]
        calories: String,

        /// Protein (g), defaults to 0
        #[arg(long, default_value = "")]
        protein: String,
    },

    /// Remove an entry by id
    Remove {
        /// Entry id
        id: String,
    },

    /// Remove every entry
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::for_cli();
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    logging.init()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    debug!("Using data directory {}", config.data_dir.display());

    let store: Arc<dyn LocalStore> = Arc::new(FileStore::new(&config.data_dir));
    let authenticator =
        Arc::new(LocalAuthenticator::persistent(Arc::clone(&store), config.bcrypt_cost).await?);
    let repository: Arc<dyn FoodLogRepository> =
        Arc::new(FoodLogRepositoryImpl::new(Arc::clone(&store)));

    let ctx = CliContext {
        nutrition: config.nutrition,
        sessions: SessionManager::new(store, authenticator, Arc::clone(&repository)),
        food_log: FoodLogService::new(repository),
    };

    match cli.command {
        Command::Login {
            email,
            password,
            remember,
        } => commands::auth::login(&ctx, email, password, remember).await?,
        Command::Signup {
            email,
            password,
            confirm_password,
        } => commands::auth::signup(&ctx, email, password, confirm_password).await?,
        Command::Logout => commands::auth::logout(&ctx).await?,
        Command::Whoami => commands::auth::whoami(&ctx).await?,
        Command::Catalog { query } => commands::catalog::search(query.as_deref().unwrap_or("")),
        Command::Log { action } => match action {
            LogCommand::List => commands::log::list(&ctx).await?,
            LogCommand::Quick { name } => commands::log::quick(&ctx, &name).await?,
            LogCommand::Custom {
                name,
                calories,
                protein,
            } => commands::log::custom(&ctx, name, calories, protein).await?,
            LogCommand::Remove { id } => commands::log::remove(&ctx, &id).await?,
            LogCommand::Clear => commands::log::clear(&ctx).await?,
        },
        Command::Summary => commands::summary::show(&ctx).await?,
    }

    Ok(())
}
