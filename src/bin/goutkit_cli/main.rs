// ABOUTME: GoutKit CLI - command-line front end for care-plan generation
// ABOUTME: Generates plans from profile files, validates catalogs and lists form options
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GoutKit Contributors
//!
//! Usage:
//! ```bash
//! # Generate a plan from a profile, printed as pretty JSON
//! goutkit-cli generate --profile profile.yaml
//!
//! # Reproducible plan from a custom catalog
//! goutkit-cli generate --profile profile.json --seed 42 --catalog meals.yaml
//!
//! # Validate catalog and protocol files
//! goutkit-cli catalog validate --catalog meals.yaml --protocol flare.yaml
//!
//! # List every option key and label a profile can use
//! goutkit-cli options
//! ```
//!
//! Application errors are printed to stderr as a JSON `ErrorResponse`.
//! The exit status is 2 for bad input files and 1 for every other failure.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use goutkit_planner::config::AppConfig;
use goutkit_planner::errors::{AppError, ErrorResponse};
use tracing::debug;

/// Exit status for errors caused by the caller's input files
const CALLER_ERROR_EXIT: u8 = 2;

#[derive(Parser)]
#[command(
    name = "goutkit-cli",
    about = "GoutKit care-plan generator",
    long_about = "Generates a personalized weekly gout care plan (meals, exercise, insights, \
                  hydration and flare protocol) from a health profile."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Generate a care plan and print it as JSON
    Generate {
        /// Profile file (.json, .yaml or .yml)
        #[arg(long)]
        profile: PathBuf,

        /// Seed for a reproducible plan (overrides `GOUTKIT_SEED`)
        #[arg(long)]
        seed: Option<u64>,

        /// Catalog file (overrides `GOUTKIT_CATALOG_PATH`)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Flare protocol file (overrides `GOUTKIT_PROTOCOL_PATH`)
        #[arg(long)]
        protocol: Option<PathBuf>,

        /// Print single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// Catalog commands
    Catalog {
        #[command(subcommand)]
        action: CatalogCommand,
    },

    /// Print every profile option key and label
    Options,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum CatalogCommand {
    /// Load and validate catalog and protocol files
    Validate {
        /// Catalog file (overrides `GOUTKIT_CATALOG_PATH`)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Flare protocol file (overrides `GOUTKIT_PROTOCOL_PATH`)
        #[arg(long)]
        protocol: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => report_error(error),
    }
}

fn run(cli: Cli) -> Result<()> {
    let seed_flag = match &cli.command {
        Command::Generate { seed, .. } => *seed,
        Command::Catalog { .. } | Command::Options => None,
    };

    let mut config = AppConfig::from_env_with_seed(seed_flag)?;
    if cli.verbose {
        config.logging = config.logging.with_level("debug");
    }
    config.logging.init()?;
    debug!("GoutKit CLI");

    match cli.command {
        Command::Generate {
            profile,
            seed: _,
            catalog,
            protocol,
            compact,
        } => {
            config.catalog_path = catalog.or(config.catalog_path);
            config.protocol_path = protocol.or(config.protocol_path);
            config.log_summary();
            commands::generate::run(&config, &profile, compact)?;
        }
        Command::Catalog { action } => match action {
            CatalogCommand::Validate { catalog, protocol } => {
                config.catalog_path = catalog.or(config.catalog_path);
                config.protocol_path = protocol.or(config.protocol_path);
                config.log_summary();
                commands::catalog::validate(&config)?;
            }
        },
        Command::Options => commands::options::run()?,
    }

    Ok(())
}

/// Print `error` to stderr and pick the exit status
fn report_error(error: anyhow::Error) -> ExitCode {
    match error.downcast::<AppError>() {
        Ok(error) => {
            let status = if error.code.is_caller_error() {
                ExitCode::from(CALLER_ERROR_EXIT)
            } else {
                ExitCode::FAILURE
            };
            let response = ErrorResponse::from(error);
            match serde_json::to_string(&response) {
                Ok(json) => eprintln!("{json}"),
                Err(_) => eprintln!("Error: {}", response.error.message),
            }
            status
        }
        Err(error) => {
            eprintln!("Error: {error:#}");
            ExitCode::FAILURE
        }
    }
}
