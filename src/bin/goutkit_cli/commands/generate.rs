// ABOUTME: Plan generation command for goutkit-cli
// ABOUTME: Loads the profile and catalog store, generates a plan and prints it as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GoutKit Contributors

use std::path::Path;

use anyhow::Result;
use goutkit_planner::catalog::{load_profile, CatalogStore};
use goutkit_planner::config::{AppConfig, PlannerConfig};
use goutkit_planner::errors::AppError;
use tracing::info;

/// Generate a plan for the profile at `profile_path` and print it
pub fn run(config: &AppConfig, profile_path: &Path, compact: bool) -> Result<()> {
    let profile = load_profile(profile_path)?;
    let store = CatalogStore::from_config(config)?;
    let planner_config = PlannerConfig::load().map_err(AppError::from)?;
    let mut rng = config.random_source().map_err(AppError::from)?;

    info!(profile = %profile_path.display(), "generating care plan");
    let plan = store
        .generator(&planner_config)
        .generate_plan(&profile, &mut rng)
        .map_err(AppError::from)?;

    let json = if compact {
        serde_json::to_string(&plan)
    } else {
        serde_json::to_string_pretty(&plan)
    }
    .map_err(AppError::from)?;
    println!("{json}");
    Ok(())
}
