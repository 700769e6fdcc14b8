// ABOUTME: Catalog validation command for goutkit-cli
// ABOUTME: Loads the configured catalog and protocol and reports category counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GoutKit Contributors

use anyhow::Result;
use goutkit_planner::catalog::CatalogStore;
use goutkit_planner::config::AppConfig;
use goutkit_planner::models::MealCategory;

/// Validate the configured catalog and protocol
pub fn validate(config: &AppConfig) -> Result<()> {
    let store = CatalogStore::from_config(config)?;

    println!("Catalog OK ({} meals)", store.catalog().len());
    for category in MealCategory::ALL {
        println!(
            "  {:<10} {}",
            category.label(),
            store.catalog().meals(*category).len()
        );
    }

    let protocol = store.protocol();
    println!(
        "Flare protocol OK ({} immediate steps, {} avoid items, {} schedule windows)",
        protocol.immediate.len(),
        protocol.avoid.len(),
        protocol.schedule.len()
    );
    Ok(())
}
