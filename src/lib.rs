// ABOUTME: Main library entry point for the GoutKit care-plan planner
// ABOUTME: Catalog store, environment configuration and logging around the plan engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GoutKit Contributors

#![deny(unsafe_code)]

//! # GoutKit Planner
//!
//! Generates a personalized weekly gout care plan from a health profile:
//! a seven-day meal grid, an exercise routine, targeted insights, a daily
//! hydration target and the 24-hour flare emergency protocol.
//!
//! ## Architecture
//!
//! - **`goutkit-core`**: profile, meal and plan models, error types
//! - **`goutkit-intelligence`**: the rule-based generation engine
//! - **catalog**: built-in meal catalog and protocol, file overrides
//! - **config**: environment configuration
//! - **logging**: `tracing` subscriber setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use goutkit_planner::catalog::CatalogStore;
//! use goutkit_planner::config::PlannerConfig;
//! use goutkit_planner::intelligence::RngSource;
//! use goutkit_planner::models::{Lifestyle, Profile};
//!
//! # fn main() -> anyhow::Result<()> {
//! let store = CatalogStore::builtin()?;
//! let profile = Profile::default().with_lifestyle(Lifestyle::Vegetarian);
//! let mut rng = RngSource::seeded(42);
//! let plan = store
//!     .generator(PlannerConfig::global())
//!     .generate_plan(&profile, &mut rng)?;
//! assert_eq!(plan.weekly_meals.len(), 7);
//! # Ok(())
//! # }
//! ```

/// Built-in catalog, file loaders and the validated catalog store
pub mod catalog;

/// Environment configuration
pub mod config;

/// Structured logging setup
pub mod logging;

pub use goutkit_core::{constants, errors, models};
pub use goutkit_intelligence as intelligence;
