// ABOUTME: Configuration module for the planner front end
// ABOUTME: Environment settings here; engine wording and bands live in the intelligence crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GoutKit Contributors

/// Environment variables read by the CLI and library entry points
pub mod environment;

pub use environment::AppConfig;
pub use goutkit_intelligence::config::PlannerConfig;
