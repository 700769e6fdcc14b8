// ABOUTME: Configuration module for goutkit-intelligence crate
// ABOUTME: Re-exports plan generator configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GoutKit Contributors

/// Plan generator configuration (hydration bands, insight messages, exercise tiers)
pub mod planner;

pub use planner::PlannerConfig;
