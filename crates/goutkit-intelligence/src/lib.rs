// ABOUTME: GoutKit care-plan generation engine
// ABOUTME: Meal filtering, weekly selection, exercise tiers, insights and plan assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GoutKit Contributors

#![deny(unsafe_code)]

//! # GoutKit Intelligence
//!
//! Rule-based engine that turns a [`Profile`](goutkit_core::models::Profile)
//! into a [`GeneratedPlan`](goutkit_core::models::GeneratedPlan):
//!
//! 1. [`meal_filter`] removes catalog meals that conflict with the profile
//! 2. [`meal_selector`] draws seven days of five meals each
//! 3. [`exercise_recommender`] picks a routine tier from the activity level
//! 4. [`insights`] evaluates the advice rules
//! 5. [`plan_assembler`] attaches hydration and the flare protocol
//!
//! Randomness is injected through [`RandomSource`]; the engine performs no I/O.

/// Planner configuration: hydration bands, insight wording, exercise routines
pub mod config;
/// Plan generation errors
pub mod errors;
/// Activity-level exercise tiering
pub mod exercise_recommender;
/// Profile-driven advice rules
pub mod insights;
/// Meal exclusion rules
pub mod meal_filter;
/// Weekly meal selection with fallback pools
pub mod meal_selector;
/// Final plan assembly
pub mod plan_assembler;
/// Generator entry point
pub mod plan_generator;
/// Injectable randomness
pub mod random;

pub use config::PlannerConfig;
pub use errors::{PlanError, RandomSourceError};
pub use exercise_recommender::{recommend_exercise, tier_for_activity};
pub use insights::{derive_insights, InsightRule};
pub use meal_filter::{exclusion_reason, filter_meals, FilterRule, FilteredCatalog};
pub use meal_selector::{select_week, CandidatePool, CandidatePools};
pub use plan_assembler::{assemble_plan, hydration_target};
pub use plan_generator::PlanGenerator;
pub use random::{RandomSource, RngSource};
