// ABOUTME: Plan generator entry point turning a profile into a complete weekly care plan
// ABOUTME: Runs filter, selection, exercise tiering, insights and assembly in one pass
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GoutKit Contributors

//! # Plan Generator
//!
//! [`PlanGenerator`] borrows a catalog, a flare protocol and a configuration
//! and produces a fresh [`GeneratedPlan`] per call. Only the meal grid depends
//! on the random source; everything else is a pure function of the profile.

use goutkit_core::models::{Catalog, EmergencyProtocol, GeneratedPlan, Profile};
use tracing::info;

use crate::config::PlannerConfig;
use crate::errors::PlanError;
use crate::exercise_recommender::recommend_exercise;
use crate::insights::derive_insights;
use crate::meal_filter::FilteredCatalog;
use crate::meal_selector::select_week;
use crate::plan_assembler::assemble_plan;
use crate::random::RandomSource;

/// Generates care plans from a fixed catalog and protocol
#[derive(Debug, Clone, Copy)]
pub struct PlanGenerator<'a> {
    catalog: &'a Catalog,
    protocol: &'a EmergencyProtocol,
    config: &'a PlannerConfig,
}

impl<'a> PlanGenerator<'a> {
    /// Create a generator
    #[must_use]
    pub const fn new(
        catalog: &'a Catalog,
        protocol: &'a EmergencyProtocol,
        config: &'a PlannerConfig,
    ) -> Self {
        Self {
            catalog,
            protocol,
            config,
        }
    }

    /// Generate a plan for `profile`
    ///
    /// # Errors
    ///
    /// Returns [`PlanError`] if the random source fails. No partial plan is
    /// returned.
    pub fn generate_plan<R: RandomSource + ?Sized>(
        &self,
        profile: &Profile,
        rng: &mut R,
    ) -> Result<GeneratedPlan, PlanError> {
        let filtered = FilteredCatalog::new(self.catalog, profile);
        let weekly_meals = select_week(&filtered, rng)?;
        let exercise = recommend_exercise(profile.activity_level, &self.config.exercise);
        let insights = derive_insights(profile, &self.config.insights);

        let plan = assemble_plan(
            weekly_meals,
            exercise,
            insights,
            profile,
            self.protocol,
            &self.config.hydration,
        );

        info!(
            user = profile.display_name(),
            tier = %plan.exercise.tier,
            insights = plan.insights.len(),
            hydration = %plan.hydration_target,
            "care plan generated"
        );
        Ok(plan)
    }
}
