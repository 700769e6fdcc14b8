// ABOUTME: Plan assembly combining meals, exercise, insights, hydration and the flare protocol
// ABOUTME: Hydration bands are selected by weight goal; the protocol passes through unchanged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GoutKit Contributors

use goutkit_core::models::{
    DayPlan, EmergencyProtocol, ExercisePlan, GeneratedPlan, Profile, WeightGoal,
};

use crate::config::planner::HydrationConfig;

/// Daily fluid-intake band for a weight goal.
///
/// Only the largest weight-loss goal raises the band.
#[must_use]
pub fn hydration_target(weight_goal: WeightGoal, config: &HydrationConfig) -> &str {
    match weight_goal {
        WeightGoal::Large => &config.elevated_band,
        WeightGoal::NotApplicable | WeightGoal::Small | WeightGoal::Medium => {
            &config.standard_band
        }
    }
}

/// Combine the generated parts into one plan
#[must_use]
pub fn assemble_plan(
    weekly_meals: Vec<DayPlan>,
    exercise: ExercisePlan,
    insights: Vec<String>,
    profile: &Profile,
    protocol: &EmergencyProtocol,
    hydration: &HydrationConfig,
) -> GeneratedPlan {
    GeneratedPlan {
        weekly_meals,
        exercise,
        insights,
        hydration_target: hydration_target(profile.weight_goal, hydration).to_owned(),
        flare_protocol: protocol.clone(),
    }
}
