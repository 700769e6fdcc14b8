// ABOUTME: Exercise recommender mapping activity level to one of two routine tiers
// ABOUTME: Moderately and very active profiles get the intermediate/advanced routine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GoutKit Contributors

use goutkit_core::models::{ActivityLevel, ExercisePlan, ExerciseTier};

use crate::config::planner::ExerciseConfig;

/// Tier for an activity level; there is no intermediate step between the two
#[must_use]
pub const fn tier_for_activity(level: ActivityLevel) -> ExerciseTier {
    match level {
        ActivityLevel::ModeratelyActive | ActivityLevel::VeryActive => {
            ExerciseTier::IntermediateAdvanced
        }
        ActivityLevel::Sedentary | ActivityLevel::LightlyActive => ExerciseTier::Beginner,
    }
}

/// Exercise plan for an activity level
#[must_use]
pub fn recommend_exercise(level: ActivityLevel, config: &ExerciseConfig) -> ExercisePlan {
    let tier = tier_for_activity(level);
    let routine = config.routine_for(tier);
    ExercisePlan {
        tier,
        description: routine.description.clone(),
        routine: routine.routine.clone(),
        frequency: routine.frequency.clone(),
    }
}
