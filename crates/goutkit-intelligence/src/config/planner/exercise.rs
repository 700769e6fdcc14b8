// ABOUTME: Exercise tier routines used by the exercise recommender
// ABOUTME: Beginner low-impact routine and intermediate/advanced cardio-strength routine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GoutKit Contributors

use goutkit_core::models::ExerciseTier;
use serde::{Deserialize, Serialize};

/// Routine content for one tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierRoutine {
    /// What the routine aims for
    pub description: String,
    /// Ordered routine steps
    pub routine: Vec<String>,
    /// How often to do it
    pub frequency: String,
}

/// Routines for both exercise tiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseConfig {
    /// Low-impact daily routine
    pub beginner: TierRoutine,
    /// Cardio, strength and flexibility routine
    pub intermediate_advanced: TierRoutine,
}

impl ExerciseConfig {
    /// Routine for `tier`
    #[must_use]
    pub const fn routine_for(&self, tier: ExerciseTier) -> &TierRoutine {
        match tier {
            ExerciseTier::Beginner => &self.beginner,
            ExerciseTier::IntermediateAdvanced => &self.intermediate_advanced,
        }
    }
}

impl Default for ExerciseConfig {
    fn default() -> Self {
        Self {
            beginner: TierRoutine {
                description: "Focus on low impact movement to keep joints mobile without stress."
                    .to_owned(),
                routine: vec![
                    "10-minute gentle walk".to_owned(),
                    "Seated leg lifts".to_owned(),
                    "Ankle rotations".to_owned(),
                ],
                frequency: "Daily".to_owned(),
            },
            intermediate_advanced: TierRoutine {
                description:
                    "Maintain cardiovascular health and muscle strength to support joints."
                        .to_owned(),
                routine: vec![
                    "30-minute swim or cycle".to_owned(),
                    "Bodyweight squats (if pain-free)".to_owned(),
                    "Yoga for flexibility".to_owned(),
                ],
                frequency: "5 days/week".to_owned(),
            },
        }
    }
}
