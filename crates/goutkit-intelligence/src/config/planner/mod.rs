// ABOUTME: Plan generator configuration for hydration bands, insight messages and exercise tiers
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GoutKit Contributors

//! Plan Generator Configuration
//!
//! Every string the engine emits lives here rather than inline in the rule
//! code, so wording can be adjusted without touching decision logic.
//!
//! - `hydration` - standard and elevated fluid-intake bands
//! - `insights` - one message per insight rule
//! - `exercise` - routines for both exercise tiers

pub mod error;
pub mod exercise;
pub mod hydration;
pub mod insights;

pub use error::ConfigError;
pub use exercise::{ExerciseConfig, TierRoutine};
pub use hydration::HydrationConfig;
pub use insights::InsightMessages;

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static PLANNER_CONFIG: OnceLock<PlannerConfig> = OnceLock::new();

/// Main plan generator configuration container
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Hydration target bands
    pub hydration: HydrationConfig,
    /// Insight rule messages
    pub insights: InsightMessages,
    /// Exercise tier routines
    pub exercise: ExerciseConfig,
}

impl PlannerConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        PLANNER_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load planner config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable cannot be read or the
    /// resulting configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if an emitted string is blank, the two hydration
    /// bands are identical, or a tier routine has no steps
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hydration.standard_band.trim().is_empty() {
            return Err(ConfigError::EmptyValue("hydration.standard_band"));
        }
        if self.hydration.elevated_band.trim().is_empty() {
            return Err(ConfigError::EmptyValue("hydration.elevated_band"));
        }
        if self.hydration.standard_band == self.hydration.elevated_band {
            return Err(ConfigError::InvalidRange(
                "hydration.elevated_band must differ from hydration.standard_band",
            ));
        }

        if let Some((name, _)) = self
            .insights
            .named()
            .into_iter()
            .find(|(_, message)| message.trim().is_empty())
        {
            return Err(ConfigError::EmptyValue(name));
        }

        Self::validate_routine("exercise.beginner", &self.exercise.beginner)?;
        Self::validate_routine(
            "exercise.intermediate_advanced",
            &self.exercise.intermediate_advanced,
        )?;

        Ok(())
    }

    fn validate_routine(name: &'static str, routine: &TierRoutine) -> Result<(), ConfigError> {
        if routine.routine.is_empty()
            || routine.routine.iter().any(|step| step.trim().is_empty())
            || routine.frequency.trim().is_empty()
        {
            return Err(ConfigError::EmptyValue(name));
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "GOUTKIT_HYDRATION_STANDARD",
            &mut self.hydration.standard_band,
        )?;
        Self::apply_env_var(
            "GOUTKIT_HYDRATION_ELEVATED",
            &mut self.hydration.elevated_band,
        )?;
        Self::apply_env_var(
            "GOUTKIT_EXERCISE_BEGINNER_FREQUENCY",
            &mut self.exercise.beginner.frequency,
        )?;
        Self::apply_env_var(
            "GOUTKIT_EXERCISE_ADVANCED_FREQUENCY",
            &mut self.exercise.intermediate_advanced.frequency,
        )?;
        Ok(self)
    }

    /// Overwrite `target` with the parsed value of `key` when it is set
    fn apply_env_var<T>(key: &str, target: &mut T) -> Result<(), ConfigError>
    where
        T: FromStr,
        T::Err: Display,
    {
        match env::var(key) {
            Ok(value) => {
                *target = value
                    .parse()
                    .map_err(|e: T::Err| ConfigError::Parse(format!("{key}: {e}")))?;
                Ok(())
            }
            Err(env::VarError::NotPresent) => Ok(()),
            Err(e) => Err(ConfigError::EnvVar(e)),
        }
    }
}
