// ABOUTME: Core data models for the GoutKit care-plan engine
// ABOUTME: Closed enumerations, profile input, meal catalog and generated plan records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GoutKit Contributors

//! # Data Models
//!
//! Every option a profile can carry is a closed enumeration with a stable
//! snake_case key (used on the wire) and the human label shown by the
//! intake form. Both forms are accepted when parsing.

/// Declares a closed enumeration with a wire key and a display label per variant.
///
/// Generates `ALL`, `key()`, `label()`, `Display` (the label) and a `FromStr`
/// that accepts either the key or the label, ignoring ASCII case.
macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => ($key:literal, $label:literal)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $key, alias = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in display order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Stable snake_case key used in serialized documents
            #[must_use]
            pub const fn key(self) -> &'static str {
                match self {
                    $(Self::$variant => $key),+
                }
            }

            /// Human-readable label shown by the intake form
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::errors::AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|variant| {
                        variant.key().eq_ignore_ascii_case(needle)
                            || variant.label().eq_ignore_ascii_case(needle)
                    })
                    .ok_or_else(|| {
                        $crate::errors::AppError::invalid_input(format!(
                            "unknown {} '{}'",
                            stringify!($name),
                            needle
                        ))
                    })
            }
        }
    };
}

/// Meal catalog entries and the validated catalog container
pub mod meal;

/// Generated plan records and the emergency protocol
pub mod plan;

/// Personal-health profile and its option enumerations
pub mod profile;

pub use meal::{Catalog, CatalogDocument, Meal, MealCategory};
pub use plan::{
    DayMeals, DayPlan, EmergencyProtocol, ExercisePlan, ExerciseTier, GeneratedPlan, MealSlot,
    ScheduleStep, Weekday,
};
pub use profile::{
    ActivityLevel, FlareFrequency, Goal, Lifestyle, Profile, TimeAvailable, Trigger, WeightGoal,
};
