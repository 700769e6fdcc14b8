// ABOUTME: Generated care-plan records handed to the rendering layer
// ABOUTME: Weekday, MealSlot, DayPlan, ExercisePlan, EmergencyProtocol and GeneratedPlan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GoutKit Contributors

use serde::{Deserialize, Serialize};

use super::meal::{Meal, MealCategory};
use crate::errors::CatalogError;

labeled_enum! {
    /// Calendar day label of a plan entry
    Weekday {
        /// Monday
        Monday => ("monday", "Monday"),
        /// Tuesday
        Tuesday => ("tuesday", "Tuesday"),
        /// Wednesday
        Wednesday => ("wednesday", "Wednesday"),
        /// Thursday
        Thursday => ("thursday", "Thursday"),
        /// Friday
        Friday => ("friday", "Friday"),
        /// Saturday
        Saturday => ("saturday", "Saturday"),
        /// Sunday
        Sunday => ("sunday", "Sunday"),
    }
}

labeled_enum! {
    /// One of the five meal slots of a day
    MealSlot {
        /// Breakfast
        Breakfast => ("breakfast", "Breakfast"),
        /// Lunch
        Lunch => ("lunch", "Lunch"),
        /// Dinner
        Dinner => ("dinner", "Dinner"),
        /// First snack
        Snack1 => ("snack1", "Snack 1"),
        /// Second snack
        Snack2 => ("snack2", "Snack 2"),
    }
}

impl MealSlot {
    /// Catalog category this slot draws from
    #[must_use]
    pub const fn category(self) -> MealCategory {
        match self {
            Self::Breakfast => MealCategory::Breakfast,
            Self::Lunch => MealCategory::Lunch,
            Self::Dinner => MealCategory::Dinner,
            Self::Snack1 | Self::Snack2 => MealCategory::Snack,
        }
    }
}

labeled_enum! {
    /// Exercise intensity tier
    ExerciseTier {
        /// Low-impact daily routine
        Beginner => ("beginner", "Beginner"),
        /// Cardio, strength and flexibility five days a week
        IntermediateAdvanced => ("intermediate_advanced", "Intermediate/Advanced"),
    }
}

/// The five meals of one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMeals {
    /// Breakfast
    pub breakfast: Meal,
    /// Lunch
    pub lunch: Meal,
    /// Dinner
    pub dinner: Meal,
    /// First snack
    pub snack1: Meal,
    /// Second snack
    pub snack2: Meal,
}

impl DayMeals {
    /// Meal bound to `slot`
    #[must_use]
    pub const fn get(&self, slot: MealSlot) -> &Meal {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
            MealSlot::Snack1 => &self.snack1,
            MealSlot::Snack2 => &self.snack2,
        }
    }

    /// Slots and their meals in serving order
    pub fn iter(&self) -> impl Iterator<Item = (MealSlot, &Meal)> {
        MealSlot::ALL.iter().map(move |slot| (*slot, self.get(*slot)))
    }
}

/// One calendar day of the weekly meal grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    /// Day label
    pub day: Weekday,
    /// Meals for the day
    pub meals: DayMeals,
}

/// Exercise routine for the plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExercisePlan {
    /// Intensity tier
    pub tier: ExerciseTier,
    /// What the routine aims for
    pub description: String,
    /// Ordered routine steps
    pub routine: Vec<String>,
    /// How often to do it
    pub frequency: String,
}

/// One window of the 24-hour flare schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleStep {
    /// Time window label, e.g. "Hour 0-2"
    pub time: String,
    /// What to do during the window
    pub action: String,
}

/// Static flare emergency protocol.
///
/// Fixed configuration: the plan generator copies it into every plan unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyProtocol {
    /// Steps to take immediately
    pub immediate: Vec<String>,
    /// Things to avoid during a flare
    pub avoid: Vec<String>,
    /// Time-window schedule
    pub schedule: Vec<ScheduleStep>,
}

impl EmergencyProtocol {
    /// Check that every section has content
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyProtocolSection`] naming the first empty section.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.immediate.is_empty() {
            return Err(CatalogError::EmptyProtocolSection("immediate"));
        }
        if self.avoid.is_empty() {
            return Err(CatalogError::EmptyProtocolSection("avoid"));
        }
        if self.schedule.is_empty() {
            return Err(CatalogError::EmptyProtocolSection("schedule"));
        }
        Ok(())
    }
}

/// Complete personalized plan, owned by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPlan {
    /// Seven days, Monday through Sunday
    pub weekly_meals: Vec<DayPlan>,
    /// Exercise routine
    pub exercise: ExercisePlan,
    /// Personalized insights, in rule order
    pub insights: Vec<String>,
    /// Daily fluid-intake band
    pub hydration_target: String,
    /// Static flare protocol
    pub flare_protocol: EmergencyProtocol,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_categories() {
        assert_eq!(MealSlot::Breakfast.category(), MealCategory::Breakfast);
        assert_eq!(MealSlot::Snack1.category(), MealCategory::Snack);
        assert_eq!(MealSlot::Snack2.category(), MealCategory::Snack);
        assert_eq!(MealSlot::ALL.len(), 5);
    }

    #[test]
    fn test_week_order() {
        let labels: Vec<&str> = Weekday::ALL.iter().map(|day| day.label()).collect();
        assert_eq!(
            labels,
            [
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
                "Sunday"
            ]
        );
    }

    #[test]
    fn test_protocol_validation_names_section() {
        let protocol = EmergencyProtocol {
            immediate: vec!["Drink water".into()],
            avoid: Vec::new(),
            schedule: vec![ScheduleStep {
                time: "Hour 0-2".into(),
                action: "Rest".into(),
            }],
        };
        assert_eq!(
            protocol.validate(),
            Err(CatalogError::EmptyProtocolSection("avoid"))
        );
    }
}
