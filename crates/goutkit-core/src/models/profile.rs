// ABOUTME: Personal-health profile supplied by the intake form
// ABOUTME: Trigger, Goal, WeightGoal, Lifestyle, ActivityLevel, FlareFrequency and TimeAvailable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GoutKit Contributors

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::constants::display::ANONYMOUS_NAME;

labeled_enum! {
    /// Dietary or lifestyle factor the user associates with flares
    Trigger {
        /// Red meat and organ meats
        RedMeat => ("red_meat", "Red Meat"),
        /// Fish and shellfish
        Seafood => ("seafood", "Seafood"),
        /// Beer
        Beer => ("beer", "Beer"),
        /// Wine
        Wine => ("wine", "Wine"),
        /// Spirits
        Spirits => ("spirits", "Spirits"),
        /// Sugary drinks and sodas
        SugaryDrinks => ("sugary_drinks", "Sugary Drinks"),
        /// Not drinking enough water
        Dehydration => ("dehydration", "Dehydration"),
        /// Stress
        Stress => ("stress", "Stress"),
        /// Lack of sleep
        LackOfSleep => ("lack_of_sleep", "Lack of Sleep"),
    }
}

labeled_enum! {
    /// Primary goal of the care plan
    Goal {
        /// Fewer flares
        ReduceFlares => ("reduce_flares", "Reduce flare frequency"),
        /// Gradual weight loss
        LoseWeight => ("lose_weight", "Lose weight gradually"),
        /// Pain management during flares
        ManagePain => ("manage_pain", "Manage pain during flares"),
        /// Long-term joint protection
        PreventDamage => ("prevent_damage", "Prevent joint damage"),
        /// Every goal above
        All => ("all", "All of the above"),
    }
}

labeled_enum! {
    /// Weight-loss target
    WeightGoal {
        /// No weight-loss target
        NotApplicable => ("not_applicable", "Not applicable"),
        /// 2-5 kg
        Small => ("small", "2-5kg"),
        /// 5-10 kg
        Medium => ("medium", "5-10kg"),
        /// More than 10 kg
        Large => ("large", "10kg+"),
    }
}

labeled_enum! {
    /// Lifestyle trait or dietary preference
    Lifestyle {
        /// Busy work schedule
        BusyWork => ("busy_work", "Busy work schedule"),
        /// Eats out often
        DiningOut => ("dining_out", "Love dining out"),
        /// Prefers a Mediterranean diet
        Mediterranean => ("mediterranean", "Mediterranean diet preference"),
        /// Vegetarian or vegan
        Vegetarian => ("vegetarian", "Vegetarian/Vegan"),
        /// Dislikes vegetables
        HateVegetables => ("hate_vegetables", "Hate vegetables"),
        /// Tracks macronutrients
        TrackMacros => ("track_macros", "Track macros"),
        /// New to healthy eating
        BeginnerEater => ("beginner_eater", "Beginner to healthy eating"),
    }
}

labeled_enum! {
    /// Self-reported activity level
    ActivityLevel {
        /// Little or no exercise
        Sedentary => ("sedentary", "Sedentary"),
        /// Light exercise
        LightlyActive => ("lightly_active", "Lightly active"),
        /// Regular moderate exercise
        ModeratelyActive => ("moderately_active", "Moderately active"),
        /// Hard exercise most days
        VeryActive => ("very_active", "Very active"),
    }
}

labeled_enum! {
    /// How often flares occur
    FlareFrequency {
        /// First flare ever
        FirstTime => ("first_time", "First flare ever"),
        /// One to three a year
        Occasional => ("occasional", "Occasional (1-3/year)"),
        /// Roughly monthly
        Frequent => ("frequent", "Frequent (monthly)"),
        /// Persistent symptoms
        Chronic => ("chronic", "Chronic"),
    }
}

labeled_enum! {
    /// Daily time available for self-care
    TimeAvailable {
        /// 15 minutes
        Fifteen => ("fifteen", "15 min/day"),
        /// 30 minutes
        Thirty => ("thirty", "30 min/day"),
        /// 60 minutes
        Sixty => ("sixty", "60 min/day"),
        /// 90 minutes or more
        NinetyPlus => ("ninety_plus", "90+ min/day"),
    }
}

impl Default for Goal {
    fn default() -> Self {
        Self::ReduceFlares
    }
}

impl Default for WeightGoal {
    fn default() -> Self {
        Self::NotApplicable
    }
}

impl Default for ActivityLevel {
    fn default() -> Self {
        Self::Sedentary
    }
}

impl Default for FlareFrequency {
    fn default() -> Self {
        Self::Occasional
    }
}

impl Default for TimeAvailable {
    fn default() -> Self {
        Self::Thirty
    }
}

/// Immutable personal-health profile consumed by the plan generator.
///
/// Missing fields deserialize to the intake form's initial selections, so a
/// document only needs to carry what the user changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Optional display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Declared flare triggers
    pub triggers: BTreeSet<Trigger>,
    /// Free-text note about other triggers
    pub custom_trigger: String,
    /// Primary goal
    pub primary_goal: Goal,
    /// Weight-loss target
    pub weight_goal: WeightGoal,
    /// Lifestyle traits and preferences
    pub lifestyle: BTreeSet<Lifestyle>,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Flare frequency
    pub flare_frequency: FlareFrequency,
    /// Free-text note about favourite foods
    pub food_preferences: String,
    /// Daily time available for self-care
    pub time_available: TimeAvailable,
}

impl Profile {
    /// Whether the profile declares `trigger`
    #[must_use]
    pub fn has_trigger(&self, trigger: Trigger) -> bool {
        self.triggers.contains(&trigger)
    }

    /// Whether the profile declares `trait_`
    #[must_use]
    pub fn has_lifestyle(&self, trait_: Lifestyle) -> bool {
        self.lifestyle.contains(&trait_)
    }

    /// Name to greet the user with, falling back to a neutral default
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(ANONYMOUS_NAME)
    }

    /// Set the display name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a trigger
    #[must_use]
    pub fn with_trigger(mut self, trigger: Trigger) -> Self {
        self.triggers.insert(trigger);
        self
    }

    /// Add a lifestyle trait
    #[must_use]
    pub fn with_lifestyle(mut self, trait_: Lifestyle) -> Self {
        self.lifestyle.insert(trait_);
        self
    }

    /// Set the weight goal
    #[must_use]
    pub const fn with_weight_goal(mut self, weight_goal: WeightGoal) -> Self {
        self.weight_goal = weight_goal;
        self
    }

    /// Set the activity level
    #[must_use]
    pub const fn with_activity_level(mut self, activity_level: ActivityLevel) -> Self {
        self.activity_level = activity_level;
        self
    }

    /// Set the flare frequency
    #[must_use]
    pub const fn with_flare_frequency(mut self, flare_frequency: FlareFrequency) -> Self {
        self.flare_frequency = flare_frequency;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_defaults_match_intake_form() {
        let profile = Profile::default();
        assert_eq!(profile.primary_goal, Goal::ReduceFlares);
        assert_eq!(profile.weight_goal, WeightGoal::NotApplicable);
        assert_eq!(profile.activity_level, ActivityLevel::Sedentary);
        assert_eq!(profile.flare_frequency, FlareFrequency::Occasional);
        assert_eq!(profile.time_available, TimeAvailable::Thirty);
        assert!(profile.triggers.is_empty());
        assert!(profile.lifestyle.is_empty());
    }

    #[test]
    fn test_from_str_accepts_key_and_label() {
        assert_eq!(Trigger::from_str("red_meat").unwrap(), Trigger::RedMeat);
        assert_eq!(Trigger::from_str("Red Meat").unwrap(), Trigger::RedMeat);
        assert_eq!(WeightGoal::from_str("10KG+").unwrap(), WeightGoal::Large);
        assert_eq!(
            Lifestyle::from_str(" Love dining out ").unwrap(),
            Lifestyle::DiningOut
        );
        assert!(ActivityLevel::from_str("couch potato").is_err());
    }

    #[test]
    fn test_display_name_fallback() {
        assert_eq!(Profile::default().display_name(), "You");
        assert_eq!(Profile::default().with_name("   ").display_name(), "You");
        assert_eq!(Profile::default().with_name("Sam").display_name(), "Sam");
    }

    #[test]
    fn test_partial_document_deserializes_with_defaults() {
        let json = r#"{
            "triggers": ["beer", "Dehydration"],
            "lifestyle": ["dining_out"],
            "weight_goal": "10kg+"
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert!(profile.has_trigger(Trigger::Beer));
        assert!(profile.has_trigger(Trigger::Dehydration));
        assert!(profile.has_lifestyle(Lifestyle::DiningOut));
        assert_eq!(profile.weight_goal, WeightGoal::Large);
        assert_eq!(profile.activity_level, ActivityLevel::Sedentary);
    }

    #[test]
    fn test_unknown_variant_is_rejected() {
        let json = r#"{ "triggers": ["chocolate"] }"#;
        assert!(serde_json::from_str::<Profile>(json).is_err());
    }

    #[test]
    fn test_all_lists_every_variant_once() {
        assert_eq!(Trigger::ALL.len(), 9);
        assert_eq!(Lifestyle::ALL.len(), 7);
        let keys: BTreeSet<&str> = Trigger::ALL.iter().map(|t| t.key()).collect();
        assert_eq!(keys.len(), Trigger::ALL.len());
    }
}
