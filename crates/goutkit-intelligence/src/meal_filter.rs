// ABOUTME: Rule-based meal filter removing catalog entries that conflict with a profile
// ABOUTME: Four independent exclusion rules evaluated in fixed precedence, order-preserving
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GoutKit Contributors

//! # Meal Filter
//!
//! A meal is kept only if no rule excludes it. Rules never re-include a meal
//! and the filter is a pure predicate, so filtering an already filtered
//! slice is a no-op.
//!
//! Two rules match on meal names rather than tags because the catalog has no
//! red-meat or vegetable-heavy tag. They are kept narrow on purpose.
//! A Mediterranean preference does not exclude meat; only the vegetarian
//! trait does.

use goutkit_core::constants::{name_fragments, tags};
use goutkit_core::models::{Catalog, Lifestyle, Meal, MealCategory, Profile, Trigger};
use tracing::trace;

/// Exclusion rules, listed in evaluation precedence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterRule {
    /// Vegetarian/vegan profiles exclude meals tagged `meat`
    VegetarianExcludesMeat,
    /// The seafood trigger excludes meals tagged `seafood`
    SeafoodTrigger,
    /// The red-meat trigger excludes meals whose name contains "steak" (any case)
    RedMeatTrigger,
    /// Vegetable-averse profiles exclude meals named with "Salad" or "Zucchini"
    VegetableAversion,
}

impl FilterRule {
    /// All rules in precedence order
    pub const ALL: [Self; 4] = [
        Self::VegetarianExcludesMeat,
        Self::SeafoodTrigger,
        Self::RedMeatTrigger,
        Self::VegetableAversion,
    ];

    /// Short rule name for logs
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::VegetarianExcludesMeat => "vegetarian_excludes_meat",
            Self::SeafoodTrigger => "seafood_trigger",
            Self::RedMeatTrigger => "red_meat_trigger",
            Self::VegetableAversion => "vegetable_aversion",
        }
    }

    /// Whether the profile activates this rule at all
    #[must_use]
    pub fn is_active(self, profile: &Profile) -> bool {
        match self {
            Self::VegetarianExcludesMeat => profile.has_lifestyle(Lifestyle::Vegetarian),
            Self::SeafoodTrigger => profile.has_trigger(Trigger::Seafood),
            Self::RedMeatTrigger => profile.has_trigger(Trigger::RedMeat),
            Self::VegetableAversion => profile.has_lifestyle(Lifestyle::HateVegetables),
        }
    }

    /// Whether this rule excludes `meal` for `profile`
    #[must_use]
    pub fn excludes(self, meal: &Meal, profile: &Profile) -> bool {
        self.is_active(profile) && self.matches(meal)
    }

    fn matches(self, meal: &Meal) -> bool {
        match self {
            Self::VegetarianExcludesMeat => meal.has_tag(tags::MEAT),
            Self::SeafoodTrigger => meal.has_tag(tags::SEAFOOD),
            Self::RedMeatTrigger => meal
                .name
                .to_lowercase()
                .contains(name_fragments::RED_MEAT),
            Self::VegetableAversion => name_fragments::VEGETABLE_HEAVY
                .iter()
                .any(|fragment| meal.name.contains(fragment)),
        }
    }
}

/// First rule, in precedence order, that excludes `meal`
#[must_use]
pub fn exclusion_reason(meal: &Meal, profile: &Profile) -> Option<FilterRule> {
    FilterRule::ALL
        .into_iter()
        .find(|rule| rule.excludes(meal, profile))
}

/// Keep the meals no rule excludes, preserving catalog order
#[must_use]
pub fn filter_meals<'a, I>(meals: I, profile: &Profile) -> Vec<&'a Meal>
where
    I: IntoIterator<Item = &'a Meal>,
{
    meals
        .into_iter()
        .filter(|meal| match exclusion_reason(meal, profile) {
            Some(rule) => {
                trace!(meal = %meal.name, rule = rule.name(), "meal excluded");
                false
            }
            None => true,
        })
        .collect()
}

/// Filter result for every category, alongside the unfiltered catalog
#[derive(Debug, Clone)]
pub struct FilteredCatalog<'a> {
    catalog: &'a Catalog,
    breakfast: Vec<&'a Meal>,
    lunch: Vec<&'a Meal>,
    dinner: Vec<&'a Meal>,
    snack: Vec<&'a Meal>,
}

impl<'a> FilteredCatalog<'a> {
    /// Apply the filter to every category of `catalog`
    #[must_use]
    pub fn new(catalog: &'a Catalog, profile: &Profile) -> Self {
        let filter = |category| filter_meals(catalog.meals(category), profile);
        Self {
            catalog,
            breakfast: filter(MealCategory::Breakfast),
            lunch: filter(MealCategory::Lunch),
            dinner: filter(MealCategory::Dinner),
            snack: filter(MealCategory::Snack),
        }
    }

    /// Meals of `category` that survived filtering, possibly none
    #[must_use]
    pub fn allowed(&self, category: MealCategory) -> &[&'a Meal] {
        match category {
            MealCategory::Breakfast => &self.breakfast,
            MealCategory::Lunch => &self.lunch,
            MealCategory::Dinner => &self.dinner,
            MealCategory::Snack => &self.snack,
        }
    }

    /// The unfiltered catalog the fallback pool comes from
    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal(name: &str, tags: &[&str]) -> Meal {
        Meal::new(name, "Prepare.", MealCategory::Dinner, tags.iter().copied())
    }

    #[test]
    fn test_vegetarian_excludes_meat_tag() {
        let profile = Profile::default().with_lifestyle(Lifestyle::Vegetarian);
        let chicken = meal("Chicken Stir-Fry", &["meat", "asian"]);
        let curry = meal("Vegetable Curry", &["vegan"]);
        assert_eq!(
            exclusion_reason(&chicken, &profile),
            Some(FilterRule::VegetarianExcludesMeat)
        );
        assert_eq!(exclusion_reason(&curry, &profile), None);
    }

    #[test]
    fn test_mediterranean_alone_keeps_meat() {
        let profile = Profile::default().with_lifestyle(Lifestyle::Mediterranean);
        let chicken = meal("Chicken Stir-Fry", &["meat"]);
        assert_eq!(exclusion_reason(&chicken, &profile), None);
    }

    #[test]
    fn test_red_meat_matches_steak_in_any_case() {
        let profile = Profile::default().with_trigger(Trigger::RedMeat);
        assert!(FilterRule::RedMeatTrigger.excludes(&meal("Flank STEAK Tacos", &[]), &profile));
        assert!(FilterRule::RedMeatTrigger.excludes(&meal("Steak salad", &[]), &profile));
        // Meat tags alone do not trigger the name heuristic
        assert!(!FilterRule::RedMeatTrigger.excludes(&meal("Beef Stew", &["meat"]), &profile));
    }

    #[test]
    fn test_vegetable_aversion_is_case_sensitive() {
        let profile = Profile::default().with_lifestyle(Lifestyle::HateVegetables);
        assert!(FilterRule::VegetableAversion.excludes(&meal("Lentil Salad", &[]), &profile));
        assert!(FilterRule::VegetableAversion.excludes(&meal("Zucchini Noodles", &[]), &profile));
        assert!(!FilterRule::VegetableAversion.excludes(&meal("salad bowl", &[]), &profile));
    }

    #[test]
    fn test_precedence_reports_first_rule() {
        let profile = Profile::default()
            .with_lifestyle(Lifestyle::Vegetarian)
            .with_trigger(Trigger::RedMeat);
        let steak = meal("Grilled Steak", &["meat"]);
        assert_eq!(
            exclusion_reason(&steak, &profile),
            Some(FilterRule::VegetarianExcludesMeat)
        );
    }

    #[test]
    fn test_inactive_rules_keep_everything() {
        let meals = vec![
            meal("Grilled Steak", &["meat"]),
            meal("Lemon Salmon", &["seafood"]),
            meal("Zucchini Salad", &["vegan"]),
        ];
        let kept = filter_meals(&meals, &Profile::default());
        assert_eq!(kept.len(), 3);
    }
}
