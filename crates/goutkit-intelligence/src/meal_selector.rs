// ABOUTME: Weekly meal selection drawing one meal per slot per day from candidate pools
// ABOUTME: Falls back to the full category once per category when filtering leaves nothing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GoutKit Contributors

use goutkit_core::models::{DayMeals, DayPlan, Meal, MealCategory, MealSlot, Weekday};
use tracing::debug;

use crate::errors::PlanError;
use crate::meal_filter::FilteredCatalog;
use crate::random::RandomSource;

/// Selectable meals of one category after fallback resolution
#[derive(Debug, Clone)]
pub struct CandidatePool<'a> {
    category: MealCategory,
    meals: Vec<&'a Meal>,
    fallback: bool,
}

impl<'a> CandidatePool<'a> {
    /// Resolve the pool for `category`: the filtered meals, or the whole
    /// category when filtering removed every meal
    #[must_use]
    pub fn resolve(filtered: &FilteredCatalog<'a>, category: MealCategory) -> Self {
        let allowed = filtered.allowed(category);
        if allowed.is_empty() {
            debug!(category = %category, "filter removed every meal, using full category");
            Self {
                category,
                meals: filtered.catalog().meals(category).iter().collect(),
                fallback: true,
            }
        } else {
            Self {
                category,
                meals: allowed.to_vec(),
                fallback: false,
            }
        }
    }

    /// Category of the pool
    #[must_use]
    pub const fn category(&self) -> MealCategory {
        self.category
    }

    /// Candidate meals, never empty for a validated catalog
    #[must_use]
    pub fn meals(&self) -> &[&'a Meal] {
        &self.meals
    }

    /// Whether the pool is the unfiltered category
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// Draw one meal uniformly, with replacement
    ///
    /// # Errors
    ///
    /// Returns [`PlanError`] if the random source fails or returns an index
    /// outside the pool
    pub fn draw<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<Meal, PlanError> {
        let len = self.meals.len();
        let index = rng.next_index(len)?;
        self.meals
            .get(index)
            .map(|meal| (*meal).clone())
            .ok_or(PlanError::IndexOutOfRange {
                category: self.category,
                index,
                len,
            })
    }
}

/// Fallback-resolved pools for all four categories
#[derive(Debug, Clone)]
pub struct CandidatePools<'a> {
    breakfast: CandidatePool<'a>,
    lunch: CandidatePool<'a>,
    dinner: CandidatePool<'a>,
    snack: CandidatePool<'a>,
}

impl<'a> CandidatePools<'a> {
    /// Resolve every category once, before any day is generated
    #[must_use]
    pub fn resolve(filtered: &FilteredCatalog<'a>) -> Self {
        Self {
            breakfast: CandidatePool::resolve(filtered, MealCategory::Breakfast),
            lunch: CandidatePool::resolve(filtered, MealCategory::Lunch),
            dinner: CandidatePool::resolve(filtered, MealCategory::Dinner),
            snack: CandidatePool::resolve(filtered, MealCategory::Snack),
        }
    }

    /// Pool for `category`
    #[must_use]
    pub const fn get(&self, category: MealCategory) -> &CandidatePool<'a> {
        match category {
            MealCategory::Breakfast => &self.breakfast,
            MealCategory::Lunch => &self.lunch,
            MealCategory::Dinner => &self.dinner,
            MealCategory::Snack => &self.snack,
        }
    }

    fn draw<R: RandomSource + ?Sized>(
        &self,
        slot: MealSlot,
        rng: &mut R,
    ) -> Result<Meal, PlanError> {
        self.get(slot.category()).draw(rng)
    }
}

/// Draw a week of meals, Monday through Sunday.
///
/// Slots are drawn in serving order within each day, so a scripted or seeded
/// source maps to a predictable grid.
///
/// # Errors
///
/// Returns [`PlanError`] if the random source fails; generation stops at the
/// first failure
pub fn select_week<R: RandomSource + ?Sized>(
    filtered: &FilteredCatalog<'_>,
    rng: &mut R,
) -> Result<Vec<DayPlan>, PlanError> {
    let pools = CandidatePools::resolve(filtered);
    Weekday::ALL
        .iter()
        .map(|day| {
            Ok(DayPlan {
                day: *day,
                meals: DayMeals {
                    breakfast: pools.draw(MealSlot::Breakfast, rng)?,
                    lunch: pools.draw(MealSlot::Lunch, rng)?,
                    dinner: pools.draw(MealSlot::Dinner, rng)?,
                    snack1: pools.draw(MealSlot::Snack1, rng)?,
                    snack2: pools.draw(MealSlot::Snack2, rng)?,
                },
            })
        })
        .collect()
}
