// ABOUTME: Benchmark fixtures: profile presets and synthetic meal catalogs
// ABOUTME: Synthetic catalogs mix meat, seafood and vegetable-heavy meals so every filter rule runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GoutKit Contributors

#![allow(clippy::unwrap_used, clippy::expect_used)]

use goutkit_planner::models::{
    ActivityLevel, Catalog, FlareFrequency, Lifestyle, Meal, MealCategory, Profile, Trigger,
    WeightGoal,
};

/// Profile presets ordered by how many rules they activate
#[derive(Debug, Clone, Copy)]
pub enum ProfilePreset {
    /// Form defaults, no filter rule active
    Minimal,
    /// Every filter and insight rule active
    Restrictive,
}

impl ProfilePreset {
    pub const ALL: [Self; 2] = [Self::Minimal, Self::Restrictive];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Restrictive => "restrictive",
        }
    }

    pub fn profile(self) -> Profile {
        match self {
            Self::Minimal => Profile::default(),
            Self::Restrictive => Profile::default()
                .with_trigger(Trigger::Beer)
                .with_trigger(Trigger::Seafood)
                .with_trigger(Trigger::RedMeat)
                .with_trigger(Trigger::Dehydration)
                .with_lifestyle(Lifestyle::Vegetarian)
                .with_lifestyle(Lifestyle::HateVegetables)
                .with_lifestyle(Lifestyle::DiningOut)
                .with_lifestyle(Lifestyle::BusyWork)
                .with_weight_goal(WeightGoal::Medium)
                .with_activity_level(ActivityLevel::ModeratelyActive)
                .with_flare_frequency(FlareFrequency::Frequent),
        }
    }
}

fn synthetic_meal(category: MealCategory, index: usize) -> Meal {
    let (name, tags): (String, &[&str]) = match index % 4 {
        0 => (format!("{category} Steak Plate {index}"), &["meat"]),
        1 => (format!("{category} Salmon Bowl {index}"), &["seafood"]),
        2 => (format!("{category} Garden Salad {index}"), &["vegan"]),
        _ => (format!("{category} Lentil Stew {index}"), &["vegan", "warm"]),
    };
    Meal::new(name, "Prepare and serve.", category, tags.iter().copied())
}

/// Catalog with `per_category` meals in each category
pub fn synthetic_catalog(per_category: usize) -> Catalog {
    let section =
        |category| -> Vec<Meal> { (0..per_category).map(|i| synthetic_meal(category, i)).collect() };
    Catalog::new(
        section(MealCategory::Breakfast),
        section(MealCategory::Lunch),
        section(MealCategory::Dinner),
        section(MealCategory::Snack),
    )
    .expect("synthetic catalog is valid")
}
