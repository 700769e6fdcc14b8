// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging, scripted and failing random sources, and catalog fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GoutKit Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `goutkit_planner`

use std::collections::VecDeque;
use std::sync::Once;

use goutkit_planner::intelligence::errors::RandomSourceError;
use goutkit_planner::intelligence::random::RandomSource;
use goutkit_planner::models::{Catalog, Meal, MealCategory};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Replays a fixed list of indices, then repeats the last one
pub struct ScriptedSource {
    script: VecDeque<usize>,
    last: usize,
    pub calls: Vec<usize>,
}

impl ScriptedSource {
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
            last: 0,
            calls: Vec::new(),
        }
    }
}

impl RandomSource for ScriptedSource {
    fn next_index(&mut self, upper: usize) -> Result<usize, RandomSourceError> {
        self.calls.push(upper);
        if let Some(next) = self.script.pop_front() {
            self.last = next;
        }
        Ok(self.last % upper)
    }
}

/// Fails after `remaining` successful draws
pub struct FailingSource {
    pub remaining: usize,
}

impl RandomSource for FailingSource {
    fn next_index(&mut self, _upper: usize) -> Result<usize, RandomSourceError> {
        if self.remaining == 0 {
            return Err(RandomSourceError::new("entropy exhausted"));
        }
        self.remaining -= 1;
        Ok(0)
    }
}

pub fn meal(name: &str, category: MealCategory, tags: &[&str]) -> Meal {
    Meal::new(name, "Prepare and serve.", category, tags.iter().copied())
}

/// Catalog whose lunches are all meat, so a vegetarian profile empties the category
pub fn all_meat_lunch_catalog() -> Catalog {
    Catalog::new(
        vec![
            meal("Oat Porridge", MealCategory::Breakfast, &["vegan"]),
            meal("Berry Bowl", MealCategory::Breakfast, &["vegetarian"]),
        ],
        vec![
            meal("Grilled Chicken Wrap", MealCategory::Lunch, &["meat"]),
            meal("Turkey Box", MealCategory::Lunch, &["meat"]),
            meal("Flank Steak Salad", MealCategory::Lunch, &["meat"]),
        ],
        vec![
            meal("Lemon Salmon", MealCategory::Dinner, &["seafood"]),
            meal("Vegetable Curry", MealCategory::Dinner, &["vegan"]),
        ],
        vec![meal("Sliced Apple", MealCategory::Snack, &["vegan"])],
    )
    .unwrap()
}

/// Catalog as YAML, in the file format the loader reads
pub const CATALOG_YAML: &str = r"
breakfast:
  - name: Oat Porridge
    prep: Simmer oats in almond milk.
    type: breakfast
    tags: [vegan, warm]
lunch:
  - name: Lentil Salad
    prep: Toss lentils with lemon dressing.
    type: lunch
    tags: [vegan]
dinner:
  - name: Vegetable Curry
    prep: Simmer chickpeas in coconut milk.
    type: dinner
    tags: [vegan]
snack:
  - name: Walnuts
    prep: A small handful.
    type: snack
";

/// Protocol as JSON
pub const PROTOCOL_JSON: &str = r#"{
  "immediate": ["Drink water."],
  "avoid": ["Alcohol"],
  "schedule": [{ "time": "Hour 0-24", "action": "Rest and hydrate." }]
}"#;
