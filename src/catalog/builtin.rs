// ABOUTME: Built-in meal catalog and 24-hour flare protocol shipped with the planner
// ABOUTME: Twenty hand-authored meals, five per category, built once per process
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GoutKit Contributors

use std::sync::OnceLock;

use goutkit_core::errors::CatalogError;
use goutkit_core::models::{Catalog, EmergencyProtocol, Meal, MealCategory, ScheduleStep};

static BUILTIN_CATALOG: OnceLock<Result<Catalog, CatalogError>> = OnceLock::new();
static BUILTIN_PROTOCOL: OnceLock<EmergencyProtocol> = OnceLock::new();

/// The built-in meal catalog
///
/// # Errors
///
/// Returns [`CatalogError`] if the built-in data violates a catalog
/// invariant, which the test suite guards against
pub fn builtin_catalog() -> Result<&'static Catalog, CatalogError> {
    BUILTIN_CATALOG
        .get_or_init(|| {
            Catalog::new(breakfasts(), lunches(), dinners(), snacks())
        })
        .as_ref()
        .map_err(Clone::clone)
}

/// The built-in flare emergency protocol
pub fn builtin_protocol() -> &'static EmergencyProtocol {
    BUILTIN_PROTOCOL.get_or_init(flare_protocol)
}

fn meal(name: &str, prep: &str, category: MealCategory, tags: &[&str]) -> Meal {
    Meal::new(name, prep, category, tags.iter().copied())
}

fn breakfasts() -> Vec<Meal> {
    let b = MealCategory::Breakfast;
    vec![
        meal(
            "Cherry & Oat Smoothie",
            "Blend 1 cup tart cherries, 1/2 cup oats, almond milk, and ice.",
            b,
            &["vegetarian", "vegan", "quick"],
        ),
        meal(
            "Berry Greek Yogurt Bowl",
            "Low-fat Greek yogurt topped with blueberries and walnuts.",
            b,
            &["vegetarian", "quick"],
        ),
        meal(
            "Scrambled Tofu with Turmeric",
            "Sauté crumbled tofu with turmeric and spinach.",
            b,
            &["vegetarian", "vegan", "savory"],
        ),
        meal(
            "Whole Grain Toast & Avocado",
            "2 slices whole wheat toast with mashed avocado and lemon juice.",
            b,
            &["vegetarian", "vegan", "quick"],
        ),
        meal(
            "Quinoa Breakfast Porridge",
            "Cooked quinoa with cinnamon and sliced apple.",
            b,
            &["vegetarian", "vegan", "warm"],
        ),
    ]
}

fn lunches() -> Vec<Meal> {
    let l = MealCategory::Lunch;
    vec![
        meal(
            "Mediterranean Lentil Salad",
            "Canned lentils, cucumber, tomatoes, lemon dressing.",
            l,
            &["vegetarian", "vegan", "mediterranean"],
        ),
        meal(
            "Grilled Chicken Wrap",
            "Whole wheat wrap, grilled chicken breast (skinless), lettuce, hummus.",
            l,
            &["meat", "quick"],
        ),
        meal(
            "Quinoa & Black Bean Bowl",
            "Quinoa, black beans, corn, salsa, lime.",
            l,
            &["vegetarian", "vegan", "mexican"],
        ),
        meal(
            "Egg Salad on Greens",
            "Hard boiled eggs, light mayo, celery, over mixed greens.",
            l,
            &["vegetarian"],
        ),
        meal(
            "Turkey & Hummus Box",
            "Sliced lean turkey breast, cucumber sticks, carrot sticks, hummus dip.",
            l,
            &["meat", "quick"],
        ),
    ]
}

fn dinners() -> Vec<Meal> {
    let d = MealCategory::Dinner;
    vec![
        meal(
            "Lemon Herb Grilled Salmon",
            "Grill salmon with lemon, dill, and side of steamed broccoli.",
            d,
            &["seafood", "mediterranean"],
        ),
        meal(
            "Zucchini Noodles with Pesto",
            "Spiralized zucchini with basil pesto and cherry tomatoes.",
            d,
            &["vegetarian", "vegan", "light"],
        ),
        meal(
            "Chicken Stir-Fry",
            "Chicken breast, bell peppers, snap peas, ginger-soy sauce (low sodium), brown rice.",
            d,
            &["meat", "asian"],
        ),
        meal(
            "Baked Sweet Potato Stuffed with Beans",
            "Black beans, salsa, and a dollop of low-fat yogurt.",
            d,
            &["vegetarian", "vegan", "filling"],
        ),
        meal(
            "Vegetable Curry",
            "Chickpeas, cauliflower, coconut milk, curry powder, basmati rice.",
            d,
            &["vegetarian", "vegan", "warm"],
        ),
    ]
}

fn snacks() -> Vec<Meal> {
    let s = MealCategory::Snack;
    vec![
        meal("Handful of Walnuts", "Approx 10-12 walnut halves.", s, &["vegan", "quick"]),
        meal("Sliced Apple", "One medium apple.", s, &["vegan", "fruit"]),
        meal(
            "Celery with Peanut Butter",
            "2 stalks celery, 1 tbsp peanut butter.",
            s,
            &["vegan", "quick"],
        ),
        meal("Tart Cherry Juice", "1 cup 100% tart cherry juice.", s, &["vegan", "liquid"]),
        meal("Carrot Sticks", "1 cup baby carrots.", s, &["vegan", "veg"]),
    ]
}

fn step(time: &str, action: &str) -> ScheduleStep {
    ScheduleStep {
        time: time.to_owned(),
        action: action.to_owned(),
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

fn flare_protocol() -> EmergencyProtocol {
    EmergencyProtocol {
        immediate: owned(&[
            "Start drinking water immediately (aim for 250ml every hour).",
            "Take doctor-prescribed medication if available.",
            "Elevate the affected joint.",
            "Apply ice packs wrapped in a towel (20 min on, 20 min off).",
        ]),
        avoid: owned(&[
            "Alcohol of any kind",
            "Sugary sodas",
            "Red meat and organ meats",
            "Shellfish",
            "Direct heat on the joint (during acute inflammation)",
        ]),
        schedule: vec![
            step(
                "Hour 0-2",
                "Hydrate heavily. Take NSAIDs if prescribed. Rest joint completely.",
            ),
            step(
                "Hour 2-6",
                "Continue hydration. Apply cold compress. Eat light (fruit/toast).",
            ),
            step(
                "Hour 6-12",
                "Gentle movement only to use bathroom. Keep elevated. Sleep if possible.",
            ),
            step(
                "Hour 12-24",
                "Monitor pain. If fever develops or pain is 10/10, seek medical help.",
            ),
        ],
    }
}
