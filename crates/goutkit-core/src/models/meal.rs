// ABOUTME: Meal catalog models for plan generation
// ABOUTME: MealCategory, Meal and the validated, read-only Catalog container
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GoutKit Contributors

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::errors::CatalogError;

labeled_enum! {
    /// Catalog section a meal belongs to
    MealCategory {
        /// Breakfast
        Breakfast => ("breakfast", "Breakfast"),
        /// Lunch
        Lunch => ("lunch", "Lunch"),
        /// Dinner
        Dinner => ("dinner", "Dinner"),
        /// Snack between meals
        Snack => ("snack", "Snack"),
    }
}

/// Candidate meal from the static catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    /// Display name
    pub name: String,
    /// Free-text preparation instructions
    pub prep: String,
    /// Catalog section
    #[serde(alias = "type")]
    pub category: MealCategory,
    /// Lowercase descriptive tags, only consulted by the meal filter
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl Meal {
    /// Create a meal
    pub fn new<I, T>(
        name: impl Into<String>,
        prep: impl Into<String>,
        category: MealCategory,
        tags: I,
    ) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            name: name.into(),
            prep: prep.into(),
            category,
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the meal carries `tag`
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

/// Unvalidated catalog as written in configuration files.
///
/// Loaders parse into this shape and convert with [`Catalog::try_from`] so
/// structural problems and catalog invariant violations stay distinguishable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogDocument {
    /// Breakfast section
    pub breakfast: Vec<Meal>,
    /// Lunch section
    pub lunch: Vec<Meal>,
    /// Dinner section
    pub dinner: Vec<Meal>,
    /// Snack section
    pub snack: Vec<Meal>,
}

/// Four disjoint, ordered meal sequences, one per category.
///
/// A `Catalog` can only be obtained through [`Catalog::new`] (or
/// deserialization, which delegates to it), so every category is guaranteed
/// to hold at least one meal whose declared category matches its section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogDocument")]
pub struct Catalog {
    breakfast: Vec<Meal>,
    lunch: Vec<Meal>,
    dinner: Vec<Meal>,
    snack: Vec<Meal>,
}

impl Catalog {
    /// Build a catalog, validating its configuration invariants
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if a category is empty, a meal is listed under
    /// the wrong category, a meal has no name, or a tag is not lowercase.
    pub fn new(
        breakfast: Vec<Meal>,
        lunch: Vec<Meal>,
        dinner: Vec<Meal>,
        snack: Vec<Meal>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            breakfast,
            lunch,
            dinner,
            snack,
        };
        for category in MealCategory::ALL.iter().copied() {
            validate_section(category, catalog.meals(category))?;
        }
        Ok(catalog)
    }

    /// Meals of one category, in catalog order
    #[must_use]
    pub fn meals(&self, category: MealCategory) -> &[Meal] {
        match category {
            MealCategory::Breakfast => &self.breakfast,
            MealCategory::Lunch => &self.lunch,
            MealCategory::Dinner => &self.dinner,
            MealCategory::Snack => &self.snack,
        }
    }

    /// Total number of meals across all categories
    #[must_use]
    pub fn len(&self) -> usize {
        self.breakfast.len() + self.lunch.len() + self.dinner.len() + self.snack.len()
    }

    /// Always false for a constructed catalog; present for API symmetry with `len`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TryFrom<CatalogDocument> for Catalog {
    type Error = CatalogError;

    fn try_from(doc: CatalogDocument) -> Result<Self, Self::Error> {
        Self::new(doc.breakfast, doc.lunch, doc.dinner, doc.snack)
    }
}

fn validate_section(listed: MealCategory, meals: &[Meal]) -> Result<(), CatalogError> {
    if meals.is_empty() {
        return Err(CatalogError::EmptyCategory(listed));
    }
    for meal in meals {
        if meal.name.trim().is_empty() {
            return Err(CatalogError::UnnamedMeal(listed));
        }
        if meal.category != listed {
            return Err(CatalogError::CategoryMismatch {
                meal: meal.name.clone(),
                declared: meal.category,
                listed,
            });
        }
        if let Some(tag) = meal.tags.iter().find(|tag| tag.chars().any(char::is_uppercase)) {
            return Err(CatalogError::TagNotLowercase {
                meal: meal.name.clone(),
                tag: tag.clone(),
            });
        }
    }
    Ok(())
}
