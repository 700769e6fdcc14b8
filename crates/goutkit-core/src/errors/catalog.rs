// ABOUTME: Load-time validation errors for the meal catalog and emergency protocol
// ABOUTME: Raised when static configuration breaks its non-empty or category invariants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GoutKit Contributors

use thiserror::Error;

use crate::models::MealCategory;

/// Catalog configuration failures, detected once when the catalog is built
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A category has no meals at all, so the fallback pool would be empty
    #[error("catalog category {0} has no meals")]
    EmptyCategory(MealCategory),

    /// A meal was placed in a sequence for a different category
    #[error("meal '{meal}' is declared as {declared} but listed under {listed}")]
    CategoryMismatch {
        /// Meal name
        meal: String,
        /// Category the meal declares
        declared: MealCategory,
        /// Category sequence it was listed in
        listed: MealCategory,
    },

    /// Tags are matched verbatim and must be lowercase
    #[error("meal '{meal}' has non-lowercase tag '{tag}'")]
    TagNotLowercase {
        /// Meal name
        meal: String,
        /// Offending tag
        tag: String,
    },

    /// A meal without a name cannot be displayed or filtered by name
    #[error("a {0} meal has an empty name")]
    UnnamedMeal(MealCategory),

    /// One of the emergency protocol lists is empty
    #[error("emergency protocol section '{0}' is empty")]
    EmptyProtocolSection(&'static str),
}
