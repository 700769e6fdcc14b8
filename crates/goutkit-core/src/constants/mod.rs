// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Fixed week layout, filter tags and name fragments, and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GoutKit Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large list.

/// Week layout of a generated plan
pub mod week {
    /// Number of days in every generated plan
    pub const DAYS_PER_PLAN: usize = 7;

    /// Number of meal slots filled per day
    pub const SLOTS_PER_DAY: usize = 5;
}

/// Lowercase catalog tags the meal filter understands
pub mod tags {
    /// Meals containing meat of any kind
    pub const MEAT: &str = "meat";

    /// Meals containing fish or shellfish
    pub const SEAFOOD: &str = "seafood";
}

/// Name fragments used by the name-based exclusion rules.
///
/// The catalog carries no red-meat or vegetable-heavy tag, so these rules
/// match on meal names. They are intentionally narrow.
pub mod name_fragments {
    /// Matched case-insensitively against meal names for the red-meat trigger
    pub const RED_MEAT: &str = "steak";

    /// Matched case-sensitively against meal names for vegetable-averse profiles
    pub const VEGETABLE_HEAVY: [&str; 2] = ["Salad", "Zucchini"];
}

/// Display fallbacks
pub mod display {
    /// Name shown when the profile carries no display name
    pub const ANONYMOUS_NAME: &str = "You";
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Planner service name
    pub const GOUTKIT_PLANNER: &str = "goutkit-planner";
}
