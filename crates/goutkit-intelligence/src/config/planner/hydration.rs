// ABOUTME: Hydration target configuration for generated plans
// ABOUTME: Holds the standard and elevated daily fluid-intake bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GoutKit Contributors

use serde::{Deserialize, Serialize};

/// Daily fluid-intake bands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HydrationConfig {
    /// Band for every weight goal except the largest
    pub standard_band: String,
    /// Band for the largest weight-loss goal
    pub elevated_band: String,
}

impl Default for HydrationConfig {
    fn default() -> Self {
        Self {
            standard_band: "2.5 - 3 Liters".to_owned(),
            elevated_band: "3 - 3.5 Liters".to_owned(),
        }
    }
}
