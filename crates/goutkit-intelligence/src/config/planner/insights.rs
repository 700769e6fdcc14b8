// ABOUTME: Message templates emitted by the insight engine
// ABOUTME: One message per insight rule, defaults carry the product's hand-authored wording
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GoutKit Contributors

use serde::{Deserialize, Serialize};

/// Template messages for the insight rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightMessages {
    /// Beer trigger combined with dining out
    pub beer_dining_out: String,
    /// Any weight-loss goal
    pub gradual_weight_loss: String,
    /// Busy work schedule
    pub busy_schedule_prep: String,
    /// Dehydration trigger
    pub dehydration_reminder: String,
    /// Monthly flares
    pub frequent_flares: String,
    /// Every other flare frequency
    pub occasional_flares: String,
}

impl Default for InsightMessages {
    fn default() -> Self {
        Self {
            beer_dining_out: "Since you enjoy dining out and beer is a trigger, try ordering \
                sparkling water with fresh lime or a mocktail to stay social without the purines."
                .to_owned(),
            gradual_weight_loss: "Weight loss helps gout, but rapid loss triggers it. Aim for a \
                steady 0.5kg per week. Crash dieting increases uric acid."
                .to_owned(),
            busy_schedule_prep: "Busy schedule? Pre-chop your fruit snacks on Sunday so you don't \
                grab vending machine snacks during the work week."
                .to_owned(),
            dehydration_reminder: "Dehydration is your confirmed trigger. Keep a water bottle on \
                your desk and set a phone alarm every hour to sip."
                .to_owned(),
            frequent_flares: "With frequent flares, consistency is key. Stick to the 'Avoid' list \
                even when you feel good to lower your baseline uric acid."
                .to_owned(),
            occasional_flares: "Even with occasional flares, managing your triggers during \
                high-stress times (holidays, deadlines) is crucial."
                .to_owned(),
        }
    }
}

impl InsightMessages {
    /// Every message paired with its field name, for validation
    pub(crate) fn named(&self) -> [(&'static str, &str); 6] {
        [
            ("beer_dining_out", &self.beer_dining_out),
            ("gradual_weight_loss", &self.gradual_weight_loss),
            ("busy_schedule_prep", &self.busy_schedule_prep),
            ("dehydration_reminder", &self.dehydration_reminder),
            ("frequent_flares", &self.frequent_flares),
            ("occasional_flares", &self.occasional_flares),
        ]
    }
}
