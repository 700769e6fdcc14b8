// ABOUTME: Insight engine evaluating ordered condition-to-message rules against a profile
// ABOUTME: Rules fire independently; the final rule always emits one flare-frequency message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GoutKit Contributors

//! Insight generation for the care plan
//!
//! Evaluation order fixes output order. The last rule chooses between the
//! frequent-flare and occasional-flare messages, so the list is never empty.

use goutkit_core::models::{FlareFrequency, Lifestyle, Profile, Trigger, WeightGoal};

use crate::config::planner::InsightMessages;

/// Insight rules in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsightRule {
    /// Beer trigger and a dining-out lifestyle
    BeerWhileDiningOut,
    /// Any weight-loss goal
    GradualWeightLoss,
    /// Busy work schedule
    BusySchedulePrep,
    /// Dehydration trigger
    DehydrationReminder,
    /// Frequent flares, otherwise the occasional-flare caution
    FlareFrequency,
}

impl InsightRule {
    /// All rules in evaluation order
    pub const ALL: [Self; 5] = [
        Self::BeerWhileDiningOut,
        Self::GradualWeightLoss,
        Self::BusySchedulePrep,
        Self::DehydrationReminder,
        Self::FlareFrequency,
    ];

    /// Message this rule contributes for `profile`, if its condition holds
    #[must_use]
    pub fn evaluate<'m>(self, profile: &Profile, messages: &'m InsightMessages) -> Option<&'m str> {
        match self {
            Self::BeerWhileDiningOut => (profile.has_trigger(Trigger::Beer)
                && profile.has_lifestyle(Lifestyle::DiningOut))
            .then_some(messages.beer_dining_out.as_str()),
            Self::GradualWeightLoss => (profile.weight_goal != WeightGoal::NotApplicable)
                .then_some(messages.gradual_weight_loss.as_str()),
            Self::BusySchedulePrep => profile
                .has_lifestyle(Lifestyle::BusyWork)
                .then_some(messages.busy_schedule_prep.as_str()),
            Self::DehydrationReminder => profile
                .has_trigger(Trigger::Dehydration)
                .then_some(messages.dehydration_reminder.as_str()),
            Self::FlareFrequency => Some(if profile.flare_frequency == FlareFrequency::Frequent {
                messages.frequent_flares.as_str()
            } else {
                messages.occasional_flares.as_str()
            }),
        }
    }
}

/// Insights for `profile`, in rule order
#[must_use]
pub fn derive_insights(profile: &Profile, messages: &InsightMessages) -> Vec<String> {
    InsightRule::ALL
        .into_iter()
        .filter_map(|rule| rule.evaluate(profile, messages))
        .map(str::to_owned)
        .collect()
}
