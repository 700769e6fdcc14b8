// ABOUTME: Option listing command for goutkit-cli
// ABOUTME: Prints the key and label of every profile enumeration as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GoutKit Contributors

use anyhow::Result;
use goutkit_planner::models::{
    ActivityLevel, FlareFrequency, Goal, Lifestyle, TimeAvailable, Trigger, WeightGoal,
};
use serde::Serialize;

#[derive(Serialize)]
struct OptionEntry {
    key: &'static str,
    label: &'static str,
}

#[derive(Serialize)]
struct ProfileOptions {
    triggers: Vec<OptionEntry>,
    primary_goal: Vec<OptionEntry>,
    weight_goal: Vec<OptionEntry>,
    lifestyle: Vec<OptionEntry>,
    activity_level: Vec<OptionEntry>,
    flare_frequency: Vec<OptionEntry>,
    time_available: Vec<OptionEntry>,
}

macro_rules! entries {
    ($ty:ty) => {
        <$ty>::ALL
            .iter()
            .map(|variant| OptionEntry {
                key: variant.key(),
                label: variant.label(),
            })
            .collect()
    };
}

/// Print every option as JSON
pub fn run() -> Result<()> {
    let options = ProfileOptions {
        triggers: entries!(Trigger),
        primary_goal: entries!(Goal),
        weight_goal: entries!(WeightGoal),
        lifestyle: entries!(Lifestyle),
        activity_level: entries!(ActivityLevel),
        flare_frequency: entries!(FlareFrequency),
        time_available: entries!(TimeAvailable),
    };
    println!("{}", serde_json::to_string_pretty(&options)?);
    Ok(())
}
