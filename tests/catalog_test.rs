// ABOUTME: Integration tests for the catalog store and its YAML/JSON file loaders
// ABOUTME: Verifies load-time validation, extension handling and override resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GoutKit Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::fs;
use std::path::{Path, PathBuf};

use common::{CATALOG_YAML, PROTOCOL_JSON};
use goutkit_planner::catalog::{
    builtin_catalog, builtin_protocol, load_catalog, load_profile, load_protocol, CatalogStore,
};
use goutkit_planner::config::{AppConfig, PlannerConfig};
use goutkit_planner::errors::ErrorCode;
use goutkit_planner::intelligence::RngSource;
use goutkit_planner::models::{FlareFrequency, Lifestyle, MealCategory, Trigger, WeightGoal};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_yaml_catalog() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "meals.yaml", CATALOG_YAML);

    let catalog = load_catalog(&path).unwrap();
    assert_eq!(catalog.len(), 4);
    let breakfast = &catalog.meals(MealCategory::Breakfast)[0];
    assert_eq!(breakfast.name, "Oat Porridge");
    assert!(breakfast.has_tag("warm"));
    assert!(catalog.meals(MealCategory::Snack)[0].tags.is_empty());
}

#[test]
fn test_load_json_catalog_matches_builtin() {
    let dir = TempDir::new().unwrap();
    let builtin = builtin_catalog().unwrap();
    let path = write(&dir, "meals.json", &serde_json::to_string(builtin).unwrap());

    assert_eq!(&load_catalog(&path).unwrap(), builtin);
}

#[test]
fn test_empty_category_rejected_at_load_time() {
    let dir = TempDir::new().unwrap();
    let yaml = CATALOG_YAML.replace(
        "dinner:\n  - name: Vegetable Curry\n    prep: Simmer chickpeas in coconut milk.\n    type: dinner\n    tags: [vegan]\n",
        "dinner: []\n",
    );
    let path = write(&dir, "meals.yml", &yaml);

    let error = load_catalog(&path).unwrap_err();
    assert_eq!(error.code, ErrorCode::CatalogInvalid);
    assert!(error.message.contains("Dinner"));
}

#[test]
fn test_misfiled_meal_rejected() {
    let dir = TempDir::new().unwrap();
    let yaml = CATALOG_YAML.replace("type: lunch", "type: dinner");
    let path = write(&dir, "meals.yaml", &yaml);

    let error = load_catalog(&path).unwrap_err();
    assert_eq!(error.code, ErrorCode::CatalogInvalid);
    assert!(error.message.contains("Lentil Salad"));
}

#[test]
fn test_malformed_catalog_is_invalid_format() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "meals.json", "{\"breakfast\": [");

    let error = load_catalog(&path).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_missing_file_is_storage_error() {
    let dir = TempDir::new().unwrap();
    let error = load_catalog(&dir.path().join("absent.yaml")).unwrap_err();
    assert_eq!(error.code, ErrorCode::StorageError);
}

#[test]
fn test_unsupported_extension_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "meals.toml", CATALOG_YAML);

    let error = load_catalog(&path).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_load_protocol_validates_sections() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "protocol.json", PROTOCOL_JSON);
    let protocol = load_protocol(&path).unwrap();
    assert_eq!(protocol.schedule[0].time, "Hour 0-24");

    let empty = PROTOCOL_JSON.replace("[\"Alcohol\"]", "[]");
    let path = write(&dir, "empty.json", &empty);
    let error = load_protocol(&path).unwrap_err();
    assert_eq!(error.code, ErrorCode::CatalogInvalid);
    assert!(error.message.contains("avoid"));
}

#[test]
fn test_load_profile_accepts_keys_and_labels() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "profile.yaml",
        r"
name: Alex
triggers: [beer, Red Meat]
lifestyle: [Love dining out, vegetarian]
weight_goal: 10kg+
flare_frequency: frequent
",
    );

    let profile = load_profile(&path).unwrap();
    assert_eq!(profile.display_name(), "Alex");
    assert!(profile.has_trigger(Trigger::Beer));
    assert!(profile.has_trigger(Trigger::RedMeat));
    assert!(profile.has_lifestyle(Lifestyle::DiningOut));
    assert!(profile.has_lifestyle(Lifestyle::Vegetarian));
    assert_eq!(profile.weight_goal, WeightGoal::Large);
    assert_eq!(profile.flare_frequency, FlareFrequency::Frequent);
}

#[test]
fn test_store_uses_builtins_without_overrides() {
    let store = CatalogStore::from_config(&AppConfig::default()).unwrap();
    assert_eq!(store.catalog(), builtin_catalog().unwrap());
    assert_eq!(store.protocol(), builtin_protocol());
}

#[test]
fn test_store_applies_overrides() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig {
        catalog_path: Some(write(&dir, "meals.yaml", CATALOG_YAML)),
        protocol_path: Some(write(&dir, "protocol.json", PROTOCOL_JSON)),
        ..AppConfig::default()
    };

    let store = CatalogStore::from_config(&config).unwrap();
    assert_eq!(store.catalog().len(), 4);
    assert_eq!(store.protocol().immediate, ["Drink water."]);

    let planner = PlannerConfig::default();
    let plan = store
        .generator(&planner)
        .generate_plan(&Default::default(), &mut RngSource::seeded(4))
        .unwrap();
    assert!(plan
        .weekly_meals
        .iter()
        .all(|day| day.meals.dinner.name == "Vegetable Curry"));
    assert_eq!(&plan.flare_protocol, store.protocol());
}

#[test]
fn test_store_rejects_bad_override() {
    let result = CatalogStore::from_paths(Some(Path::new("/nonexistent/meals.yaml")), None);
    assert_eq!(result.unwrap_err().code, ErrorCode::StorageError);
}
