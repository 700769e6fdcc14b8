// ABOUTME: Integration tests for environment-driven configuration
// ABOUTME: Covers catalog overrides, seed parsing and planner configuration overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GoutKit Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::path::PathBuf;

use goutkit_planner::config::environment::env_keys;
use goutkit_planner::config::{AppConfig, PlannerConfig};
use goutkit_planner::errors::ErrorCode;
use goutkit_planner::intelligence::RandomSource;
use serial_test::serial;

fn clear_env() {
    for key in [
        env_keys::CATALOG_PATH,
        env_keys::PROTOCOL_PATH,
        env_keys::SEED,
        "GOUTKIT_HYDRATION_STANDARD",
        "GOUTKIT_HYDRATION_ELEVATED",
    ] {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.catalog_path, None);
    assert_eq!(config.protocol_path, None);
    assert_eq!(config.seed, None);
}

#[test]
#[serial]
fn test_overrides_read_from_environment() {
    clear_env();
    env::set_var(env_keys::CATALOG_PATH, "/etc/goutkit/meals.yaml");
    env::set_var(env_keys::PROTOCOL_PATH, "  ");
    env::set_var(env_keys::SEED, "1234");

    let config = AppConfig::from_env();
    clear_env();

    let config = config.unwrap();
    assert_eq!(
        config.catalog_path,
        Some(PathBuf::from("/etc/goutkit/meals.yaml"))
    );
    assert_eq!(config.protocol_path, None, "blank values count as unset");
    assert_eq!(config.seed, Some(1234));
}

#[test]
#[serial]
fn test_invalid_seed_is_config_error() {
    clear_env();
    env::set_var(env_keys::SEED, "not-a-number");

    let result = AppConfig::from_env();
    clear_env();

    let error = result.unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigError);
    assert!(error.message.contains("GOUTKIT_SEED"));
}

#[test]
#[serial]
fn test_explicit_seed_skips_invalid_environment_seed() {
    clear_env();
    env::set_var(env_keys::SEED, "not-a-number");

    let result = AppConfig::from_env_with_seed(Some(5));
    clear_env();

    assert_eq!(result.unwrap().seed, Some(5));
}

#[test]
#[serial]
fn test_environment_seed_used_without_explicit_seed() {
    clear_env();
    env::set_var(env_keys::SEED, "99");

    let config = AppConfig::from_env_with_seed(None);
    clear_env();

    assert_eq!(config.unwrap().seed, Some(99));
}

#[test]
#[serial]
fn test_seed_from_environment_reproduces_draws() {
    clear_env();
    env::set_var(env_keys::SEED, "77");
    let first = AppConfig::from_env().unwrap();
    let second = AppConfig::from_env().unwrap();
    clear_env();

    let mut a = first.random_source().unwrap();
    let mut b = second.random_source().unwrap();
    let draws_a: Vec<usize> = (0..16).map(|_| a.next_index(20).unwrap()).collect();
    let draws_b: Vec<usize> = (0..16).map(|_| b.next_index(20).unwrap()).collect();
    assert_eq!(draws_a, draws_b);
}

#[test]
#[serial]
fn test_unseeded_source_uses_os_entropy() {
    clear_env();
    let config = AppConfig::from_env().unwrap();
    let mut source = config.random_source().unwrap();
    assert!(source.next_index(4).unwrap() < 4);
}

#[test]
#[serial]
fn test_planner_hydration_override() {
    clear_env();
    env::set_var("GOUTKIT_HYDRATION_STANDARD", "2 - 2.5 Liters");

    let config = PlannerConfig::load();
    clear_env();

    let config = config.unwrap();
    assert_eq!(config.hydration.standard_band, "2 - 2.5 Liters");
    assert_eq!(config.hydration.elevated_band, "3 - 3.5 Liters");
}
