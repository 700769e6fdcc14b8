// ABOUTME: Environment configuration for the planner front end
// ABOUTME: Catalog and protocol file overrides, deterministic seed and logging settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GoutKit Contributors

//! Environment-based configuration
//!
//! | Variable | Meaning |
//! |---|---|
//! | `GOUTKIT_CATALOG_PATH` | YAML/JSON meal catalog replacing the built-in one |
//! | `GOUTKIT_PROTOCOL_PATH` | YAML/JSON flare protocol replacing the built-in one |
//! | `GOUTKIT_SEED` | `u64` seed for reproducible plans |
//!
//! Blank values count as unset.

use std::env;
use std::path::PathBuf;

use goutkit_core::errors::{AppError, AppResult};
use goutkit_intelligence::errors::RandomSourceError;
use goutkit_intelligence::random::RngSource;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::logging::LoggingConfig;

/// Environment variable names
pub mod env_keys {
    /// Meal catalog file override
    pub const CATALOG_PATH: &str = "GOUTKIT_CATALOG_PATH";
    /// Flare protocol file override
    pub const PROTOCOL_PATH: &str = "GOUTKIT_PROTOCOL_PATH";
    /// Deterministic seed
    pub const SEED: &str = "GOUTKIT_SEED";
}

/// Front-end configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Catalog file, or `None` for the built-in catalog
    pub catalog_path: Option<PathBuf>,
    /// Protocol file, or `None` for the built-in protocol
    pub protocol_path: Option<PathBuf>,
    /// Seed for reproducible plans; OS entropy when `None`
    pub seed: Option<u64>,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if `GOUTKIT_SEED` is set but is not a `u64`
    pub fn from_env() -> AppResult<Self> {
        Self::from_env_with_seed(None)
    }

    /// Load configuration, letting `seed` take precedence over `GOUTKIT_SEED`.
    ///
    /// The environment seed is only parsed when `seed` is `None`, so an
    /// explicit seed works even if the variable holds garbage.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if `seed` is `None` and `GOUTKIT_SEED` is set
    /// but is not a `u64`
    pub fn from_env_with_seed(seed: Option<u64>) -> AppResult<Self> {
        let seed = match seed {
            Some(seed) => Some(seed),
            None => env_var_opt(env_keys::SEED)
                .map(|value| parse_seed(&value))
                .transpose()?,
        };
        Ok(Self {
            catalog_path: env_var_opt(env_keys::CATALOG_PATH).map(PathBuf::from),
            protocol_path: env_var_opt(env_keys::PROTOCOL_PATH).map(PathBuf::from),
            seed,
            logging: LoggingConfig::from_env(),
        })
    }

    /// Log which overrides are active; call once a subscriber is installed
    pub fn log_summary(&self) {
        info!(
            catalog = self.catalog_path.is_some(),
            protocol = self.protocol_path.is_some(),
            seeded = self.seed.is_some(),
            "configuration loaded"
        );
    }

    /// Random source for plan generation: seeded when a seed is configured
    ///
    /// # Errors
    ///
    /// Returns [`RandomSourceError`] if no seed is configured and the
    /// operating system cannot provide entropy
    pub fn random_source(&self) -> Result<RngSource<ChaCha8Rng>, RandomSourceError> {
        match self.seed {
            Some(seed) => {
                debug!(seed, "using seeded random source");
                Ok(RngSource::seeded(seed))
            }
            None => RngSource::from_os_entropy(),
        }
    }
}

/// Parse a seed value
///
/// # Errors
///
/// Returns a `ConfigError` if `value` is not a `u64`
pub fn parse_seed(value: &str) -> AppResult<u64> {
    value.trim().parse().map_err(|e| {
        AppError::config(format!(
            "{} must be an unsigned integer, got '{value}': {e}",
            env_keys::SEED
        ))
    })
}

fn env_var_opt(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use goutkit_intelligence::random::RandomSource;

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed(" 42 ").unwrap(), 42);
        assert!(parse_seed("-1").is_err());
        assert!(parse_seed("forty-two").is_err());
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let config = AppConfig {
            seed: Some(7),
            ..AppConfig::default()
        };
        let mut first = config.random_source().unwrap();
        let mut second = config.random_source().unwrap();
        for _ in 0..10 {
            assert_eq!(
                first.next_index(1000).unwrap(),
                second.next_index(1000).unwrap()
            );
        }
    }
}
