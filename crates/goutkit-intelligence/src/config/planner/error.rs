// ABOUTME: Configuration error types for plan generator validation
// ABOUTME: Defines error variants for empty messages, duplicate bands and bad env values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GoutKit Contributors

//! Configuration error types for plan generator validation.

use goutkit_core::errors::{AppError, ErrorCode};
use std::env;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A message or label that is emitted verbatim is blank
    #[error("Empty value: {0}")]
    EmptyValue(&'static str),

    /// Two values that must differ are equal
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Environment variable access error (e.g. non-UTF-8 content)
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::new(ErrorCode::ConfigInvalid, error.to_string()).with_source(error)
    }
}
