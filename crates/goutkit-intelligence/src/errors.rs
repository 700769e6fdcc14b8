// ABOUTME: Error types raised while generating a plan
// ABOUTME: Random source failures and out-of-range draws, with conversion into AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GoutKit Contributors

use goutkit_core::errors::{AppError, ErrorCode};
use goutkit_core::models::MealCategory;
use thiserror::Error;

/// The injected random source could not produce a value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("random source failed: {reason}")]
pub struct RandomSourceError {
    reason: String,
}

impl RandomSourceError {
    /// Create an error carrying the underlying reason
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Underlying reason
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl From<RandomSourceError> for AppError {
    fn from(error: RandomSourceError) -> Self {
        Self::randomness(error.to_string()).with_source(error)
    }
}

/// Plan generation failures.
///
/// Catalog exhaustion is not an error: the selector falls back to the full
/// category instead. Only a broken random source can stop generation.
#[derive(Debug, Error)]
pub enum PlanError {
    /// The random source failed; not retried
    #[error(transparent)]
    Randomness(#[from] RandomSourceError),

    /// The random source returned an index outside the candidate pool
    #[error("random source returned index {index} for a {category} pool of {len} meals")]
    IndexOutOfRange {
        /// Category being drawn from
        category: MealCategory,
        /// Returned index
        index: usize,
        /// Pool size
        len: usize,
    },
}

impl From<PlanError> for AppError {
    fn from(error: PlanError) -> Self {
        let code = match error {
            PlanError::Randomness(_) => ErrorCode::RandomnessUnavailable,
            PlanError::IndexOutOfRange { .. } => ErrorCode::InternalError,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
