// ABOUTME: Injectable randomness capability for meal selection
// ABOUTME: RandomSource trait plus an adapter over rand generators with seeded ChaCha support
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GoutKit Contributors

//! Randomness is passed into the engine explicitly. Nothing in the engine
//! touches a thread-local or global generator, so a fixed seed replays the
//! same plan and tests can script exact draws.

use rand::rngs::OsRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::errors::RandomSourceError;

/// Source of uniformly distributed indices
pub trait RandomSource {
    /// Draw an index in `[0, upper)`
    ///
    /// # Errors
    ///
    /// Returns [`RandomSourceError`] if the source cannot produce a value or
    /// `upper` is zero
    fn next_index(&mut self, upper: usize) -> Result<usize, RandomSourceError>;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_index(&mut self, upper: usize) -> Result<usize, RandomSourceError> {
        (**self).next_index(upper)
    }
}

/// Adapter exposing any `rand` generator as a [`RandomSource`]
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wrap a generator
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ChaCha8Rng> {
    /// Deterministic source; the same seed always yields the same draws
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Source seeded from operating-system entropy
    ///
    /// # Errors
    ///
    /// Returns [`RandomSourceError`] if the operating system refuses to
    /// provide entropy
    pub fn from_os_entropy() -> Result<Self, RandomSourceError> {
        ChaCha8Rng::from_rng(OsRng)
            .map(Self::new)
            .map_err(|e| RandomSourceError::new(e.to_string()))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_index(&mut self, upper: usize) -> Result<usize, RandomSourceError> {
        if upper == 0 {
            return Err(RandomSourceError::new("cannot draw from an empty range"));
        }
        Ok(self.rng.gen_range(0..upper))
    }
}
