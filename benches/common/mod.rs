// ABOUTME: Common benchmark utilities and fixtures for plan generation benchmarks
// ABOUTME: Provides profile presets and synthetic catalogs of configurable size
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GoutKit Contributors

//! Common benchmark utilities and fixtures.

pub mod fixtures;
