// ABOUTME: Core types and constants for the GoutKit care-plan engine
// ABOUTME: Foundation crate with error handling, profile and plan models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GoutKit Contributors

#![deny(unsafe_code)]

//! # GoutKit Core
//!
//! Foundation crate providing shared types and constants for the GoutKit
//! care-plan engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Fixed labels and tags shared by the engine and the catalog
//! - **models**: Profile input, meal catalog, and generated plan records

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Profile, Meal, Catalog, `GeneratedPlan`)
pub mod models;
