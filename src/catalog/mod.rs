// ABOUTME: Catalog store module: built-in data, YAML/JSON loaders and the validated store
// ABOUTME: All catalog validation happens here, before any plan is generated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GoutKit Contributors

//! # Catalog Store
//!
//! The meal catalog and flare protocol are static configuration. They are
//! either the built-in product data or replacement files, and they are
//! validated when loaded so plan generation never sees an empty category.

/// Built-in meals and flare protocol
pub mod builtin;
/// YAML and JSON document loaders
pub mod loader;
/// Validated catalog and protocol bundle
pub mod store;

pub use builtin::{builtin_catalog, builtin_protocol};
pub use loader::{load_catalog, load_profile, load_protocol, DocumentFormat};
pub use store::CatalogStore;
