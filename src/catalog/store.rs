// ABOUTME: Catalog store bundling the meal catalog and flare protocol used for generation
// ABOUTME: Resolves file overrides against the built-ins once, then hands out plan generators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GoutKit Contributors

use std::path::Path;

use goutkit_core::errors::AppResult;
use goutkit_core::models::{Catalog, EmergencyProtocol};
use goutkit_intelligence::config::PlannerConfig;
use goutkit_intelligence::plan_generator::PlanGenerator;
use tracing::info;

use super::builtin::{builtin_catalog, builtin_protocol};
use super::loader::{load_catalog, load_protocol};
use crate::config::AppConfig;

const BUILTIN: &str = "built-in";

fn display_path(path: &Path) -> String {
    path.display().to_string()
}

/// Read-only catalog and protocol, validated at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStore {
    catalog: Catalog,
    protocol: EmergencyProtocol,
}

impl CatalogStore {
    /// Wrap an already validated catalog and protocol
    ///
    /// # Errors
    ///
    /// Returns a `CatalogInvalid` error if the protocol has an empty section
    pub fn new(catalog: Catalog, protocol: EmergencyProtocol) -> AppResult<Self> {
        protocol.validate()?;
        Ok(Self { catalog, protocol })
    }

    /// Store holding the built-in catalog and protocol
    ///
    /// # Errors
    ///
    /// Returns a `CatalogInvalid` error if the built-in data is inconsistent
    pub fn builtin() -> AppResult<Self> {
        Self::from_paths(None, None)
    }

    /// Store built from optional file overrides, built-ins otherwise
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be read, parsed or validated
    pub fn from_paths(catalog: Option<&Path>, protocol: Option<&Path>) -> AppResult<Self> {
        let catalog_source = catalog.map_or_else(|| BUILTIN.to_owned(), display_path);
        let protocol_source = protocol.map_or_else(|| BUILTIN.to_owned(), display_path);

        let catalog = match catalog {
            Some(path) => load_catalog(path)?,
            None => builtin_catalog()?.clone(),
        };
        let protocol = match protocol {
            Some(path) => load_protocol(path)?,
            None => builtin_protocol().clone(),
        };
        let store = Self::new(catalog, protocol)?;

        info!(
            meals = store.catalog.len(),
            catalog = %catalog_source,
            protocol = %protocol_source,
            "catalog store ready"
        );
        Ok(store)
    }

    /// Store built from the configured overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be read, parsed or validated
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        Self::from_paths(config.catalog_path.as_deref(), config.protocol_path.as_deref())
    }

    /// The meal catalog
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The flare protocol
    #[must_use]
    pub const fn protocol(&self) -> &EmergencyProtocol {
        &self.protocol
    }

    /// Plan generator over this store
    #[must_use]
    pub const fn generator<'a>(&'a self, config: &'a PlannerConfig) -> PlanGenerator<'a> {
        PlanGenerator::new(&self.catalog, &self.protocol, config)
    }
}
