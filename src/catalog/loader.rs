// ABOUTME: File loaders for meal catalogs, flare protocols and profiles in YAML or JSON
// ABOUTME: Picks the parser from the file extension and validates catalogs at load time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GoutKit Contributors

use std::fs;
use std::path::Path;

use goutkit_core::errors::{AppError, AppResult, ErrorCode};
use goutkit_core::models::{Catalog, CatalogDocument, EmergencyProtocol, Profile};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Document syntax, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// `.yaml` or `.yml`
    Yaml,
    /// `.json`
    Json,
}

impl DocumentFormat {
    /// Format for `path`, ignoring extension case
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` error for any other extension
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(AppError::invalid_input(format!(
                "unsupported file type for {}: expected .yaml, .yml or .json",
                path.display()
            ))),
        }
    }

    /// Parse `text` in this format
    ///
    /// # Errors
    ///
    /// Returns an `InvalidFormat` error if the text does not parse into `T`
    pub fn parse<T: DeserializeOwned>(self, text: &str) -> AppResult<T> {
        match self {
            Self::Yaml => Ok(serde_yaml::from_str(text)?),
            Self::Json => Ok(serde_json::from_str(text)?),
        }
    }
}

fn read_document<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let format = DocumentFormat::from_path(path)?;
    let text = fs::read_to_string(path).map_err(|e| {
        AppError::new(
            ErrorCode::StorageError,
            format!("cannot read {}: {e}", path.display()),
        )
        .with_source(e)
    })?;
    debug!(path = %path.display(), format = ?format, "parsing document");
    format.parse(&text)
}

/// Load and validate a meal catalog
///
/// # Errors
///
/// Returns a `StorageError` if the file cannot be read, `InvalidFormat` if it
/// does not parse, or `CatalogInvalid` if it violates a catalog invariant
pub fn load_catalog(path: &Path) -> AppResult<Catalog> {
    let document: CatalogDocument = read_document(path)?;
    Ok(Catalog::try_from(document)?)
}

/// Load and validate a flare protocol
///
/// # Errors
///
/// Returns a `StorageError` if the file cannot be read, `InvalidFormat` if it
/// does not parse, or `CatalogInvalid` if a section is empty
pub fn load_protocol(path: &Path) -> AppResult<EmergencyProtocol> {
    let protocol: EmergencyProtocol = read_document(path)?;
    protocol.validate()?;
    Ok(protocol)
}

/// Load a profile; absent fields take their defaults
///
/// # Errors
///
/// Returns a `StorageError` if the file cannot be read or `InvalidFormat` if
/// it does not parse, including unknown option values
pub fn load_profile(path: &Path) -> AppResult<Profile> {
    read_document(path)
}
