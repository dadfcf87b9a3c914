// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors for the two fallible boundaries: catalog construction and config loading.
//!
//! Searching itself never fails. Once a `Catalog` and a `SearchConfig` exist,
//! every query produces a (possibly empty) result.

use std::path::PathBuf;
use thiserror::Error;

/// Why a catalog was rejected.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("empty {kind} name in catalog")]
    EmptyName { kind: &'static str },

    #[error("duplicate category {name:?}")]
    DuplicateCategory { name: String },

    #[error("duplicate item {item:?} in category {category:?}")]
    DuplicateItem { category: String, item: String },

    #[error("items {first:?} and {second:?} in category {category:?} share order {order}")]
    DuplicateOrder {
        category: String,
        order: i64,
        first: String,
        second: String,
    },
}

/// Why a search configuration was rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("weight {name} = {value} is out of range ({expected})")]
    InvalidWeight {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },
}

/// Crate-level error for callers that load both a catalog and a config.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
