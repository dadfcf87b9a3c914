// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tunable weights and thresholds, loadable from TOML.
//!
//! Every field is optional in the file; anything missing keeps its default.
//!
//! ```toml
//! [weights]
//! exact_name = 120.0
//! min_score = 15.0
//!
//! [synonyms]
//! min_term_len = 3
//! extra = { invoice = ["bill", "receipt"] }
//! ```

use crate::error::ConfigError;
use crate::scoring::ScoringWeights;
use crate::synonyms::{SynonymTable, DEFAULT_MIN_TERM_LEN};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Synonym-table settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SynonymConfig {
    /// Query terms shorter than this (in characters) are not expanded.
    pub min_term_len: usize,
    /// Start from an empty table instead of the built-in one.
    pub replace_builtin: bool,
    /// Extra `key = [alternates]` entries merged on top.
    pub extra: BTreeMap<String, Vec<String>>,
}

impl Default for SynonymConfig {
    fn default() -> Self {
        Self {
            min_term_len: DEFAULT_MIN_TERM_LEN,
            replace_builtin: false,
            extra: BTreeMap::new(),
        }
    }
}

/// Everything a `SearchEngine` can be tuned with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    pub weights: ScoringWeights,
    pub synonyms: SynonymConfig,
    /// Compare "café" and "cafe" as equal.
    pub fold_diacritics: bool,
}

impl SearchConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), weights = ?config.weights, "loaded search config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.validate()
    }

    /// Build the synonym table this config describes.
    pub fn synonym_table(&self) -> SynonymTable {
        let mut table = if self.synonyms.replace_builtin {
            SynonymTable::empty()
        } else {
            SynonymTable::builtin()
        };
        for (key, alternates) in &self.synonyms.extra {
            table.insert(key, alternates);
        }
        table.with_min_term_len(self.synonyms.min_term_len)
    }
}
