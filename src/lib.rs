// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy, synonym-aware search over a static catalog of tools.
//!
//! Given a free-text query and a catalog of categorized items, this crate
//! scores every item, drops the ones that don't clear a threshold, and returns
//! the rest ranked: grouped by category, as one flat list, or as the single
//! best match.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  types.rs   │────▶│  scoring/    │────▶│  search/     │
//! │  (Catalog,  │     │  (weights,   │     │ (SearchEngine│
//! │ CatalogItem)│     │   ranking)   │     │   3 modes)   │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                       ▲          ▲
//!                       │          │
//!             ┌─────────┴────┐  ┌──┴──────────┐
//!             │   fuzzy/     │  │ synonyms.rs │
//!             │ (similarity) │  │ (expansion) │
//!             └──────────────┘  └─────────────┘
//! ```
//!
//! # Relevance
//!
//! | Signal             | Weight     | Condition                                 |
//! |--------------------|------------|-------------------------------------------|
//! | Exact name         | 100        | query ⊂ name                              |
//! | Exact description  | 50         | query ⊂ description                       |
//! | Fuzzy name         | 30 × sim   | `similarity(query, name) > 0.6`           |
//! | Fuzzy word         | 10 × sim   | each word pair with similarity > 0.7      |
//! | Synonym            | 20 / 10    | each expanded term ⊂ name / description   |
//!
//! Items need a score strictly above 10. Ties go to the lower display order.
//! All of it is tunable through `SearchConfig`.
//!
//! # Usage
//!
//! ```
//! use toolsift::{Catalog, CatalogItem, Category, SearchEngine};
//!
//! let catalog = Catalog::new(vec![Category::new(
//!     "Utility Tools",
//!     0,
//!     vec![CatalogItem::new("Password Generator", "Generate secure passwords", 0)],
//! )])
//! .unwrap();
//!
//! let engine = SearchEngine::new(catalog);
//! let best = engine.search_first("pasword generator").unwrap();
//! assert_eq!(best.name(), "Password Generator");
//! ```

pub mod config;
pub mod error;
pub mod fuzzy;
pub mod scoring;
mod search;
pub mod synonyms;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use config::{SearchConfig, SynonymConfig};
pub use error::{CatalogError, ConfigError, Error, Result};
pub use fuzzy::{levenshtein, levenshtein_within, similarity};
pub use scoring::{score, score_breakdown, PreparedQuery, ScoreBreakdown, ScoringWeights};
pub use search::SearchEngine;
pub use synonyms::SynonymTable;
pub use types::{Catalog, CatalogItem, Category, CategoryHits, Hit};
pub use utils::normalize;
