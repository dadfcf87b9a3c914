// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The catalog being searched, and the shapes search results come back in.
//!
//! A `Catalog` is built once, validated, and then only ever read. Result types
//! borrow from it, so a search never copies item text.
//!
//! # Invariants
//!
//! - Category names are unique across the catalog.
//! - Item names are unique within their category.
//! - Item `order` values are unique within their category (they are the
//!   fallback sort key, so duplicates would make ordering ambiguous).
//! - Every item's `category` equals the name of the category holding it.
//!
//! `Catalog::new` enforces all four. There is no way to get a `Catalog` that
//! violates them, and no `&mut` access after construction.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

// =============================================================================
// CATALOG INPUT
// =============================================================================

/// One searchable tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,
    pub description: String,
    /// Owning category name. Stamped by `Catalog::new`; ignored on input.
    #[serde(default)]
    pub category: String,
    /// Fallback sort key, unique within the category. Need not start at zero.
    pub order: i64,
    /// Where the tool lives. Carried for rendering, never scored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
}

impl CatalogItem {
    pub fn new(name: impl Into<String>, description: impl Into<String>, order: i64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category: String::new(),
            order,
            route: None,
        }
    }

    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }
}

/// A named group of items with its own display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub order: i64,
    #[serde(default)]
    pub items: Vec<CatalogItem>,
}

impl Category {
    pub fn new(name: impl Into<String>, order: i64, items: Vec<CatalogItem>) -> Self {
        Self {
            name: name.into(),
            order,
            items,
        }
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    categories: Vec<Category>,
}

/// The validated, read-only set of categories a `SearchEngine` queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Validate categories and stamp each item with its category name.
    ///
    /// Categories and items keep the order they were given in; sorting by
    /// `order` happens at search time.
    pub fn new(mut categories: Vec<Category>) -> Result<Self, CatalogError> {
        let mut seen_categories = HashSet::new();

        for category in &mut categories {
            if category.name.trim().is_empty() {
                return Err(CatalogError::EmptyName { kind: "category" });
            }
            if !seen_categories.insert(category.name.clone()) {
                return Err(CatalogError::DuplicateCategory {
                    name: category.name.clone(),
                });
            }

            let mut names = HashSet::new();
            let mut orders: HashMap<i64, &str> = HashMap::new();
            for item in &category.items {
                if item.name.trim().is_empty() {
                    return Err(CatalogError::EmptyName { kind: "item" });
                }
                if !names.insert(item.name.as_str()) {
                    return Err(CatalogError::DuplicateItem {
                        category: category.name.clone(),
                        item: item.name.clone(),
                    });
                }
                if let Some(first) = orders.insert(item.order, &item.name) {
                    return Err(CatalogError::DuplicateOrder {
                        category: category.name.clone(),
                        order: item.order,
                        first: first.to_string(),
                        second: item.name.clone(),
                    });
                }
            }

            for item in &mut category.items {
                item.category.clone_from(&category.name);
            }
        }

        tracing::debug!(
            categories = categories.len(),
            items = categories.iter().map(|c| c.items.len()).sum::<usize>(),
            "catalog validated"
        );

        Ok(Self { categories })
    }

    /// Parse `{"categories": [...]}` JSON and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.categories)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = json.len(), "loading catalog");
        Self::from_json_str(&json)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Every item, category by category, in backing order.
    pub fn items(&self) -> impl Iterator<Item = &CatalogItem> + '_ {
        self.categories.iter().flat_map(|c| c.items.iter())
    }

    /// Total number of items across all categories.
    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// SEARCH OUTPUT
// =============================================================================

/// An item in a result, with the score that earned it a place.
///
/// `score` is `None` only in browse results (empty query), where nothing is scored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hit<'a> {
    #[serde(flatten)]
    pub item: &'a CatalogItem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl<'a> Hit<'a> {
    pub fn name(&self) -> &'a str {
        &self.item.name
    }

    pub fn category(&self) -> &'a str {
        &self.item.category
    }
}

/// One category's surviving items in grouped mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryHits<'a> {
    pub name: &'a str,
    pub order: i64,
    pub items: Vec<Hit<'a>>,
}
