// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

use crate::types::{Catalog, CatalogItem, Category};

/// Create a catalog item with a route derived from its name.
pub fn make_item(name: &str, description: &str, order: i64) -> CatalogItem {
    let slug = name.to_lowercase().replace(' ', "-");
    CatalogItem::new(name, description, order).with_route(format!("/tools/{}", slug))
}

pub fn make_category(name: &str, order: i64, items: Vec<CatalogItem>) -> Category {
    Category::new(name, order, items)
}

/// Two categories, one item each.
pub fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        make_category(
            "Image Tools",
            0,
            vec![make_item(
                "Background Removal",
                "Remove background from your images instantly",
                0,
            )],
        ),
        make_category(
            "Utility Tools",
            1,
            vec![make_item(
                "Password Generator",
                "Generate secure passwords with custom options",
                0,
            )],
        ),
    ])
    .expect("sample catalog is valid")
}

/// A realistic spread of browser utility tools across four categories.
///
/// Categories and items are deliberately listed out of display order.
pub fn tool_catalog() -> Catalog {
    Catalog::new(vec![
        make_category(
            "Text Tools",
            1,
            vec![
                make_item("Word Counter", "Count words and characters in your text", 0),
                make_item("Text Diff", "Compare two texts and highlight the differences", 1),
                make_item("Rich Text Editor", "Write and format documents in the browser", 2),
            ],
        ),
        make_category(
            "Image Tools",
            0,
            vec![
                make_item("Image Compression", "Compress image files without losing quality", 2),
                make_item("Background Removal", "Remove background from your images instantly", 0),
                make_item("Image Cropper", "Crop and resize photos", 1),
            ],
        ),
        make_category(
            "Utility Tools",
            3,
            vec![
                make_item("Password Generator", "Generate secure passwords with custom options", 0),
                make_item("QR Code Generator", "Create QR codes for links and text", 1),
                make_item("Cron Parser", "Explain and build cron schedule expressions", 2),
                make_item("Todo List", "Keep track of tasks in a simple list", 3),
            ],
        ),
        make_category(
            "Converters",
            2,
            vec![
                make_item("Unit Converter", "Convert between metric and imperial units", 0),
                make_item("Currency Converter", "Convert money between currencies", 1),
                make_item("Timezone Converter", "Convert times between time zones", 2),
                make_item("PDF Merger", "Combine several PDF files into one document", 3),
            ],
        ),
    ])
    .expect("tool catalog is valid")
}
