// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Synonym expansion: "picture" should find the image tools.
//!
//! The table maps a canonical term to its alternates. Matching is by substring
//! in both directions, so a query term hits an entry when it contains, or is
//! contained in, the key or any alternate. A hit pulls in the whole entry.
//!
//! Substring matching is loose and over-matches on very short
//! terms ("e" is inside half the table). Terms shorter than
//! `min_term_len` characters therefore never expand; they still come back
//! as themselves.

use std::collections::{BTreeMap, BTreeSet};

/// Default floor below which query terms skip expansion.
pub const DEFAULT_MIN_TERM_LEN: usize = 2;

/// Built-in entries for a catalog of browser utility tools.
const BUILTIN: &[(&str, &[&str])] = &[
    ("image", &["picture", "photo", "img", "pic", "graphic"]),
    ("pdf", &["document", "acrobat"]),
    ("qr", &["barcode", "qrcode", "scan"]),
    ("convert", &["converter", "transform", "translate"]),
    ("compress", &["shrink", "reduce", "minify", "optimize"]),
    ("zip", &["archive", "unzip", "extract"]),
    ("text", &["string", "characters", "letters", "paragraph"]),
    ("count", &["counter", "tally", "length"]),
    ("password", &["passphrase", "passcode", "secret"]),
    ("currency", &["money", "exchange", "forex"]),
    ("time", &["clock", "timezone", "date"]),
    ("unit", &["measurement", "metric", "imperial"]),
    ("todo", &["task", "checklist", "reminder"]),
    ("schedule", &["cron", "recurring", "job"]),
    ("editor", &["wysiwyg", "rich", "write"]),
    ("compare", &["diff", "difference", "changes"]),
    ("color", &["colour", "palette", "hex"]),
    ("remove", &["delete", "erase", "strip"]),
    ("spreadsheet", &["excel", "xlsx", "csv", "sheet"]),
    ("code", &["syntax", "highlight", "snippet"]),
];

/// Case-insensitive map from canonical term to alternates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymTable {
    entries: BTreeMap<String, BTreeSet<String>>,
    min_term_len: usize,
}

impl SynonymTable {
    /// A table with no entries. Expansion returns just the query terms.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
            min_term_len: DEFAULT_MIN_TERM_LEN,
        }
    }

    /// The tool-catalog table shipped with the crate.
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        for (key, alternates) in BUILTIN {
            table.insert(key, alternates.iter().copied());
        }
        table
    }

    pub fn with_min_term_len(mut self, min_term_len: usize) -> Self {
        self.min_term_len = min_term_len;
        self
    }

    pub fn min_term_len(&self) -> usize {
        self.min_term_len
    }

    /// Add alternates under `key`, merging with any existing entry.
    ///
    /// Everything is lowercased on the way in. Alternates equal to the key are dropped.
    pub fn insert<I, S>(&mut self, key: &str, alternates: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let key = key.trim().to_lowercase();
        if key.is_empty() {
            return;
        }
        let entry = self.entries.entry(key.clone()).or_default();
        for alternate in alternates {
            let alternate = alternate.as_ref().trim().to_lowercase();
            if !alternate.is_empty() && alternate != key {
                entry.insert(alternate);
            }
        }
    }

    /// Fold every entry of `other` into this table.
    pub fn merge(&mut self, other: &SynonymTable) {
        for (key, alternates) in &other.entries {
            self.insert(key, alternates);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The query's lowercase terms plus everything they pull in from the table.
    ///
    /// A whitespace-only query yields an empty set; callers treat that as browse
    /// mode before getting here.
    pub fn expand(&self, query: &str) -> BTreeSet<String> {
        let lowered = query.to_lowercase();
        let mut expanded = BTreeSet::new();

        for term in lowered.split_whitespace() {
            expanded.insert(term.to_string());
            if term.chars().count() < self.min_term_len {
                continue;
            }

            for (key, alternates) in &self.entries {
                let hit = overlaps(term, key) || alternates.iter().any(|alt| overlaps(term, alt));
                if hit {
                    expanded.insert(key.clone());
                    expanded.extend(alternates.iter().cloned());
                }
            }
        }

        expanded
    }
}

/// Either string contains the other.
fn overlaps(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}
