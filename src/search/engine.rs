// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search engine: catalog + synonyms + config, queried three ways.
//!
//! Every mode runs the same pipeline: prepare the query once, score each
//! item, keep items strictly above `min_score`, sort with `compare_ranked`.
//! The modes differ only in how the survivors are packaged.
//!
//! An empty or whitespace-only query is browse mode: nothing is scored and
//! nothing is dropped. `search_first` is the exception, because "jump to the
//! best match" has no target when nothing was typed.

use crate::config::SearchConfig;
use crate::error::Result;
use crate::scoring::ranking::{compare_ranked, compare_unscored, Ranked};
use crate::scoring::{score, score_breakdown, PreparedQuery, ScoreBreakdown};
use crate::synonyms::SynonymTable;
use crate::types::{Catalog, CatalogItem, Category, CategoryHits, Hit};
use std::collections::BTreeSet;
use std::path::Path;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Below this many candidates, thread hand-off costs more than scoring.
#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD: usize = 512;

/// Searches one immutable catalog.
///
/// Holds no mutable state, so a shared `&SearchEngine` can serve any number
/// of concurrent queries.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    catalog: Catalog,
    synonyms: SynonymTable,
    config: SearchConfig,
}

impl SearchEngine {
    /// Engine with default weights and the built-in synonym table.
    pub fn new(catalog: Catalog) -> Self {
        let config = SearchConfig::default();
        Self {
            catalog,
            synonyms: config.synonym_table(),
            config,
        }
    }

    /// Load a catalog JSON file and an optional TOML config in one step.
    ///
    /// Without a config path the defaults apply.
    pub fn load(catalog: impl AsRef<Path>, config: Option<&Path>) -> Result<Self> {
        let catalog = Catalog::from_json_file(catalog)?;
        let config = match config {
            Some(path) => SearchConfig::load(path)?,
            None => SearchConfig::default(),
        };
        Ok(Self::new(catalog).with_config(config))
    }

    /// Replace the config and rebuild the synonym table it describes.
    ///
    /// Assumes `config` is valid; configs from `SearchConfig::load` already are.
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.synonyms = config.synonym_table();
        self.config = config;
        self
    }

    /// Use this synonym table instead of the one the config describes.
    pub fn with_synonyms(mut self, synonyms: SynonymTable) -> Self {
        self.synonyms = synonyms;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }

    pub fn prepare(&self, query: &str) -> PreparedQuery {
        PreparedQuery::new(query, &self.synonyms, self.config.fold_diacritics)
    }

    /// The query's terms plus everything the synonym table adds.
    pub fn expand(&self, query: &str) -> BTreeSet<String> {
        self.synonyms.expand(query)
    }

    /// Relevance of one item for `query`.
    pub fn score(&self, item: &CatalogItem, query: &str) -> f64 {
        score(item, &self.prepare(query), &self.config.weights)
    }

    /// Per-signal contributions behind `score`.
    pub fn score_breakdown(&self, item: &CatalogItem, query: &str) -> ScoreBreakdown {
        score_breakdown(item, &self.prepare(query), &self.config.weights)
    }

    /// Every category and every item, in display order. No scores.
    pub fn browse(&self) -> Vec<CategoryHits<'_>> {
        let mut groups: Vec<CategoryHits<'_>> = self
            .catalog
            .categories()
            .iter()
            .map(|category| {
                let mut ranked = unscored(category);
                ranked.sort_by(compare_unscored);
                CategoryHits {
                    name: &category.name,
                    order: category.order,
                    items: ranked.into_iter().map(unscored_hit).collect(),
                }
            })
            .collect();
        sort_groups(&mut groups);
        groups
    }

    /// Matching items grouped by category.
    ///
    /// Categories with no surviving items are dropped; the rest are sorted by
    /// their own order, items inside by score then order.
    pub fn search_grouped(&self, query: &str) -> Vec<CategoryHits<'_>> {
        let prepared = self.prepare(query);
        if prepared.is_empty() {
            return self.browse();
        }

        let mut groups: Vec<CategoryHits<'_>> = self
            .catalog
            .categories()
            .iter()
            .filter_map(|category| {
                let mut ranked = self.rank(&prepared, unscored(category));
                if ranked.is_empty() {
                    return None;
                }
                ranked.sort_by(compare_ranked);
                Some(CategoryHits {
                    name: &category.name,
                    order: category.order,
                    items: ranked.into_iter().map(scored_hit).collect(),
                })
            })
            .collect();
        sort_groups(&mut groups);

        tracing::debug!(
            mode = "grouped",
            query = prepared.text(),
            categories = groups.len(),
            hits = groups.iter().map(|g| g.items.len()).sum::<usize>(),
            "search complete"
        );
        groups
    }

    /// Matching items from every category in one ranked list.
    pub fn search_flat(&self, query: &str) -> Vec<Hit<'_>> {
        let prepared = self.prepare(query);
        let hits = self.flat(&prepared);
        if !prepared.is_empty() {
            tracing::debug!(
                mode = "flat",
                query = prepared.text(),
                hits = hits.len(),
                "search complete"
            );
        }
        hits
    }

    /// `search_flat`, cut to the best `limit` hits.
    pub fn search_flat_limited(&self, query: &str, limit: usize) -> Vec<Hit<'_>> {
        let mut hits = self.search_flat(query);
        hits.truncate(limit);
        hits
    }

    /// The single best match, or `None` for an empty query or no matches.
    pub fn search_first(&self, query: &str) -> Option<Hit<'_>> {
        let prepared = self.prepare(query);
        if prepared.is_empty() {
            return None;
        }
        let first = self.flat(&prepared).into_iter().next();
        tracing::debug!(
            mode = "first",
            query = prepared.text(),
            best = first.map(|hit| hit.name()),
            "search complete"
        );
        first
    }

    fn flat(&self, prepared: &PreparedQuery) -> Vec<Hit<'_>> {
        let candidates: Vec<Ranked<'_>> = self
            .catalog
            .categories()
            .iter()
            .flat_map(unscored)
            .collect();

        if prepared.is_empty() {
            let mut ranked = candidates;
            ranked.sort_by(compare_unscored);
            return ranked.into_iter().map(unscored_hit).collect();
        }

        let mut ranked = self.rank(prepared, candidates);
        ranked.sort_by(compare_ranked);
        ranked.into_iter().map(scored_hit).collect()
    }

    /// Score candidates and keep those strictly above the threshold.
    fn rank<'a>(&self, prepared: &PreparedQuery, candidates: Vec<Ranked<'a>>) -> Vec<Ranked<'a>> {
        let weights = &self.config.weights;
        let keep = |mut candidate: Ranked<'a>| {
            candidate.score = score(candidate.item, prepared, weights);
            if candidate.score > weights.min_score {
                tracing::trace!(
                    item = %candidate.item.name,
                    category = %candidate.item.category,
                    score = candidate.score,
                    "item above threshold"
                );
                Some(candidate)
            } else {
                None
            }
        };

        #[cfg(feature = "parallel")]
        {
            if candidates.len() >= PARALLEL_THRESHOLD {
                return candidates.into_par_iter().filter_map(keep).collect();
            }
        }

        candidates.into_iter().filter_map(keep).collect()
    }
}

fn unscored(category: &Category) -> Vec<Ranked<'_>> {
    category
        .items
        .iter()
        .map(|item| Ranked {
            item,
            category_order: category.order,
            score: 0.0,
        })
        .collect()
}

fn unscored_hit(ranked: Ranked<'_>) -> Hit<'_> {
    Hit {
        item: ranked.item,
        score: None,
    }
}

fn scored_hit(ranked: Ranked<'_>) -> Hit<'_> {
    Hit {
        item: ranked.item,
        score: Some(ranked.score),
    }
}

fn sort_groups(groups: &mut [CategoryHits<'_>]) {
    groups.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.name.cmp(b.name)));
}
