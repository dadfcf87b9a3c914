// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use toolsift::{Catalog, CatalogItem, SearchConfig, SearchEngine};

mod cli;
use cli::{display, Cli, Commands, ConfigArg, Mode};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn",
        1 => "warn,toolsift=debug",
        _ => "debug,toolsift=trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Search {
            catalog,
            query,
            mode,
            limit,
            config,
            json,
        } => {
            let engine = load_engine(&catalog, &config)?;
            run_search(&engine, &query, mode, limit, json)
        }
        Commands::Browse { catalog, json } => {
            let engine = SearchEngine::new(load_catalog(&catalog)?);
            let groups = engine.browse();
            if json {
                println!("{}", serde_json::to_string_pretty(&groups)?);
            } else {
                display::print_groups(&groups);
            }
            Ok(())
        }
        Commands::Explain {
            catalog,
            query,
            item,
            category,
            config,
        } => {
            let engine = load_engine(&catalog, &config)?;
            let found = resolve_item(engine.catalog(), &item, category.as_deref())
                .with_context(|| format!("looking up item in {}", catalog.display()))?;
            let breakdown = engine.score_breakdown(found, &query);
            display::print_breakdown(found, &query, &breakdown, engine.config().weights.min_score);
            Ok(())
        }
        Commands::Synonyms { query, config } => {
            let table = load_config(&config)?.synonym_table();
            display::print_expansion(&query, &table.expand(&query));
            Ok(())
        }
    }
}

fn run_search(
    engine: &SearchEngine,
    query: &str,
    mode: Mode,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    match mode {
        Mode::Grouped => {
            let groups = engine.search_grouped(query);
            if json {
                println!("{}", serde_json::to_string_pretty(&groups)?);
            } else {
                display::print_groups(&groups);
            }
        }
        Mode::Flat => {
            let hits = match limit {
                Some(limit) => engine.search_flat_limited(query, limit),
                None => engine.search_flat(query),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&hits)?);
            } else {
                display::print_flat(&hits);
            }
        }
        Mode::First => {
            let best = engine.search_first(query);
            if json {
                println!("{}", serde_json::to_string_pretty(&best)?);
            } else {
                display::print_first(best.as_ref());
            }
        }
    }
    Ok(())
}

/// Find one item by name (case-insensitive), optionally inside one category.
///
/// Names are only unique per category, so a name found in several
/// categories needs `--category` to pick one.
fn resolve_item<'a>(
    catalog: &'a Catalog,
    name: &str,
    category: Option<&str>,
) -> Result<&'a CatalogItem> {
    let matches: Vec<&CatalogItem> = catalog
        .items()
        .filter(|i| i.name.eq_ignore_ascii_case(name))
        .filter(|i| category.map_or(true, |c| i.category.eq_ignore_ascii_case(c)))
        .collect();

    match matches.as_slice() {
        [] => match category {
            Some(category) => bail!("no item named {:?} in category {:?}", name, category),
            None => bail!("no item named {:?}", name),
        },
        [item] => Ok(*item),
        many => {
            let categories: Vec<&str> = many.iter().map(|i| i.category.as_str()).collect();
            bail!(
                "item name {:?} is ambiguous, found in {}; pass --category",
                name,
                categories.join(", ")
            )
        }
    }
}

fn load_catalog(path: &Path) -> Result<Catalog> {
    Catalog::from_json_file(path).with_context(|| format!("loading catalog {}", path.display()))
}

fn load_config(arg: &ConfigArg) -> Result<SearchConfig> {
    match &arg.config {
        Some(path) => SearchConfig::load(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(SearchConfig::default()),
    }
}

fn load_engine(catalog: &Path, config: &ConfigArg) -> Result<SearchEngine> {
    SearchEngine::load(catalog, config.config.as_deref()).with_context(|| {
        format!("loading catalog {} with its search config", catalog.display())
    })
}
