// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the toolsift CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `TOOLSIFT_THEME` first, then `COLORFGBG`, then defaults to dark.
//! Respects `NO_COLOR` and turns colors off when stdout is not a TTY.

use std::collections::BTreeSet;
use std::sync::OnceLock;
use toolsift::{CatalogItem, CategoryHits, Hit, ScoreBreakdown};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("TOOLSIFT_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
    pub const BRIGHT_MAGENTA: (u8, u8, u8) = (224, 145, 237); // #e091ed
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
    pub const BRIGHT_MAGENTA: (u8, u8, u8) = (146, 38, 144); // #922690
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);
theme_color!(BRIGHT_MAGENTA);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Cut plain text to `max` characters, ending in an ellipsis when shortened.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = if use_colors() { GRAY() } else { String::new() };
    let reset = if use_colors() { RESET } else { "" };
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{border}│{reset}{content}{}{border}│{reset}", " ".repeat(pad));
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = if use_colors() { GRAY() } else { String::new() };
    let reset = if use_colors() { RESET } else { "" };
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("{border}┌{reset}{label_part}{border}{}┐{reset}", "─".repeat(remaining));
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    let border = if use_colors() { GRAY() } else { String::new() };
    let reset = if use_colors() { RESET } else { "" };
    println!("{border}└{}┘{reset}", "─".repeat(BOX_WIDTH));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded score value, bucketed by the default signal weights
pub fn score_value(score: Option<f64>) -> String {
    let Some(score) = score else {
        return themed(GRAY, &[], "      -");
    };
    let text = format!("{:>7.1}", score);
    if score >= 100.0 {
        themed(BRIGHT_GREEN, &[BOLD], &text)
    } else if score >= 50.0 {
        themed(GREEN, &[], &text)
    } else if score >= 20.0 {
        themed(YELLOW, &[], &text)
    } else {
        themed(GRAY, &[], &text)
    }
}

/// One result line: score, name, truncated description.
pub fn hit_line(hit: &Hit<'_>, show_category: bool) -> String {
    let name = themed(BRIGHT_MAGENTA, &[BOLD], &hit.item.name);
    let label = if show_category {
        format!("{} {}", name, themed(GRAY, &[DIM], &format!("({})", hit.category())))
    } else {
        name
    };
    let used = 2 + 7 + 2 + visible_len(&label) + 2;
    let description = truncate(&hit.item.description, BOX_WIDTH.saturating_sub(used));
    format!(
        " {}  {}  {}",
        score_value(hit.score),
        label,
        themed(GRAY, &[], &description)
    )
}

// ═══════════════════════════════════════════════════════════════════════════
// RESULT RENDERING
// ═══════════════════════════════════════════════════════════════════════════

pub fn print_groups(groups: &[CategoryHits<'_>]) {
    if groups.is_empty() {
        println!("{}", themed(YELLOW, &[], "No matching tools."));
        return;
    }
    for group in groups {
        section_top(&format!("{} ({})", group.name, group.items.len()));
        for hit in &group.items {
            row(&hit_line(hit, false));
        }
        section_bot();
    }
}

pub fn print_flat(hits: &[Hit<'_>]) {
    if hits.is_empty() {
        println!("{}", themed(YELLOW, &[], "No matching tools."));
        return;
    }
    section_top(&format!("{} results", hits.len()));
    for hit in hits {
        row(&hit_line(hit, true));
    }
    section_bot();
}

pub fn print_first(hit: Option<&Hit<'_>>) {
    match hit {
        Some(hit) => {
            section_top("Best match");
            row(&hit_line(hit, true));
            if let Some(route) = &hit.item.route {
                row(&format!("  → {}", themed(CYAN, &[], route)));
            }
            section_bot();
        }
        None => println!("{}", themed(YELLOW, &[], "No matching tools.")),
    }
}

/// Per-signal table for one item.
pub fn print_breakdown(item: &CatalogItem, query: &str, breakdown: &ScoreBreakdown, min_score: f64) {
    section_top(&format!("{:?} vs {:?}", query, item.name));
    let signals = [
        ("exact name", breakdown.exact_name),
        ("exact description", breakdown.exact_description),
        ("fuzzy name", breakdown.fuzzy_name),
        ("fuzzy words", breakdown.fuzzy_words),
        ("synonym name", breakdown.synonym_name),
        ("synonym description", breakdown.synonym_description),
    ];
    for (label, value) in signals {
        row(&format!(" {}{}", pad_right(label, 24), score_value(Some(value))));
    }

    let total = breakdown.total();
    let verdict = if total > min_score {
        themed(GREEN, &[BOLD], "shown")
    } else {
        themed(YELLOW, &[BOLD], "hidden")
    };
    row(&format!(
        " {}{}  {} (threshold {})",
        pad_right("total", 24),
        score_value(Some(total)),
        verdict,
        min_score
    ));
    section_bot();
}

pub fn print_expansion(query: &str, expanded: &BTreeSet<String>) {
    section_top(&format!("Expansion of {:?}", query));
    for line in wrap_terms(expanded.iter().map(String::as_str), BOX_WIDTH) {
        row(&line);
    }
    section_bot();
}

/// Pack terms into lines of at most `width` visible characters.
pub fn wrap_terms<'a>(terms: impl IntoIterator<Item = &'a str>, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::from(" ");
    for term in terms {
        if visible_len(&line) > 1 && visible_len(&line) + term.chars().count() + 2 > width {
            lines.push(std::mem::replace(&mut line, String::from(" ")));
        }
        line.push_str(term);
        line.push_str("  ");
    }
    lines.push(line);
    lines
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
