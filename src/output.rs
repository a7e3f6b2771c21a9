//! CLI output formatting for `check`, `today` and `build`.
//!
//! # Information-First Display
//!
//! Output leads with what a reader would see (month name, day number,
//! title) and shows routes and file paths as secondary context after `→`.
//! Entities use a two-level layout: a header line with a positional index,
//! then indented detail lines.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Devotionals
//! 001 Feb (4 days)
//!     001 Day 1 - A New Beginning
//!         Tamil: நாள் 1 - ஒரு புதிய தொடக்கம்
//!     002 Day 2 — Walking in the Light
//!         Tamil: (missing)
//! 002 Mar (3 days)
//!     ...
//!
//! 7 devotionals in 2 months
//! ```
//!
//! ## Today
//!
//! ```text
//! Today 2026-02-03 → /feb/day/3
//!     Rest for the Weary
//! ```
//!
//! ## Build
//!
//! ```text
//! Home → index.html
//! Today → today/index.html
//! 001 Feb → feb/index.html
//!     Today → feb/today/index.html
//!     Day 1 → feb/day/1/index.html
//! Not found → 404.html
//!
//! Generated 2 month pages, 7 day pages (build date 2026-02-03)
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::data::Dataset;
use crate::generate::{GenerateSummary, PageKind};
use crate::resolve::TodayResolution;
use crate::text::strip_day_prefix;
use crate::types::Language;
use chrono::NaiveDate;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}...")
    }
}

// ============================================================================
// Check
// ============================================================================

/// Inventory of the dataset: every month, every day, both titles.
///
/// Days missing a title or body in either language get a `(missing)` marker
/// so gaps in the translation are easy to spot.
pub fn format_check_output(data: &Dataset) -> Vec<String> {
    let mut lines = vec!["Devotionals".to_string()];
    let months = data.available_months();

    if months.is_empty() {
        lines.push(format!("{}(none)", indent(1)));
    }

    for (i, &month) in months.iter().enumerate() {
        let entries = data.devotionals_for_month(month);
        lines.push(format!(
            "{} {} ({})",
            format_index(i + 1),
            month.display_name(),
            plural(entries.len(), "day")
        ));
        for entry in entries {
            let english = entry.devotional.text(Language::English);
            let tamil = entry.devotional.text(Language::Tamil);
            let title = if english.title.is_empty() {
                "(untitled)".to_string()
            } else {
                truncate(&english.title, 60)
            };
            lines.push(format!("{}{} {}", indent(1), format_index(entry.day as usize), title));
            if english.data.trim().is_empty() {
                lines.push(format!("{}English text: (missing)", indent(2)));
            }
            if tamil.title.is_empty() {
                lines.push(format!("{}Tamil: (missing)", indent(2)));
            } else {
                lines.push(format!("{}Tamil: {}", indent(2), truncate(&tamil.title, 60)));
            }
            if !tamil.title.is_empty() && tamil.data.trim().is_empty() {
                lines.push(format!("{}Tamil text: (missing)", indent(2)));
            }
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "{} in {}",
        plural(data.total_days(), "devotional"),
        plural(months.len(), "month")
    ));
    lines
}

pub fn print_check_output(data: &Dataset) {
    for line in format_check_output(data) {
        println!("{}", line);
    }
}

// ============================================================================
// Today
// ============================================================================

pub fn format_today_output(date: NaiveDate, resolution: &TodayResolution<'_>) -> Vec<String> {
    match resolution {
        TodayResolution::Found(entry) => vec![
            format!("Today {} \u{2192} {}", date, entry.path()),
            format!(
                "{}{}",
                indent(1),
                strip_day_prefix(&entry.devotional.text(Language::English).title)
            ),
        ],
        TodayResolution::Redirect(path) => vec![
            format!("Today {} \u{2192} {}", date, path),
            format!("{}(no devotional available, redirect)", indent(1)),
        ],
    }
}

pub fn print_today_output(date: NaiveDate, resolution: &TodayResolution<'_>) {
    for line in format_today_output(date, resolution) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

/// Page inventory of a static build, grouped by month.
pub fn format_generate_output(summary: &GenerateSummary) -> Vec<String> {
    let mut lines = Vec::new();
    let mut month_index = 0;

    for page in &summary.pages {
        let file = page.file.display();
        let line = match page.kind {
            PageKind::Home => format!("Home \u{2192} {file}"),
            PageKind::Today => format!("Today \u{2192} {file}"),
            PageKind::Redirect => format!("Redirect {} \u{2192} {file}", page.route),
            PageKind::NotFound => format!("Not found \u{2192} {file}"),
            PageKind::MonthList => {
                month_index += 1;
                let name = page.route.trim_start_matches('/');
                format!(
                    "{} {} \u{2192} {file}",
                    format_index(month_index),
                    crate::calendar::capitalize(name)
                )
            }
            PageKind::MonthToday => format!("{}Today \u{2192} {file}", indent(1)),
            PageKind::Day => {
                let day = page.route.rsplit('/').next().unwrap_or_default();
                format!("{}Day {day} \u{2192} {file}", indent(1))
            }
        };
        lines.push(line);
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {}, {} (build date {})",
        plural(summary.count(PageKind::MonthList), "month page"),
        plural(summary.count(PageKind::Day), "day page"),
        summary.build_date
    ));
    lines
}

pub fn print_generate_output(summary: &GenerateSummary) {
    for line in format_generate_output(summary) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
