//! Shared test utilities for the devotional test suite.
//!
//! Provides the fixture dataset, a fixed "today", and lookup helpers that
//! panic with a clear message on miss.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let data = fixture_dataset();
//! let entry = find_entry(&data, Month::Feb, 2);
//! assert!(entry.devotional.english.title.contains("Light"));
//! ```

use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use crate::calendar::Month;
use crate::config::SiteConfig;
use crate::data::Dataset;
use crate::render::SiteContext;
use crate::types::Entry;

/// A single devotional object, for building ad-hoc datasets inline.
pub const DEVOTIONAL_JSON: &str = r#"{
    "english": { "title": "Day 1 - Sample", "data": "Sample body." },
    "tamil": { "title": "நாள் 1 - மாதிரி", "data": "மாதிரி உடல்." }
}"#;

/// Path to `fixtures/data.json`.
///
/// The fixture holds February days 1, 2, 3, 5 and March days 1, 2, 10, plus
/// keys that must be skipped (`feb.intro`, top-level `notes`).
pub fn fixture_data_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/data.json")
}

pub fn fixture_dataset() -> Dataset {
    Dataset::load(&fixture_data_path()).unwrap()
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Site context with stock config.
pub fn test_context() -> SiteContext {
    SiteContext::new(SiteConfig::default())
}

/// Find an entry. Panics if not found.
pub fn find_entry(data: &Dataset, month: Month, day: u32) -> Entry<'_> {
    data.get(month, day).unwrap_or_else(|| {
        let days = data.days_for_month(month);
        panic!("entry {month}/{day} not found. Available days: {days:?}")
    })
}
