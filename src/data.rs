//! Dataset loading and lookup.
//!
//! The data file is a two-level JSON object: month key → day key →
//! [`Devotional`]. Loading normalizes it into a typed index keyed by
//! [`Month`] and day number, so every lookup afterwards is a plain map access.
//!
//! ```text
//! data.json                       Dataset
//! {                               months: {
//!   "feb": {                        Feb: {
//!     "day1": {...},                  1: Devotional,
//!     "day2": {...}                   2: Devotional,
//!   },                              },
//!   "mar": { "day10": {...} }       Mar: { 10: Devotional },
//! }                               }
//! ```
//!
//! Keys that do not follow the month/day conventions in [`crate::calendar`]
//! are skipped with a warning: they can never be reached through a route, so
//! treating them as unavailable keeps the "available iff key exists"
//! rule intact for every key a URL can name.

use crate::calendar::{Month, parse_day_key};
use crate::types::{Devotional, Entry};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum DataError {
    #[error("failed to read data file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse data file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Raw shape of the data file before key normalization.
type RawData = BTreeMap<String, BTreeMap<String, Devotional>>;

/// Read-only index of every devotional in the data file.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    months: BTreeMap<Month, BTreeMap<u32, Devotional>>,
}

impl Dataset {
    /// Read and parse a data file.
    pub fn load(path: &Path) -> Result<Dataset, DataError> {
        let content = fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_json_str(&content).map_err(|source| DataError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            path = %path.display(),
            months = dataset.months.len(),
            days = dataset.total_days(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    /// Parse data file contents.
    pub fn from_json_str(json: &str) -> Result<Dataset, serde_json::Error> {
        let raw: RawData = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawData) -> Dataset {
        let mut months: BTreeMap<Month, BTreeMap<u32, Devotional>> = BTreeMap::new();
        for (month_key, days) in raw {
            // Month keys are lowercase by convention; anything else is unreachable.
            let Some(month) = Month::from_key(&month_key).filter(|m| m.key() == month_key) else {
                warn!(key = %month_key, "skipping unknown month key");
                continue;
            };
            let entries = months.entry(month).or_default();
            for (day_key, devotional) in days {
                match parse_day_key(&day_key) {
                    Some(day) => {
                        entries.insert(day, devotional);
                    }
                    None => warn!(month = %month, key = %day_key, "skipping malformed day key"),
                }
            }
        }
        months.retain(|_, days| !days.is_empty());
        Dataset { months }
    }

    /// Look up a devotional by raw month key (case-insensitive) and day.
    pub fn get_devotional(&self, month_key: &str, day: u32) -> Option<Entry<'_>> {
        let month = Month::from_key(month_key)?;
        self.get(month, day)
    }

    /// Look up a devotional by month and day.
    pub fn get(&self, month: Month, day: u32) -> Option<Entry<'_>> {
        self.months
            .get(&month)?
            .get(&day)
            .map(|devotional| Entry {
                month,
                day,
                devotional,
            })
    }

    /// Whether the month has at least one available day.
    pub fn has_month(&self, month: Month) -> bool {
        self.months.contains_key(&month)
    }

    /// Months with at least one devotional, in calendar order.
    pub fn available_months(&self) -> Vec<Month> {
        self.months.keys().copied().collect()
    }

    /// Available day numbers for a month, ascending. Empty for unknown months.
    pub fn days_for_month(&self, month: Month) -> Vec<u32> {
        self.months
            .get(&month)
            .map(|days| days.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Every entry in a month, ascending by day. Empty for unknown months.
    pub fn devotionals_for_month(&self, month: Month) -> Vec<Entry<'_>> {
        self.months
            .get(&month)
            .map(|days| {
                days.iter()
                    .map(|(&day, devotional)| Entry {
                        month,
                        day,
                        devotional,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The lowest available day of a month.
    pub fn first_available_day(&self, month: Month) -> Option<Entry<'_>> {
        self.months
            .get(&month)?
            .iter()
            .next()
            .map(|(&day, devotional)| Entry {
                month,
                day,
                devotional,
            })
    }

    /// The entry filed under the date's month and day of month, if any.
    pub fn today_devotional(&self, date: NaiveDate) -> Option<Entry<'_>> {
        self.get(Month::from_date(date), date.day())
    }

    /// Number of available days across all months.
    pub fn total_days(&self) -> usize {
        self.months.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use crate::types::Language;
    use tempfile::TempDir;

    #[test]
    fn get_devotional_finds_existing_day() {
        let data = fixture_dataset();
        let entry = data.get_devotional("feb", 2).unwrap();
        assert_eq!(entry.month, Month::Feb);
        assert_eq!(entry.day, 2);
        assert!(entry.devotional.text(Language::English).title.contains("Day 2"));
    }

    #[test]
    fn get_devotional_lowercases_month_key() {
        let data = fixture_dataset();
        assert!(data.get_devotional("FEB", 1).is_some());
        assert!(data.get_devotional("Feb", 1).is_some());
    }

    #[test]
    fn get_devotional_missing_day_or_month() {
        let data = fixture_dataset();
        assert!(data.get_devotional("feb", 4).is_none());
        assert!(data.get_devotional("jan", 1).is_none());
        assert!(data.get_devotional("notes", 1).is_none());
    }

    #[test]
    fn available_months_in_calendar_order() {
        let data = fixture_dataset();
        assert_eq!(data.available_months(), vec![Month::Feb, Month::Mar]);
    }

    #[test]
    fn days_sorted_numerically_not_lexically() {
        let data = fixture_dataset();
        // day10 would sort before day2 as a string
        assert_eq!(data.days_for_month(Month::Mar), vec![1, 2, 10]);
        assert_eq!(data.days_for_month(Month::Feb), vec![1, 2, 3, 5]);
    }

    #[test]
    fn days_for_unknown_month_is_empty() {
        let data = fixture_dataset();
        assert!(data.days_for_month(Month::Jul).is_empty());
        assert!(data.devotionals_for_month(Month::Jul).is_empty());
    }

    #[test]
    fn devotionals_for_month_ascending() {
        let data = fixture_dataset();
        let days: Vec<u32> = data
            .devotionals_for_month(Month::Mar)
            .iter()
            .map(|e| e.day)
            .collect();
        assert_eq!(days, vec![1, 2, 10]);
    }

    #[test]
    fn first_available_day_is_lowest() {
        let json = r#"{ "apr": { "day9": DEV, "day4": DEV } }"#.replace("DEV", DEVOTIONAL_JSON);
        let data = Dataset::from_json_str(&json).unwrap();
        assert_eq!(data.first_available_day(Month::Apr).unwrap().day, 4);
        assert!(data.first_available_day(Month::May).is_none());
    }

    #[test]
    fn today_devotional_matches_date() {
        let data = fixture_dataset();
        let entry = data.today_devotional(date(2026, 3, 10)).unwrap();
        assert_eq!((entry.month, entry.day), (Month::Mar, 10));
        assert!(data.today_devotional(date(2026, 3, 11)).is_none());
    }

    #[test]
    fn malformed_keys_are_skipped() {
        let json = r#"{
            "feb": { "day1": DEV, "intro": DEV, "day0": DEV },
            "Mar": { "day1": DEV },
            "notes": { "day1": DEV }
        }"#
        .replace("DEV", DEVOTIONAL_JSON);
        let data = Dataset::from_json_str(&json).unwrap();
        assert_eq!(data.available_months(), vec![Month::Feb]);
        assert_eq!(data.days_for_month(Month::Feb), vec![1]);
        assert_eq!(data.total_days(), 1);
    }

    #[test]
    fn zero_padded_day_key_does_not_shadow_canonical_key() {
        let json = r#"{"feb": {
            "day31": {"english": {"title": "Plain", "data": "a"}, "tamil": {"title": "", "data": ""}},
            "day031": {"english": {"title": "Padded", "data": "b"}, "tamil": {"title": "", "data": ""}}
        }}"#;
        let data = Dataset::from_json_str(json).unwrap();
        assert_eq!(data.days_for_month(Month::Feb), vec![31]);
        let entry = data.get(Month::Feb, 31).unwrap();
        assert_eq!(entry.devotional.text(Language::English).title, "Plain");
    }

    #[test]
    fn month_with_no_valid_days_is_unavailable() {
        let json = r#"{ "jun": { "preface": DEV }, "jul": {} }"#.replace("DEV", DEVOTIONAL_JSON);
        let data = Dataset::from_json_str(&json).unwrap();
        assert!(data.is_empty());
        assert!(!data.has_month(Month::Jun));
    }

    #[test]
    fn empty_object_is_empty_dataset() {
        let data = Dataset::from_json_str("{}").unwrap();
        assert!(data.is_empty());
        assert!(data.available_months().is_empty());
    }

    #[test]
    fn load_reads_fixture_file() {
        let data = Dataset::load(&fixture_data_path()).unwrap();
        assert_eq!(data.total_days(), 7);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let result = Dataset::load(&tmp.path().join("missing.json"));
        assert!(matches!(result, Err(DataError::Io { .. })));
    }

    #[test]
    fn load_invalid_json_is_json_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("data.json");
        fs::write(&path, "{ not json").unwrap();
        let err = Dataset::load(&path).unwrap_err();
        assert!(matches!(err, DataError::Json { .. }));
        assert!(err.to_string().contains("data.json"));
    }

    #[test]
    fn load_wrong_shape_is_json_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("data.json");
        fs::write(&path, r#"{ "feb": [1, 2, 3] }"#).unwrap();
        assert!(matches!(Dataset::load(&path), Err(DataError::Json { .. })));
    }
}
