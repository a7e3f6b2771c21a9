//! Month and day key conventions used by the data file.
//!
//! The dataset indexes devotionals by two string keys:
//!
//! - **Month keys** are lowercase three-letter abbreviations: `jan` … `dec`.
//! - **Day keys** are the fixed prefix `day` followed by the day of the month:
//!   `day1`, `day14`, `day31`.
//!
//! This module is the single place those conventions are parsed, so the data
//! layer, the route resolvers and the renderers agree on what a valid key is.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix shared by every day key in the data file.
pub const DAY_KEY_PREFIX: &str = "day";

/// A calendar month. Ordering follows the calendar, so sorted collections of
/// months list January first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Parse a month key. Case-insensitive: `"Feb"` and `"FEB"` both resolve.
    pub fn from_key(key: &str) -> Option<Month> {
        let lower = key.to_ascii_lowercase();
        Month::ALL.into_iter().find(|m| m.key() == lower)
    }

    /// Month for a calendar date.
    pub fn from_date(date: NaiveDate) -> Month {
        // month0 is zero-based
        Month::ALL[date.month0() as usize]
    }

    /// The key used in the data file and in URLs.
    pub fn key(self) -> &'static str {
        match self {
            Month::Jan => "jan",
            Month::Feb => "feb",
            Month::Mar => "mar",
            Month::Apr => "apr",
            Month::May => "may",
            Month::Jun => "jun",
            Month::Jul => "jul",
            Month::Aug => "aug",
            Month::Sep => "sep",
            Month::Oct => "oct",
            Month::Nov => "nov",
            Month::Dec => "dec",
        }
    }

    /// Short label used on month tabs (`"Feb"`).
    pub fn display_name(self) -> String {
        capitalize(self.key())
    }

    /// Full English month name (`"February"`).
    pub fn full_name(self) -> &'static str {
        match self {
            Month::Jan => "January",
            Month::Feb => "February",
            Month::Mar => "March",
            Month::Apr => "April",
            Month::May => "May",
            Month::Jun => "June",
            Month::Jul => "July",
            Month::Aug => "August",
            Month::Sep => "September",
            Month::Oct => "October",
            Month::Nov => "November",
            Month::Dec => "December",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Parse a day key following the `dayN` convention.
///
/// - `"day1"` → `Some(1)`
/// - `"day28"` → `Some(28)`
/// - `"day"`, `"day0"`, `"dayone"`, `"1"`, `"Day1"` → `None`
/// - `"day031"` → `None` (one key per day, so `day31` is the only spelling)
pub fn parse_day_key(key: &str) -> Option<u32> {
    let suffix = key.strip_prefix(DAY_KEY_PREFIX)?;
    if suffix.is_empty()
        || suffix.starts_with('0')
        || !suffix.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    suffix.parse::<u32>().ok()
}

/// Build the data-file key for a day of the month.
pub fn day_key(day: u32) -> String {
    format!("{DAY_KEY_PREFIX}{day}")
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_from_key_is_case_insensitive() {
        assert_eq!(Month::from_key("feb"), Some(Month::Feb));
        assert_eq!(Month::from_key("Feb"), Some(Month::Feb));
        assert_eq!(Month::from_key("DEC"), Some(Month::Dec));
    }

    #[test]
    fn month_from_key_rejects_full_names_and_garbage() {
        assert_eq!(Month::from_key("february"), None);
        assert_eq!(Month::from_key(""), None);
        assert_eq!(Month::from_key("fe"), None);
        assert_eq!(Month::from_key("notes"), None);
    }

    #[test]
    fn month_keys_round_trip() {
        for month in Month::ALL {
            assert_eq!(Month::from_key(month.key()), Some(month));
        }
    }

    #[test]
    fn month_from_date() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 14).unwrap();
        assert_eq!(Month::from_date(date), Month::Feb);
        let date = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
        assert_eq!(Month::from_date(date), Month::Dec);
    }

    #[test]
    fn months_sort_in_calendar_order() {
        let mut months = vec![Month::Mar, Month::Jan, Month::Dec, Month::Feb];
        months.sort();
        assert_eq!(months, vec![Month::Jan, Month::Feb, Month::Mar, Month::Dec]);
    }

    #[test]
    fn month_names() {
        assert_eq!(Month::Feb.display_name(), "Feb");
        assert_eq!(Month::Sep.full_name(), "September");
        assert_eq!(Month::Apr.to_string(), "apr");
    }

    #[test]
    fn parse_valid_day_keys() {
        assert_eq!(parse_day_key("day1"), Some(1));
        assert_eq!(parse_day_key("day28"), Some(28));
    }

    #[test]
    fn parse_invalid_day_keys() {
        assert_eq!(parse_day_key("day"), None);
        assert_eq!(parse_day_key("day0"), None);
        assert_eq!(parse_day_key("day031"), None);
        assert_eq!(parse_day_key("day00"), None);
        assert_eq!(parse_day_key("dayone"), None);
        assert_eq!(parse_day_key("day-1"), None);
        assert_eq!(parse_day_key("day+1"), None);
        assert_eq!(parse_day_key("1"), None);
        assert_eq!(parse_day_key("Day1"), None);
        assert_eq!(parse_day_key("title"), None);
    }

    #[test]
    fn day_key_format() {
        assert_eq!(day_key(7), "day7");
        assert_eq!(parse_day_key(&day_key(19)), Some(19));
    }

    #[test]
    fn capitalize_words() {
        assert_eq!(capitalize("feb"), "Feb");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("a"), "A");
    }
}
