//! Route resolution: which entry (if any) a URL shows.
//!
//! Every route boils down to a short, deterministic lookup chain over the
//! [`Dataset`]. There are no retries and no partial failures: a chain either
//! yields an entry, a redirect target, or nothing (rendered as not-found).
//!
//! ## `/today` fallback chain
//!
//! ```text
//! current month has today's day      → that entry
//! current month has any day          → its first available day
//! fallback month has today's day     → that entry
//! fallback month has any day         → its first available day
//! otherwise                          → redirect /{fallback}/day/1
//! ```

use crate::calendar::Month;
use crate::data::Dataset;
use crate::types::{Entry, day_path};
use chrono::{Datelike, NaiveDate};

/// Outcome of the `/today` chain.
#[derive(Debug, Clone, PartialEq)]
pub enum TodayResolution<'a> {
    Found(Entry<'a>),
    Redirect(String),
}

/// What the home page shows.
#[derive(Debug, Clone, PartialEq)]
pub enum HomeView<'a> {
    /// The dataset has no available months.
    Empty,
    /// `?month=` named an available month other than the first one.
    MonthList(Month),
    /// Today's entry, or the first entry of the first available month.
    Reader(Entry<'a>),
}

pub fn resolve_today(data: &Dataset, date: NaiveDate, fallback: Month) -> TodayResolution<'_> {
    let day = date.day();
    let current = Month::from_date(date);

    let found = if data.has_month(current) {
        data.get(current, day)
            .or_else(|| data.first_available_day(current))
    } else {
        data.get(fallback, day)
            .or_else(|| data.first_available_day(fallback))
    };

    match found {
        Some(entry) => TodayResolution::Found(entry),
        None => TodayResolution::Redirect(day_path(fallback, 1)),
    }
}

/// `/{month}/today`: the requested month at today's day, with no fallback.
pub fn resolve_month_today<'a>(
    data: &'a Dataset,
    month_key: &str,
    date: NaiveDate,
) -> Option<Entry<'a>> {
    data.get_devotional(month_key, date.day())
}

/// `/{month}/day/{number}`: `number` must be a positive decimal integer.
pub fn resolve_day<'a>(data: &'a Dataset, month_key: &str, number: &str) -> Option<Entry<'a>> {
    let day = parse_day_number(number)?;
    data.get_devotional(month_key, day)
}

/// `/{month}`: only months with at least one available day.
pub fn resolve_month(data: &Dataset, month_key: &str) -> Option<Month> {
    Month::from_key(month_key).filter(|&m| data.has_month(m))
}

pub fn resolve_home<'a>(
    data: &'a Dataset,
    month_query: Option<&str>,
    date: NaiveDate,
) -> HomeView<'a> {
    let months = data.available_months();
    let Some(&first_month) = months.first() else {
        return HomeView::Empty;
    };

    if let Some(month) = month_query.and_then(|key| resolve_month(data, key)) {
        if month != first_month {
            return HomeView::MonthList(month);
        }
    }

    match data
        .today_devotional(date)
        .or_else(|| data.first_available_day(first_month))
    {
        Some(entry) => HomeView::Reader(entry),
        None => HomeView::Empty,
    }
}

/// Previous and next available days around `current` in an ascending list.
///
/// `current` need not itself be in `days`.
pub fn adjacent_days(days: &[u32], current: u32) -> (Option<u32>, Option<u32>) {
    let prev = days.iter().copied().filter(|&d| d < current).max();
    let next = days.iter().copied().filter(|&d| d > current).min();
    (prev, next)
}

fn parse_day_number(number: &str) -> Option<u32> {
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    number.parse::<u32>().ok().filter(|&n| n > 0)
}
