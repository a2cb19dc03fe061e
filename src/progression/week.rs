//! Week bucketing for activity timestamps.
//!
//! Week numbers are NOT ISO-8601 weeks. The number is
//! `ceil((weekday_from_sunday + 1 + whole_days_since_jan_1) / 7)`, which can
//! place a Saturday in a later week than the following Sunday and runs up to
//! week 53. Streaks depend on this exact bucketing.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, NaiveDateTime};

/// Week identifier, rendered as `"{year}-W{week}"`.
///
/// Ordering is numeric on `(year, week)`, so `2024-W10` sorts after `2024-W9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekKey {
    pub year: i32,
    pub week: u32,
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{}", self.year, self.week)
    }
}

/// Map a wall clock timestamp to its week bucket.
pub fn week_key(timestamp: NaiveDateTime) -> WeekKey {
    let year = timestamp.year();
    // Whole 24h periods since Jan 1 00:00 on a wall clock is the day ordinal
    let days_since_jan1 = timestamp.ordinal0();
    let dow = timestamp.weekday().num_days_from_sunday();

    // Integer ceil of (dow + 1 + days) / 7
    let week = (dow + 1 + days_since_jan1 + 6) / 7;

    WeekKey { year, week }
}

/// Count sessions per week bucket.
pub fn bucket_weeks(activity_log: &[NaiveDateTime]) -> BTreeMap<WeekKey, u32> {
    let mut buckets = BTreeMap::new();
    for timestamp in activity_log {
        *buckets.entry(week_key(*timestamp)).or_insert(0) += 1;
    }
    buckets
}
