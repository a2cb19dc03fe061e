//! Smart weekly streak.
//!
//! Counts consecutive week buckets, newest first, whose session count meets
//! the weekly goal. The bucket containing "now" is the in-progress week: if it
//! has not met the goal yet it neither counts nor breaks the streak.
//!
//! Only weeks that appear in the log are walked. A week with no sessions at
//! all is absent from the buckets and therefore does not break the streak.

use chrono::NaiveDateTime;

use super::week::{bucket_weeks, week_key};

/// Compute the current streak.
///
/// Pure in its inputs: `now` always comes from the caller. Weeks are walked
/// in numeric `(year, week)` order, not by comparing the rendered keys as
/// strings, so `2024-W10` is newer than `2024-W9`.
pub fn compute_streak(activity_log: &[NaiveDateTime], weekly_goal: u32, now: NaiveDateTime) -> u32 {
    if activity_log.is_empty() {
        return 0;
    }

    let buckets = bucket_weeks(activity_log);
    let now_key = week_key(now);
    let mut streak = 0;

    // BTreeMap iterates ascending by (year, week); walk newest first.
    for (key, count) in buckets.iter().rev() {
        if *count >= weekly_goal {
            streak += 1;
        } else if *key == now_key {
            tracing::debug!(week = %key, count, weekly_goal, "Current week still in progress");
        } else {
            tracing::debug!(week = %key, count, weekly_goal, "Streak broken");
            break;
        }
    }

    streak
}
