// Trending rank: stars gained per day since creation.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::github::Repository;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Whole days since `created`, rounded up, never less than one.
pub fn age_in_days(created: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    let secs = now.signed_duration_since(created).num_seconds();
    if secs <= 0 {
        return 1;
    }
    ((secs as f64 / SECONDS_PER_DAY).ceil() as u64).max(1)
}

/// Stars per day since creation; raw stars when the creation time is unknown.
pub fn activity_rate(repo: &Repository, now: DateTime<Utc>) -> f64 {
    match repo.created() {
        Some(created) => repo.stars as f64 / age_in_days(created, now) as f64,
        None => repo.stars as f64,
    }
}

/// Sort by descending activity rate. Ties keep their input order.
pub fn rank(mut repos: Vec<Repository>, now: DateTime<Utc>) -> Vec<Repository> {
    repos.sort_by(|a, b| {
        activity_rate(b, now)
            .partial_cmp(&activity_rate(a, now))
            .unwrap_or(Ordering::Equal)
    });
    repos
}

/// Human-readable rate, e.g. `42/day` or `1.5k/day`.
pub fn format_rate(rate: f64) -> String {
    if rate >= 1000.0 {
        format!("{:.1}k/day", rate / 1000.0)
    } else {
        format!("{}/day", rate.floor() as u64)
    }
}
