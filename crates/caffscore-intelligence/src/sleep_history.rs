// ABOUTME: Derives last night's sleep, rolling sleep averages, and mean daily caffeine from history
// ABOUTME: Helpers hosts use to refresh profile snapshots before calling the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use caffscore_core::constants::physiology::sleep;
use caffscore_core::constants::validation;
use caffscore_core::models::{IntakeRecord, SleepSample};
use chrono::{DateTime, Duration, Utc};

fn is_plausible(sample: &SleepSample) -> bool {
    sample.hours_slept.is_finite() && (0.0..=validation::MAX_SLEEP_HOURS).contains(&sample.hours_slept)
}

/// Hours slept in the most recent night, if one was logged in the last 36 hours
#[must_use]
pub fn last_night_sleep_hours(samples: &[SleepSample], now: DateTime<Utc>) -> Option<f64> {
    let cutoff = now - Duration::hours(sleep::LAST_NIGHT_LOOKBACK_HOURS);

    samples
        .iter()
        .filter(|s| is_plausible(s) && s.date > cutoff && s.date <= now)
        .max_by_key(|s| s.date)
        .map(|s| s.hours_slept)
}

/// Mean hours slept over the `days` leading up to `now`
#[must_use]
pub fn rolling_average_sleep(
    samples: &[SleepSample],
    now: DateTime<Utc>,
    days: i64,
) -> Option<f64> {
    let cutoff = now - Duration::days(days);
    let window: Vec<f64> = samples
        .iter()
        .filter(|s| is_plausible(s) && s.date > cutoff && s.date <= now)
        .map(|s| s.hours_slept)
        .collect();

    if window.is_empty() {
        return None;
    }
    Some(window.iter().sum::<f64>() / window.len() as f64)
}

/// Mean daily caffeine consumed over the `days` leading up to `now` (mg/day)
///
/// Callers should pass intakes that already went through the validation gate.
#[must_use]
pub fn mean_daily_caffeine(intakes: &[IntakeRecord], now: DateTime<Utc>, days: i64) -> f64 {
    if days <= 0 {
        return 0.0;
    }
    let cutoff = now - Duration::days(days);
    let total: f64 = intakes
        .iter()
        .filter(|i| i.timestamp > cutoff && i.timestamp <= now)
        .map(IntakeRecord::consumed_mg)
        .fold(0.0, |sum, mg| sum + mg);

    total / days as f64
}

/// Whole days of history an account can have at `now`, capped at `max_days`
///
/// A partial day counts as one, so a brand-new account covers one day. Use
/// this as the divisor for [`mean_daily_caffeine`] so young accounts are not
/// averaged over days they did not exist.
#[must_use]
pub fn covered_days(created_at: DateTime<Utc>, now: DateTime<Utc>, max_days: i64) -> i64 {
    let max_days = max_days.max(1);
    let age = now - created_at;
    let whole_days = age.num_days();
    let days = if age > Duration::days(whole_days) {
        whole_days.saturating_add(1)
    } else {
        whole_days
    };

    days.clamp(1, max_days)
}
