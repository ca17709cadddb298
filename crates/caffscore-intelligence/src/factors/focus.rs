// ABOUTME: Focus-side factor calculators: level, rising rate, capacity, and current activity
// ABOUTME: Piecewise-linear transforms that map raw caffeine signals into [0, 1]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use caffscore_core::constants::physiology::{absorption, tolerance};
use caffscore_core::models::{IntakeRecord, UserProfile};
use chrono::{DateTime, Duration, Utc};

use crate::config::ScoringConfig;
use crate::pharmacokinetics::{decay_fraction, hours_between, level_at};

/// Linear interpolation of `value` from `[x0, x1]` onto `[y0, y1]`
fn ramp(value: f64, x0: f64, x1: f64, y0: f64, y1: f64) -> f64 {
    let t = ((value - x0) / (x1 - x0)).clamp(0.0, 1.0);
    (y1 - y0).mul_add(t, y0)
}

/// Tolerance threshold used to normalize the current level (mg)
///
/// The user's mean daily intake, or the configured default when there is no
/// history. Never below 1 mg.
#[must_use]
pub fn tolerance_threshold_mg(profile: &UserProfile, config: &ScoringConfig) -> f64 {
    let threshold = if profile.mean_daily_caffeine_mg > 0.0 {
        profile.mean_daily_caffeine_mg
    } else {
        config.default_tolerance_threshold_mg
    };
    threshold.max(tolerance::MIN_THRESHOLD_MG)
}

/// Level factor: how close the current level is to the personal optimum
///
/// - up to 30% of threshold: 0 → 0.09 (too little to matter)
/// - 30%-125%: 0.1 → 1.0 (building to optimal)
/// - 125%-200%: 1.0 → 0.3 (past optimal, still productive)
/// - above 200%: 0.2 (overstimulated)
#[must_use]
pub fn level_factor(current_level_mg: f64, threshold_mg: f64) -> f64 {
    let ratio = current_level_mg.max(0.0) / threshold_mg.max(tolerance::MIN_THRESHOLD_MG);

    if ratio <= 0.3 {
        ramp(ratio, 0.0, 0.3, 0.0, 0.09)
    } else if ratio <= 1.25 {
        ramp(ratio, 0.3, 1.25, 0.1, 1.0)
    } else if ratio <= 2.0 {
        ramp(ratio, 1.25, 2.0, 1.0, 0.3)
    } else {
        0.2
    }
}

/// Average rate of change of the caffeine level over the last 20 minutes (mg/min)
#[must_use]
pub fn rising_rate_mg_per_min(
    intakes: &[IntakeRecord],
    half_life_hours: f64,
    now: DateTime<Utc>,
) -> f64 {
    let level_now = level_at(intakes, half_life_hours, now);
    let level_10 = level_at(intakes, half_life_hours, now - Duration::minutes(10));
    let level_20 = level_at(intakes, half_life_hours, now - Duration::minutes(20));

    let recent_slope = (level_now - level_10) / 10.0;
    let earlier_slope = (level_10 - level_20) / 10.0;

    (recent_slope + earlier_slope) / 2.0
}

/// Rising-rate factor from a slope in mg/min
///
/// - declining: 0.5 scaled down by the decline, floor 0.2
/// - 0-2 mg/min: 0.3 → 0.7
/// - 2-5 mg/min: 0.7 → 1.0 (optimal build-up)
/// - above 5 mg/min: 0.4 decaying toward 0.1 (overstimulation)
#[must_use]
pub fn rising_rate_factor(rate_mg_per_min: f64) -> f64 {
    if rate_mg_per_min < 0.0 {
        rate_mg_per_min.mul_add(0.1, 0.5).max(0.2)
    } else if rate_mg_per_min < 2.0 {
        ramp(rate_mg_per_min, 0.0, 2.0, 0.3, 0.7)
    } else if rate_mg_per_min <= 5.0 {
        ramp(rate_mg_per_min, 2.0, 5.0, 0.7, 1.0)
    } else {
        (rate_mg_per_min - 5.0).mul_add(-0.05, 0.4).max(0.1)
    }
}

/// Age band used by the focus-capacity factor
#[must_use]
pub const fn age_focus_factor(age_years: u32) -> f64 {
    if age_years < 25 {
        0.9
    } else if age_years > 60 {
        0.8
    } else {
        1.0
    }
}

/// Focus capacity in [0.1, 1.0]
///
/// Weighted blend of sleep (0.6), circadian (0.3), and age (0.1).
#[must_use]
pub fn focus_capacity_factor(sleep_debt_hours: f64, circadian: f64, age_years: u32) -> f64 {
    let sleep_focus = sleep_debt_hours.mul_add(-0.8, 1.0).max(0.0);
    let circadian_focus = circadian.mul_add(-0.4, 1.0);
    let age_focus = age_focus_factor(age_years);

    0.1f64
        .mul_add(age_focus, 0.6f64.mul_add(sleep_focus, 0.3 * circadian_focus))
        .clamp(0.1, 1.0)
}

/// Absorption-phase multiplier for a drink started `elapsed_minutes` ago
///
/// - under 15 min: 0.3 → 0.7
/// - 15-60 min: 0.7 → 1.0
/// - 60 min and later: 1.0
#[must_use]
pub fn absorption_multiplier(elapsed_minutes: f64) -> f64 {
    if elapsed_minutes < absorption::EARLY_PHASE_MINUTES {
        ramp(
            elapsed_minutes,
            0.0,
            absorption::EARLY_PHASE_MINUTES,
            0.3,
            0.7,
        )
    } else if elapsed_minutes < absorption::FULL_EFFECT_MINUTES {
        ramp(
            elapsed_minutes,
            absorption::EARLY_PHASE_MINUTES,
            absorption::FULL_EFFECT_MINUTES,
            0.7,
            1.0,
        )
    } else {
        1.0
    }
}

/// Current activity in [0, 1]: absorbed, not-yet-eliminated caffeine relative to the reference dose
#[must_use]
pub fn current_activity_factor(
    intakes: &[IntakeRecord],
    half_life_hours: f64,
    now: DateTime<Utc>,
    config: &ScoringConfig,
) -> f64 {
    let active_mg: f64 = intakes
        .iter()
        .filter_map(|intake| {
            let elapsed_hours = hours_between(intake.timestamp, now);
            (elapsed_hours >= 0.0).then(|| {
                intake.consumed_mg()
                    * decay_fraction(elapsed_hours, half_life_hours)
                    * absorption_multiplier(elapsed_hours * 60.0)
            })
        })
        .fold(0.0, |total, mg| total + mg);

    (active_mg / config.activity_reference_dose_mg).clamp(0.0, 1.0)
}
