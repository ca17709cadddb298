// ABOUTME: Factor calculators shared by the focus and crash-risk scores
// ABOUTME: Health adjustment, tolerance, sleep debt, and circadian time-of-day lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use caffscore_core::constants::physiology::{sleep, tolerance};
use caffscore_core::models::UserProfile;
use chrono::{DateTime, Duration, Timelike, Utc};

use crate::config::ScoringConfig;

/// Product of the physiological sensitivity multipliers
///
/// Age (>=65 or <=18), female, smoker, pregnant, and oral contraceptives
/// (female and not pregnant). Multipliers compose.
#[must_use]
pub fn health_adjustment(profile: &UserProfile) -> f64 {
    let mut adjustment = 1.0;

    if profile.age_years >= tolerance::SENIOR_AGE_YEARS {
        adjustment *= tolerance::SENIOR_MULTIPLIER;
    } else if profile.age_years <= tolerance::ADOLESCENT_AGE_YEARS {
        adjustment *= tolerance::ADOLESCENT_MULTIPLIER;
    }
    if profile.is_female() {
        adjustment *= tolerance::FEMALE_MULTIPLIER;
    }
    if profile.smoker {
        adjustment *= tolerance::SMOKER_MULTIPLIER;
    }
    if profile.is_pregnant() {
        adjustment *= tolerance::PREGNANCY_MULTIPLIER;
    } else if profile.uses_oral_contraceptives() {
        adjustment *= tolerance::ORAL_CONTRACEPTIVE_MULTIPLIER;
    }

    adjustment
}

/// Experience multiplier from the 30-day mean daily intake
#[must_use]
pub fn experience_multiplier(mean_daily_mg: f64) -> f64 {
    if mean_daily_mg > tolerance::HEAVY_USER_MG {
        tolerance::HEAVY_USER_MULTIPLIER
    } else if mean_daily_mg < tolerance::LIGHT_USER_MG {
        tolerance::LIGHT_USER_MULTIPLIER
    } else {
        1.0
    }
}

/// Tolerance factor in [0.1, 1.0]
///
/// `base = meanDaily / (4 mg/kg × weight)`, scaled by health and experience
/// multipliers, then mapped through `0.7x + 0.3`.
#[must_use]
pub fn tolerance_factor(profile: &UserProfile) -> f64 {
    let mean_daily = profile.mean_daily_caffeine_mg.max(0.0);
    let habituation_dose = (tolerance::HABITUATION_MG_PER_KG * profile.weight_kg)
        .max(tolerance::MIN_THRESHOLD_MG);

    let base = mean_daily / habituation_dose;
    let adjusted = base * health_adjustment(profile) * experience_multiplier(mean_daily);

    adjusted
        .mul_add(tolerance::FACTOR_SLOPE, tolerance::FACTOR_OFFSET)
        .clamp(tolerance::FACTOR_MIN, 1.0)
}

/// Ideal nightly sleep for this user (hours)
///
/// The personal 7-day average is trusted once the account is at least a week
/// old and the average is positive; otherwise the configured baseline is used.
#[must_use]
pub fn ideal_sleep_hours(profile: &UserProfile, now: DateTime<Utc>, config: &ScoringConfig) -> f64 {
    let established =
        profile.account_age(now) >= Duration::days(sleep::PERSONAL_BASELINE_MIN_ACCOUNT_DAYS);

    if established && profile.average_sleep_hours > 0.0 {
        profile.average_sleep_hours
    } else {
        config.baseline_sleep_hours
    }
}

/// Sleep debt (hours, never negative)
#[must_use]
pub fn sleep_debt_hours(
    profile: &UserProfile,
    last_night_sleep_hours: f64,
    now: DateTime<Utc>,
    config: &ScoringConfig,
) -> f64 {
    (ideal_sleep_hours(profile, now, config) - last_night_sleep_hours).max(0.0)
}

/// Hour of day in the user's local time
#[must_use]
pub fn local_hour(now: DateTime<Utc>, utc_offset_minutes: i32) -> u32 {
    (now + Duration::minutes(i64::from(utc_offset_minutes))).hour()
}

/// Natural alertness for an hour of the day
///
/// | Hours | Factor |
/// |---|---|
/// | 09-11 | 1.0 |
/// | 13-15 | 0.9 |
/// | 15-18 | 0.8 |
/// | 06-09 | 0.7 |
/// | 11-13 | 0.7 |
/// | 18-22 | 0.6 |
/// | 22-06 | 0.4 |
#[must_use]
pub const fn circadian_factor(hour: u32) -> f64 {
    match hour {
        9..=10 => 1.0,
        13..=14 => 0.9,
        6..=8 => 0.7,
        15..=17 => 0.8,
        18..=21 => 0.6,
        22..=23 | 0..=5 => 0.4,
        _ => 0.7,
    }
}
