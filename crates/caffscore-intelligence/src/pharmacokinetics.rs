// ABOUTME: First-order caffeine elimination model with a personalized half-life
// ABOUTME: Computes instantaneous and historical-peak caffeine levels from a dose history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Caffeine Decay Model
//!
//! Each intake is treated as an instantaneous bolus that decays with
//! first-order kinetics: `level(t) = dose × 0.5^(t / t½)`. Levels from
//! separate intakes superpose linearly.
//!
//! # Scientific References
//!
//! - Institute of Medicine (2001). Pharmacology of Caffeine. In *Caffeine for the
//!   Sustainment of Mental Task Performance*. <https://www.ncbi.nlm.nih.gov/books/NBK223808/>
//! - Nehlig, A. (2018). Interindividual Differences in Caffeine Metabolism and Factors Driving
//!   Caffeine Consumption. *Pharmacological Reviews*, 70(2), 384-411.

use caffscore_core::constants::physiology::half_life;
use caffscore_core::models::{IntakeRecord, UserProfile};
use chrono::{DateTime, Utc};

use crate::config::ScoringConfig;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Hours elapsed from `from` to `to` (negative when `from` is later)
#[must_use]
pub fn hours_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / 1000.0 / SECONDS_PER_HOUR
}

/// Remaining fraction of a dose after `elapsed_hours`
#[must_use]
pub fn decay_fraction(elapsed_hours: f64, half_life_hours: f64) -> f64 {
    0.5_f64.powf(elapsed_hours / half_life_hours)
}

/// Personalized elimination half-life (hours)
///
/// Starts from the configured baseline and applies every matching
/// multiplier: age over 65, age 40-65, smoking, oral contraceptives, and
/// pregnancy. Pregnancy and oral contraceptives compound when both are set.
/// The result never drops below the configured floor.
#[must_use]
pub fn personalized_half_life(profile: &UserProfile, config: &ScoringConfig) -> f64 {
    let mut hours = config.baseline_half_life_hours;

    if profile.age_years > half_life::SENIOR_AGE_YEARS {
        hours *= half_life::SENIOR_MULTIPLIER;
    } else if profile.age_years >= half_life::MIDDLE_AGE_YEARS {
        hours *= half_life::MIDDLE_AGE_MULTIPLIER;
    }

    if profile.smoker {
        hours *= half_life::SMOKER_MULTIPLIER;
    }

    // Both apply when both flags are set
    if profile.uses_oral_contraceptives() {
        hours *= half_life::ORAL_CONTRACEPTIVE_MULTIPLIER;
    }
    if profile.is_pregnant() {
        hours *= half_life::PREGNANCY_MULTIPLIER;
    }

    hours.max(config.min_half_life_hours)
}

/// Caffeine in the body at `at` (mg)
///
/// Intakes dated after `at` contribute nothing. An empty history is
/// exactly `0.0`; `Iterator::sum` for floats starts from `-0.0`.
#[must_use]
pub fn level_at(intakes: &[IntakeRecord], half_life_hours: f64, at: DateTime<Utc>) -> f64 {
    intakes
        .iter()
        .filter_map(|intake| {
            let elapsed = hours_between(intake.timestamp, at);
            (elapsed >= 0.0)
                .then(|| intake.consumed_mg() * decay_fraction(elapsed, half_life_hours))
        })
        .fold(0.0, |total, mg| total + mg)
}

/// Current caffeine level (mg)
#[must_use]
pub fn current_level(intakes: &[IntakeRecord], half_life_hours: f64, now: DateTime<Utc>) -> f64 {
    level_at(intakes, half_life_hours, now)
}

/// Historical peak caffeine level (mg)
///
/// Evaluates the whole history at each intake's own timestamp and keeps the
/// maximum. Intakes dated after `now` are not candidates.
#[must_use]
pub fn peak_level(intakes: &[IntakeRecord], half_life_hours: f64, now: DateTime<Utc>) -> f64 {
    intakes
        .iter()
        .filter(|intake| intake.timestamp <= now)
        .map(|intake| level_at(intakes, half_life_hours, intake.timestamp))
        .fold(0.0, f64::max)
}
