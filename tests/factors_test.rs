// ABOUTME: Integration tests for focus and crash-risk factor calculators
// ABOUTME: Checks every band boundary and the documented output ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use caffscore_core::models::{BiologicalSex, UserProfile};
use caffscore_intelligence::factors::crash::{
    circadian_risk_factor, delta_factor, metabolic_factor, sleep_debt_risk_factor,
    tolerance_sensitivity_factor,
};
use caffscore_intelligence::factors::focus::{
    absorption_multiplier, current_activity_factor, focus_capacity_factor, level_factor,
    rising_rate_factor, rising_rate_mg_per_min, tolerance_threshold_mg,
};
use caffscore_intelligence::factors::shared::{experience_multiplier, ideal_sleep_hours};
use caffscore_intelligence::factors::{
    circadian_factor, health_adjustment, local_hour, sleep_debt_hours, tolerance_factor,
};
use caffscore_intelligence::ScoringConfig;
use chrono::Duration;
use common::{
    assert_approx, female_profile, fixed_now, intake_hours_ago, intake_minutes_ago, male_profile,
};
use uuid::Uuid;

const EPS: f64 = 1e-9;

// ============================================================================
// Level and rising rate
// ============================================================================

#[test]
fn test_level_factor_bands() {
    assert_approx(level_factor(0.0, 200.0), 0.0, EPS);
    assert_approx(level_factor(60.0, 200.0), 0.09, EPS);
    assert_approx(level_factor(100.0, 200.0), 0.1 + 0.9 * (0.2 / 0.95), EPS);
    assert_approx(level_factor(250.0, 200.0), 1.0, EPS);
    assert_approx(level_factor(400.0, 200.0), 0.3, EPS);
    assert_approx(level_factor(600.0, 200.0), 0.2, EPS);
}

#[test]
fn test_tolerance_threshold_defaults_and_floor() {
    let config = ScoringConfig::default();
    assert_approx(tolerance_threshold_mg(&male_profile(), &config), 200.0, EPS);

    let habitual = male_profile().with_mean_daily_caffeine_mg(320.0);
    assert_approx(tolerance_threshold_mg(&habitual, &config), 320.0, EPS);

    let tiny = male_profile().with_mean_daily_caffeine_mg(0.2);
    assert_approx(tolerance_threshold_mg(&tiny, &config), 1.0, EPS);
}

#[test]
fn test_rising_rate_factor_bands() {
    assert_approx(rising_rate_factor(-1.0), 0.4, EPS);
    assert_approx(rising_rate_factor(-10.0), 0.2, EPS);
    assert_approx(rising_rate_factor(0.0), 0.3, EPS);
    assert_approx(rising_rate_factor(1.0), 0.5, EPS);
    assert_approx(rising_rate_factor(3.5), 0.85, EPS);
    assert_approx(rising_rate_factor(5.0), 1.0, EPS);
    assert_approx(rising_rate_factor(6.0), 0.35, EPS);
    assert_approx(rising_rate_factor(20.0), 0.1, EPS);
}

#[test]
fn test_rising_rate_sign_follows_the_curve() {
    let now = fixed_now();
    let settled = [intake_hours_ago(200.0, 2.0)];
    assert!(rising_rate_mg_per_min(&settled, 5.0, now) < 0.0);

    let fresh = [intake_minutes_ago(150.0, 5)];
    assert!(rising_rate_mg_per_min(&fresh, 5.0, now) > 0.0);

    assert_approx(rising_rate_mg_per_min(&[], 5.0, now), 0.0, EPS);
}

// ============================================================================
// Tolerance and health
// ============================================================================

#[test]
fn test_tolerance_factor_without_history_sits_at_offset() {
    assert_approx(tolerance_factor(&male_profile()), 0.3, EPS);
}

#[test]
fn test_tolerance_factor_scales_with_habituation() {
    let saturated = male_profile().with_mean_daily_caffeine_mg(280.0);
    assert_approx(tolerance_factor(&saturated), 1.0, EPS);

    let female = female_profile().with_mean_daily_caffeine_mg(120.0);
    assert_approx(tolerance_factor(&female), 0.7 * 0.45 + 0.3, EPS);

    let light = UserProfile::new(Uuid::new_v4(), 100.0, 30, BiologicalSex::Male)
        .with_mean_daily_caffeine_mg(40.0);
    assert_approx(tolerance_factor(&light), 0.7 * 0.07 + 0.3, EPS);

    let heavy = male_profile().with_mean_daily_caffeine_mg(900.0);
    assert_approx(tolerance_factor(&heavy), 1.0, EPS);
}

#[test]
fn test_experience_multiplier_bands() {
    assert_approx(experience_multiplier(20.0), 0.7, EPS);
    assert_approx(experience_multiplier(200.0), 1.0, EPS);
    assert_approx(experience_multiplier(450.0), 1.2, EPS);
}

#[test]
fn test_health_adjustment_composes_multipliers() {
    let id = Uuid::new_v4();
    let senior_smoker = UserProfile::new(id, 60.0, 70, BiologicalSex::Female).with_smoker(true);
    assert_approx(health_adjustment(&senior_smoker), 0.8 * 0.9 * 1.5, EPS);

    let pregnant = female_profile()
        .with_pregnant(true)
        .with_oral_contraceptives(true);
    assert_approx(health_adjustment(&pregnant), 0.9 * 0.4, EPS);

    let contraceptive = female_profile().with_oral_contraceptives(true);
    assert_approx(health_adjustment(&contraceptive), 0.9 * 0.85, EPS);

    let adolescent = UserProfile::new(id, 60.0, 17, BiologicalSex::Male);
    assert_approx(health_adjustment(&adolescent), 1.1, EPS);
}

// ============================================================================
// Sleep and circadian
// ============================================================================

#[test]
fn test_sleep_debt_uses_personal_average_for_established_accounts() {
    let config = ScoringConfig::default();
    let now = fixed_now();
    let profile = male_profile().with_average_sleep_hours(8.0);

    assert_approx(ideal_sleep_hours(&profile, now, &config), 8.0, EPS);
    assert_approx(sleep_debt_hours(&profile, 6.0, now, &config), 2.0, EPS);
    assert_approx(sleep_debt_hours(&profile, 9.0, now, &config), 0.0, EPS);
}

#[test]
fn test_sleep_debt_uses_baseline_for_new_accounts() {
    let config = ScoringConfig::default();
    let now = fixed_now();
    let profile = male_profile()
        .with_average_sleep_hours(8.0)
        .with_created_at(now - Duration::days(3));

    assert_approx(ideal_sleep_hours(&profile, now, &config), 7.5, EPS);
    assert_approx(sleep_debt_hours(&profile, 6.0, now, &config), 1.5, EPS);
}

#[test]
fn test_sleep_debt_falls_back_when_average_missing() {
    let config = ScoringConfig::default();
    let profile = male_profile();
    assert_approx(ideal_sleep_hours(&profile, fixed_now(), &config), 7.5, EPS);
}

#[test]
fn test_circadian_table() {
    let expected = [
        (0, 0.4),
        (5, 0.4),
        (6, 0.7),
        (8, 0.7),
        (9, 1.0),
        (10, 1.0),
        (11, 0.7),
        (12, 0.7),
        (13, 0.9),
        (14, 0.9),
        (15, 0.8),
        (17, 0.8),
        (18, 0.6),
        (21, 0.6),
        (22, 0.4),
        (23, 0.4),
    ];
    for (hour, factor) in expected {
        assert_approx(circadian_factor(hour), factor, EPS);
    }
}

#[test]
fn test_local_hour_applies_offset() {
    let now = fixed_now();
    assert_eq!(local_hour(now, 0), 10);
    assert_eq!(local_hour(now, -300), 5);
    assert_eq!(local_hour(now, 90), 11);
    assert_eq!(local_hour(now, 15 * 60), 1);
}

#[test]
fn test_focus_capacity_blend() {
    assert_approx(focus_capacity_factor(0.0, 1.0, 30), 0.88, EPS);
    assert_approx(
        focus_capacity_factor(2.0, 0.4, 20),
        0.3 * 0.84 + 0.1 * 0.9,
        EPS,
    );
    assert_approx(
        focus_capacity_factor(0.0, 0.4, 70),
        0.6 + 0.3 * 0.84 + 0.08,
        EPS,
    );
}

// ============================================================================
// Absorption and activity
// ============================================================================

#[test]
fn test_absorption_multiplier_phases() {
    assert_approx(absorption_multiplier(0.0), 0.3, EPS);
    assert_approx(absorption_multiplier(7.5), 0.5, EPS);
    assert_approx(absorption_multiplier(15.0), 0.7, EPS);
    assert_approx(absorption_multiplier(37.5), 0.85, EPS);
    assert_approx(absorption_multiplier(60.0), 1.0, EPS);
    assert_approx(absorption_multiplier(240.0), 1.0, EPS);
}

#[test]
fn test_current_activity_combines_decay_and_absorption() {
    let config = ScoringConfig::default();
    let now = fixed_now();
    let intakes = [intake_minutes_ago(100.0, 30)];

    let expected = 100.0 * 0.5_f64.powf(0.5 / 5.0) * 0.8 / 200.0;
    assert_approx(
        current_activity_factor(&intakes, 5.0, now, &config),
        expected,
        1e-9,
    );
}

#[test]
fn test_current_activity_saturates_and_skips_future() {
    let config = ScoringConfig::default();
    let now = fixed_now();

    let big = [intake_hours_ago(800.0, 1.0)];
    assert_approx(current_activity_factor(&big, 5.0, now, &config), 1.0, EPS);

    let future = [intake_hours_ago(100.0, -1.0)];
    assert_approx(current_activity_factor(&future, 5.0, now, &config), 0.0, EPS);
}

// ============================================================================
// Crash-risk factors
// ============================================================================

#[test]
fn test_delta_factor() {
    assert_approx(delta_factor(50.0, 100.0), 0.5, EPS);
    assert_approx(delta_factor(0.0, 0.0), 0.0, EPS);
    assert_approx(delta_factor(150.0, 100.0), 0.0, EPS);
    assert_approx(delta_factor(0.0, 100.0), 1.0, EPS);
}

#[test]
fn test_sleep_debt_risk_saturates_at_four_hours() {
    assert_approx(sleep_debt_risk_factor(0.0), 0.3, EPS);
    assert_approx(sleep_debt_risk_factor(2.0), 0.65, EPS);
    assert_approx(sleep_debt_risk_factor(4.0), 1.0, EPS);
    assert_approx(sleep_debt_risk_factor(10.0), 1.0, EPS);
}

#[test]
fn test_crash_modifiers_stay_in_range() {
    assert_approx(tolerance_sensitivity_factor(0.3), 0.85, EPS);
    assert_approx(tolerance_sensitivity_factor(1.0), 0.5, EPS);

    assert_approx(metabolic_factor(0.36), 0.8, EPS);
    assert_approx(metabolic_factor(1.08), 1.08, EPS);
    assert_approx(metabolic_factor(1.5), 1.2, EPS);

    assert_approx(circadian_risk_factor(1.0), 0.4, EPS);
    assert_approx(circadian_risk_factor(0.7), 0.7, EPS);
    assert_approx(circadian_risk_factor(0.4), 1.0, EPS);
}
