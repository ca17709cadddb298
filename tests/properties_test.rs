// ABOUTME: Property-based tests for the decay model and score composition
// ABOUTME: Checks score bounds and monotone decay under arbitrary inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use caffscore_core::models::{BiologicalSex, UserProfile};
use caffscore_intelligence::composer::{compose_crash_risk, compose_focus, finalize_score};
use caffscore_intelligence::pharmacokinetics::{
    current_level, level_at, peak_level, personalized_half_life,
};
use caffscore_intelligence::{
    CrashRiskFactors, FocusFactors, ScoreRequest, ScoringConfig, ScoringEngine,
};
use chrono::Duration;
use common::{fixed_now, intake_minutes_ago};
use proptest::prelude::*;
use uuid::Uuid;

fn is_one_decimal(score: f64) -> bool {
    ((score * 10.0).round() - score * 10.0).abs() < 1e-6
}

fn sex_strategy() -> impl Strategy<Value = BiologicalSex> {
    prop_oneof![Just(BiologicalSex::Male), Just(BiologicalSex::Female)]
}

fn profile_strategy() -> impl Strategy<Value = UserProfile> {
    (
        30.0f64..150.0,
        16u32..90,
        sex_strategy(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        0.0f64..12.0,
        0.0f64..800.0,
    )
        .prop_map(
            |(weight, age, sex, smoker, pregnant, oc, sleep, mean_mg)| {
                UserProfile::new(Uuid::new_v4(), weight, age, sex)
                    .with_smoker(smoker)
                    .with_pregnant(pregnant)
                    .with_oral_contraceptives(oc)
                    .with_average_sleep_hours(sleep)
                    .with_mean_daily_caffeine_mg(mean_mg)
                    .with_created_at(fixed_now() - Duration::days(60))
            },
        )
}

proptest! {
    #[test]
    fn half_life_respects_floor(profile in profile_strategy()) {
        let half_life = personalized_half_life(&profile, &ScoringConfig::default());
        prop_assert!(half_life >= 2.0, "half-life {} below floor", half_life);
        prop_assert!(half_life.is_finite());
    }

    #[test]
    fn scores_stay_in_range_with_one_decimal(
        profile in profile_strategy(),
        doses in prop::collection::vec((0.0f64..400.0, 0i64..1_440), 0..6),
        sleep in prop::option::of(0.0f64..12.0),
    ) {
        let engine = ScoringEngine::new(ScoringConfig::default());
        let intakes = doses
            .iter()
            .map(|(mg, minutes)| intake_minutes_ago(*mg, *minutes))
            .collect();
        let mut request = ScoreRequest::for_profile(profile)
            .with_intakes(intakes)
            .at(fixed_now());
        request.last_night_sleep_hours = sleep;

        for result in [engine.focus_score(&request), engine.crash_risk_score(&request)] {
            prop_assert!((0.0..=100.0).contains(&result.score), "{:?}", result);
            prop_assert!(is_one_decimal(result.score), "{:?}", result);
            prop_assert!(result.current_level_mg <= result.peak_level_mg + 1e-9);
        }
    }

    #[test]
    fn levels_never_increase_after_last_intake(
        doses in prop::collection::vec((1.0f64..400.0, 0i64..600), 1..5),
        half_life in 2.0f64..12.0,
        step_minutes in 1i64..600,
    ) {
        let intakes: Vec<_> = doses
            .iter()
            .map(|(mg, minutes)| intake_minutes_ago(*mg, *minutes))
            .collect();
        let now = fixed_now();
        let later = now + Duration::minutes(step_minutes);

        let at_now = level_at(&intakes, half_life, now);
        let at_later = level_at(&intakes, half_life, later);
        prop_assert!(at_later < at_now);
        prop_assert!(peak_level(&intakes, half_life, now) >= current_level(&intakes, half_life, now));
    }

    #[test]
    fn empty_history_has_no_caffeine(half_life in 2.0f64..12.0) {
        prop_assert!(current_level(&[], half_life, fixed_now()).abs() < f64::EPSILON);
        prop_assert!(peak_level(&[], half_life, fixed_now()).abs() < f64::EPSILON);
    }

    #[test]
    fn composition_is_bounded_for_any_factors(
        a in any::<f64>(),
        b in any::<f64>(),
        c in any::<f64>(),
        d in any::<f64>(),
        e in any::<f64>(),
    ) {
        let focus = compose_focus(&FocusFactors {
            level: a,
            rising_rate: b,
            tolerance: c,
            capacity: d,
            activity: e,
        });
        let crash = compose_crash_risk(&CrashRiskFactors {
            delta: a,
            sleep_debt: b,
            tolerance: c,
            metabolic: d,
            circadian: e,
        });

        for score in [focus, crash] {
            prop_assert!((0.0..=100.0).contains(&score));
            prop_assert!(is_one_decimal(score));
        }
    }

    #[test]
    fn finalize_is_idempotent(raw in -1_000.0f64..1_000.0) {
        let once = finalize_score(raw);
        prop_assert!((finalize_score(once) - once).abs() < f64::EPSILON);
    }
}
