// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging, a pinned clock, reference profiles, and intake builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `caffscore`

use caffscore_core::models::{BiologicalSex, IntakeRecord, UserProfile};
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::env;
use std::sync::Once;
use tracing::Level;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; tests stay quiet by default
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Pinned evaluation instant: 10:00 UTC, a peak-alertness hour
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 4, 10, 0, 0).unwrap()
}

/// 70 kg, 30 year old male whose account is a month old
pub fn male_profile() -> UserProfile {
    UserProfile::new(Uuid::new_v4(), 70.0, 30, BiologicalSex::Male)
        .with_created_at(fixed_now() - Duration::days(30))
}

/// 60 kg, 28 year old female whose account is a month old
pub fn female_profile() -> UserProfile {
    UserProfile::new(Uuid::new_v4(), 60.0, 28, BiologicalSex::Female)
        .with_created_at(fixed_now() - Duration::days(30))
}

/// Fully consumed intake dated `hours` before [`fixed_now`]
pub fn intake_hours_ago(caffeine_mg: f64, hours: f64) -> IntakeRecord {
    let offset = Duration::milliseconds((hours * 3_600_000.0) as i64);
    IntakeRecord::new("Coffee", caffeine_mg, fixed_now() - offset)
}

/// Fully consumed intake dated `minutes` before [`fixed_now`]
pub fn intake_minutes_ago(caffeine_mg: f64, minutes: i64) -> IntakeRecord {
    IntakeRecord::new("Espresso", caffeine_mg, fixed_now() - Duration::minutes(minutes))
}

/// Assert two floats agree within `tolerance`
pub fn assert_approx(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}
