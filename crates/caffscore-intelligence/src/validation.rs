// ABOUTME: Validation gate that silently drops malformed intake records before scoring
// ABOUTME: Range checks on caffeine, consumed amount, completion, duration, and timestamp
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intake Validation Gate
//!
//! Malformed records are dropped, not surfaced as errors. Each drop is
//! logged at `debug` with the record id and reason so it can be diagnosed
//! without affecting the score.

use caffscore_core::constants::validation;
use caffscore_core::models::IntakeRecord;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::config::ScoringConfig;

/// Why an intake record was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntakeRejection {
    /// Declared caffeine outside [0, 1000] mg or not a number
    #[error("declared caffeine outside [0, 1000] mg")]
    CaffeineOutOfRange,
    /// Consumed caffeine outside [0, 1000] mg or not a number
    #[error("consumed caffeine outside [0, 1000] mg")]
    ConsumedOutOfRange,
    /// Completion outside [0, 100] percent or not a number
    #[error("completion outside [0, 100] percent")]
    CompletionOutOfRange,
    /// Negative or non-finite drinking duration
    #[error("drink duration is negative or not a number")]
    InvalidDuration,
    /// Timestamp before the Unix epoch or too far in the future
    #[error("timestamp is not a plausible instant")]
    InvalidTimestamp,
}

/// Outcome of running the gate over a batch
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    /// Records that passed
    pub accepted: Vec<IntakeRecord>,
    /// Number of records dropped
    pub dropped: usize,
}

fn within(value: f64, max: f64) -> bool {
    value.is_finite() && (0.0..=max).contains(&value)
}

/// Check a single intake record
///
/// # Errors
///
/// Returns the first rule the record breaks
pub fn validate_intake(
    intake: &IntakeRecord,
    now: DateTime<Utc>,
    config: &ScoringConfig,
) -> Result<(), IntakeRejection> {
    if !within(intake.caffeine_mg, validation::MAX_CAFFEINE_MG) {
        return Err(IntakeRejection::CaffeineOutOfRange);
    }
    if !within(
        intake.completion_percentage,
        validation::MAX_COMPLETION_PERCENT,
    ) {
        return Err(IntakeRejection::CompletionOutOfRange);
    }
    if !within(intake.consumed_mg(), validation::MAX_CONSUMED_MG) {
        return Err(IntakeRejection::ConsumedOutOfRange);
    }
    if !intake.drink_duration_minutes.is_finite() || intake.drink_duration_minutes < 0.0 {
        return Err(IntakeRejection::InvalidDuration);
    }
    if intake.timestamp.timestamp() <= 0 || intake.timestamp > now + config.max_future_skew() {
        return Err(IntakeRejection::InvalidTimestamp);
    }
    Ok(())
}

/// Keep only well-formed intakes
#[must_use]
pub fn filter_intakes(
    intakes: &[IntakeRecord],
    now: DateTime<Utc>,
    config: &ScoringConfig,
) -> ValidationReport {
    let mut report = ValidationReport::default();

    for intake in intakes {
        match validate_intake(intake, now, config) {
            Ok(()) => report.accepted.push(intake.clone()),
            Err(reason) => {
                debug!(
                    intake.id = %intake.id,
                    intake.name = %intake.name,
                    reason = %reason,
                    "Dropping malformed intake record"
                );
                report.dropped += 1;
            }
        }
    }

    report
}
