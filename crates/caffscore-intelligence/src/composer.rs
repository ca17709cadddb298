// ABOUTME: Weighted power-law composition of factors into bounded 0-100 scores
// ABOUTME: One formula for focus, one for crash risk, with factor clamping before composition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Score Composer
//!
//! ```text
//! focus = 100 × level^1.0 × rising^0.2 × tolerance^0.3 × capacity^0.3 × activity^0.6
//! crash = 100 × delta^1.0 × sleepDebt^0.4 × tolerance^0.3 × metabolic^0.5 × circadian^0.3
//! ```
//!
//! Composition is multiplicative: a zero factor collapses the score to zero.
//! Results are rounded to one decimal and clamped to `[0, 100]`.

use serde::{Deserialize, Serialize};

/// Exponents of the focus formula
pub mod focus_weights {
    /// Current level
    pub const LEVEL: f64 = 1.0;
    /// Rising rate
    pub const RISING_RATE: f64 = 0.2;
    /// Tolerance
    pub const TOLERANCE: f64 = 0.3;
    /// Focus capacity
    pub const CAPACITY: f64 = 0.3;
    /// Current activity
    pub const ACTIVITY: f64 = 0.6;
}

/// Exponents of the crash-risk formula
pub mod crash_weights {
    /// Drop from peak
    pub const DELTA: f64 = 1.0;
    /// Sleep debt
    pub const SLEEP_DEBT: f64 = 0.4;
    /// Tolerance sensitivity
    pub const TOLERANCE: f64 = 0.3;
    /// Metabolic modifier
    pub const METABOLIC: f64 = 0.5;
    /// Circadian risk
    pub const CIRCADIAN: f64 = 0.3;
}

/// Focus factor breakdown
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct FocusFactors {
    /// Current level relative to the personal optimum [0, 1]
    pub level: f64,
    /// Rate of rise over the last 20 minutes [0, 1]
    pub rising_rate: f64,
    /// Habituation [0.1, 1]
    pub tolerance: f64,
    /// Sleep, circadian, and age capacity [0.1, 1]
    pub capacity: f64,
    /// Absorbed active caffeine [0, 1]
    pub activity: f64,
}

/// Crash-risk factor breakdown
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct CrashRiskFactors {
    /// Fractional drop from the historical peak [0, 1]
    pub delta: f64,
    /// Sleep debt risk [0.3, 1]
    pub sleep_debt: f64,
    /// Sensitivity to decline [0.5, 1]
    pub tolerance: f64,
    /// Metabolic modifier [0.8, 1.2]
    pub metabolic: f64,
    /// Circadian risk [0.4, 1]
    pub circadian: f64,
}

/// Named factor set for either score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoreFactors {
    /// Focus breakdown
    Focus(FocusFactors),
    /// Crash-risk breakdown
    CrashRisk(CrashRiskFactors),
}

impl FocusFactors {
    /// Clamp every factor to its documented range
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            level: unit(self.level),
            rising_rate: unit(self.rising_rate),
            tolerance: bounded(self.tolerance, 0.1, 1.0),
            capacity: bounded(self.capacity, 0.1, 1.0),
            activity: unit(self.activity),
        }
    }
}

impl CrashRiskFactors {
    /// Clamp every factor to its documented range
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            delta: unit(self.delta),
            sleep_debt: bounded(self.sleep_debt, 0.3, 1.0),
            tolerance: bounded(self.tolerance, 0.5, 1.0),
            metabolic: bounded(self.metabolic, 0.8, 1.2),
            circadian: bounded(self.circadian, 0.4, 1.0),
        }
    }
}

/// Clamp to `[0, 1]`, mapping NaN to 0
fn unit(value: f64) -> f64 {
    bounded(value, 0.0, 1.0)
}

/// Clamp to `[min, max]`, mapping NaN to `min`
fn bounded(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

/// Round to one decimal place and clamp into `[0, 100]`; non-finite scores become 0
#[must_use]
pub fn finalize_score(raw: f64) -> f64 {
    if !raw.is_finite() {
        return 0.0;
    }
    ((raw * 10.0).round() / 10.0).clamp(0.0, 100.0)
}

/// Compose the focus score
#[must_use]
pub fn compose_focus(factors: &FocusFactors) -> f64 {
    let f = factors.clamped();
    let raw = 100.0
        * f.level.powf(focus_weights::LEVEL)
        * f.rising_rate.powf(focus_weights::RISING_RATE)
        * f.tolerance.powf(focus_weights::TOLERANCE)
        * f.capacity.powf(focus_weights::CAPACITY)
        * f.activity.powf(focus_weights::ACTIVITY);
    finalize_score(raw)
}

/// Compose the crash-risk score
#[must_use]
pub fn compose_crash_risk(factors: &CrashRiskFactors) -> f64 {
    let f = factors.clamped();
    let raw = 100.0
        * f.delta.powf(crash_weights::DELTA)
        * f.sleep_debt.powf(crash_weights::SLEEP_DEBT)
        * f.tolerance.powf(crash_weights::TOLERANCE)
        * f.metabolic.powf(crash_weights::METABOLIC)
        * f.circadian.powf(crash_weights::CIRCADIAN);
    finalize_score(raw)
}
