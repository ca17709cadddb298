// ABOUTME: Factor calculators turning raw caffeine, sleep, and profile signals into bounded factors
// ABOUTME: Pure functions only; nothing here keeps state between calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Factor Calculators
//!
//! Each factor lands in a documented range (mostly `[0, 1]`; the metabolic
//! modifier lives in `[0.8, 1.2]`) so the score composer can multiply them
//! without further guarding.

/// Crash-risk factors
pub mod crash;
/// Focus factors
pub mod focus;
/// Factors used by both scores
pub mod shared;

pub use shared::{
    circadian_factor, health_adjustment, local_hour, sleep_debt_hours, tolerance_factor,
};
