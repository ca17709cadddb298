// ABOUTME: Domain value objects handed to the scoring engine by its callers
// ABOUTME: UserProfile, IntakeRecord, and SleepSample definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Data models
//!
//! Every model is a plain value object. The engine never mutates or stores
//! them; callers own persistence.

/// Caffeine intake records
pub mod intake;
/// User physiological profile
pub mod profile;
/// Sleep samples
pub mod sleep;

pub use intake::IntakeRecord;
pub use profile::{BiologicalSex, UserProfile};
pub use sleep::{SleepQuality, SleepSample, SleepSource};
