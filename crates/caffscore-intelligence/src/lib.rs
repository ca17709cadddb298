// ABOUTME: Caffeine scoring engine: decay model, factor calculators, and score composition
// ABOUTME: Exposes the focus and crash-risk entry points plus the cache and validation gate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # CaffScore Intelligence
//!
//! Computes two personalized, time-varying scores from a profile snapshot,
//! an intake history, and last night's sleep:
//!
//! - **Focus (`CaffScore`)**: how well current caffeine supports focused work
//! - **Crash risk**: how likely an energy crash is as caffeine wears off
//!
//! ## Example
//!
//! ```rust
//! use caffscore_core::models::{BiologicalSex, IntakeRecord, UserProfile};
//! use caffscore_intelligence::{ScoreRequest, ScoringEngine};
//! use chrono::{Duration, Utc};
//! use uuid::Uuid;
//!
//! let now = Utc::now();
//! let profile = UserProfile::new(Uuid::new_v4(), 70.0, 30, BiologicalSex::Male);
//! let request = ScoreRequest::for_profile(profile)
//!     .with_intakes(vec![IntakeRecord::new("Espresso", 100.0, now - Duration::hours(1))])
//!     .at(now);
//!
//! let engine = ScoringEngine::default();
//! let focus = engine.focus_score(&request);
//! assert!((0.0..=100.0).contains(&focus.score));
//! ```

/// Short-lived result cache
pub mod cache;
/// Weighted power-law composition
pub mod composer;
/// Tunables with environment overrides
pub mod config;
/// Focus and crash-risk entry points
pub mod engine;
/// Factor calculators
pub mod factors;
/// First-order elimination model
pub mod pharmacokinetics;
/// Result value objects
pub mod result;
/// Sleep and intake history helpers
pub mod sleep_history;
/// Intake validation gate
pub mod validation;

pub use cache::{InMemoryScoreCache, ScoreCacheKey, ScoreCacheStats, ScoreCacheStore};
pub use composer::{CrashRiskFactors, FocusFactors, ScoreFactors};
pub use config::{ConfigError, ScoringConfig};
pub use engine::{ScoreRequest, ScoringEngine};
pub use result::{CrashRiskLevel, FocusLevel, ScoreKind, ScoreLevel, ScoreResult, WidgetSnapshot};
pub use validation::{filter_intakes, IntakeRejection, ValidationReport};
