// ABOUTME: Score result value objects: kind, bands, full result, and widget snapshot
// ABOUTME: Created fresh per computation and never mutated afterwards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::composer::{CrashRiskFactors, FocusFactors, ScoreFactors};

/// Which score a result describes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ScoreKind {
    /// Focus (`CaffScore`)
    Focus,
    /// Crash risk
    CrashRisk,
}

impl ScoreKind {
    /// Every kind, in a stable order
    pub const ALL: [Self; 2] = [Self::Focus, Self::CrashRisk];

    /// Stable identifier used in logs and cache keys
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Focus => "focus",
            Self::CrashRisk => "crash_risk",
        }
    }
}

impl fmt::Display for ScoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Focus score band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FocusLevel {
    /// 80 and above
    Peak,
    /// 60 to 80
    Productive,
    /// 40 to 60
    Moderate,
    /// 20 to 40
    Low,
    /// Below 20
    Minimal,
}

impl FocusLevel {
    /// Band for a focus score
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Peak
        } else if score >= 60.0 {
            Self::Productive
        } else if score >= 40.0 {
            Self::Moderate
        } else if score >= 20.0 {
            Self::Low
        } else {
            Self::Minimal
        }
    }
}

/// Crash-risk band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CrashRiskLevel {
    /// 75 and above
    Severe,
    /// 50 to 75
    High,
    /// 25 to 50
    Moderate,
    /// Below 25
    Low,
}

impl CrashRiskLevel {
    /// Band for a crash-risk score
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 75.0 {
            Self::Severe
        } else if score >= 50.0 {
            Self::High
        } else if score >= 25.0 {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

/// Band for either score kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ScoreLevel {
    /// Focus band
    Focus(FocusLevel),
    /// Crash-risk band
    CrashRisk(CrashRiskLevel),
}

impl ScoreLevel {
    /// Band for `score` interpreted as `kind`
    #[must_use]
    pub fn classify(kind: ScoreKind, score: f64) -> Self {
        match kind {
            ScoreKind::Focus => Self::Focus(FocusLevel::from_score(score)),
            ScoreKind::CrashRisk => Self::CrashRisk(CrashRiskLevel::from_score(score)),
        }
    }
}

/// Outcome of one score computation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreResult {
    /// Which score this is
    pub kind: ScoreKind,
    /// Final score in [0, 100], one decimal
    pub score: f64,
    /// Band derived from the score
    pub level: ScoreLevel,
    /// Factor breakdown
    pub factors: ScoreFactors,
    /// Personalized half-life (hours)
    pub half_life_hours: f64,
    /// Caffeine in the body at `computed_at` (mg)
    pub current_level_mg: f64,
    /// Historical peak caffeine level (mg)
    pub peak_level_mg: f64,
    /// Cached copies are served until this instant
    pub valid_until: DateTime<Utc>,
    /// When the result was computed
    pub computed_at: DateTime<Utc>,
}

impl ScoreResult {
    /// Zero-score result used when no usable profile is available
    #[must_use]
    pub fn zero(kind: ScoreKind, now: DateTime<Utc>, valid_until: DateTime<Utc>) -> Self {
        let factors = match kind {
            ScoreKind::Focus => ScoreFactors::Focus(FocusFactors::default()),
            ScoreKind::CrashRisk => ScoreFactors::CrashRisk(CrashRiskFactors::default()),
        };
        Self {
            kind,
            score: 0.0,
            level: ScoreLevel::classify(kind, 0.0),
            factors,
            half_life_hours: 0.0,
            current_level_mg: 0.0,
            peak_level_mg: 0.0,
            valid_until,
            computed_at: now,
        }
    }

    /// Whether a cached copy may still be served at `now`
    ///
    /// Only inside `[computed_at, valid_until)`; a result computed after
    /// `now` describes a future that has not happened yet.
    #[must_use]
    pub fn is_fresh_at(&self, now: DateTime<Utc>) -> bool {
        self.computed_at <= now && now < self.valid_until
    }

    /// Whether `now` is at or past the end of the freshness window
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.valid_until
    }

    /// Compact payload for home-screen widgets
    #[must_use]
    pub fn widget_snapshot(&self) -> WidgetSnapshot {
        WidgetSnapshot::from(self)
    }
}

/// Minimal score payload pushed to platform widgets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WidgetSnapshot {
    /// Final score
    pub score: f64,
    /// Current caffeine level (mg)
    pub current_caffeine_level_mg: f64,
    /// Which score this is
    pub kind: ScoreKind,
    /// When the score was computed
    pub computed_at: DateTime<Utc>,
}

impl From<&ScoreResult> for WidgetSnapshot {
    fn from(result: &ScoreResult) -> Self {
        Self {
            score: result.score,
            current_caffeine_level_mg: result.current_level_mg,
            kind: result.kind,
            computed_at: result.computed_at,
        }
    }
}
