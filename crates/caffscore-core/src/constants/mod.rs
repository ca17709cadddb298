// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for caffeine pharmacokinetics, validation, and caching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large file. Values that callers may tune at runtime are mirrored as
//! defaults in `caffscore_intelligence::config::ScoringConfig`.

/// Result cache TTLs and capacity
pub mod cache;
/// Caffeine pharmacokinetics, tolerance, sleep, and circadian constants
pub mod physiology;

/// Intake record validation bounds
pub mod validation {
    /// Maximum declared caffeine content of a single drink (mg)
    pub const MAX_CAFFEINE_MG: f64 = 1000.0;

    /// Maximum consumed caffeine from a single drink (mg)
    pub const MAX_CONSUMED_MG: f64 = 1000.0;

    /// Maximum completion percentage of a drink
    pub const MAX_COMPLETION_PERCENT: f64 = 100.0;

    /// How far past "now" an intake timestamp may lie before it is treated as corrupt (hours)
    pub const MAX_FUTURE_SKEW_HOURS: i64 = 24;

    /// Maximum hours in a single sleep sample
    pub const MAX_SLEEP_HOURS: f64 = 24.0;
}

/// History windows the host fetches before scoring
pub mod history {
    /// Intakes older than this no longer matter for a score (hours)
    pub const INTAKE_SCORING_WINDOW_HOURS: i64 = 24;
}

/// Service identity used in structured logs
pub mod service_names {
    /// Host service name
    pub const CAFFSCORE: &str = "caffscore";
}
