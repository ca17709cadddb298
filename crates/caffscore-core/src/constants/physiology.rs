// ABOUTME: Physiological constants for caffeine elimination, tolerance, sleep debt, and circadian rhythm
// ABOUTME: Multipliers and breakpoints consumed by the decay model and factor calculators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Physiological constants for caffeine scoring
//!
//! Values are grouped by the calculator that consumes them. Multipliers are
//! applied multiplicatively and compose with each other.

/// Caffeine elimination half-life adjustments
///
/// References:
/// - Institute of Medicine (2001). Caffeine for the Sustainment of Mental Task Performance.
///   <https://www.ncbi.nlm.nih.gov/books/NBK223808/>
/// - Parsons, W.D. & Neims, A.H. (1978). Effect of smoking on caffeine clearance.
///   *Clinical Pharmacology & Therapeutics*, 24(1), 40-45.
/// - Abernethy, D.R. & Todd, E.L. (1985). Impairment of caffeine clearance by chronic use of
///   low-dose oestrogen-containing oral contraceptives. *European Journal of Clinical Pharmacology*, 28, 425-428.
pub mod half_life {
    /// Population baseline half-life (hours)
    pub const BASELINE_HOURS: f64 = 5.0;

    /// Lower bound on any personalized half-life (hours)
    pub const MIN_HOURS: f64 = 2.0;

    /// Age above which clearance slows markedly (years, exclusive)
    pub const SENIOR_AGE_YEARS: u32 = 65;

    /// Age from which clearance starts to slow (years, inclusive)
    pub const MIDDLE_AGE_YEARS: u32 = 40;

    /// Multiplier for age > 65
    pub const SENIOR_MULTIPLIER: f64 = 1.3;

    /// Multiplier for age 40-65
    pub const MIDDLE_AGE_MULTIPLIER: f64 = 1.1;

    /// Smoking induces CYP1A2 and shortens half-life
    pub const SMOKER_MULTIPLIER: f64 = 0.7;

    /// Oral contraceptives inhibit CYP1A2 and lengthen half-life
    pub const ORAL_CONTRACEPTIVE_MULTIPLIER: f64 = 1.4;

    /// Pregnancy roughly doubles half-life
    pub const PREGNANCY_MULTIPLIER: f64 = 2.0;
}

/// Habituation (tolerance) model
pub mod tolerance {
    /// Daily intake per kg body weight treated as full habituation (mg/kg)
    pub const HABITUATION_MG_PER_KG: f64 = 4.0;

    /// Tolerance threshold used when no intake history exists (mg/day)
    pub const DEFAULT_THRESHOLD_MG: f64 = 200.0;

    /// Floor for any threshold used as a divisor (mg)
    pub const MIN_THRESHOLD_MG: f64 = 1.0;

    /// Age at or above which sensitivity increases (years)
    pub const SENIOR_AGE_YEARS: u32 = 65;

    /// Age at or below which the user is treated as adolescent (years)
    pub const ADOLESCENT_AGE_YEARS: u32 = 18;

    /// Multiplier for age >= 65
    pub const SENIOR_MULTIPLIER: f64 = 0.8;

    /// Multiplier for age <= 18
    pub const ADOLESCENT_MULTIPLIER: f64 = 1.1;

    /// Multiplier for female users
    pub const FEMALE_MULTIPLIER: f64 = 0.9;

    /// Multiplier for smokers
    pub const SMOKER_MULTIPLIER: f64 = 1.5;

    /// Multiplier for pregnancy
    pub const PREGNANCY_MULTIPLIER: f64 = 0.4;

    /// Multiplier for oral contraceptive use (female, not pregnant)
    pub const ORAL_CONTRACEPTIVE_MULTIPLIER: f64 = 0.85;

    /// Mean daily intake above which the user counts as a heavy consumer (mg)
    pub const HEAVY_USER_MG: f64 = 400.0;

    /// Mean daily intake below which the user counts as a light consumer (mg)
    pub const LIGHT_USER_MG: f64 = 50.0;

    /// Experience multiplier for heavy consumers
    pub const HEAVY_USER_MULTIPLIER: f64 = 1.2;

    /// Experience multiplier for light consumers
    pub const LIGHT_USER_MULTIPLIER: f64 = 0.7;

    /// Weight of the adjusted tolerance in the final factor
    pub const FACTOR_SLOPE: f64 = 0.7;

    /// Offset added to the weighted tolerance
    pub const FACTOR_OFFSET: f64 = 0.3;

    /// Minimum tolerance factor
    pub const FACTOR_MIN: f64 = 0.1;
}

/// Sleep debt model
///
/// Reference: Hirshkowitz, M., et al. (2015). National Sleep Foundation's sleep time duration
/// recommendations. *Sleep Health*, 1(1), 40-43.
pub mod sleep {
    /// Ideal sleep used before a personal average is established (hours)
    pub const BASELINE_HOURS: f64 = 7.5;

    /// Account age after which the personal 7-day average is trusted (days)
    pub const PERSONAL_BASELINE_MIN_ACCOUNT_DAYS: i64 = 7;

    /// Window for the rolling sleep average (days)
    pub const ROLLING_WINDOW_DAYS: i64 = 7;

    /// A sample older than this is not considered "last night" (hours)
    pub const LAST_NIGHT_LOOKBACK_HOURS: i64 = 36;
}

/// Absorption phase after a drink is started
pub mod absorption {
    /// End of the early absorption ramp (minutes)
    pub const EARLY_PHASE_MINUTES: f64 = 15.0;

    /// End of absorption; full effect afterwards (minutes)
    pub const FULL_EFFECT_MINUTES: f64 = 60.0;

    /// Reference dose used to normalize current activity (mg)
    pub const REFERENCE_DOSE_MG: f64 = 200.0;
}

/// Window for the rolling mean daily caffeine figure (days)
pub const MEAN_DAILY_CAFFEINE_WINDOW_DAYS: i64 = 30;
