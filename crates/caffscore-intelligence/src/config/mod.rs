// ABOUTME: Scoring configuration with defaults, environment overrides, and validation
// ABOUTME: Every tunable of the decay model, factor calculators, and result cache lives here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Scoring Configuration Module
//!
//! `ScoringConfig::default()` reproduces the published model exactly. Hosts
//! may override individual values with `CAFFSCORE_*` environment variables
//! via [`ScoringConfig::from_env`]; the result is always validated.

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use caffscore_core::constants::{cache, physiology, validation};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Upper bound for the cache TTL (one day)
const MAX_CACHE_TTL_MS: i64 = 86_400_000;

/// Upper bound for the future skew allowance (one year)
const MAX_FUTURE_SKEW_LIMIT_HOURS: i64 = 8_760;

/// Tunables for the scoring engine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoringConfig {
    /// Half-life before personal adjustments (hours)
    pub baseline_half_life_hours: f64,
    /// Floor for the personalized half-life (hours)
    pub min_half_life_hours: f64,
    /// Tolerance threshold when the user has no intake history (mg/day)
    pub default_tolerance_threshold_mg: f64,
    /// Ideal sleep before a personal average is trusted (hours)
    pub baseline_sleep_hours: f64,
    /// Reference dose that saturates the activity factor (mg)
    pub activity_reference_dose_mg: f64,
    /// Score result cache TTL (milliseconds)
    pub cache_ttl_ms: i64,
    /// How far in the future an intake may be dated before it is dropped (hours)
    pub max_future_skew_hours: i64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            baseline_half_life_hours: physiology::half_life::BASELINE_HOURS,
            min_half_life_hours: physiology::half_life::MIN_HOURS,
            default_tolerance_threshold_mg: physiology::tolerance::DEFAULT_THRESHOLD_MG,
            baseline_sleep_hours: physiology::sleep::BASELINE_HOURS,
            activity_reference_dose_mg: physiology::absorption::REFERENCE_DOSE_MG,
            cache_ttl_ms: cache::TTL_SCORE_RESULT_MS,
            max_future_skew_hours: validation::MAX_FUTURE_SKEW_HOURS,
        }
    }
}

impl ScoringConfig {
    /// Load defaults, apply environment overrides, and validate
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an unparsable value or
    /// the resulting configuration fails validation
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Cache TTL as a chrono duration, clamped to the validated range
    #[must_use]
    pub fn cache_ttl(&self) -> Duration {
        Duration::milliseconds(self.cache_ttl_ms.clamp(0, MAX_CACHE_TTL_MS))
    }

    /// Future skew allowance as a chrono duration, clamped to the validated range
    #[must_use]
    pub fn max_future_skew(&self) -> Duration {
        Duration::hours(self.max_future_skew_hours.clamp(0, MAX_FUTURE_SKEW_LIMIT_HOURS))
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid value
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_half_life_hours > 0.0 && self.min_half_life_hours.is_finite()) {
            return Err(ConfigError::ValueOutOfRange(
                "min_half_life_hours must be a positive number",
            ));
        }
        if self.baseline_half_life_hours < self.min_half_life_hours
            || !self.baseline_half_life_hours.is_finite()
        {
            return Err(ConfigError::InvalidRange(
                "baseline_half_life_hours must be >= min_half_life_hours",
            ));
        }
        if !(self.default_tolerance_threshold_mg >= physiology::tolerance::MIN_THRESHOLD_MG
            && self.default_tolerance_threshold_mg.is_finite())
        {
            return Err(ConfigError::ValueOutOfRange(
                "default_tolerance_threshold_mg must be at least 1 mg",
            ));
        }
        if !(0.0..=validation::MAX_SLEEP_HOURS).contains(&self.baseline_sleep_hours) {
            return Err(ConfigError::ValueOutOfRange(
                "baseline_sleep_hours must be between 0 and 24",
            ));
        }
        if !(self.activity_reference_dose_mg > 0.0 && self.activity_reference_dose_mg.is_finite())
        {
            return Err(ConfigError::ValueOutOfRange(
                "activity_reference_dose_mg must be positive",
            ));
        }
        if !(0..=MAX_CACHE_TTL_MS).contains(&self.cache_ttl_ms) {
            return Err(ConfigError::ValueOutOfRange(
                "cache_ttl_ms must be between 0 and one day",
            ));
        }
        if !(0..=MAX_FUTURE_SKEW_LIMIT_HOURS).contains(&self.max_future_skew_hours) {
            return Err(ConfigError::ValueOutOfRange(
                "max_future_skew_hours must be between 0 and one year",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
                Ok(())
            }
            Err(env::VarError::NotPresent) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "CAFFSCORE_BASELINE_HALF_LIFE_HOURS",
            &mut self.baseline_half_life_hours,
        )?;
        Self::apply_env_var(
            "CAFFSCORE_MIN_HALF_LIFE_HOURS",
            &mut self.min_half_life_hours,
        )?;
        Self::apply_env_var(
            "CAFFSCORE_DEFAULT_TOLERANCE_MG",
            &mut self.default_tolerance_threshold_mg,
        )?;
        Self::apply_env_var(
            "CAFFSCORE_BASELINE_SLEEP_HOURS",
            &mut self.baseline_sleep_hours,
        )?;
        Self::apply_env_var(
            "CAFFSCORE_ACTIVITY_REFERENCE_MG",
            &mut self.activity_reference_dose_mg,
        )?;
        Self::apply_env_var("CAFFSCORE_CACHE_TTL_MS", &mut self.cache_ttl_ms)?;
        Self::apply_env_var(
            "CAFFSCORE_MAX_FUTURE_SKEW_HOURS",
            &mut self.max_future_skew_hours,
        )?;
        Ok(self)
    }
}
