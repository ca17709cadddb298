// ABOUTME: Host configuration assembled from environment variables
// ABOUTME: Combines scoring tunables with logging settings and validates both
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use caffscore_intelligence::{ConfigError, ScoringConfig};
use tracing::info;

use crate::logging::LoggingConfig;

/// Everything a host needs to run the scoring engine
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Engine tunables
    pub scoring: ScoringConfig,
    /// Logging setup
    pub logging: LoggingConfig,
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a `CAFFSCORE_*` variable cannot be parsed or the
    /// scoring configuration is out of range
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            scoring: ScoringConfig::from_env()?,
            logging: LoggingConfig::from_env(),
        };
        Ok(config)
    }

    /// Log a one-line summary of the active scoring configuration
    pub fn log_summary(&self) {
        info!(
            half_life.baseline_hours = self.scoring.baseline_half_life_hours,
            half_life.min_hours = self.scoring.min_half_life_hours,
            tolerance.default_mg = self.scoring.default_tolerance_threshold_mg,
            sleep.baseline_hours = self.scoring.baseline_sleep_hours,
            cache.ttl_ms = self.scoring.cache_ttl_ms,
            environment = %self.logging.environment,
            "Scoring configuration loaded"
        );
    }
}
