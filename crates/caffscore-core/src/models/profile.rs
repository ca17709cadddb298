// ABOUTME: User physiological profile snapshot consumed by every score calculation
// ABOUTME: Weight, age, sex, health flags, rolling sleep and caffeine averages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// Biological sex, used for metabolic adjustments only
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BiologicalSex {
    /// Male
    Male,
    /// Female
    Female,
}

/// Immutable-per-call snapshot of a user's physiology and habits
///
/// # Examples
///
/// ```rust
/// use caffscore_core::models::{BiologicalSex, UserProfile};
/// use uuid::Uuid;
///
/// let profile = UserProfile::new(Uuid::new_v4(), 70.0, 30, BiologicalSex::Male)
///     .with_mean_daily_caffeine_mg(180.0)
///     .with_average_sleep_hours(7.2);
/// assert!(profile.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// User identifier, also the result cache key
    pub user_id: Uuid,
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Age (years)
    pub age_years: u32,
    /// Biological sex
    pub sex: BiologicalSex,
    /// Smokes tobacco
    #[serde(default)]
    pub smoker: bool,
    /// Currently pregnant (meaningful only for female users)
    #[serde(default)]
    pub pregnant: bool,
    /// Uses oral contraceptives (meaningful only for female users)
    #[serde(default)]
    pub oral_contraceptives: bool,
    /// Rolling 7-day average sleep (hours)
    #[serde(default)]
    pub average_sleep_hours: f64,
    /// Rolling 30-day mean daily caffeine (mg)
    #[serde(default)]
    pub mean_daily_caffeine_mg: f64,
    /// When the account was created
    pub created_at: DateTime<Utc>,
    /// Offset of the user's local time from UTC (minutes)
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

impl UserProfile {
    /// Create a profile with neutral defaults for every optional field
    ///
    /// The account is treated as created now, so the personal sleep baseline
    /// is not yet trusted.
    #[must_use]
    pub fn new(user_id: Uuid, weight_kg: f64, age_years: u32, sex: BiologicalSex) -> Self {
        Self {
            user_id,
            weight_kg,
            age_years,
            sex,
            smoker: false,
            pregnant: false,
            oral_contraceptives: false,
            average_sleep_hours: 0.0,
            mean_daily_caffeine_mg: 0.0,
            created_at: Utc::now(),
            utc_offset_minutes: 0,
        }
    }

    /// Set the smoker flag
    #[must_use]
    pub fn with_smoker(mut self, smoker: bool) -> Self {
        self.smoker = smoker;
        self
    }

    /// Set the pregnancy flag
    #[must_use]
    pub fn with_pregnant(mut self, pregnant: bool) -> Self {
        self.pregnant = pregnant;
        self
    }

    /// Set the oral contraceptive flag
    #[must_use]
    pub fn with_oral_contraceptives(mut self, oral_contraceptives: bool) -> Self {
        self.oral_contraceptives = oral_contraceptives;
        self
    }

    /// Set the rolling 7-day sleep average
    #[must_use]
    pub fn with_average_sleep_hours(mut self, hours: f64) -> Self {
        self.average_sleep_hours = hours;
        self
    }

    /// Set the rolling 30-day mean daily caffeine
    #[must_use]
    pub fn with_mean_daily_caffeine_mg(mut self, mg: f64) -> Self {
        self.mean_daily_caffeine_mg = mg;
        self
    }

    /// Set the account creation timestamp
    #[must_use]
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Set the local time offset from UTC
    #[must_use]
    pub fn with_utc_offset_minutes(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = minutes;
        self
    }

    /// Whether the user is female
    #[must_use]
    pub fn is_female(&self) -> bool {
        self.sex == BiologicalSex::Female
    }

    /// Pregnancy flag, honoured only for female users
    #[must_use]
    pub fn is_pregnant(&self) -> bool {
        self.is_female() && self.pregnant
    }

    /// Oral contraceptive flag, honoured only for female users
    #[must_use]
    pub fn uses_oral_contraceptives(&self) -> bool {
        self.is_female() && self.oral_contraceptives
    }

    /// Age of the account at `now`
    #[must_use]
    pub fn account_age(&self, now: DateTime<Utc>) -> Duration {
        now - self.created_at
    }

    /// Check the profile invariants (weight and age strictly positive, averages finite)
    ///
    /// # Errors
    /// Returns `AppError` with `InvalidInput` for a non-positive weight or age and
    /// `ValueOutOfRange` for non-finite averages
    pub fn validate(&self) -> AppResult<()> {
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Profile weight must be positive, got {}",
                self.weight_kg
            ))
            .with_user_id(self.user_id));
        }
        if self.age_years == 0 {
            return Err(
                AppError::invalid_input("Profile age must be positive").with_user_id(self.user_id)
            );
        }
        if !self.average_sleep_hours.is_finite() || !self.mean_daily_caffeine_mg.is_finite() {
            return Err(AppError::out_of_range("Profile averages must be finite numbers")
                .with_user_id(self.user_id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_validate_reports_offending_field() {
        let user_id = Uuid::new_v4();

        let heavy = UserProfile::new(user_id, -70.0, 30, BiologicalSex::Male);
        let err = heavy.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(err.user_id, Some(user_id));

        let newborn = UserProfile::new(user_id, 70.0, 0, BiologicalSex::Male);
        assert_eq!(newborn.validate().unwrap_err().code, ErrorCode::InvalidInput);

        let broken = UserProfile::new(user_id, 70.0, 30, BiologicalSex::Female)
            .with_average_sleep_hours(f64::NAN);
        assert_eq!(broken.validate().unwrap_err().code, ErrorCode::ValueOutOfRange);
    }

    #[test]
    fn test_female_only_flags_need_female_profile() {
        let male = UserProfile::new(Uuid::new_v4(), 80.0, 40, BiologicalSex::Male)
            .with_pregnant(true)
            .with_oral_contraceptives(true);
        assert!(!male.is_pregnant());
        assert!(!male.uses_oral_contraceptives());
    }
}
