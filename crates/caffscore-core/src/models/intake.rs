// ABOUTME: A single logged caffeinated drink with declared content and completion
// ABOUTME: Consumed amount is derived from content and completion percentage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

fn default_completion() -> f64 {
    100.0
}

/// One logged drink
///
/// Records are not trusted: the validation gate in `caffscore-intelligence`
/// drops any record whose numbers fall outside their documented ranges
/// before it reaches the decay model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IntakeRecord {
    /// Record identifier
    pub id: Uuid,
    /// Drink name as entered by the user
    pub name: String,
    /// Declared caffeine content (mg, 0-1000)
    pub caffeine_mg: f64,
    /// How much of the drink was finished (percent, 0-100)
    #[serde(default = "default_completion")]
    pub completion_percentage: f64,
    /// When the user started drinking
    pub timestamp: DateTime<Utc>,
    /// How long the drink took to finish (minutes)
    #[serde(default)]
    pub drink_duration_minutes: f64,
}

impl IntakeRecord {
    /// Create a fully consumed, instantly finished intake
    #[must_use]
    pub fn new(name: impl Into<String>, caffeine_mg: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            caffeine_mg,
            completion_percentage: default_completion(),
            timestamp,
            drink_duration_minutes: 0.0,
        }
    }

    /// Set the completion percentage
    #[must_use]
    pub fn with_completion(mut self, completion_percentage: f64) -> Self {
        self.completion_percentage = completion_percentage;
        self
    }

    /// Set the drinking duration
    #[must_use]
    pub fn with_duration_minutes(mut self, minutes: f64) -> Self {
        self.drink_duration_minutes = minutes;
        self
    }

    /// Caffeine actually ingested (mg)
    #[must_use]
    pub fn consumed_mg(&self) -> f64 {
        self.caffeine_mg * self.completion_percentage / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consumed_amount_scales_with_completion() {
        let intake = IntakeRecord::new("Espresso", 120.0, Utc::now()).with_completion(50.0);
        assert!((intake.consumed_mg() - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_completion_defaults_to_full_when_missing() {
        let json = serde_json::json!({
            "id": Uuid::new_v4(),
            "name": "Cold brew",
            "caffeine_mg": 200.0,
            "timestamp": "2025-06-01T08:00:00Z"
        });
        let intake: IntakeRecord = serde_json::from_value(json).unwrap();
        assert!((intake.consumed_mg() - 200.0).abs() < f64::EPSILON);
        assert!(intake.drink_duration_minutes.abs() < f64::EPSILON);
    }
}
