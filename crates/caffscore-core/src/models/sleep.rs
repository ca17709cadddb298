// ABOUTME: Nightly sleep sample used to derive last night's sleep and rolling averages
// ABOUTME: Accepts plain dates or full RFC 3339 timestamps for the sample date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};

/// Custom deserializer for flexible date parsing
/// Accepts both full ISO 8601 datetime ("2025-11-26T00:00:00Z") and simple date ("2025-11-26")
fn deserialize_flexible_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;

    if let Ok(dt) = DateTime::parse_from_rfc3339(&s) {
        return Ok(dt.with_timezone(&Utc));
    }

    // ISO 8601 without timezone, assumed UTC
    if let Ok(dt) = NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(Utc.from_utc_datetime(&dt));
    }

    // Plain date: the night is anchored at the following morning (08:00 UTC)
    if let Ok(date) = NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
        let datetime = date
            .and_hms_opt(8, 0, 0)
            .ok_or_else(|| DeError::custom("Invalid date"))?;
        return Ok(Utc.from_utc_datetime(&datetime));
    }

    Err(DeError::custom(format!(
        "Invalid date format: '{s}'. Expected 'YYYY-MM-DD' or 'YYYY-MM-DDTHH:MM:SSZ'"
    )))
}

/// Self-reported or device-reported sleep quality
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SleepQuality {
    /// Restless or fragmented
    Poor,
    /// Some interruptions
    Fair,
    /// Mostly uninterrupted
    Good,
    /// Fully restorative
    Excellent,
}

/// Where a sleep sample came from
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SleepSource {
    /// Entered by hand
    #[default]
    Manual,
    /// Imported from a platform health store
    HealthStore,
    /// Estimated from usage when nothing was logged
    Estimated,
}

/// One night of sleep
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SleepSample {
    /// Date of the sleep session (wake-up time when known)
    /// Accepts both "YYYY-MM-DD" and full ISO 8601 "YYYY-MM-DDTHH:MM:SSZ" formats
    #[serde(deserialize_with = "deserialize_flexible_datetime")]
    pub date: DateTime<Utc>,
    /// Hours slept (0-24)
    pub hours_slept: f64,
    /// Optional quality rating
    #[serde(default)]
    pub quality: Option<SleepQuality>,
    /// Source tag
    #[serde(default)]
    pub source: SleepSource,
}

impl SleepSample {
    /// Create a manual sample without a quality rating
    #[must_use]
    pub fn new(date: DateTime<Utc>, hours_slept: f64) -> Self {
        Self {
            date,
            hours_slept,
            quality: None,
            source: SleepSource::Manual,
        }
    }

    /// Set the quality rating
    #[must_use]
    pub fn with_quality(mut self, quality: SleepQuality) -> Self {
        self.quality = Some(quality);
        self
    }

    /// Set the source tag
    #[must_use]
    pub fn with_source(mut self, source: SleepSource) -> Self {
        self.source = source;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_plain_date_anchors_to_morning() {
        let sample: SleepSample =
            serde_json::from_str(r#"{"date":"2025-11-26","hours_slept":7.5}"#).unwrap();
        assert_eq!(sample.date.hour(), 8);
        assert_eq!(sample.source, SleepSource::Manual);
        assert!(sample.quality.is_none());
    }

    #[test]
    fn test_rfc3339_date_is_kept() {
        let sample: SleepSample = serde_json::from_str(
            r#"{"date":"2025-11-26T06:30:00Z","hours_slept":6.0,"quality":"fair","source":"health_store"}"#,
        )
        .unwrap();
        assert_eq!(sample.date.hour(), 6);
        assert_eq!(sample.quality, Some(SleepQuality::Fair));
        assert_eq!(sample.source, SleepSource::HealthStore);
    }

    #[test]
    fn test_garbage_date_is_rejected() {
        let parsed: Result<SleepSample, _> =
            serde_json::from_str(r#"{"date":"last tuesday","hours_slept":7.0}"#);
        assert!(parsed.is_err());
    }
}
