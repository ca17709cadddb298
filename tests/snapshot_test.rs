// ABOUTME: Tests for loading user snapshots from JSON files and scoring them end to end
// ABOUTME: Mirrors what the command-line tool does with its --input file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use caffscore::providers::{DataSnapshot, InMemoryDataProvider};
use caffscore::services::ScoreService;
use caffscore::ErrorCode;
use caffscore_intelligence::{ScoreKind, ScoringConfig, ScoringEngine};
use common::{assert_approx, fixed_now, init_test_logging, intake_hours_ago, male_profile};
use serde_json::json;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

#[tokio::test]
async fn test_snapshot_file_scores_like_in_memory_data() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("user.json");

    let snapshot = DataSnapshot {
        profile: male_profile(),
        intakes: vec![intake_hours_ago(200.0, 4.0)],
        sleep: Vec::new(),
    };
    let user_id = snapshot.profile.user_id;
    fs::write(&path, serde_json::to_string_pretty(&snapshot).unwrap()).unwrap();

    let loaded = DataSnapshot::load(&path).await.unwrap();
    assert_eq!(loaded.profile, snapshot.profile);
    assert_eq!(loaded.intakes, snapshot.intakes);

    let service = ScoreService::new(
        Arc::new(InMemoryDataProvider::from_snapshot(loaded)),
        Arc::new(ScoringEngine::new(ScoringConfig::default())),
    );
    let result = service
        .score(ScoreKind::CrashRisk, user_id, Some(fixed_now()))
        .await
        .unwrap();

    assert_eq!(result.kind, ScoreKind::CrashRisk);
    assert!(result.score > 0.0);
    assert_approx(result.peak_level_mg, 200.0, 1e-9);
}

#[tokio::test]
async fn test_hand_written_snapshot_uses_field_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("minimal.json");
    let raw = json!({
        "profile": {
            "user_id": "7d0c1f2e-4c1a-4b8e-9a57-3f1f2b9c0d11",
            "weight_kg": 65.0,
            "age_years": 41,
            "sex": "female",
            "created_at": "2024-01-01T00:00:00Z"
        },
        "intakes": [{
            "id": "0b6f4a8e-2a52-4c36-8d1e-5a3b1c9e7f20",
            "name": "Cold brew",
            "caffeine_mg": 150.0,
            "timestamp": "2025-03-04T08:30:00Z"
        }],
        "sleep": [{ "date": "2025-03-04", "hours_slept": 6.5 }]
    });
    fs::write(&path, raw.to_string()).unwrap();

    let snapshot = DataSnapshot::load(&path).await.unwrap();

    assert!(!snapshot.profile.smoker);
    assert_eq!(snapshot.profile.utc_offset_minutes, 0);
    assert_approx(snapshot.intakes[0].completion_percentage, 100.0, f64::EPSILON);
    assert_approx(snapshot.intakes[0].consumed_mg(), 150.0, f64::EPSILON);
    assert_eq!(snapshot.sleep.len(), 1);
}

#[tokio::test]
async fn test_missing_file_is_a_storage_error() {
    let dir = TempDir::new().unwrap();
    let err = DataSnapshot::load(&dir.path().join("absent.json"))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
}

#[tokio::test]
async fn test_malformed_file_is_a_serialization_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ \"profile\": ").unwrap();

    let err = DataSnapshot::load(&path).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}
