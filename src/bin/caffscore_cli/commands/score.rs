// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Score command: loads a snapshot, runs the score service, prints the result
// ABOUTME: Shared by the focus and crash subcommands

use anyhow::Result;
use caffscore::config::EngineConfig;
use caffscore::providers::{DataSnapshot, InMemoryDataProvider};
use caffscore::services::ScoreService;
use caffscore_intelligence::{ScoreKind, ScoringEngine};
use chrono::{DateTime, Utc};
use std::path::Path;
use std::sync::Arc;

use crate::helpers::display::print_json;

/// Score the user in the snapshot at `input`
pub async fn run(
    config: &EngineConfig,
    kind: ScoreKind,
    input: &Path,
    now: Option<DateTime<Utc>>,
    widget: bool,
) -> Result<()> {
    let snapshot = DataSnapshot::load(input).await?;
    let user_id = snapshot.profile.user_id;

    let provider = Arc::new(InMemoryDataProvider::from_snapshot(snapshot));
    let engine = Arc::new(ScoringEngine::new(config.scoring.clone()));
    let service = ScoreService::new(provider, engine);

    let result = service.score(kind, user_id, now).await?;
    if widget {
        print_json(&result.widget_snapshot())
    } else {
        print_json(&result)
    }
}
