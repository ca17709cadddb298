// ABOUTME: In-memory score data provider backed by per-user maps
// ABOUTME: Loads JSON snapshots and accepts intake and sleep writes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use caffscore_core::errors::{AppError, AppResult};
use caffscore_core::models::{IntakeRecord, SleepSample, UserProfile};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::ScoreDataProvider;

/// Everything known about one user, as read from a JSON file
///
/// ```json
/// { "profile": { ... }, "intakes": [ ... ], "sleep": [ ... ] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSnapshot {
    /// Profile snapshot
    pub profile: UserProfile,
    /// Logged drinks
    #[serde(default)]
    pub intakes: Vec<IntakeRecord>,
    /// Logged nights
    #[serde(default)]
    pub sleep: Vec<SleepSample>,
}

impl DataSnapshot {
    /// Read a snapshot from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid snapshot
    pub async fn load(path: &Path) -> AppResult<Self> {
        let raw = fs::read_to_string(path).await.map_err(|e| {
            AppError::storage(format!("Failed to read snapshot {}", path.display())).with_source(e)
        })?;
        let snapshot = serde_json::from_str(&raw)?;
        Ok(snapshot)
    }
}

#[derive(Debug, Default)]
struct UserData {
    profile: Option<UserProfile>,
    intakes: Vec<IntakeRecord>,
    sleep: Vec<SleepSample>,
}

/// Provider holding every user's data in memory
#[derive(Debug, Default)]
pub struct InMemoryDataProvider {
    users: RwLock<HashMap<Uuid, UserData>>,
}

impl InMemoryDataProvider {
    /// Empty provider
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider seeded with one user's snapshot
    #[must_use]
    pub fn from_snapshot(snapshot: DataSnapshot) -> Self {
        let user_id = snapshot.profile.user_id;
        let data = UserData {
            profile: Some(snapshot.profile),
            intakes: snapshot.intakes,
            sleep: snapshot.sleep,
        };
        Self {
            users: RwLock::new(HashMap::from([(user_id, data)])),
        }
    }

    /// Insert or replace a profile
    pub async fn upsert_profile(&self, profile: UserProfile) {
        let user_id = profile.user_id;
        let mut users = self.users.write().await;
        users.entry(user_id).or_default().profile = Some(profile);
    }

    /// Append an intake for `user_id`
    pub async fn record_intake(&self, user_id: Uuid, intake: IntakeRecord) {
        let mut users = self.users.write().await;
        users.entry(user_id).or_default().intakes.push(intake);
    }

    /// Remove an intake by id, returning whether it existed
    pub async fn remove_intake(&self, user_id: Uuid, intake_id: Uuid) -> bool {
        let mut users = self.users.write().await;
        let Some(data) = users.get_mut(&user_id) else {
            return false;
        };
        let before = data.intakes.len();
        data.intakes.retain(|i| i.id != intake_id);
        data.intakes.len() != before
    }

    /// Append a sleep sample for `user_id`
    pub async fn record_sleep(&self, user_id: Uuid, sample: SleepSample) {
        let mut users = self.users.write().await;
        users.entry(user_id).or_default().sleep.push(sample);
    }
}

#[async_trait]
impl ScoreDataProvider for InMemoryDataProvider {
    fn name(&self) -> &'static str {
        "in_memory"
    }

    async fn profile(&self, user_id: Uuid) -> AppResult<Option<UserProfile>> {
        let users = self.users.read().await;
        Ok(users.get(&user_id).and_then(|d| d.profile.clone()))
    }

    async fn intakes_since(
        &self,
        user_id: Uuid,
        since: DateTime<Utc>,
    ) -> AppResult<Vec<IntakeRecord>> {
        let users = self.users.read().await;
        Ok(users
            .get(&user_id)
            .map(|d| {
                d.intakes
                    .iter()
                    .filter(|i| i.timestamp >= since)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn sleep_samples(
        &self,
        user_id: Uuid,
        since: DateTime<Utc>,
    ) -> AppResult<Vec<SleepSample>> {
        let users = self.users.read().await;
        Ok(users
            .get(&user_id)
            .map(|d| d.sleep.iter().filter(|s| s.date >= since).cloned().collect())
            .unwrap_or_default())
    }
}
