// ABOUTME: Data provider abstraction supplying profiles, intakes, and sleep to the scoring host
// ABOUTME: Async trait seam between storage collaborators and the synchronous engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Score Data Providers
//!
//! The engine never reads storage itself. Hosts implement
//! [`ScoreDataProvider`] over whatever persistence they own and hand the
//! fetched snapshot to the engine.

/// In-memory provider for the CLI, tests, and demos
pub mod in_memory;

pub use in_memory::{DataSnapshot, InMemoryDataProvider};

use async_trait::async_trait;
use caffscore_core::errors::AppResult;
use caffscore_core::models::{IntakeRecord, SleepSample, UserProfile};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Source of the inputs a score needs
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` for concurrent access across async tasks.
#[async_trait]
pub trait ScoreDataProvider: Send + Sync {
    /// Provider name for logs
    fn name(&self) -> &'static str;

    /// Current profile snapshot, `None` when the user has not onboarded
    async fn profile(&self, user_id: Uuid) -> AppResult<Option<UserProfile>>;

    /// Intakes dated at or after `since`
    async fn intakes_since(
        &self,
        user_id: Uuid,
        since: DateTime<Utc>,
    ) -> AppResult<Vec<IntakeRecord>>;

    /// Sleep samples dated at or after `since`
    async fn sleep_samples(
        &self,
        user_id: Uuid,
        since: DateTime<Utc>,
    ) -> AppResult<Vec<SleepSample>>;
}
