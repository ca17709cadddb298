// ABOUTME: Score service orchestrating data fetch, engine evaluation, and cache invalidation
// ABOUTME: Refreshes rolling profile averages from history before every computation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use caffscore_core::constants::history::INTAKE_SCORING_WINDOW_HOURS;
use caffscore_core::constants::physiology::{sleep, MEAN_DAILY_CAFFEINE_WINDOW_DAYS};
use caffscore_core::errors::AppResult;
use caffscore_core::models::{IntakeRecord, SleepSample};
use caffscore_intelligence::cache::{InMemoryScoreCache, ScoreCacheStore};
use caffscore_intelligence::sleep_history::{
    covered_days, last_night_sleep_hours, mean_daily_caffeine, rolling_average_sleep,
};
use caffscore_intelligence::{
    filter_intakes, ScoreKind, ScoreRequest, ScoreResult, ScoringEngine, WidgetSnapshot,
};
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::logging::AppLogger;
use crate::providers::{InMemoryDataProvider, ScoreDataProvider};

/// Fetches a user's data, scores it, and keeps the result cache honest
pub struct ScoreService<P, S = InMemoryScoreCache>
where
    P: ScoreDataProvider,
    S: ScoreCacheStore,
{
    provider: Arc<P>,
    engine: Arc<ScoringEngine<S>>,
}

impl<P, S> ScoreService<P, S>
where
    P: ScoreDataProvider,
    S: ScoreCacheStore,
{
    /// Create a service over `provider` sharing `engine`
    #[must_use]
    pub const fn new(provider: Arc<P>, engine: Arc<ScoringEngine<S>>) -> Self {
        Self { provider, engine }
    }

    /// Shared engine
    #[must_use]
    pub const fn engine(&self) -> &Arc<ScoringEngine<S>> {
        &self.engine
    }

    /// Data provider
    #[must_use]
    pub const fn provider(&self) -> &Arc<P> {
        &self.provider
    }

    /// Assemble the engine input for `user_id` at `now`
    ///
    /// The profile's rolling sleep average and mean daily caffeine are
    /// replaced by values derived from history when history exists. Mean
    /// caffeine is averaged over the days the account has existed, up to
    /// the full window.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider fails
    pub async fn build_request(&self, user_id: Uuid, now: DateTime<Utc>) -> AppResult<ScoreRequest> {
        let Some(mut profile) = self.provider.profile(user_id).await? else {
            debug!(user.id = %user_id, provider = self.provider.name(), "No profile on record");
            return Ok(ScoreRequest::default().at(now));
        };

        let caffeine_since = now - Duration::days(MEAN_DAILY_CAFFEINE_WINDOW_DAYS);
        let history = self.provider.intakes_since(user_id, caffeine_since).await?;
        let sleep_since = now - Duration::days(sleep::ROLLING_WINDOW_DAYS);
        let samples = self.provider.sleep_samples(user_id, sleep_since).await?;

        let accepted = filter_intakes(&history, now, self.engine.config()).accepted;
        if !accepted.is_empty() {
            let days = covered_days(profile.created_at, now, MEAN_DAILY_CAFFEINE_WINDOW_DAYS);
            profile.mean_daily_caffeine_mg = mean_daily_caffeine(&accepted, now, days);
        }
        if let Some(average) = rolling_average_sleep(&samples, now, sleep::ROLLING_WINDOW_DAYS) {
            profile.average_sleep_hours = average;
        }

        let intake_cutoff = now - Duration::hours(INTAKE_SCORING_WINDOW_HOURS);
        let recent: Vec<IntakeRecord> = accepted
            .into_iter()
            .filter(|i| i.timestamp >= intake_cutoff)
            .collect();

        let mut request = ScoreRequest::for_profile(profile).with_intakes(recent).at(now);
        request.last_night_sleep_hours = last_night_sleep_hours(&samples, now);
        Ok(request)
    }

    /// Score of `kind` for `user_id`, at the wall clock unless `now` is given
    ///
    /// A fresh cached score is returned without touching the provider.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider fails
    pub async fn score(
        &self,
        kind: ScoreKind,
        user_id: Uuid,
        now: Option<DateTime<Utc>>,
    ) -> AppResult<ScoreResult> {
        let now = now.unwrap_or_else(Utc::now);
        if let Some(cached) = self.engine.cached_score(kind, user_id, now) {
            AppLogger::log_score(user_id, &cached);
            return Ok(cached);
        }

        // Read before fetching so writes that land mid-fetch keep this result out of the cache
        let generation = self.engine.generation(user_id);
        let request = self.build_request(user_id, now).await?;
        let result = self.engine.score_as_of(kind, &request, generation);
        AppLogger::log_score(user_id, &result);
        Ok(result)
    }

    /// Focus score for `user_id`
    ///
    /// # Errors
    ///
    /// Returns an error if the provider fails
    pub async fn focus(&self, user_id: Uuid, now: Option<DateTime<Utc>>) -> AppResult<ScoreResult> {
        self.score(ScoreKind::Focus, user_id, now).await
    }

    /// Crash-risk score for `user_id`
    ///
    /// # Errors
    ///
    /// Returns an error if the provider fails
    pub async fn crash_risk(
        &self,
        user_id: Uuid,
        now: Option<DateTime<Utc>>,
    ) -> AppResult<ScoreResult> {
        self.score(ScoreKind::CrashRisk, user_id, now).await
    }

    /// Widget payload for the score of `kind`
    ///
    /// # Errors
    ///
    /// Returns an error if the provider fails
    pub async fn widget_snapshot(
        &self,
        kind: ScoreKind,
        user_id: Uuid,
        now: Option<DateTime<Utc>>,
    ) -> AppResult<WidgetSnapshot> {
        Ok(self.score(kind, user_id, now).await?.widget_snapshot())
    }

    /// Tell the service that `user_id`'s data changed outside of it
    pub fn data_changed(&self, user_id: Uuid) {
        self.engine.invalidate(user_id);
    }
}

impl<S: ScoreCacheStore> ScoreService<InMemoryDataProvider, S> {
    /// Store an intake and drop cached scores for the user
    pub async fn record_intake(&self, user_id: Uuid, intake: IntakeRecord) {
        AppLogger::log_intake_recorded(user_id, &intake);
        self.provider.record_intake(user_id, intake).await;
        self.engine.invalidate(user_id);
    }

    /// Delete an intake and drop cached scores for the user
    pub async fn remove_intake(&self, user_id: Uuid, intake_id: Uuid) -> bool {
        let removed = self.provider.remove_intake(user_id, intake_id).await;
        if removed {
            self.engine.invalidate(user_id);
        }
        removed
    }

    /// Store a sleep sample and drop cached scores for the user
    pub async fn record_sleep(&self, user_id: Uuid, sample: SleepSample) {
        AppLogger::log_sleep_recorded(user_id, sample.hours_slept);
        self.provider.record_sleep(user_id, sample).await;
        self.engine.invalidate(user_id);
    }
}
