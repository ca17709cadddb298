// ABOUTME: Scoring engine entry points for focus and crash risk with result caching
// ABOUTME: Runs the validation gate, decay model, factor calculators, and composer in order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Scoring Engine
//!
//! ```text
//! request → validation gate → decay model → factors → composer → cache
//! ```
//!
//! Evaluation is synchronous and deterministic for a given `now`. Shared
//! state is the injected [`ScoreCacheStore`] plus a per-user invalidation
//! generation. A missing or invalid profile yields a zero score rather than
//! an error.
//!
//! Callers that assemble a request asynchronously read
//! [`ScoringEngine::generation`] before fetching data and pass it to
//! [`ScoringEngine::score_as_of`]. A result built from data that was
//! invalidated mid-fetch is returned but never cached.

use caffscore_core::models::{IntakeRecord, UserProfile};
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::cache::{InMemoryScoreCache, ScoreCacheKey, ScoreCacheStore};
use crate::composer::{
    compose_crash_risk, compose_focus, CrashRiskFactors, FocusFactors, ScoreFactors,
};
use crate::config::ScoringConfig;
use crate::factors::{crash, focus, shared};
use crate::pharmacokinetics::{current_level, peak_level, personalized_half_life};
use crate::result::{ScoreKind, ScoreLevel, ScoreResult};
use crate::validation::filter_intakes;

/// Inputs for one score computation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreRequest {
    /// Profile snapshot; `None` yields a zero score
    #[serde(default)]
    pub profile: Option<UserProfile>,
    /// Intake history in any order, ideally the last 24 hours
    #[serde(default)]
    pub intakes: Vec<IntakeRecord>,
    /// Hours slept last night; defaults to the profile's usual sleep
    #[serde(default)]
    pub last_night_sleep_hours: Option<f64>,
    /// Evaluation instant; defaults to the wall clock
    #[serde(default)]
    pub now: Option<DateTime<Utc>>,
}

impl ScoreRequest {
    /// Request for `profile` with no intakes
    #[must_use]
    pub fn for_profile(profile: UserProfile) -> Self {
        Self {
            profile: Some(profile),
            ..Self::default()
        }
    }

    /// Set the intake history
    #[must_use]
    pub fn with_intakes(mut self, intakes: Vec<IntakeRecord>) -> Self {
        self.intakes = intakes;
        self
    }

    /// Set last night's sleep
    #[must_use]
    pub fn with_last_night_sleep_hours(mut self, hours: f64) -> Self {
        self.last_night_sleep_hours = Some(hours);
        self
    }

    /// Pin the evaluation instant
    #[must_use]
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    /// Cache owner, if any
    #[must_use]
    pub fn user_id(&self) -> Option<Uuid> {
        self.profile.as_ref().map(|p| p.user_id)
    }
}

/// Focus and crash-risk scoring with an injected result cache
///
/// Cheap to share behind an `Arc`; every method takes `&self`.
#[derive(Debug)]
pub struct ScoringEngine<S: ScoreCacheStore = InMemoryScoreCache> {
    config: ScoringConfig,
    cache: Arc<S>,
    generations: DashMap<Uuid, u64>,
}

impl ScoringEngine<InMemoryScoreCache> {
    /// Engine with a private in-memory cache
    #[must_use]
    pub fn new(config: ScoringConfig) -> Self {
        Self::with_cache(config, Arc::new(InMemoryScoreCache::new()))
    }
}

impl Default for ScoringEngine<InMemoryScoreCache> {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl<S: ScoreCacheStore> ScoringEngine<S> {
    /// Engine backed by a caller-supplied cache store
    ///
    /// An invalid config is logged and used as given; durations are clamped
    /// to their valid range when read.
    #[must_use]
    pub fn with_cache(config: ScoringConfig, cache: Arc<S>) -> Self {
        if let Err(e) = config.validate() {
            warn!(error = %e, "Scoring config failed validation, out-of-range durations will be clamped");
        }
        Self {
            config,
            cache,
            generations: DashMap::new(),
        }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Underlying cache store
    #[must_use]
    pub const fn cache(&self) -> &Arc<S> {
        &self.cache
    }

    /// Focus (`CaffScore`) for the request
    #[must_use]
    pub fn focus_score(&self, request: &ScoreRequest) -> ScoreResult {
        self.score(ScoreKind::Focus, request)
    }

    /// Crash risk for the request
    #[must_use]
    pub fn crash_risk_score(&self, request: &ScoreRequest) -> ScoreResult {
        self.score(ScoreKind::CrashRisk, request)
    }

    /// Score of `kind`, served from cache while fresh
    #[must_use]
    pub fn score(&self, kind: ScoreKind, request: &ScoreRequest) -> ScoreResult {
        let generation = request.user_id().map_or(0, |id| self.generation(id));
        self.score_as_of(kind, request, generation)
    }

    /// Score of `kind` for a request assembled at invalidation `generation`
    ///
    /// Served from cache while fresh. A freshly computed result is cached
    /// only if the user's generation is still `generation` once stored.
    #[must_use]
    pub fn score_as_of(
        &self,
        kind: ScoreKind,
        request: &ScoreRequest,
        generation: u64,
    ) -> ScoreResult {
        let now = request.now.unwrap_or_else(Utc::now);
        let Some(user_id) = request.user_id() else {
            return self.compute(kind, request, now);
        };

        if let Some(cached) = self.cached_score(kind, user_id, now) {
            return cached;
        }

        let result = self.compute(kind, request, now);
        self.store(ScoreCacheKey::new(user_id, kind), &result, generation);
        result
    }

    /// Fresh cached score of `kind` for `user_id` at `now`, if any
    ///
    /// Lets callers skip loading data when the answer is already cached.
    #[must_use]
    pub fn cached_score(
        &self,
        kind: ScoreKind,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> Option<ScoreResult> {
        self.cached(&ScoreCacheKey::new(user_id, kind), now)
    }

    /// Current invalidation generation for `user_id`
    #[must_use]
    pub fn generation(&self, user_id: Uuid) -> u64 {
        self.generations.get(&user_id).map_or(0, |g| *g.value())
    }

    /// Drop every cached score for `user_id`
    ///
    /// Call after each intake or sleep write for the user. Computations that
    /// started before this call will not repopulate the cache.
    pub fn invalidate(&self, user_id: Uuid) {
        {
            let mut generation = self.generations.entry(user_id).or_insert(0);
            *generation = generation.wrapping_add(1);
        }
        self.clear_cached(user_id);
    }

    fn store(&self, key: ScoreCacheKey, result: &ScoreResult, generation: u64) {
        let user_id = key.user_id;
        if self.generation(user_id) != generation {
            debug!(cache.key = %key, "Data changed during computation, not caching");
            return;
        }
        if let Err(e) = self.cache.set(key, result.clone()) {
            warn!(cache.key = %key, error = %e, "Score cache write failed");
            return;
        }
        // An invalidation may have landed between the check and the write
        if self.generation(user_id) != generation {
            self.clear_cached(user_id);
        }
    }

    fn clear_cached(&self, user_id: Uuid) {
        if let Err(e) = self.cache.clear(user_id) {
            warn!(user.id = %user_id, error = %e, "Score cache invalidation failed");
        }
    }

    fn cached(&self, key: &ScoreCacheKey, now: DateTime<Utc>) -> Option<ScoreResult> {
        match self.cache.get(key) {
            Ok(Some(result)) if result.is_fresh_at(now) => {
                debug!(cache.key = %key, "Serving cached score");
                Some(result)
            }
            Ok(_) => None,
            Err(e) => {
                warn!(cache.key = %key, error = %e, "Score cache read failed, recomputing");
                None
            }
        }
    }

    fn compute(&self, kind: ScoreKind, request: &ScoreRequest, now: DateTime<Utc>) -> ScoreResult {
        let valid_until = now + self.config.cache_ttl();

        let Some(profile) = request.profile.as_ref() else {
            debug!(score.kind = %kind, "No profile supplied, returning zero score");
            return ScoreResult::zero(kind, now, valid_until);
        };
        if let Err(e) = profile.validate() {
            warn!(user.id = %profile.user_id, error = %e, "Unusable profile, returning zero score");
            return ScoreResult::zero(kind, now, valid_until);
        }

        let report = filter_intakes(&request.intakes, now, &self.config);
        let intakes = report.accepted.as_slice();
        let half_life_hours = personalized_half_life(profile, &self.config);
        let current_level_mg = current_level(intakes, half_life_hours, now);
        let peak_level_mg = peak_level(intakes, half_life_hours, now);
        let last_night = self.last_night_sleep(profile, request.last_night_sleep_hours);

        let (score, factors) = match kind {
            ScoreKind::Focus => {
                let factors = self.focus_factors(
                    profile,
                    intakes,
                    half_life_hours,
                    current_level_mg,
                    last_night,
                    now,
                );
                (compose_focus(&factors), ScoreFactors::Focus(factors))
            }
            ScoreKind::CrashRisk => {
                let factors = self.crash_risk_factors(
                    profile,
                    current_level_mg,
                    peak_level_mg,
                    last_night,
                    now,
                );
                (compose_crash_risk(&factors), ScoreFactors::CrashRisk(factors))
            }
        };

        debug!(
            user.id = %profile.user_id,
            score.kind = %kind,
            score.value = score,
            intakes.dropped = report.dropped,
            caffeine.current_mg = current_level_mg,
            "Computed score"
        );

        ScoreResult {
            kind,
            score,
            level: ScoreLevel::classify(kind, score),
            factors,
            half_life_hours,
            current_level_mg,
            peak_level_mg,
            valid_until,
            computed_at: now,
        }
    }

    /// Supplied sleep when plausible, else the profile average, else the baseline
    fn last_night_sleep(&self, profile: &UserProfile, supplied: Option<f64>) -> f64 {
        match supplied {
            Some(hours) if hours.is_finite() => hours.clamp(0.0, 24.0),
            _ if profile.average_sleep_hours > 0.0 => profile.average_sleep_hours,
            _ => self.config.baseline_sleep_hours,
        }
    }

    fn focus_factors(
        &self,
        profile: &UserProfile,
        intakes: &[IntakeRecord],
        half_life_hours: f64,
        current_level_mg: f64,
        last_night_sleep_hours: f64,
        now: DateTime<Utc>,
    ) -> FocusFactors {
        let threshold = focus::tolerance_threshold_mg(profile, &self.config);
        let rate = focus::rising_rate_mg_per_min(intakes, half_life_hours, now);
        let debt = shared::sleep_debt_hours(profile, last_night_sleep_hours, now, &self.config);
        let circadian =
            shared::circadian_factor(shared::local_hour(now, profile.utc_offset_minutes));

        FocusFactors {
            level: focus::level_factor(current_level_mg, threshold),
            rising_rate: focus::rising_rate_factor(rate),
            tolerance: shared::tolerance_factor(profile),
            capacity: focus::focus_capacity_factor(debt, circadian, profile.age_years),
            activity: focus::current_activity_factor(intakes, half_life_hours, now, &self.config),
        }
        .clamped()
    }

    fn crash_risk_factors(
        &self,
        profile: &UserProfile,
        current_level_mg: f64,
        peak_level_mg: f64,
        last_night_sleep_hours: f64,
        now: DateTime<Utc>,
    ) -> CrashRiskFactors {
        let debt = shared::sleep_debt_hours(profile, last_night_sleep_hours, now, &self.config);
        let circadian =
            shared::circadian_factor(shared::local_hour(now, profile.utc_offset_minutes));

        CrashRiskFactors {
            delta: crash::delta_factor(current_level_mg, peak_level_mg),
            sleep_debt: crash::sleep_debt_risk_factor(debt),
            tolerance: crash::tolerance_sensitivity_factor(shared::tolerance_factor(profile)),
            metabolic: crash::metabolic_factor(shared::health_adjustment(profile)),
            circadian: crash::circadian_risk_factor(circadian),
        }
        .clamped()
    }
}
