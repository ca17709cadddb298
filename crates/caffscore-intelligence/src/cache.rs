// ABOUTME: Short-lived score result cache keyed by user and score kind
// ABOUTME: Pluggable store trait plus a sharded in-memory implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Score Result Cache
//!
//! The engine consults the cache before computing and stores every fresh
//! result with its `valid_until` instant. Hosts must call
//! [`ScoreCacheStore::clear`] (usually through the engine's `invalidate`)
//! whenever intake or sleep data changes for a user.
//!
//! Store failures never fail a score: the engine logs them and treats them
//! as a miss.

use caffscore_core::constants::cache::{CACHE_KEY_PREFIX, DEFAULT_CACHE_MAX_ENTRIES};
use caffscore_core::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::Serialize;
use serde_json::json;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

use crate::result::{ScoreKind, ScoreResult};

/// Cache key: one entry per user and score kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreCacheKey {
    /// Owner of the cached result
    pub user_id: Uuid,
    /// Which score is cached
    pub kind: ScoreKind,
}

impl ScoreCacheKey {
    /// Build a key
    #[must_use]
    pub const fn new(user_id: Uuid, kind: ScoreKind) -> Self {
        Self { user_id, kind }
    }
}

impl fmt::Display for ScoreCacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{CACHE_KEY_PREFIX}{}:{}", self.user_id, self.kind)
    }
}

/// Storage backend for cached score results
///
/// Implementations must give at most one writer per key at a time.
pub trait ScoreCacheStore: Send + Sync {
    /// Fetch the entry for `key`, fresh or not
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    fn get(&self, key: &ScoreCacheKey) -> AppResult<Option<ScoreResult>>;

    /// Store `result` under `key`, replacing any previous entry
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    fn set(&self, key: ScoreCacheKey, result: ScoreResult) -> AppResult<()>;

    /// Drop every entry for `user_id`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    fn clear(&self, user_id: Uuid) -> AppResult<()>;

    /// Drop every entry
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    fn clear_all(&self) -> AppResult<()>;
}

/// Hit/miss counters for the in-memory cache
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct ScoreCacheStats {
    /// Entries currently held
    pub entries: usize,
    /// Lookups that found an entry
    pub hits: u64,
    /// Lookups that found nothing
    pub misses: u64,
}

/// Thread-safe in-memory store backed by a sharded map
///
/// Shard locks serialize writers per key. When the store is full, expired
/// entries are purged before a new key is admitted.
#[derive(Debug)]
pub struct InMemoryScoreCache {
    entries: DashMap<ScoreCacheKey, ScoreResult>,
    max_entries: usize,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl Default for InMemoryScoreCache {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryScoreCache {
    /// Create a store holding up to the default number of entries
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_MAX_ENTRIES)
    }

    /// Create a store holding up to `max_entries`
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: DashMap::new(),
            max_entries: max_entries.max(1),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Remove entries whose freshness window ended at or before `now`
    pub fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, result| !result.is_expired_at(now));
        before.saturating_sub(self.entries.len())
    }

    /// Current counters
    #[must_use]
    pub fn stats(&self) -> ScoreCacheStats {
        ScoreCacheStats {
            entries: self.entries.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl ScoreCacheStore for InMemoryScoreCache {
    fn get(&self, key: &ScoreCacheKey) -> AppResult<Option<ScoreResult>> {
        let found = self.entries.get(key).map(|entry| entry.value().clone());
        let counter = if found.is_some() {
            &self.hits
        } else {
            &self.misses
        };
        counter.fetch_add(1, Ordering::Relaxed);
        Ok(found)
    }

    fn set(&self, key: ScoreCacheKey, result: ScoreResult) -> AppResult<()> {
        if !self.entries.contains_key(&key) && self.entries.len() >= self.max_entries {
            // Expiry follows the caller's clock, not the wall clock
            self.purge_expired(result.computed_at);
            if self.entries.len() >= self.max_entries {
                return Err(AppError::storage(format!(
                    "score cache full ({} entries), not storing {key}",
                    self.max_entries
                ))
                .with_user_id(key.user_id)
                .with_details(json!({ "kind": key.kind, "capacity": self.max_entries })));
            }
        }
        self.entries.insert(key, result);
        Ok(())
    }

    fn clear(&self, user_id: Uuid) -> AppResult<()> {
        for kind in ScoreKind::ALL {
            self.entries.remove(&ScoreCacheKey::new(user_id, kind));
        }
        Ok(())
    }

    fn clear_all(&self) -> AppResult<()> {
        self.entries.clear();
        Ok(())
    }
}
