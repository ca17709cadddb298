// ABOUTME: Cache-related constants for score result TTL and capacity
// ABOUTME: Default TTL, capacity, and key namespace for the in-memory score cache
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Score result cache TTL in milliseconds (1 second)
pub const TTL_SCORE_RESULT_MS: i64 = 1_000;

/// Default maximum cache entries for the in-memory score cache
pub const DEFAULT_CACHE_MAX_ENTRIES: usize = 10_000;

/// Cache key prefix for namespacing
pub const CACHE_KEY_PREFIX: &str = "caffscore:score:";
