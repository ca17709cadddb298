// ABOUTME: Domain service layer between data providers and the scoring engine
// ABOUTME: Orchestrates fetch, score, and cache invalidation for hosts and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services are the only place where async data access meets the synchronous
//! engine. Every write that goes through a service invalidates the affected
//! user's cached scores.

/// Score orchestration: fetch, compute, invalidate
pub mod score_service;

pub use score_service::ScoreService;
