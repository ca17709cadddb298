// ABOUTME: Configuration management module for the scoring host
// ABOUTME: Re-exports engine tunables and the environment-driven host configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for CaffScore
//!
//! - **Environment**: host configuration from environment variables
//! - **Scoring**: engine tunables, re-exported from `caffscore-intelligence`

/// Environment and host configuration
pub mod environment;

pub use caffscore_intelligence::{ConfigError, ScoringConfig};
pub use environment::EngineConfig;
