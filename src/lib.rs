// ABOUTME: Main library entry point for the CaffScore scoring host
// ABOUTME: Wires configuration, logging, data providers, and the score service around the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # CaffScore
//!
//! Personalized caffeine focus and crash-risk scoring.
//!
//! The pure engine lives in `caffscore-intelligence` and its value types in
//! `caffscore-core`. This crate is the host side:
//!
//! - **Config**: environment-driven engine and logging configuration
//! - **Logging**: structured `tracing` setup
//! - **Providers**: async data-provider seam with an in-memory implementation
//! - **Services**: fetch, score, and invalidate in one place
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use caffscore::config::EngineConfig;
//! use caffscore::providers::InMemoryDataProvider;
//! use caffscore::services::ScoreService;
//! use caffscore_intelligence::ScoringEngine;
//! use std::sync::Arc;
//! use uuid::Uuid;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = EngineConfig::from_env()?;
//! let engine = Arc::new(ScoringEngine::new(config.scoring.clone()));
//! let service = ScoreService::new(Arc::new(InMemoryDataProvider::new()), engine);
//!
//! let focus = service.focus(Uuid::new_v4(), None).await?;
//! println!("Focus: {}", focus.score);
//! # Ok(())
//! # }
//! ```

/// Host configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Score data providers
pub mod providers;

/// Score orchestration services
pub mod services;

pub use caffscore_core::errors::{AppError, AppResult, ErrorCode};
