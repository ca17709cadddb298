// ABOUTME: Core types and constants for the CaffScore caffeine scoring engine
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # CaffScore Core
//!
//! Foundation crate providing shared types and constants for the CaffScore
//! scoring engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Physiological, validation, and cache constants
//! - **models**: Value objects handed to the engine (`UserProfile`, `IntakeRecord`, `SleepSample`)

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (profile, intake, sleep)
pub mod models;
