// ABOUTME: Main library entry point for the Repforge analytics engine
// ABOUTME: Pure workout analytics: recovery, activation, records, and progress insights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repforge Contributors

#![deny(unsafe_code)]

//! # Repforge
//!
//! A strength-training analytics engine. Given a chronological history of
//! completed workout sessions, Repforge derives the views a training app
//! renders:
//!
//! - **Muscle recovery**: per-muscle time-decayed recovery percentages with
//!   volume-adjusted rest windows
//! - **Session activation**: 0-100 per-muscle scores for a single session
//! - **Personal records**: max weight, max reps, best set, estimated 1RM,
//!   highest-volume session, and strength trends per exercise
//! - **Progress and consistency**: streaks, weekly volume, training
//!   balance, and advisory insights
//! - **Recommendations**: ready / light / rest muscle-group lists
//!
//! All analytics are synchronous, pure, and side-effect-free: they read only
//! their parameters (including an explicit "now"), never the wall clock or
//! storage. Two calls with the same input produce identical output.
//!
//! ## Example
//!
//! ```rust
//! use chrono::Utc;
//! use repforge::config::IntelligenceConfig;
//! use repforge::intelligence::{RecommendationEngine, RecoveryCalculator};
//!
//! let sessions: Vec<repforge::models::WorkoutSession> = Vec::new();
//! let config = IntelligenceConfig::default();
//! let now = Utc::now();
//!
//! let recovery = RecoveryCalculator::calculate_recovery(&sessions, now, &config.recovery);
//! let recommendations = RecommendationEngine::compose(&recovery);
//! assert!(recommendations.ready_to_train.is_empty());
//! ```

/// Threshold configuration with environment overrides
pub mod config;
/// Error types for configuration and the repository boundary
pub mod errors;
/// Analytics engines (the computation core)
pub mod intelligence;
/// Structured logging setup for binaries
pub mod logging;
/// Workout session data model
pub mod models;
/// Session storage boundary
pub mod repository;

pub use errors::{AppError, AppResult, ConfigError};
pub use models::{
    Difficulty, Exercise, ExerciseLog, ExerciseType, SessionStatus, SetLog, WorkoutSession,
};
