// ABOUTME: Analytics engines deriving recovery, activation, records, and progress views
// ABOUTME: Pure, synchronous functions over a completed workout-session history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repforge Contributors

//! # Intelligence Module
//!
//! The analytics core of the crate: stateless, pure functions that derive
//! display-ready views from a `&[WorkoutSession]` history. Every function
//! takes "now" as an explicit parameter - nothing in here reads the wall
//! clock, performs I/O, or keeps state between calls. Callers needing a
//! stable snapshot across related calls capture `Utc::now()` once and pass
//! it to each.
//!
//! Data flows one way:
//!
//! ```text
//! sessions -> muscle_groups (normalization)
//!          -> { recovery_calculator, activation_analyzer,
//!               personal_records, progress_tracker }
//!          -> recommendation_engine / presentation
//! ```

/// Session activation scoring (0-100 per muscle group)
pub mod activation_analyzer;
/// Muscle group normalization and base recovery lookup
pub mod muscle_groups;
/// Per-exercise personal records and performance series
pub mod personal_records;
/// Thresholds and constants shared by the engines
pub mod physiological_constants;
/// Streaks, weekly volume, training balance, and insights
pub mod progress_tracker;
/// Per-muscle time-decayed recovery percentages
pub mod recovery_calculator;
/// Ready / light / rest recommendation composition
pub mod recommendation_engine;

pub use activation_analyzer::{ActivationAnalyzer, ActivationLevel, MuscleActivation};
pub use personal_records::{
    PerformancePoint, PersonalRecords, RecordsEngine, SessionVolumeHighlight, SetHighlight,
    SortDirection, StrengthTrend,
};
pub use progress_tracker::{
    ConsistencyStats, InsightKind, ProgressTracker, TrainingInsight, WeeklyVolume,
};
pub use recommendation_engine::{RecommendationEngine, TrainingRecommendations};
pub use recovery_calculator::{MuscleRecoveryStatus, RecoveryCalculator, RecoveryState};
