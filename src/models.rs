// ABOUTME: Workout session models including WorkoutSession, ExerciseLog, and SetLog
// ABOUTME: Input data types consumed by every analytics engine in the crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repforge Contributors

//! Core data model for workout histories.
//!
//! A [`WorkoutSession`] is one training occasion; it owns an ordered list of
//! [`ExerciseLog`]s, which in turn own ordered [`SetLog`]s. All analytics in
//! this crate recompute from a `&[WorkoutSession]` slice on every call - the
//! model carries no derived or cached values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::intelligence::physiological_constants::performance::EPLEY_REP_DIVISOR;

/// Lifecycle state of a workout session
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SessionStatus {
    /// Session has been started but not finished
    InProgress,
    /// Session was explicitly completed (`completed_at` is set)
    Completed,
    /// Session is on hold and may be resumed
    Paused,
}

/// Broad classification of an exercise
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseType {
    /// Resistance training (barbell, dumbbell, machine, bodyweight)
    Strength,
    /// Cardiovascular work (rower, bike, run intervals)
    Cardio,
    /// Stretching and range-of-motion work
    Flexibility,
    /// Stability and balance work
    Balance,
}

/// Difficulty rating of an exercise
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Suitable for new trainees
    Beginner,
    /// Requires some training experience
    Intermediate,
    /// Requires significant training experience
    Advanced,
}

/// Static descriptor of an exercise, embedded in each log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Unique identifier for the exercise
    pub id: String,
    /// Display name (e.g., "Barbell Bench Press")
    pub name: String,
    /// Free-text muscle group labels; normalized by the analytics layer
    /// before any grouping (see [`crate::intelligence::muscle_groups`])
    pub muscle_groups: Vec<String>,
    /// Required equipment, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment: Option<String>,
    /// Broad exercise classification
    pub exercise_type: ExerciseType,
    /// Difficulty rating
    pub difficulty: Difficulty,
}

/// One working set within an exercise log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetLog {
    /// 1-based position within the exercise
    pub set_number: u32,
    /// Repetitions performed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    /// Weight moved in pounds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Duration in seconds (timed sets such as planks)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// Rate of Perceived Exertion, 1-10
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpe: Option<u8>,
    /// Rest taken after the set in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_time: Option<u32>,
    /// When the set was completed (UTC)
    pub completed_at: DateTime<Utc>,
}

impl SetLog {
    /// Training volume of this set (`reps * weight`).
    ///
    /// A set missing either reps or weight contributes zero. Malformed
    /// numerics (non-finite or negative weight) also contribute zero rather
    /// than skewing aggregates.
    #[must_use]
    pub fn volume(&self) -> f64 {
        match (self.reps, self.effective_weight()) {
            (Some(reps), Some(weight)) => f64::from(reps) * weight,
            _ => 0.0,
        }
    }

    /// Estimated one-rep max for this set using the Epley formula.
    ///
    /// `reps == 1` returns the weight unchanged; otherwise
    /// `weight * (1 + reps/30)`. Returns `None` when the set has no usable
    /// weight or no reps.
    #[must_use]
    pub fn estimated_one_rep_max(&self) -> Option<f64> {
        let weight = self.effective_weight()?;
        let reps = self.reps.filter(|r| *r > 0)?;
        if reps == 1 {
            Some(weight)
        } else {
            Some((f64::from(reps) / EPLEY_REP_DIVISOR).mul_add(weight, weight))
        }
    }

    /// Weight usable in aggregate math: finite and non-negative, else `None`
    #[must_use]
    pub fn effective_weight(&self) -> Option<f64> {
        match self.weight {
            Some(weight) if weight.is_finite() && weight >= 0.0 => Some(weight),
            Some(weight) => {
                warn!(set_number = self.set_number, weight, "ignoring malformed set weight");
                None
            }
            None => None,
        }
    }
}

/// One exercise's performance within a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseLog {
    /// Identifier of the exercise performed
    pub exercise_id: String,
    /// Embedded exercise descriptor
    pub exercise: Exercise,
    /// Ordered completed sets (empty if the exercise was skipped)
    pub completed_sets: Vec<SetLog>,
    /// True when the exercise was skipped; a skipped log contributes nothing
    /// to any derived metric regardless of `completed_sets` contents
    pub skipped: bool,
    /// Free-text notes, not used in computation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ExerciseLog {
    /// Sets that count toward analytics.
    ///
    /// Single choke point for the skipped-exercise invariant: a skipped log
    /// exposes an empty slice even when `completed_sets` is populated.
    #[must_use]
    pub fn effective_sets(&self) -> &[SetLog] {
        if self.skipped {
            &[]
        } else {
            &self.completed_sets
        }
    }

    /// Training volume across all effective sets
    #[must_use]
    pub fn total_volume(&self) -> f64 {
        self.effective_sets().iter().map(SetLog::volume).sum()
    }
}

/// One training occasion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSession {
    /// Opaque session identifier
    pub id: String,
    /// Owning user
    pub user_id: Uuid,
    /// When the session was started (UTC)
    pub started_at: DateTime<Utc>,
    /// When the session was completed; absent while in progress
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    /// Lifecycle state
    pub status: SessionStatus,
    /// Total duration in seconds, set on completion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_duration: Option<u32>,
    /// Ordered exercise logs
    pub exercises: Vec<ExerciseLog>,
}

impl WorkoutSession {
    /// Whether this session qualifies for analytics: explicitly completed
    /// with a completion timestamp
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == SessionStatus::Completed && self.completed_at.is_some()
    }

    /// Training volume across all non-skipped exercises
    #[must_use]
    pub fn total_volume(&self) -> f64 {
        self.exercises.iter().map(ExerciseLog::total_volume).sum()
    }
}
