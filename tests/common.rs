// ABOUTME: Shared test fixtures for building workout sessions, logs, and sets
// ABOUTME: Reduces duplication across the analytics integration tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repforge Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test fixtures for `repforge` integration tests.

use chrono::{DateTime, Utc};
use repforge::models::{
    Difficulty, Exercise, ExerciseLog, ExerciseType, SessionStatus, SetLog, WorkoutSession,
};
use uuid::Uuid;

/// Fixed user id so fixtures are deterministic
pub fn test_user() -> Uuid {
    Uuid::nil()
}

/// A completed set with the given reps and weight
pub fn set(set_number: u32, reps: Option<u32>, weight: Option<f64>, at: DateTime<Utc>) -> SetLog {
    SetLog {
        set_number,
        reps,
        weight,
        duration: None,
        rpe: None,
        rest_time: None,
        completed_at: at,
    }
}

/// `count` identical completed sets of `reps x weight`
pub fn sets_of(count: u32, reps: u32, weight: f64, at: DateTime<Utc>) -> Vec<SetLog> {
    (1..=count)
        .map(|n| set(n, Some(reps), Some(weight), at))
        .collect()
}

/// Exercise descriptor targeting the given muscle labels
pub fn exercise(id: &str, muscles: &[&str]) -> Exercise {
    Exercise {
        id: id.to_owned(),
        name: id.to_owned(),
        muscle_groups: muscles.iter().map(|m| (*m).to_owned()).collect(),
        equipment: None,
        exercise_type: ExerciseType::Strength,
        difficulty: Difficulty::Intermediate,
    }
}

/// A non-skipped exercise log with the given completed sets
pub fn log(id: &str, muscles: &[&str], completed_sets: Vec<SetLog>) -> ExerciseLog {
    ExerciseLog {
        exercise_id: id.to_owned(),
        exercise: exercise(id, muscles),
        completed_sets,
        skipped: false,
        notes: None,
    }
}

/// A skipped exercise log; its sets must contribute nothing anywhere
pub fn skipped_log(id: &str, muscles: &[&str], completed_sets: Vec<SetLog>) -> ExerciseLog {
    ExerciseLog {
        skipped: true,
        ..log(id, muscles, completed_sets)
    }
}

/// A completed session finishing at `completed_at`
pub fn completed_session(
    id: &str,
    completed_at: DateTime<Utc>,
    exercises: Vec<ExerciseLog>,
) -> WorkoutSession {
    WorkoutSession {
        id: id.to_owned(),
        user_id: test_user(),
        started_at: completed_at - chrono::Duration::hours(1),
        completed_at: Some(completed_at),
        status: SessionStatus::Completed,
        total_duration: Some(3600),
        exercises,
    }
}

/// An in-progress session; analytics must ignore it entirely
pub fn in_progress_session(
    id: &str,
    started_at: DateTime<Utc>,
    exercises: Vec<ExerciseLog>,
) -> WorkoutSession {
    WorkoutSession {
        id: id.to_owned(),
        user_id: test_user(),
        started_at,
        completed_at: None,
        status: SessionStatus::InProgress,
        total_duration: None,
        exercises,
    }
}
