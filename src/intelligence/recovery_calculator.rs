// ABOUTME: Per-muscle recovery percentage calculation from completed session history
// ABOUTME: Time-decay against a base-hours table with volume-adjusted recovery windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repforge Contributors

//! Muscle recovery model.
//!
//! For every muscle group worked in the history, computes how much of its
//! rest window has elapsed since it was last trained. The window is a fixed
//! per-muscle baseline (see [`super::muscle_groups::base_recovery_hours`])
//! stretched by a volume multiplier when the last session hit the muscle
//! with many sets. Muscles never worked do not appear in the output - the
//! presentation layer decides what to render for them.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::muscle_groups;
use crate::config::RecoveryConfig;
use crate::models::WorkoutSession;

/// Recovery classification for display
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryState {
    /// At or above the recovered threshold; ready for full training
    Recovered,
    /// Between the partial and recovered thresholds; light work advisable
    Partial,
    /// Below the partial threshold; still recovering
    Recovering,
}

/// Derived recovery status for one muscle group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MuscleRecoveryStatus {
    /// Canonical muscle group name
    pub muscle_group: String,
    /// Elapsed share of the adjusted recovery window, clamped to 0-100
    pub recovery_percent: u8,
    /// Whole hours remaining until fully recovered (0 when recovered)
    pub hours_until_recovered: u32,
    /// Classification derived from `recovery_percent`
    pub status: RecoveryState,
    /// Completed sets for this muscle in the most recent qualifying session
    pub total_sets: u32,
    /// Completion time of the most recent qualifying session
    pub last_workout_date: DateTime<Utc>,
}

/// Stateless recovery calculator
pub struct RecoveryCalculator;

impl RecoveryCalculator {
    /// Compute recovery status for every muscle group worked in the history.
    ///
    /// Only sessions with completed status and a completion timestamp count.
    /// Within a session, set counts from all non-skipped exercises hitting
    /// the same normalized muscle are summed; across sessions, the most
    /// recent `(date, set_count)` pair wins, with same-instant ties broken
    /// by whichever session sorts last. Output is sorted ascending by
    /// recovery percent so the muscles needing the most rest come first.
    #[must_use]
    pub fn calculate_recovery(
        sessions: &[WorkoutSession],
        now: DateTime<Utc>,
        config: &RecoveryConfig,
    ) -> Vec<MuscleRecoveryStatus> {
        let last_worked = Self::last_worked_per_muscle(sessions);
        debug!(muscles = last_worked.len(), "computed last-worked map");

        let mut statuses: Vec<MuscleRecoveryStatus> = last_worked
            .into_iter()
            .map(|(muscle, (date, set_count))| {
                Self::status_for(&muscle, date, set_count, now, config)
            })
            .collect();

        statuses.sort_by(|a, b| {
            a.recovery_percent
                .cmp(&b.recovery_percent)
                .then_with(|| a.muscle_group.cmp(&b.muscle_group))
        });
        statuses
    }

    /// Most recent `(completion date, session set count)` per normalized
    /// muscle group
    fn last_worked_per_muscle(
        sessions: &[WorkoutSession],
    ) -> HashMap<String, (DateTime<Utc>, u32)> {
        let mut completed: Vec<&WorkoutSession> =
            sessions.iter().filter(|s| s.is_completed()).collect();
        // Chronological order so a later session always overwrites an
        // earlier one, including same-instant ties.
        completed.sort_by_key(|s| s.completed_at);

        let mut last_worked: HashMap<String, (DateTime<Utc>, u32)> = HashMap::new();
        for session in completed {
            let Some(date) = session.completed_at else {
                continue;
            };
            for (muscle, set_count) in Self::session_muscle_sets(session) {
                last_worked.insert(muscle, (date, set_count));
            }
        }
        last_worked
    }

    /// Completed-set counts per normalized muscle for one session
    pub(crate) fn session_muscle_sets(session: &WorkoutSession) -> HashMap<String, u32> {
        let mut sets_by_muscle: HashMap<String, u32> = HashMap::new();
        for log in &session.exercises {
            let sets = log.effective_sets().len() as u32;
            if sets == 0 {
                continue;
            }
            for label in &log.exercise.muscle_groups {
                let muscle = muscle_groups::normalize(label);
                *sets_by_muscle.entry(muscle).or_insert(0) += sets;
            }
        }
        sets_by_muscle
    }

    /// Build one status row from a muscle's last-worked pair
    fn status_for(
        muscle: &str,
        last_workout_date: DateTime<Utc>,
        total_sets: u32,
        now: DateTime<Utc>,
        config: &RecoveryConfig,
    ) -> MuscleRecoveryStatus {
        let base_hours = muscle_groups::base_recovery_hours(muscle);
        let multiplier = Self::volume_multiplier(total_sets, config);
        let adjusted_hours = base_hours * multiplier;

        let hours_since = (now - last_workout_date).num_seconds() as f64 / 3600.0;
        let recovery_percent =
            (hours_since / adjusted_hours * 100.0).round().clamp(0.0, 100.0) as u8;
        let hours_until_recovered = (adjusted_hours - hours_since).round().max(0.0) as u32;

        MuscleRecoveryStatus {
            muscle_group: muscle.to_owned(),
            recovery_percent,
            hours_until_recovered,
            status: Self::classify(recovery_percent, config),
            total_sets,
            last_workout_date,
        }
    }

    /// Recovery-window multiplier for the session's set count
    #[must_use]
    pub fn volume_multiplier(set_count: u32, config: &RecoveryConfig) -> f64 {
        if set_count > config.high_volume_set_threshold {
            config.high_volume_multiplier
        } else if set_count > config.moderate_volume_set_threshold {
            config.moderate_volume_multiplier
        } else {
            1.0
        }
    }

    /// Classify a recovery percentage
    #[must_use]
    pub fn classify(recovery_percent: u8, config: &RecoveryConfig) -> RecoveryState {
        if recovery_percent >= config.recovered_threshold {
            RecoveryState::Recovered
        } else if recovery_percent >= config.partial_threshold {
            RecoveryState::Partial
        } else {
            RecoveryState::Recovering
        }
    }
}
