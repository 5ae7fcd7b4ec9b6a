// ABOUTME: Per-exercise personal records and performance time-series engine
// ABOUTME: Max weight/reps/set-score, Epley 1RM estimate, session volume, and strength trends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repforge Contributors

//! Performance and records engine.
//!
//! Everything here is keyed by exercise id and derived from qualifying
//! performances: a session counts only when it is completed and contains a
//! non-skipped log for the exercise with at least one completed set.
//! Sessions without a match are excluded, never zero-filled. Record ties
//! keep the earliest occurrence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::PerformanceConfig;
use crate::models::{ExerciseLog, SetLog, WorkoutSession};

/// A single record-holding set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetHighlight {
    /// Weight moved, when logged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Reps performed, when logged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    /// When the set was completed
    pub date: DateTime<Utc>,
}

impl SetHighlight {
    fn from_set(set: &SetLog) -> Self {
        Self {
            weight: set.effective_weight(),
            reps: set.reps,
            date: set.completed_at,
        }
    }
}

/// The session with the highest total volume for an exercise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionVolumeHighlight {
    /// Total `reps * weight` across the session's sets for this exercise
    pub volume: f64,
    /// Completion time of the session
    pub date: DateTime<Utc>,
}

/// Personal records for one exercise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalRecords {
    /// Exercise these records belong to
    pub exercise_id: String,
    /// Set with the highest weight ever logged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_weight: Option<SetHighlight>,
    /// Set with the most reps ever logged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_reps: Option<SetHighlight>,
    /// Set with the highest `weight * reps` score
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_set: Option<SetHighlight>,
    /// Highest Epley one-rep-max estimate across all sets, rounded to the
    /// nearest pound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_one_rep_max: Option<f64>,
    /// Session with the highest total volume for this exercise
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highest_volume_session: Option<SessionVolumeHighlight>,
    /// Number of qualifying performances logged (consistency measure)
    pub sessions_logged: u32,
}

impl PersonalRecords {
    /// Empty record block for an exercise with no qualifying history
    #[must_use]
    pub fn empty(exercise_id: &str) -> Self {
        Self {
            exercise_id: exercise_id.to_owned(),
            max_weight: None,
            max_reps: None,
            best_set: None,
            estimated_one_rep_max: None,
            highest_volume_session: None,
            sessions_logged: 0,
        }
    }
}

/// One point in an exercise's performance time series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformancePoint {
    /// Completion time of the session
    pub date: DateTime<Utc>,
    /// Heaviest usable weight in the session's sets (0 when none logged)
    pub max_weight: f64,
    /// Mean reps per set, counting absent reps as zero
    pub avg_reps: f64,
    /// Total `reps * weight` across the session's sets
    pub total_volume: f64,
}

/// Sort direction for performance series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Oldest first (charting)
    Ascending,
    /// Newest first (history lists)
    Descending,
}

/// Strength trend comparing recent performances with the preceding window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrengthTrend {
    /// Percent change of recent average max weight over the older average
    pub percent_change: f64,
    /// Average max weight across the recent window
    pub recent_avg: f64,
    /// Average max weight across the older window
    pub previous_avg: f64,
    /// Total qualifying performances behind the trend
    pub data_points: usize,
}

/// Stateless records engine
pub struct RecordsEngine;

impl RecordsEngine {
    /// Compute personal records for an exercise across the full history
    #[must_use]
    pub fn calculate_records(exercise_id: &str, sessions: &[WorkoutSession]) -> PersonalRecords {
        let mut records = PersonalRecords::empty(exercise_id);

        for (date, log) in Self::qualifying_performances(exercise_id, sessions) {
            records.sessions_logged += 1;

            let session_volume = log.total_volume();
            let beats_volume = records
                .highest_volume_session
                .as_ref()
                .is_none_or(|best| session_volume > best.volume);
            if beats_volume {
                records.highest_volume_session = Some(SessionVolumeHighlight {
                    volume: session_volume,
                    date,
                });
            }

            for set in log.effective_sets() {
                Self::update_set_records(&mut records, set);
            }
        }

        trace!(
            exercise_id,
            performances = records.sessions_logged,
            "records computed"
        );
        records
    }

    /// Fold one set into the running record block
    fn update_set_records(records: &mut PersonalRecords, set: &SetLog) {
        if let Some(weight) = set.effective_weight() {
            let beats = records
                .max_weight
                .as_ref()
                .and_then(|r| r.weight)
                .is_none_or(|best| weight > best);
            if beats {
                records.max_weight = Some(SetHighlight::from_set(set));
            }
        }

        if let Some(reps) = set.reps {
            let beats = records
                .max_reps
                .as_ref()
                .and_then(|r| r.reps)
                .is_none_or(|best| reps > best);
            if beats {
                records.max_reps = Some(SetHighlight::from_set(set));
            }
        }

        let score = set.volume();
        if score > 0.0 {
            let best_score = records
                .best_set
                .as_ref()
                .map_or(0.0, |r| r.weight.unwrap_or(0.0) * f64::from(r.reps.unwrap_or(0)));
            if score > best_score {
                records.best_set = Some(SetHighlight::from_set(set));
            }
        }

        if let Some(estimate) = set.estimated_one_rep_max() {
            let rounded = estimate.round();
            let beats = records
                .estimated_one_rep_max
                .is_none_or(|best| rounded > best);
            if beats {
                records.estimated_one_rep_max = Some(rounded);
            }
        }
    }

    /// Performance time series for an exercise.
    ///
    /// Finite and restartable: recomputed from the slice on every call.
    /// Direction is call-site specific - ascending for charts, descending
    /// for history lists.
    #[must_use]
    pub fn performance_series(
        exercise_id: &str,
        sessions: &[WorkoutSession],
        direction: SortDirection,
    ) -> Vec<PerformancePoint> {
        let mut points: Vec<PerformancePoint> =
            Self::qualifying_performances(exercise_id, sessions)
                .map(|(date, log)| Self::performance_point(date, log))
                .collect();

        match direction {
            SortDirection::Ascending => points.sort_by_key(|p| p.date),
            SortDirection::Descending => {
                points.sort_by_key(|p| std::cmp::Reverse(p.date));
            }
        }
        points
    }

    /// Strength trend for an exercise: the most recent `trend_window`
    /// performances against the preceding window.
    ///
    /// Returns `None` with fewer than two performances, or when there is no
    /// older bucket to compare against.
    #[must_use]
    pub fn strength_trend(
        exercise_id: &str,
        sessions: &[WorkoutSession],
        config: &PerformanceConfig,
    ) -> Option<StrengthTrend> {
        let series = Self::performance_series(exercise_id, sessions, SortDirection::Ascending);
        if series.len() < config.min_trend_performances {
            return None;
        }

        let window = config.trend_window.min(series.len());
        let recent = &series[series.len() - window..];
        let older_start = series.len().saturating_sub(window * 2);
        let older = &series[older_start..series.len() - window];
        if older.is_empty() {
            return None;
        }

        let recent_avg = Self::avg_max_weight(recent);
        let previous_avg = Self::avg_max_weight(older);
        if previous_avg == 0.0 {
            return None;
        }

        Some(StrengthTrend {
            percent_change: (recent_avg - previous_avg) / previous_avg * 100.0,
            recent_avg,
            previous_avg,
            data_points: series.len(),
        })
    }

    /// Qualifying `(completion date, log)` pairs for an exercise, in
    /// chronological order
    fn qualifying_performances<'a>(
        exercise_id: &'a str,
        sessions: &'a [WorkoutSession],
    ) -> impl Iterator<Item = (DateTime<Utc>, &'a ExerciseLog)> {
        let mut completed: Vec<&WorkoutSession> =
            sessions.iter().filter(|s| s.is_completed()).collect();
        completed.sort_by_key(|s| s.completed_at);

        completed.into_iter().filter_map(move |session| {
            let date = session.completed_at?;
            let log = session
                .exercises
                .iter()
                .find(|log| log.exercise_id == exercise_id && !log.effective_sets().is_empty())?;
            Some((date, log))
        })
    }

    fn performance_point(date: DateTime<Utc>, log: &ExerciseLog) -> PerformancePoint {
        let sets = log.effective_sets();
        let max_weight = sets
            .iter()
            .filter_map(SetLog::effective_weight)
            .fold(0.0_f64, f64::max);
        let total_reps: u32 = sets.iter().map(|s| s.reps.unwrap_or(0)).sum();
        let avg_reps = if sets.is_empty() {
            0.0
        } else {
            f64::from(total_reps) / sets.len() as f64
        };

        PerformancePoint {
            date,
            max_weight,
            avg_reps,
            total_volume: log.total_volume(),
        }
    }

    fn avg_max_weight(points: &[PerformancePoint]) -> f64 {
        if points.is_empty() {
            return 0.0;
        }
        points.iter().map(|p| p.max_weight).sum::<f64>() / points.len() as f64
    }
}
