// ABOUTME: Aggregate progress engine: streaks, weekly volume, training balance, and insights
// ABOUTME: Threshold-driven advisory messages derived from the completed session history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repforge Contributors

//! Aggregate progress and consistency engine.
//!
//! The streak rule is intentionally loose: a completed session at position
//! `i` (0-indexed, most recent first) extends the streak only while its
//! whole-day distance from `now` is at most `i + 1`. This models "one
//! workout roughly every day" rather than literal calendar-day contiguity.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::muscle_groups;
use super::personal_records::RecordsEngine;
use super::recovery_calculator::RecoveryCalculator;
use crate::config::{ConsistencyConfig, PerformanceConfig};
use crate::models::WorkoutSession;

/// Consistency summary across the whole history
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsistencyStats {
    /// Consecutive recent sessions under the loose day-index rule
    pub current_streak: u32,
    /// Completed sessions in the current calendar month
    pub workouts_this_month: u32,
    /// Weekday with the most completed sessions, when any exist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_active_weekday: Option<Weekday>,
    /// Completed sessions divided by the weeks the history spans
    pub avg_workouts_per_week: f64,
}

/// Volume total for one Monday-start week
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyVolume {
    /// Monday of the week
    pub week_start: NaiveDate,
    /// Sum of `reps * weight` across the week's sessions
    pub volume: f64,
}

/// Advisory classification of an insight
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    /// Encouraging signal
    Positive,
    /// Something worth attention
    Warning,
}

/// One advisory message; never used for control flow elsewhere
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingInsight {
    /// Advisory classification
    pub kind: InsightKind,
    /// Human-readable message
    pub message: String,
}

/// Stateless progress tracker
pub struct ProgressTracker;

impl ProgressTracker {
    /// Consistency summary for the history at `now`
    #[must_use]
    pub fn calculate_consistency(
        sessions: &[WorkoutSession],
        now: DateTime<Utc>,
    ) -> ConsistencyStats {
        let mut completed: Vec<&WorkoutSession> =
            sessions.iter().filter(|s| s.is_completed()).collect();
        if completed.is_empty() {
            return ConsistencyStats::default();
        }
        completed.sort_by_key(|s| std::cmp::Reverse(s.completed_at));

        ConsistencyStats {
            current_streak: Self::current_streak(&completed, now),
            workouts_this_month: Self::workouts_this_month(&completed, now),
            most_active_weekday: Self::most_active_weekday(&completed),
            avg_workouts_per_week: Self::avg_workouts_per_week(&completed, now),
        }
    }

    /// Streak under the day-index rule; `completed` must be sorted most
    /// recent first
    fn current_streak(completed: &[&WorkoutSession], now: DateTime<Utc>) -> u32 {
        let mut streak = 0;
        for (index, session) in completed.iter().enumerate() {
            let Some(date) = session.completed_at else {
                break;
            };
            let days_since = (now - date).num_days();
            if days_since <= index as i64 + 1 {
                streak += 1;
            } else {
                break;
            }
        }
        streak
    }

    fn workouts_this_month(completed: &[&WorkoutSession], now: DateTime<Utc>) -> u32 {
        completed
            .iter()
            .filter_map(|s| s.completed_at)
            .filter(|date| date.year() == now.year() && date.month() == now.month())
            .count() as u32
    }

    fn most_active_weekday(completed: &[&WorkoutSession]) -> Option<Weekday> {
        let mut counts: HashMap<Weekday, u32> = HashMap::new();
        for date in completed.iter().filter_map(|s| s.completed_at) {
            *counts.entry(date.weekday()).or_insert(0) += 1;
        }
        // Iterate Monday..Sunday so ties resolve deterministically.
        [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ]
        .into_iter()
        .filter(|day| counts.contains_key(day))
        .max_by_key(|day| counts.get(day).copied().unwrap_or(0))
    }

    fn avg_workouts_per_week(completed: &[&WorkoutSession], now: DateTime<Utc>) -> f64 {
        let Some(earliest) = completed.iter().filter_map(|s| s.completed_at).min() else {
            return 0.0;
        };
        let days_spanned = (now - earliest).num_days().max(0);
        let weeks = (days_spanned as f64 / 7.0).ceil().max(1.0);
        completed.len() as f64 / weeks
    }

    /// Per-week volume totals, oldest week first
    #[must_use]
    pub fn weekly_volume(sessions: &[WorkoutSession]) -> Vec<WeeklyVolume> {
        let mut by_week: HashMap<NaiveDate, f64> = HashMap::new();
        for session in sessions.iter().filter(|s| s.is_completed()) {
            let Some(date) = session.completed_at else {
                continue;
            };
            let week_start = Self::monday_of(date.date_naive());
            *by_week.entry(week_start).or_insert(0.0) += session.total_volume();
        }

        let mut weeks: Vec<WeeklyVolume> = by_week
            .into_iter()
            .map(|(week_start, volume)| WeeklyVolume { week_start, volume })
            .collect();
        weeks.sort_by_key(|w| w.week_start);
        weeks
    }

    /// Monday of the ISO week containing `date`
    fn monday_of(date: NaiveDate) -> NaiveDate {
        let days_from_monday = i64::from(date.weekday().num_days_from_monday());
        date - Duration::days(days_from_monday)
    }

    /// Per-muscle completed-set counts over the trailing balance window
    #[must_use]
    pub fn weekly_muscle_sets(
        sessions: &[WorkoutSession],
        now: DateTime<Utc>,
        config: &ConsistencyConfig,
    ) -> HashMap<String, u32> {
        let cutoff = now - Duration::days(config.balance_window_days);
        let mut totals: HashMap<String, u32> = HashMap::new();
        for session in sessions.iter().filter(|s| s.is_completed()) {
            let Some(date) = session.completed_at else {
                continue;
            };
            if date < cutoff || date > now {
                continue;
            }
            for (muscle, sets) in RecoveryCalculator::session_muscle_sets(session) {
                *totals.entry(muscle).or_insert(0) += sets;
            }
        }
        totals
    }

    /// Generate advisory insights from the history at `now`.
    ///
    /// Thresholds are fixed in `config`; the wording is advisory only and
    /// never drives control flow elsewhere.
    #[must_use]
    pub fn generate_insights(
        sessions: &[WorkoutSession],
        now: DateTime<Utc>,
        config: &ConsistencyConfig,
        performance_config: &PerformanceConfig,
    ) -> Vec<TrainingInsight> {
        let mut insights = Vec::new();

        Self::strength_insights(sessions, config, performance_config, &mut insights);
        Self::streak_insights(sessions, now, config, &mut insights);
        Self::volume_insights(sessions, config, &mut insights);
        Self::balance_insights(sessions, now, config, &mut insights);

        debug!(count = insights.len(), "insights generated");
        insights
    }

    /// Strength-trend insights averaged across every exercise with a trend
    fn strength_insights(
        sessions: &[WorkoutSession],
        config: &ConsistencyConfig,
        performance_config: &PerformanceConfig,
        insights: &mut Vec<TrainingInsight>,
    ) {
        let mut exercise_ids: Vec<&str> = sessions
            .iter()
            .filter(|s| s.is_completed())
            .flat_map(|s| s.exercises.iter())
            .map(|log| log.exercise_id.as_str())
            .collect();
        exercise_ids.sort_unstable();
        exercise_ids.dedup();

        let mut changes = Vec::new();
        let mut max_data_points = 0;
        for exercise_id in exercise_ids {
            if let Some(trend) =
                RecordsEngine::strength_trend(exercise_id, sessions, performance_config)
            {
                changes.push(trend.percent_change);
                max_data_points = max_data_points.max(trend.data_points);
            }
        }
        if changes.is_empty() {
            return;
        }

        let avg_change = changes.iter().sum::<f64>() / changes.len() as f64;
        if avg_change > config.strength_trend_positive_percent {
            insights.push(TrainingInsight {
                kind: InsightKind::Positive,
                message: format!(
                    "Strength is trending up {avg_change:.0}% across your main lifts - keep it going"
                ),
            });
        } else if avg_change.abs() < f64::EPSILON
            && max_data_points >= config.min_plateau_data_points
        {
            insights.push(TrainingInsight {
                kind: InsightKind::Warning,
                message: "Your lifts have plateaued - consider varying rep ranges or adding volume"
                    .to_owned(),
            });
        }
    }

    fn streak_insights(
        sessions: &[WorkoutSession],
        now: DateTime<Utc>,
        config: &ConsistencyConfig,
        insights: &mut Vec<TrainingInsight>,
    ) {
        let stats = Self::calculate_consistency(sessions, now);
        if stats.current_streak >= config.streak_positive_threshold {
            insights.push(TrainingInsight {
                kind: InsightKind::Positive,
                message: format!(
                    "{} workouts in a row - excellent consistency",
                    stats.current_streak
                ),
            });
        }
    }

    fn volume_insights(
        sessions: &[WorkoutSession],
        config: &ConsistencyConfig,
        insights: &mut Vec<TrainingInsight>,
    ) {
        let weeks = Self::weekly_volume(sessions);
        let [.., previous, current] = weeks.as_slice() else {
            return;
        };
        // The buckets are sparse; a week-over-week message only makes sense
        // when the last two trained weeks are adjacent on the calendar.
        if (current.week_start - previous.week_start).num_days() != 7 {
            return;
        }
        if previous.volume <= 0.0 {
            return;
        }

        let change = (current.volume - previous.volume) / previous.volume * 100.0;
        if change > config.volume_surge_percent {
            insights.push(TrainingInsight {
                kind: InsightKind::Positive,
                message: format!("Weekly volume is up {change:.0}% over last week"),
            });
        } else if change < config.volume_drop_percent {
            insights.push(TrainingInsight {
                kind: InsightKind::Warning,
                message: format!(
                    "Weekly volume dropped {:.0}% from last week - planned deload or lost momentum?",
                    change.abs()
                ),
            });
        }
    }

    /// Training-balance warning for muscles untouched in a week where other
    /// muscles saw substantial work
    fn balance_insights(
        sessions: &[WorkoutSession],
        now: DateTime<Utc>,
        config: &ConsistencyConfig,
        insights: &mut Vec<TrainingInsight>,
    ) {
        let recent_sets = Self::weekly_muscle_sets(sessions, now, config);
        let busiest = recent_sets.values().copied().max().unwrap_or(0);
        if busiest <= config.balance_neglect_set_threshold {
            return;
        }

        // A muscle counts as neglected when it appears in the history but
        // got no sets in the window.
        let mut all_muscles: Vec<String> = sessions
            .iter()
            .filter(|s| s.is_completed())
            .flat_map(|s| s.exercises.iter())
            .filter(|log| !log.effective_sets().is_empty())
            .flat_map(|log| log.exercise.muscle_groups.iter())
            .map(|label| muscle_groups::normalize(label))
            .collect();
        all_muscles.sort_unstable();
        all_muscles.dedup();

        let neglected: Vec<String> = all_muscles
            .into_iter()
            .filter(|muscle| !recent_sets.contains_key(muscle))
            .map(|muscle| muscle_groups::display_name(&muscle))
            .collect();
        if !neglected.is_empty() {
            insights.push(TrainingInsight {
                kind: InsightKind::Warning,
                message: format!(
                    "No work this week for: {}. Consider balancing your split",
                    neglected.join(", ")
                ),
            });
        }
    }
}
