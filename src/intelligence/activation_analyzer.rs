// ABOUTME: Per-muscle 0-100 activation scoring for a single workout session
// ABOUTME: Set-count driven, with an optional flat-baseline recovery overlay for color-coding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repforge Contributors

//! Session activation model.
//!
//! Estimates how intensely each muscle group was worked in a session from
//! completed-set counts alone: each non-skipped exercise contributes
//! `min(100, sets * 20)` to every muscle it targets, and the running
//! per-muscle total is clamped to 100 after every contribution, not only at
//! the end.
//!
//! The recovery overlay here uses a flat 48h baseline rather than the
//! per-muscle table in [`super::recovery_calculator`]. The two models are
//! intentionally independent; unifying them would change observable output.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::muscle_groups;
use super::physiological_constants::activation::MAX_ACTIVATION;
use crate::config::ActivationConfig;
use crate::models::WorkoutSession;

/// Activation classification for display
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivationLevel {
    /// 70-100: worked heavily
    High,
    /// 40-69: worked moderately
    Moderate,
    /// 1-39: worked lightly
    Light,
    /// 0: not worked
    Rest,
}

/// Activation for one muscle group, with an optional recovery overlay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MuscleActivation {
    /// Activation score, 0-100
    pub activation: u32,
    /// Classification derived from `activation`
    pub level: ActivationLevel,
    /// Flat-baseline recovery percent for color-coding, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_percent: Option<u8>,
}

/// Stateless activation analyzer
pub struct ActivationAnalyzer;

impl ActivationAnalyzer {
    /// Activation scores for a single session, keyed by normalized muscle
    #[must_use]
    pub fn session_activation(
        session: &WorkoutSession,
        config: &ActivationConfig,
    ) -> HashMap<String, u32> {
        let mut activation: HashMap<String, u32> = HashMap::new();
        for log in &session.exercises {
            let sets = log.effective_sets().len() as u32;
            if sets == 0 {
                continue;
            }
            let points = (sets * config.points_per_set).min(MAX_ACTIVATION);
            for label in &log.exercise.muscle_groups {
                let muscle = muscle_groups::normalize(label);
                let entry = activation.entry(muscle).or_insert(0);
                // Clamp the running total on every increment.
                *entry = (*entry + points).min(MAX_ACTIVATION);
            }
        }
        activation
    }

    /// Activation for the most recent completed session in the history;
    /// empty when no session qualifies
    #[must_use]
    pub fn latest_activation(
        sessions: &[WorkoutSession],
        config: &ActivationConfig,
    ) -> HashMap<String, u32> {
        sessions
            .iter()
            .filter(|s| s.is_completed())
            .max_by_key(|s| s.completed_at)
            .map_or_else(HashMap::new, |session| {
                Self::session_activation(session, config)
            })
    }

    /// Most-recent-session activation with the flat-baseline recovery
    /// overlay attached for every muscle ever worked in the history
    #[must_use]
    pub fn latest_activation_with_recovery(
        sessions: &[WorkoutSession],
        now: DateTime<Utc>,
        config: &ActivationConfig,
    ) -> HashMap<String, MuscleActivation> {
        let activation = Self::latest_activation(sessions, config);
        let recovery = Self::flat_recovery_overlay(sessions, now, config);

        activation
            .into_iter()
            .map(|(muscle, score)| {
                let recovery_percent = recovery.get(&muscle).copied();
                let level = Self::classify(score, config);
                (
                    muscle,
                    MuscleActivation {
                        activation: score,
                        level,
                        recovery_percent,
                    },
                )
            })
            .collect()
    }

    /// Flat-baseline recovery percent per muscle: hours since last worked
    /// against a single 48h window, clamped to 0-100
    #[must_use]
    pub fn flat_recovery_overlay(
        sessions: &[WorkoutSession],
        now: DateTime<Utc>,
        config: &ActivationConfig,
    ) -> HashMap<String, u8> {
        let mut last_worked: HashMap<String, DateTime<Utc>> = HashMap::new();
        for session in sessions.iter().filter(|s| s.is_completed()) {
            let Some(date) = session.completed_at else {
                continue;
            };
            for log in &session.exercises {
                if log.effective_sets().is_empty() {
                    continue;
                }
                for label in &log.exercise.muscle_groups {
                    let muscle = muscle_groups::normalize(label);
                    let entry = last_worked.entry(muscle).or_insert(date);
                    if date > *entry {
                        *entry = date;
                    }
                }
            }
        }

        last_worked
            .into_iter()
            .map(|(muscle, date)| {
                let hours_since = (now - date).num_seconds() as f64 / 3600.0;
                let percent = (hours_since / config.flat_recovery_baseline_hours * 100.0)
                    .round()
                    .clamp(0.0, 100.0) as u8;
                (muscle, percent)
            })
            .collect()
    }

    /// Classify an activation score
    #[must_use]
    pub fn classify(activation: u32, config: &ActivationConfig) -> ActivationLevel {
        if activation >= config.high_threshold {
            ActivationLevel::High
        } else if activation >= config.moderate_threshold {
            ActivationLevel::Moderate
        } else if activation > 0 {
            ActivationLevel::Light
        } else {
            ActivationLevel::Rest
        }
    }
}
