// ABOUTME: Composes recovery statuses into ready / light / rest training recommendations
// ABOUTME: Pure partition of the recovery model's output into display-name lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repforge Contributors

//! Recommendation composer.
//!
//! Takes the recovery model's sorted output and buckets each muscle group by
//! its recovery state. Purely presentational: no thresholds of its own, no
//! re-scoring.

use serde::{Deserialize, Serialize};

use super::muscle_groups;
use super::recovery_calculator::{MuscleRecoveryStatus, RecoveryState};

/// Muscle groups partitioned by training readiness
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingRecommendations {
    /// Fully recovered muscle groups, title-cased for display
    pub ready_to_train: Vec<String>,
    /// Partially recovered groups suited to light work
    pub light_training: Vec<String>,
    /// Groups still recovering that should rest
    pub needs_rest: Vec<String>,
}

/// Stateless recommendation composer
pub struct RecommendationEngine;

impl RecommendationEngine {
    /// Partition recovery statuses into readiness buckets.
    ///
    /// Preserves the input order (ascending recovery percent), so the
    /// muscles needing the most attention lead each list.
    #[must_use]
    pub fn compose(statuses: &[MuscleRecoveryStatus]) -> TrainingRecommendations {
        let mut recommendations = TrainingRecommendations::default();
        for status in statuses {
            let name = muscle_groups::display_name(&status.muscle_group);
            match status.status {
                RecoveryState::Recovered => recommendations.ready_to_train.push(name),
                RecoveryState::Partial => recommendations.light_training.push(name),
                RecoveryState::Recovering => recommendations.needs_rest.push(name),
            }
        }
        recommendations
    }
}
