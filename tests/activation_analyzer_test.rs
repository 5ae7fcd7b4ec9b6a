// ABOUTME: Integration tests for the session activation analyzer
// ABOUTME: Covers set-count scoring, the running clamp, classification, and the recovery overlay
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repforge Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{Duration, Utc};
use common::{completed_session, log, set, sets_of, skipped_log};
use repforge::config::ActivationConfig;
use repforge::intelligence::{ActivationAnalyzer, ActivationLevel};

#[test]
fn three_sets_score_sixty_per_muscle() {
    let now = Utc::now();
    let session = completed_session(
        "s1",
        now,
        vec![log("bench", &["chest", "triceps"], sets_of(3, 10, 135.0, now))],
    );

    let activation = ActivationAnalyzer::session_activation(&session, &ActivationConfig::default());
    assert_eq!(activation.get("chest"), Some(&60));
    assert_eq!(activation.get("triceps"), Some(&60));
}

#[test]
fn activation_never_exceeds_one_hundred() {
    // Many exercises piling onto the same muscle: the running total is
    // clamped after every contribution.
    let now = Utc::now();
    let exercises = (0..6)
        .map(|i| log(&format!("ex{i}"), &["chest"], sets_of(5, 10, 100.0, now)))
        .collect();
    let session = completed_session("s1", now, exercises);

    let activation = ActivationAnalyzer::session_activation(&session, &ActivationConfig::default());
    assert_eq!(activation.get("chest"), Some(&100));
}

#[test]
fn single_exercise_contribution_caps_at_one_hundred() {
    // 9 sets x 20 = 180 capped to 100 before accumulation.
    let now = Utc::now();
    let session = completed_session(
        "s1",
        now,
        vec![log("squat", &["quads"], sets_of(9, 5, 225.0, now))],
    );

    let activation = ActivationAnalyzer::session_activation(&session, &ActivationConfig::default());
    assert_eq!(activation.get("quads"), Some(&100));
}

#[test]
fn sets_without_reps_or_weight_still_count_for_activation() {
    // Timed or bodyweight sets carry no reps/weight. They add nothing to
    // volume or 1RM, but each logged set still scores activation points.
    let now = Utc::now();
    let bare_sets = (1..=3).map(|n| set(n, None, None, now)).collect();
    let session = completed_session("s1", now, vec![log("plank", &["core"], bare_sets)]);

    let activation = ActivationAnalyzer::session_activation(&session, &ActivationConfig::default());
    assert_eq!(activation.get("core"), Some(&60));
}

#[test]
fn skipped_exercises_contribute_nothing() {
    let now = Utc::now();
    let session = completed_session(
        "s1",
        now,
        vec![
            log("bench", &["chest"], sets_of(2, 10, 135.0, now)),
            skipped_log("curl", &["biceps"], sets_of(4, 10, 35.0, now)),
        ],
    );

    let activation = ActivationAnalyzer::session_activation(&session, &ActivationConfig::default());
    assert_eq!(activation.get("chest"), Some(&40));
    assert!(!activation.contains_key("biceps"));
}

#[test]
fn latest_activation_uses_most_recent_completed_session() {
    let now = Utc::now();
    let older = now - Duration::days(2);
    let sessions = vec![
        completed_session(
            "old",
            older,
            vec![log("row", &["back"], sets_of(4, 10, 115.0, older))],
        ),
        completed_session(
            "new",
            now,
            vec![log("bench", &["chest"], sets_of(3, 10, 135.0, now))],
        ),
    ];

    let activation =
        ActivationAnalyzer::latest_activation(&sessions, &ActivationConfig::default());
    assert_eq!(activation.get("chest"), Some(&60));
    assert!(!activation.contains_key("back"));
}

#[test]
fn latest_activation_empty_without_completed_sessions() {
    let activation = ActivationAnalyzer::latest_activation(&[], &ActivationConfig::default());
    assert!(activation.is_empty());
}

#[test]
fn classification_thresholds() {
    let config = ActivationConfig::default();
    assert_eq!(ActivationAnalyzer::classify(100, &config), ActivationLevel::High);
    assert_eq!(ActivationAnalyzer::classify(70, &config), ActivationLevel::High);
    assert_eq!(ActivationAnalyzer::classify(69, &config), ActivationLevel::Moderate);
    assert_eq!(ActivationAnalyzer::classify(40, &config), ActivationLevel::Moderate);
    assert_eq!(ActivationAnalyzer::classify(39, &config), ActivationLevel::Light);
    assert_eq!(ActivationAnalyzer::classify(1, &config), ActivationLevel::Light);
    assert_eq!(ActivationAnalyzer::classify(0, &config), ActivationLevel::Rest);
}

#[test]
fn recovery_overlay_uses_flat_baseline() {
    // Worked 24h ago against the flat 48h baseline: 50 percent, regardless
    // of the per-muscle table used by the recovery calculator.
    let now = Utc::now();
    let worked = now - Duration::hours(24);
    let sessions = vec![completed_session(
        "s1",
        worked,
        vec![log("bench", &["chest"], sets_of(3, 10, 135.0, worked))],
    )];

    let overlay = ActivationAnalyzer::flat_recovery_overlay(
        &sessions,
        now,
        &ActivationConfig::default(),
    );
    assert_eq!(overlay.get("chest"), Some(&50));
}

#[test]
fn overlay_attaches_to_latest_activation() {
    let now = Utc::now();
    let sessions = vec![completed_session(
        "s1",
        now,
        vec![log("bench", &["chest"], sets_of(3, 10, 135.0, now))],
    )];

    let combined = ActivationAnalyzer::latest_activation_with_recovery(
        &sessions,
        now,
        &ActivationConfig::default(),
    );
    let chest = combined.get("chest").expect("chest present");
    assert_eq!(chest.activation, 60);
    assert_eq!(chest.level, ActivationLevel::Moderate);
    assert_eq!(chest.recovery_percent, Some(0));
}
