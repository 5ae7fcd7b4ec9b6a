// ABOUTME: Integration tests for the personal records and performance series engine
// ABOUTME: Covers volume math, the Epley estimate, record ties, series ordering, and trends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repforge Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{Duration, Utc};
use common::{completed_session, log, set, sets_of, skipped_log};
use repforge::config::PerformanceConfig;
use repforge::intelligence::{RecordsEngine, SortDirection};
use repforge::models::SetLog;

#[test]
fn empty_history_yields_empty_records() {
    let records = RecordsEngine::calculate_records("bench", &[]);
    assert_eq!(records.sessions_logged, 0);
    assert!(records.max_weight.is_none());
    assert!(records.max_reps.is_none());
    assert!(records.best_set.is_none());
    assert!(records.estimated_one_rep_max.is_none());
    assert!(records.highest_volume_session.is_none());
}

#[test]
fn set_volume_sums_reps_times_weight() {
    let now = Utc::now();
    let sets = vec![
        set(1, Some(10), Some(135.0), now),
        set(2, Some(8), Some(135.0), now),
    ];
    let total: f64 = sets.iter().map(SetLog::volume).sum();
    assert!((total - 2430.0).abs() < f64::EPSILON);
}

#[test]
fn epley_estimate_matches_formula() {
    let now = Utc::now();
    let single = set(1, Some(1), Some(200.0), now);
    assert!((single.estimated_one_rep_max().unwrap() - 200.0).abs() < f64::EPSILON);

    let ten_reps = set(1, Some(10), Some(135.0), now);
    // 135 * (1 + 10/30) = 180
    assert!((ten_reps.estimated_one_rep_max().unwrap() - 180.0).abs() < 1e-9);
}

#[test]
fn sets_without_reps_or_weight_contribute_zero_volume() {
    let now = Utc::now();
    assert!(set(1, None, None, now).volume().abs() < f64::EPSILON);
    assert!(set(1, Some(10), None, now).volume().abs() < f64::EPSILON);
    assert!(set(1, None, Some(135.0), now).volume().abs() < f64::EPSILON);
}

#[test]
fn malformed_weights_are_excluded_from_records() {
    let now = Utc::now();
    let sessions = vec![completed_session(
        "s1",
        now,
        vec![log(
            "bench",
            &["chest"],
            vec![
                set(1, Some(10), Some(-50.0), now),
                set(2, Some(10), Some(f64::NAN), now),
                set(3, Some(10), Some(135.0), now),
            ],
        )],
    )];

    let records = RecordsEngine::calculate_records("bench", &sessions);
    let max_weight = records.max_weight.expect("record present");
    assert_eq!(max_weight.weight, Some(135.0));
}

#[test]
fn records_track_maxima_across_sessions() {
    let now = Utc::now();
    let earlier = now - Duration::days(7);
    let sessions = vec![
        completed_session(
            "s1",
            earlier,
            vec![log(
                "bench",
                &["chest"],
                vec![
                    set(1, Some(12), Some(115.0), earlier),
                    set(2, Some(5), Some(185.0), earlier),
                ],
            )],
        ),
        completed_session(
            "s2",
            now,
            vec![log(
                "bench",
                &["chest"],
                vec![
                    set(1, Some(8), Some(155.0), now),
                    set(2, Some(1), Some(225.0), now),
                ],
            )],
        ),
    ];

    let records = RecordsEngine::calculate_records("bench", &sessions);
    assert_eq!(records.sessions_logged, 2);
    assert_eq!(records.max_weight.as_ref().unwrap().weight, Some(225.0));
    assert_eq!(records.max_reps.as_ref().unwrap().reps, Some(12));
    // Best set by weight*reps: 115*12 = 1380 beats 155*8 = 1240 and 225*1.
    let best = records.best_set.as_ref().unwrap();
    assert_eq!(best.weight, Some(115.0));
    assert_eq!(best.reps, Some(12));
    // Epley: 185*(1+5/30) ~ 215.8 -> 216; 155*(1+8/30) ~ 196.3; single 225.
    assert_eq!(records.estimated_one_rep_max, Some(225.0));
    // Session volumes: 1380+925 = 2305 vs 1240+225 = 1465.
    let volume = records.highest_volume_session.as_ref().unwrap();
    assert!((volume.volume - 2305.0).abs() < f64::EPSILON);
    assert_eq!(volume.date, earlier);
}

#[test]
fn record_ties_keep_earliest_occurrence() {
    let now = Utc::now();
    let earlier = now - Duration::days(3);
    let sessions = vec![
        completed_session(
            "s1",
            earlier,
            vec![log("bench", &["chest"], vec![set(1, Some(5), Some(185.0), earlier)])],
        ),
        completed_session(
            "s2",
            now,
            vec![log("bench", &["chest"], vec![set(1, Some(5), Some(185.0), now)])],
        ),
    ];

    let records = RecordsEngine::calculate_records("bench", &sessions);
    assert_eq!(records.max_weight.as_ref().unwrap().date, earlier);
    assert_eq!(records.max_reps.as_ref().unwrap().date, earlier);
    assert_eq!(records.best_set.as_ref().unwrap().date, earlier);
}

#[test]
fn skipped_logs_and_other_exercises_are_excluded() {
    let now = Utc::now();
    let sessions = vec![completed_session(
        "s1",
        now,
        vec![
            skipped_log("bench", &["chest"], sets_of(3, 10, 315.0, now)),
            log("squat", &["quads"], sets_of(3, 5, 225.0, now)),
        ],
    )];

    let records = RecordsEngine::calculate_records("bench", &sessions);
    assert_eq!(records.sessions_logged, 0);
    assert!(records.max_weight.is_none());
}

#[test]
fn performance_series_orders_by_requested_direction() {
    let now = Utc::now();
    let dates = [now - Duration::days(14), now - Duration::days(7), now];
    let sessions: Vec<_> = dates
        .iter()
        .enumerate()
        .map(|(i, date)| {
            completed_session(
                &format!("s{i}"),
                *date,
                vec![log("bench", &["chest"], sets_of(3, 10, 135.0 + i as f64 * 5.0, *date))],
            )
        })
        .collect();

    let ascending = RecordsEngine::performance_series("bench", &sessions, SortDirection::Ascending);
    assert_eq!(ascending.len(), 3);
    assert!(ascending.windows(2).all(|w| w[0].date <= w[1].date));
    assert!((ascending[0].max_weight - 135.0).abs() < f64::EPSILON);
    assert!((ascending[2].max_weight - 145.0).abs() < f64::EPSILON);

    let descending =
        RecordsEngine::performance_series("bench", &sessions, SortDirection::Descending);
    assert!(descending.windows(2).all(|w| w[0].date >= w[1].date));
}

#[test]
fn performance_point_reports_session_aggregates() {
    let now = Utc::now();
    let sessions = vec![completed_session(
        "s1",
        now,
        vec![log(
            "bench",
            &["chest"],
            vec![
                set(1, Some(10), Some(135.0), now),
                set(2, Some(6), Some(155.0), now),
            ],
        )],
    )];

    let series = RecordsEngine::performance_series("bench", &sessions, SortDirection::Ascending);
    let point = &series[0];
    assert!((point.max_weight - 155.0).abs() < f64::EPSILON);
    assert!((point.avg_reps - 8.0).abs() < f64::EPSILON);
    assert!((point.total_volume - (1350.0 + 930.0)).abs() < f64::EPSILON);
}

#[test]
fn trend_requires_an_older_bucket() {
    let now = Utc::now();
    let config = PerformanceConfig::default();

    // Four performances: recent window swallows everything, no older bucket.
    let sessions: Vec<_> = (0..4)
        .map(|i| {
            let date = now - Duration::days(i64::from(28 - i * 7));
            completed_session(
                &format!("s{i}"),
                date,
                vec![log("bench", &["chest"], sets_of(3, 5, 135.0, date))],
            )
        })
        .collect();
    assert!(RecordsEngine::strength_trend("bench", &sessions, &config).is_none());

    assert!(RecordsEngine::strength_trend("bench", &[], &config).is_none());
}

#[test]
fn trend_compares_recent_window_against_previous() {
    let now = Utc::now();
    let config = PerformanceConfig::default();

    // Six performances at weights 100,100,110,110,120,120: older bucket is
    // the first two (avg 100), recent is the last four (avg 115).
    let weights = [100.0, 100.0, 110.0, 110.0, 120.0, 120.0];
    let sessions: Vec<_> = weights
        .iter()
        .enumerate()
        .map(|(i, weight)| {
            let date = now - Duration::days(i64::from(35 - i as i32 * 7));
            completed_session(
                &format!("s{i}"),
                date,
                vec![log("bench", &["chest"], sets_of(3, 5, *weight, date))],
            )
        })
        .collect();

    let trend = RecordsEngine::strength_trend("bench", &sessions, &config).expect("trend");
    assert!((trend.recent_avg - 115.0).abs() < f64::EPSILON);
    assert!((trend.previous_avg - 100.0).abs() < f64::EPSILON);
    assert!((trend.percent_change - 15.0).abs() < 1e-9);
    assert_eq!(trend.data_points, 6);
}
