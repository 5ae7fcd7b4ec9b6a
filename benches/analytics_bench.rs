// ABOUTME: Criterion benchmarks for the analytics engines
// ABOUTME: Measures recovery, records, and consistency computation over synthetic histories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repforge Contributors

//! Criterion benchmarks for the analytics pipeline.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{DateTime, Duration, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use uuid::Uuid;

use repforge::config::IntelligenceConfig;
use repforge::intelligence::{
    ProgressTracker, RecommendationEngine, RecordsEngine, RecoveryCalculator, SortDirection,
};
use repforge::models::{
    Difficulty, Exercise, ExerciseLog, ExerciseType, SessionStatus, SetLog, WorkoutSession,
};

const EXERCISES: &[(&str, &[&str])] = &[
    ("bench-press", &["chest", "triceps", "shoulders"]),
    ("back-squat", &["quads", "glutes", "lower back"]),
    ("deadlift", &["hamstrings", "glutes", "lower back"]),
    ("barbell-row", &["back", "biceps"]),
];

fn generate_sessions(count: usize, base: DateTime<Utc>) -> Vec<WorkoutSession> {
    let user_id = Uuid::nil();
    (0..count)
        .map(|index| {
            let completed_at = base - Duration::days(index as i64);
            let exercises = EXERCISES
                .iter()
                .map(|(id, muscles)| {
                    let sets = (1..=4)
                        .map(|set_number| SetLog {
                            set_number,
                            reps: Some(5 + (index as u32 % 6)),
                            weight: Some(135.0 + (index % 10) as f64 * 5.0),
                            duration: None,
                            rpe: Some(7),
                            rest_time: Some(120),
                            completed_at,
                        })
                        .collect();
                    ExerciseLog {
                        exercise_id: (*id).to_owned(),
                        exercise: Exercise {
                            id: (*id).to_owned(),
                            name: (*id).to_owned(),
                            muscle_groups: muscles.iter().map(|m| (*m).to_owned()).collect(),
                            equipment: Some("barbell".to_owned()),
                            exercise_type: ExerciseType::Strength,
                            difficulty: Difficulty::Intermediate,
                        },
                        completed_sets: sets,
                        skipped: false,
                        notes: None,
                    }
                })
                .collect();
            WorkoutSession {
                id: format!("bench_session_{index}"),
                user_id,
                started_at: completed_at - Duration::hours(1),
                completed_at: Some(completed_at),
                status: SessionStatus::Completed,
                total_duration: Some(3600),
                exercises,
            }
        })
        .collect()
}

fn bench_recovery(c: &mut Criterion) {
    let config = IntelligenceConfig::default();
    let now = Utc::now();
    let mut group = c.benchmark_group("recovery");
    for size in [30_usize, 180, 365] {
        let sessions = generate_sessions(size, now);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &sessions, |b, sessions| {
            b.iter(|| {
                let statuses = RecoveryCalculator::calculate_recovery(
                    black_box(sessions),
                    now,
                    &config.recovery,
                );
                RecommendationEngine::compose(&statuses)
            });
        });
    }
    group.finish();
}

fn bench_records(c: &mut Criterion) {
    let now = Utc::now();
    let sessions = generate_sessions(365, now);
    c.bench_function("records_full_year", |b| {
        b.iter(|| {
            RecordsEngine::calculate_records(black_box("bench-press"), black_box(&sessions))
        });
    });
    c.bench_function("performance_series_full_year", |b| {
        b.iter(|| {
            RecordsEngine::performance_series(
                black_box("back-squat"),
                black_box(&sessions),
                SortDirection::Ascending,
            )
        });
    });
}

fn bench_progress(c: &mut Criterion) {
    let config = IntelligenceConfig::default();
    let now = Utc::now();
    let sessions = generate_sessions(365, now);
    c.bench_function("consistency_full_year", |b| {
        b.iter(|| ProgressTracker::calculate_consistency(black_box(&sessions), now));
    });
    c.bench_function("insights_full_year", |b| {
        b.iter(|| {
            ProgressTracker::generate_insights(
                black_box(&sessions),
                now,
                &config.consistency,
                &config.performance,
            )
        });
    });
}

criterion_group!(benches, bench_recovery, bench_records, bench_progress);
criterion_main!(benches);
