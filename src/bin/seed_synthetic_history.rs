// ABOUTME: Synthetic workout-history seeder for exercising the analytics engines end to end
// ABOUTME: Generates a deterministic multi-week session history and prints derived analytics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repforge Contributors

//! Synthetic history seeder.
//!
//! Generates a plausible multi-week strength-training history for one user
//! and prints every derived analytics view as JSON. Useful for demoing the
//! engines and for eyeballing output shapes without a real data source.
//!
//! Usage:
//! ```bash
//! # Four weeks of history with the default seed
//! cargo run --bin seed-synthetic-history
//!
//! # Ten weeks, custom RNG seed, verbose logging
//! cargo run --bin seed-synthetic-history -- --days 70 --seed 7 -v
//! ```

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use uuid::Uuid;

use repforge::config::IntelligenceConfig;
use repforge::intelligence::{
    ActivationAnalyzer, ProgressTracker, RecommendationEngine, RecordsEngine, RecoveryCalculator,
    SortDirection,
};
use repforge::logging::{self, LoggingConfig};
use repforge::models::{
    Difficulty, Exercise, ExerciseLog, ExerciseType, SessionStatus, SetLog, WorkoutSession,
};
use repforge::repository::{InMemorySessionRepository, SessionRepository};

#[derive(Parser)]
#[command(
    name = "seed-synthetic-history",
    about = "Repforge synthetic history seeder",
    long_about = "Generate a synthetic workout history and print the derived analytics"
)]
struct SeedArgs {
    /// Number of days of history to generate
    #[arg(long, default_value = "28")]
    days: i64,

    /// RNG seed for reproducible histories
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// Exercise catalog entry for generation
struct CatalogEntry {
    id: &'static str,
    name: &'static str,
    muscles: &'static [&'static str],
    base_weight: f64,
}

const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        id: "bench-press",
        name: "Barbell Bench Press",
        muscles: &["chest", "triceps", "shoulders"],
        base_weight: 135.0,
    },
    CatalogEntry {
        id: "back-squat",
        name: "Barbell Back Squat",
        muscles: &["quads", "glutes", "lower back"],
        base_weight: 185.0,
    },
    CatalogEntry {
        id: "deadlift",
        name: "Conventional Deadlift",
        muscles: &["hamstrings", "glutes", "lower back", "forearms"],
        base_weight: 225.0,
    },
    CatalogEntry {
        id: "overhead-press",
        name: "Overhead Press",
        muscles: &["shoulders", "triceps"],
        base_weight: 85.0,
    },
    CatalogEntry {
        id: "barbell-row",
        name: "Barbell Row",
        muscles: &["back", "biceps", "forearms"],
        base_weight: 115.0,
    },
    CatalogEntry {
        id: "plank",
        name: "Plank",
        muscles: &["core"],
        base_weight: 0.0,
    },
];

fn main() -> Result<()> {
    let args = SeedArgs::parse();

    let mut logging_config = LoggingConfig::from_env();
    if args.verbose {
        logging_config.level = "debug".to_owned();
    }
    logging::init(&logging_config);

    let user_id = Uuid::new_v4();
    let now = Utc::now();
    let mut rng = StdRng::seed_from_u64(args.seed);

    let mut repository = InMemorySessionRepository::new();
    for session in generate_history(user_id, now, args.days, &mut rng) {
        repository.insert(session);
    }
    info!(sessions = repository.len(), days = args.days, "seeded history");

    let sessions = repository.load_sessions(user_id)?;
    let config = IntelligenceConfig::global();

    let recovery = RecoveryCalculator::calculate_recovery(&sessions, now, &config.recovery);
    let recommendations = RecommendationEngine::compose(&recovery);
    let activation =
        ActivationAnalyzer::latest_activation_with_recovery(&sessions, now, &config.activation);
    let consistency = ProgressTracker::calculate_consistency(&sessions, now);
    let weekly = ProgressTracker::weekly_volume(&sessions);
    let insights =
        ProgressTracker::generate_insights(&sessions, now, &config.consistency, &config.performance);

    println!("{}", serde_json::to_string_pretty(&recovery)?);
    println!("{}", serde_json::to_string_pretty(&recommendations)?);
    println!("{}", serde_json::to_string_pretty(&activation)?);
    println!("{}", serde_json::to_string_pretty(&consistency)?);
    println!("{}", serde_json::to_string_pretty(&weekly)?);
    println!("{}", serde_json::to_string_pretty(&insights)?);

    for entry in CATALOG {
        let records = RecordsEngine::calculate_records(entry.id, &sessions);
        if records.sessions_logged == 0 {
            continue;
        }
        let series = RecordsEngine::performance_series(entry.id, &sessions, SortDirection::Ascending);
        info!(
            exercise = entry.id,
            performances = series.len(),
            one_rep_max = records.estimated_one_rep_max,
            "records"
        );
        println!("{}", serde_json::to_string_pretty(&records)?);
    }

    Ok(())
}

/// Generate roughly-every-other-day sessions over the requested span
fn generate_history(
    user_id: Uuid,
    now: DateTime<Utc>,
    days: i64,
    rng: &mut StdRng,
) -> Vec<WorkoutSession> {
    let mut sessions = Vec::new();
    let mut day = days;
    while day >= 0 {
        let completed_at = now - Duration::days(day) - Duration::hours(rng.gen_range(0..4));
        sessions.push(generate_session(user_id, completed_at, rng));
        day -= rng.gen_range(1..=2);
    }
    sessions
}

fn generate_session(user_id: Uuid, completed_at: DateTime<Utc>, rng: &mut StdRng) -> WorkoutSession {
    let exercise_count = rng.gen_range(3..=5);
    let started_at = completed_at - Duration::minutes(rng.gen_range(45..90));

    let mut picks: Vec<usize> = (0..CATALOG.len()).collect();
    for i in (1..picks.len()).rev() {
        picks.swap(i, rng.gen_range(0..=i));
    }
    picks.truncate(exercise_count);

    let exercises = picks
        .into_iter()
        .map(|index| generate_log(&CATALOG[index], completed_at, rng))
        .collect();

    WorkoutSession {
        id: format!("session-{}", completed_at.timestamp()),
        user_id,
        started_at,
        completed_at: Some(completed_at),
        status: SessionStatus::Completed,
        total_duration: Some(u32::try_from((completed_at - started_at).num_seconds()).unwrap_or(0)),
        exercises,
    }
}

fn generate_log(entry: &CatalogEntry, completed_at: DateTime<Utc>, rng: &mut StdRng) -> ExerciseLog {
    let set_count = rng.gen_range(3..=5);
    let weight = if entry.base_weight > 0.0 {
        Some(entry.base_weight + f64::from(rng.gen_range(0..4)) * 5.0)
    } else {
        None
    };

    let completed_sets = (1..=set_count)
        .map(|set_number| SetLog {
            set_number,
            reps: Some(rng.gen_range(5..=12)),
            weight,
            duration: weight.is_none().then(|| rng.gen_range(30..=90)),
            rpe: Some(rng.gen_range(6..=9)),
            rest_time: Some(rng.gen_range(60..=180)),
            completed_at,
        })
        .collect();

    ExerciseLog {
        exercise_id: entry.id.to_owned(),
        exercise: Exercise {
            id: entry.id.to_owned(),
            name: entry.name.to_owned(),
            muscle_groups: entry.muscles.iter().map(|m| (*m).to_owned()).collect(),
            equipment: Some("barbell".to_owned()),
            exercise_type: ExerciseType::Strength,
            difficulty: Difficulty::Intermediate,
        },
        completed_sets,
        skipped: false,
        notes: None,
    }
}
