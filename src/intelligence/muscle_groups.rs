// ABOUTME: Muscle group normalization, display names, and base recovery lookup
// ABOUTME: Canonical vocabulary used as the join key for every muscle-keyed aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repforge Contributors

//! Muscle group vocabulary.
//!
//! Free-text muscle labels arrive from exercise descriptors in whatever form
//! the authoring trainer used ("Quad", "quadriceps", " GLUTE "). Every engine
//! in this crate groups by the canonical form produced by [`normalize`];
//! grouping on raw labels would fragment recovery and activation data across
//! synonyms.

use super::physiological_constants::recovery;

/// Normalize a free-text muscle label to its canonical name.
///
/// Lower-cases and trims the input, then applies a fixed synonym table.
/// Unrecognized labels pass through lower-cased and trimmed, unchanged
/// otherwise. Idempotent: `normalize(normalize(x)) == normalize(x)`.
#[must_use]
pub fn normalize(label: &str) -> String {
    let lowered = label.trim().to_lowercase();
    match lowered.as_str() {
        "quad" | "quadricep" | "quadriceps" => "quads".to_owned(),
        "glute" | "gluteus" => "glutes".to_owned(),
        "hamstring" => "hamstrings".to_owned(),
        "calf" => "calves".to_owned(),
        "bicep" => "biceps".to_owned(),
        "tricep" => "triceps".to_owned(),
        "shoulder" | "delt" | "delts" | "deltoid" | "deltoids" => "shoulders".to_owned(),
        "pec" | "pecs" | "pectorals" => "chest".to_owned(),
        "lat" | "lats" => "back".to_owned(),
        "ab" | "abs" | "abdominals" => "core".to_owned(),
        "forearm" => "forearms".to_owned(),
        "trap" | "traps" => "trapezius".to_owned(),
        _ => lowered,
    }
}

/// Base recovery time in hours for a normalized muscle group.
///
/// Large/compound groups take the longest; core recovers fastest. Unknown
/// groups fall back to the medium window.
#[must_use]
pub fn base_recovery_hours(muscle: &str) -> f64 {
    match muscle {
        "chest" | "back" | "legs" | "quads" | "hamstrings" | "glutes" | "lower back"
        | "full body" => recovery::LARGE_GROUP_RECOVERY_HOURS,
        "shoulders" | "biceps" | "triceps" | "calves" => recovery::MEDIUM_GROUP_RECOVERY_HOURS,
        "forearms" => recovery::SMALL_GROUP_RECOVERY_HOURS,
        "core" | "abs" => recovery::CORE_RECOVERY_HOURS,
        _ => recovery::DEFAULT_RECOVERY_HOURS,
    }
}

/// Title-cased display name for a normalized muscle group
/// (e.g., `"lower back"` -> `"Lower Back"`)
#[must_use]
pub fn display_name(muscle: &str) -> String {
    muscle
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
