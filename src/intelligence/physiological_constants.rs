// ABOUTME: Physiological constants for recovery, activation, and performance analysis
// ABOUTME: Central source of thresholds shared by the analytics engines and their configs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repforge Contributors

//! Physiological constants based on strength-training practice
//!
//! These values drive the recovery, activation, and progress engines. They
//! are also the `Default` sources for the corresponding configuration
//! structs in [`crate::config::intelligence`], so an override in config
//! never silently diverges from the documented baseline here.

/// Muscle recovery time windows and volume adjustments
///
/// References:
/// - Schoenfeld, B.J., et al. (2016). Effects of resistance training frequency
///   on measures of muscle hypertrophy. *Sports Medicine*, 46(11), 1689-1697.
/// - McLester, J.R., et al. (2003). A series of studies - a practical protocol
///   for testing muscular endurance recovery. *Journal of Strength and
///   Conditioning Research*, 17(2), 259-273.
pub mod recovery {
    /// Recovery window for large/compound muscle groups (hours):
    /// chest, back, legs, quads, hamstrings, glutes, lower back, full body
    pub const LARGE_GROUP_RECOVERY_HOURS: f64 = 72.0;

    /// Recovery window for medium muscle groups (hours):
    /// shoulders, biceps, triceps, calves
    pub const MEDIUM_GROUP_RECOVERY_HOURS: f64 = 48.0;

    /// Recovery window for small, high-frequency muscle groups (hours):
    /// forearms
    pub const SMALL_GROUP_RECOVERY_HOURS: f64 = 36.0;

    /// Recovery window for core/abs (hours); trained near-daily in practice
    pub const CORE_RECOVERY_HOURS: f64 = 24.0;

    /// Fallback recovery window for unrecognized muscle groups (hours)
    pub const DEFAULT_RECOVERY_HOURS: f64 = 48.0;

    /// Set count above which the recovery window is stretched by
    /// [`HIGH_VOLUME_MULTIPLIER`]
    pub const HIGH_VOLUME_SET_THRESHOLD: u32 = 12;

    /// Set count above which the recovery window is stretched by
    /// [`MODERATE_VOLUME_MULTIPLIER`]
    pub const MODERATE_VOLUME_SET_THRESHOLD: u32 = 6;

    /// Recovery-time multiplier for high-volume sessions
    pub const HIGH_VOLUME_MULTIPLIER: f64 = 1.5;

    /// Recovery-time multiplier for moderate-volume sessions
    pub const MODERATE_VOLUME_MULTIPLIER: f64 = 1.2;

    /// Recovery percentage at or above which a muscle counts as recovered
    pub const RECOVERED_PERCENT_THRESHOLD: u8 = 80;

    /// Recovery percentage at or above which a muscle counts as partially
    /// recovered (below: still recovering)
    pub const PARTIAL_PERCENT_THRESHOLD: u8 = 50;
}

/// Session activation scoring
pub mod activation {
    /// Activation points credited per completed set
    pub const POINTS_PER_SET: u32 = 20;

    /// Ceiling applied to the running per-muscle activation total after
    /// every exercise contribution
    pub const MAX_ACTIVATION: u32 = 100;

    /// Activation at or above which a muscle was worked heavily
    pub const HIGH_ACTIVATION_THRESHOLD: u32 = 70;

    /// Activation at or above which a muscle was worked moderately
    pub const MODERATE_ACTIVATION_THRESHOLD: u32 = 40;

    /// Flat recovery baseline used for the activation color-coding overlay
    /// (hours). Deliberately simpler than the per-muscle table in
    /// [`super::recovery`]; the two models are independent by design.
    pub const FLAT_RECOVERY_BASELINE_HOURS: f64 = 48.0;
}

/// Personal records and performance trend analysis
pub mod performance {
    /// Rep divisor in the Epley one-rep-max estimate:
    /// `weight * (1 + reps / 30)`
    ///
    /// Reference: Epley, B. (1985). *Poundage Chart*. Boyd Epley Workout.
    pub const EPLEY_REP_DIVISOR: f64 = 30.0;

    /// Number of most-recent performances compared against the preceding
    /// window when computing a strength trend
    pub const TREND_WINDOW: usize = 4;

    /// Minimum performance entries before any trend is reported
    pub const MIN_TREND_PERFORMANCES: usize = 2;
}

/// Consistency tracking and insight thresholds
pub mod consistency {
    /// Streak length at or above which a positive insight is generated
    pub const STREAK_POSITIVE_THRESHOLD: u32 = 7;

    /// Strength-trend percentage above which a positive insight is generated
    pub const STRENGTH_TREND_POSITIVE_PERCENT: f64 = 10.0;

    /// Minimum performance data points before a flat trend produces a
    /// plateau warning
    pub const MIN_PLATEAU_DATA_POINTS: usize = 3;

    /// Week-over-week volume increase (percent) treated as a positive surge
    pub const VOLUME_SURGE_PERCENT: f64 = 15.0;

    /// Week-over-week volume decrease (percent, negative) treated as a
    /// drop-off warning
    pub const VOLUME_DROP_PERCENT: f64 = -20.0;

    /// Trailing window for the training-balance view (days)
    pub const BALANCE_WINDOW_DAYS: i64 = 7;

    /// Weekly set count another muscle must exceed before an untrained
    /// muscle triggers a balance warning
    pub const BALANCE_NEGLECT_SET_THRESHOLD: u32 = 10;
}
