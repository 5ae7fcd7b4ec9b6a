// ABOUTME: Threshold configuration for recovery, activation, performance, and consistency engines
// ABOUTME: Defaults from physiological constants, overridable via REPFORGE_* environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repforge Contributors

//! Intelligence configuration.
//!
//! Each engine takes its config struct by reference, so tests can pin exact
//! thresholds without touching process state. Production call sites use
//! [`IntelligenceConfig::global`], which loads once, applies environment
//! overrides, and validates.

use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::ConfigError;
use crate::intelligence::physiological_constants::{
    activation, consistency, performance, recovery,
};

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Parse an environment override, logging and falling back on bad values
fn env_override<T: FromStr + Copy>(var: &str, default: T) -> T {
    match env::var(var) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("ignoring unparseable {var}={raw}, using default");
            default
        }),
        Err(_) => default,
    }
}

/// Recovery model thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryConfig {
    /// Set count above which `high_volume_multiplier` applies
    pub high_volume_set_threshold: u32,
    /// Set count above which `moderate_volume_multiplier` applies
    pub moderate_volume_set_threshold: u32,
    /// Recovery-window multiplier for high-volume sessions
    pub high_volume_multiplier: f64,
    /// Recovery-window multiplier for moderate-volume sessions
    pub moderate_volume_multiplier: f64,
    /// Recovery percent at or above which a muscle counts as recovered
    pub recovered_threshold: u8,
    /// Recovery percent at or above which a muscle counts as partial
    pub partial_threshold: u8,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            high_volume_set_threshold: recovery::HIGH_VOLUME_SET_THRESHOLD,
            moderate_volume_set_threshold: recovery::MODERATE_VOLUME_SET_THRESHOLD,
            high_volume_multiplier: recovery::HIGH_VOLUME_MULTIPLIER,
            moderate_volume_multiplier: recovery::MODERATE_VOLUME_MULTIPLIER,
            recovered_threshold: recovery::RECOVERED_PERCENT_THRESHOLD,
            partial_threshold: recovery::PARTIAL_PERCENT_THRESHOLD,
        }
    }
}

/// Activation model thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivationConfig {
    /// Activation points credited per completed set
    pub points_per_set: u32,
    /// Activation at or above which a muscle was worked heavily
    pub high_threshold: u32,
    /// Activation at or above which a muscle was worked moderately
    pub moderate_threshold: u32,
    /// Flat recovery baseline for the color-coding overlay (hours)
    pub flat_recovery_baseline_hours: f64,
}

impl Default for ActivationConfig {
    fn default() -> Self {
        Self {
            points_per_set: activation::POINTS_PER_SET,
            high_threshold: activation::HIGH_ACTIVATION_THRESHOLD,
            moderate_threshold: activation::MODERATE_ACTIVATION_THRESHOLD,
            flat_recovery_baseline_hours: activation::FLAT_RECOVERY_BASELINE_HOURS,
        }
    }
}

/// Performance and records engine thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceConfig {
    /// Most-recent performances compared against the preceding window
    pub trend_window: usize,
    /// Minimum performance entries before any trend is reported
    pub min_trend_performances: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            trend_window: performance::TREND_WINDOW,
            min_trend_performances: performance::MIN_TREND_PERFORMANCES,
        }
    }
}

/// Consistency and insight thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsistencyConfig {
    /// Streak length that triggers a positive insight
    pub streak_positive_threshold: u32,
    /// Strength-trend percent that triggers a positive insight
    pub strength_trend_positive_percent: f64,
    /// Minimum data points before a flat trend warns about a plateau
    pub min_plateau_data_points: usize,
    /// Week-over-week volume increase (percent) treated as a surge
    pub volume_surge_percent: f64,
    /// Week-over-week volume decrease (percent, negative) treated as a drop
    pub volume_drop_percent: f64,
    /// Trailing window for the training-balance view (days)
    pub balance_window_days: i64,
    /// Weekly sets another muscle must exceed before an untrained muscle
    /// triggers a balance warning
    pub balance_neglect_set_threshold: u32,
}

impl Default for ConsistencyConfig {
    fn default() -> Self {
        Self {
            streak_positive_threshold: consistency::STREAK_POSITIVE_THRESHOLD,
            strength_trend_positive_percent: consistency::STRENGTH_TREND_POSITIVE_PERCENT,
            min_plateau_data_points: consistency::MIN_PLATEAU_DATA_POINTS,
            volume_surge_percent: consistency::VOLUME_SURGE_PERCENT,
            volume_drop_percent: consistency::VOLUME_DROP_PERCENT,
            balance_window_days: consistency::BALANCE_WINDOW_DAYS,
            balance_neglect_set_threshold: consistency::BALANCE_NEGLECT_SET_THRESHOLD,
        }
    }
}

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Recovery model thresholds
    pub recovery: RecoveryConfig,
    /// Activation model thresholds
    pub activation: ActivationConfig,
    /// Performance and records thresholds
    pub performance: PerformanceConfig,
    /// Consistency and insight thresholds
    pub consistency: ConsistencyConfig,
}

impl IntelligenceConfig {
    /// Global configuration, loaded once with environment overrides applied.
    ///
    /// Invalid override combinations fall back to defaults with a warning
    /// rather than aborting; the analytics layer must stay total.
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            let config = Self::from_env();
            config.validate().map_or_else(
                |err| {
                    warn!("invalid intelligence config from environment: {err}, using defaults");
                    Self::default()
                },
                |()| config,
            )
        })
    }

    /// Build a configuration from defaults plus `REPFORGE_*` environment
    /// overrides
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            recovery: RecoveryConfig {
                high_volume_set_threshold: env_override(
                    "REPFORGE_RECOVERY_HIGH_VOLUME_SETS",
                    defaults.recovery.high_volume_set_threshold,
                ),
                moderate_volume_set_threshold: env_override(
                    "REPFORGE_RECOVERY_MODERATE_VOLUME_SETS",
                    defaults.recovery.moderate_volume_set_threshold,
                ),
                high_volume_multiplier: env_override(
                    "REPFORGE_RECOVERY_HIGH_VOLUME_MULTIPLIER",
                    defaults.recovery.high_volume_multiplier,
                ),
                moderate_volume_multiplier: env_override(
                    "REPFORGE_RECOVERY_MODERATE_VOLUME_MULTIPLIER",
                    defaults.recovery.moderate_volume_multiplier,
                ),
                recovered_threshold: env_override(
                    "REPFORGE_RECOVERY_RECOVERED_THRESHOLD",
                    defaults.recovery.recovered_threshold,
                ),
                partial_threshold: env_override(
                    "REPFORGE_RECOVERY_PARTIAL_THRESHOLD",
                    defaults.recovery.partial_threshold,
                ),
            },
            activation: ActivationConfig {
                points_per_set: env_override(
                    "REPFORGE_ACTIVATION_POINTS_PER_SET",
                    defaults.activation.points_per_set,
                ),
                high_threshold: env_override(
                    "REPFORGE_ACTIVATION_HIGH_THRESHOLD",
                    defaults.activation.high_threshold,
                ),
                moderate_threshold: env_override(
                    "REPFORGE_ACTIVATION_MODERATE_THRESHOLD",
                    defaults.activation.moderate_threshold,
                ),
                flat_recovery_baseline_hours: env_override(
                    "REPFORGE_ACTIVATION_RECOVERY_BASELINE_HOURS",
                    defaults.activation.flat_recovery_baseline_hours,
                ),
            },
            performance: PerformanceConfig {
                trend_window: env_override(
                    "REPFORGE_PERFORMANCE_TREND_WINDOW",
                    defaults.performance.trend_window,
                ),
                min_trend_performances: env_override(
                    "REPFORGE_PERFORMANCE_MIN_TREND_PERFORMANCES",
                    defaults.performance.min_trend_performances,
                ),
            },
            consistency: ConsistencyConfig {
                streak_positive_threshold: env_override(
                    "REPFORGE_CONSISTENCY_STREAK_THRESHOLD",
                    defaults.consistency.streak_positive_threshold,
                ),
                strength_trend_positive_percent: env_override(
                    "REPFORGE_CONSISTENCY_TREND_POSITIVE_PERCENT",
                    defaults.consistency.strength_trend_positive_percent,
                ),
                min_plateau_data_points: env_override(
                    "REPFORGE_CONSISTENCY_MIN_PLATEAU_POINTS",
                    defaults.consistency.min_plateau_data_points,
                ),
                volume_surge_percent: env_override(
                    "REPFORGE_CONSISTENCY_VOLUME_SURGE_PERCENT",
                    defaults.consistency.volume_surge_percent,
                ),
                volume_drop_percent: env_override(
                    "REPFORGE_CONSISTENCY_VOLUME_DROP_PERCENT",
                    defaults.consistency.volume_drop_percent,
                ),
                balance_window_days: env_override(
                    "REPFORGE_CONSISTENCY_BALANCE_WINDOW_DAYS",
                    defaults.consistency.balance_window_days,
                ),
                balance_neglect_set_threshold: env_override(
                    "REPFORGE_CONSISTENCY_BALANCE_NEGLECT_SETS",
                    defaults.consistency.balance_neglect_set_threshold,
                ),
            },
        }
    }

    /// Validate cross-field invariants.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when thresholds are ordered inconsistently or
    /// multipliers would shrink recovery windows.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.recovery.partial_threshold > self.recovery.recovered_threshold {
            return Err(ConfigError::InvalidThreshold {
                field: "recovery.partial_threshold",
                message: "partial threshold must not exceed recovered threshold".to_owned(),
            });
        }
        if self.recovery.moderate_volume_set_threshold >= self.recovery.high_volume_set_threshold {
            return Err(ConfigError::InvalidThreshold {
                field: "recovery.moderate_volume_set_threshold",
                message: "moderate volume threshold must be below high volume threshold"
                    .to_owned(),
            });
        }
        if self.recovery.high_volume_multiplier < 1.0
            || self.recovery.moderate_volume_multiplier < 1.0
        {
            return Err(ConfigError::InvalidThreshold {
                field: "recovery.volume_multipliers",
                message: "volume multipliers must not shrink the recovery window".to_owned(),
            });
        }
        if self.activation.moderate_threshold >= self.activation.high_threshold {
            return Err(ConfigError::InvalidThreshold {
                field: "activation.moderate_threshold",
                message: "moderate activation threshold must be below high threshold".to_owned(),
            });
        }
        if self.activation.flat_recovery_baseline_hours <= 0.0 {
            return Err(ConfigError::InvalidThreshold {
                field: "activation.flat_recovery_baseline_hours",
                message: "recovery baseline must be positive".to_owned(),
            });
        }
        if self.performance.trend_window == 0 {
            return Err(ConfigError::InvalidThreshold {
                field: "performance.trend_window",
                message: "trend window must be at least 1".to_owned(),
            });
        }
        Ok(())
    }
}
