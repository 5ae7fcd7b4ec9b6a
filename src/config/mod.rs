// ABOUTME: Configuration module for the analytics engines
// ABOUTME: Threshold configs with environment overrides and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repforge Contributors

//! Configuration for the analytics engines.
//!
//! All tunable thresholds live in [`intelligence::IntelligenceConfig`];
//! defaults come from
//! [`crate::intelligence::physiological_constants`] and individual values
//! may be overridden through `REPFORGE_*` environment variables.

pub mod intelligence;

pub use intelligence::{
    ActivationConfig, ConsistencyConfig, IntelligenceConfig, PerformanceConfig, RecoveryConfig,
};
