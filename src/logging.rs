// ABOUTME: Logging configuration and structured logging setup for the seeder binary
// ABOUTME: Configures log level and output format from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repforge Contributors

//! Structured logging setup.
//!
//! The library itself only emits `tracing` events; this module is how
//! binaries (and integration harnesses) install a subscriber for them.

use std::env;

use tracing_subscriber::{fmt, EnvFilter};

/// Output format for log records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-line output
    Pretty,
    /// Single-line output for terminals and CI
    Compact,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Compact,
        }
    }
}

impl LoggingConfig {
    /// Build from `RUST_LOG` / `REPFORGE_LOG_FORMAT` environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let level = env::var("RUST_LOG").unwrap_or(defaults.level);
        let format = match env::var("REPFORGE_LOG_FORMAT").as_deref() {
            Ok("pretty") => LogFormat::Pretty,
            _ => defaults.format,
        };
        Self { level, format }
    }
}

/// Install a global `tracing` subscriber for this configuration.
///
/// Calling twice is a no-op rather than an error, so test harnesses can
/// initialise logging unconditionally.
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    let builder = fmt().with_env_filter(filter);
    let result = match config.format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
    // Subscriber already installed: keep the existing one.
    drop(result);
}
