// ABOUTME: Error types for configuration and the session repository boundary
// ABOUTME: The analytics engines themselves are total and never return errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repforge Contributors

//! Error handling.
//!
//! The analytics functions are pure and total over well-formed input:
//! malformed numerics contribute zero, unrecognized labels pass through,
//! and empty histories yield empty outputs. Fallibility is therefore
//! confined to the edges - configuration validation and session loading.

use thiserror::Error;
use uuid::Uuid;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A threshold value is out of range or ordered inconsistently with its
    /// neighbors
    #[error("invalid threshold for {field}: {message}")]
    InvalidThreshold {
        /// Dotted path of the offending field
        field: &'static str,
        /// What made the value invalid
        message: String,
    },
}

/// Application-level errors surfaced at the crate boundary
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration failed validation
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Session storage could not serve the request
    #[error("session repository error for user {user_id}: {message}")]
    Repository {
        /// User whose sessions were requested
        user_id: Uuid,
        /// Underlying storage failure description
        message: String,
    },
}

/// Convenience alias used at the crate boundary
pub type AppResult<T> = Result<T, AppError>;
