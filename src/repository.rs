// ABOUTME: Session repository boundary between storage and the analytics engines
// ABOUTME: Trait plus an in-memory implementation used by tests and the seeder binary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repforge Contributors

//! Session storage boundary.
//!
//! The analytics engines consume already-loaded `&[WorkoutSession]` slices
//! and never touch storage themselves. [`SessionRepository`] is the seam a
//! real persistence layer plugs into; [`InMemorySessionRepository`] backs
//! tests and the synthetic-history seeder. The trait is synchronous because
//! the whole analytics layer is synchronous - there is no I/O to await in
//! this crate.

use std::collections::HashMap;

use uuid::Uuid;

use crate::errors::AppResult;
use crate::models::WorkoutSession;

/// Source of workout sessions for a user
pub trait SessionRepository {
    /// Load the full session history for a user, oldest first.
    ///
    /// A user with no recorded sessions yields an empty vector, not an
    /// error.
    ///
    /// # Errors
    /// Returns [`crate::errors::AppError::Repository`] when the backing
    /// store cannot serve the request.
    fn load_sessions(&self, user_id: Uuid) -> AppResult<Vec<WorkoutSession>>;
}

/// In-memory session store keyed by user
#[derive(Debug, Default)]
pub struct InMemorySessionRepository {
    sessions: HashMap<Uuid, Vec<WorkoutSession>>,
}

impl InMemorySessionRepository {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a session to its owner's history
    pub fn insert(&mut self, session: WorkoutSession) {
        self.sessions
            .entry(session.user_id)
            .or_default()
            .push(session);
    }

    /// Number of sessions stored across all users
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.values().map(Vec::len).sum()
    }

    /// Whether the repository holds no sessions
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl SessionRepository for InMemorySessionRepository {
    fn load_sessions(&self, user_id: Uuid) -> AppResult<Vec<WorkoutSession>> {
        let mut sessions = self.sessions.get(&user_id).cloned().unwrap_or_default();
        sessions.sort_by_key(|s| s.started_at);
        Ok(sessions)
    }
}
