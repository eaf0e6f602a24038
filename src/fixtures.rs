// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Seed data for the in-memory store.
//!
//! A fixture set has the same JSON shape as the two store mappings:
//!
//! ```json
//! {
//!   "users": { "testuser": { "username": "testuser", "hashed_password": "..." } },
//!   "readings": { "testuser": [] }
//! }
//! ```

use crate::error::{Result, StoreError, ValidationError};
use crate::models::{DbUser, Reading, User};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Username of the built-in development user.
pub const SEED_USERNAME: &str = "testuser";

/// bcrypt (cost 10) of the seed user's password.
pub const SEED_PASSWORD_HASH: &str =
    "$2a$10$z5scDKQHiJAyXnOOjCgHOulGOVb1I4ehsQT8zw8kz99IJtGYy5u/m";

/// Users and readings keyed by username.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fixtures {
    #[serde(default)]
    pub users: BTreeMap<String, DbUser>,
    #[serde(default)]
    pub readings: BTreeMap<String, Vec<Reading>>,
}

impl Fixtures {
    /// The built-in seed: `testuser` with no readings.
    pub fn seed() -> Self {
        let user = DbUser::new(
            User::new(SEED_USERNAME)
                .with_email("test@example.com")
                .with_full_name("Test User"),
            SEED_PASSWORD_HASH,
        );

        Self {
            users: BTreeMap::from([(SEED_USERNAME.to_string(), user)]),
            readings: BTreeMap::from([(SEED_USERNAME.to_string(), Vec::new())]),
        }
    }

    /// Parse a fixture document. The result is not yet checked.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        serde_json::from_str(raw)
            .map_err(|e| ValidationError::new("Fixtures", e.to_string()).into())
    }

    /// Read and parse a fixture file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "Loading fixtures");
        Self::from_json_str(&raw)
    }

    /// Check referential consistency and fill in missing reading sequences.
    ///
    /// Every user key must equal its record's username, and every readings
    /// key must name a known user.
    pub fn check(mut self) -> Result<Self> {
        for (key, record) in &self.users {
            if key != record.username() {
                tracing::warn!(key = %key, username = %record.username(), "Fixture key mismatch");
                return Err(StoreError::KeyMismatch {
                    key: key.clone(),
                    username: record.username().to_string(),
                });
            }
        }

        if let Some(orphan) = self.readings.keys().find(|k| !self.users.contains_key(*k)) {
            tracing::warn!(username = %orphan, "Fixture readings without a user");
            return Err(StoreError::OrphanedReadings(orphan.clone()));
        }

        for username in self.users.keys() {
            self.readings.entry(username.clone()).or_default();
        }

        Ok(self)
    }
}
