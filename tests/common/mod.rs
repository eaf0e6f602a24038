// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::{DateTime, FixedOffset};
use reading_store::models::{DbUser, Reading, User};
use reading_store::FixtureStore;
use std::sync::Arc;

/// Create a fresh seeded store for one test.
#[allow(dead_code)]
pub fn test_store() -> Arc<FixtureStore> {
    Arc::new(FixtureStore::seeded())
}

/// Create a test user record with a dummy hash.
#[allow(dead_code)]
pub fn test_user(username: &str) -> DbUser {
    DbUser::new(
        User::new(username).with_email(format!("{}@example.com", username)),
        "$2a$10$abcdefghijklmnopqrstuu5Rz0rWz1tGf4yOmHF0lZf6hKqTgCgWS",
    )
}

/// Build a reading from an RFC3339 timestamp.
#[allow(dead_code)]
pub fn reading_at(timestamp: &str, value: f64) -> Reading {
    let ts: DateTime<FixedOffset> =
        DateTime::parse_from_rfc3339(timestamp).expect("valid test timestamp");
    Reading::new(ts, value)
}
