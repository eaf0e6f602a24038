// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory user and reading store.
//!
//! Stands in for a real database during development and testing. The store
//! is an explicit object: build one at startup (or per test) and share it
//! with `Arc`.
//!
//! Each user's reading sequence has its own lock, so appends for different
//! users never contend with each other.

use crate::error::{Result, StoreError};
use crate::fixtures::Fixtures;
use crate::models::{DbUser, Reading, ReadingResponse};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// One user's readings, oldest first.
type ReadingLog = Arc<RwLock<Vec<Reading>>>;

/// Users keyed by username, and their readings.
///
/// Every readings key is also a users key: sequences are only created
/// together with their user.
#[derive(Debug, Default)]
pub struct FixtureStore {
    users: DashMap<String, DbUser>,
    readings: DashMap<String, ReadingLog>,
}

impl FixtureStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the built-in seed user.
    pub fn seeded() -> Self {
        Self::load_unchecked(Fixtures::seed())
    }

    /// Create a store from a fixture set, rejecting inconsistent fixtures.
    pub fn from_fixtures(fixtures: Fixtures) -> Result<Self> {
        let fixtures = fixtures.check()?;
        let store = Self::load_unchecked(fixtures);
        tracing::info!(users = store.user_count(), "Fixture store initialized");
        Ok(store)
    }

    fn load_unchecked(fixtures: Fixtures) -> Self {
        let store = Self::new();
        for (username, data) in fixtures.readings {
            store
                .readings
                .insert(username, Arc::new(RwLock::new(data)));
        }
        for (username, user) in fixtures.users {
            store.users.insert(username, user);
        }
        store
    }

    // ─── Users ───────────────────────────────────────────────────

    /// Look up the credential record for a username.
    pub fn get_user(&self, username: &str) -> Result<DbUser> {
        match self.users.get(username) {
            Some(user) => Ok(user.value().clone()),
            None => {
                tracing::debug!(username, "User lookup missed");
                Err(StoreError::NotFound(username.to_string()))
            }
        }
    }

    pub fn contains_user(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    /// Register a user with an empty reading sequence.
    pub fn insert_user(&self, user: DbUser) -> Result<()> {
        let username = user.username().to_string();
        match self.users.entry(username.clone()) {
            Entry::Occupied(_) => Err(StoreError::AlreadyExists(username)),
            Entry::Vacant(slot) => {
                self.readings.entry(username.clone()).or_default();
                slot.insert(user);
                tracing::debug!(username = %username, "User inserted");
                Ok(())
            }
        }
    }

    /// All usernames, sorted.
    pub fn usernames(&self) -> Vec<String> {
        let mut names: Vec<String> = self.users.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    // ─── Readings ────────────────────────────────────────────────

    fn reading_log(&self, username: &str) -> Result<ReadingLog> {
        // Clone the handle so the map shard is released before locking.
        self.readings
            .get(username)
            .map(|log| Arc::clone(log.value()))
            .ok_or_else(|| {
                tracing::debug!(username, "Readings lookup missed");
                StoreError::NotFound(username.to_string())
            })
    }

    /// Current readings for a user, in recorded order.
    pub fn get_readings(&self, username: &str) -> Result<Vec<Reading>> {
        let log = self.reading_log(username)?;
        let data = log.read().unwrap_or_else(PoisonError::into_inner);
        Ok(data.clone())
    }

    /// Append a reading to the end of a user's sequence.
    ///
    /// Returns the new length of the sequence.
    pub fn append_reading(&self, username: &str, reading: Reading) -> Result<usize> {
        let log = self.reading_log(username)?;
        let mut data = log.write().unwrap_or_else(PoisonError::into_inner);
        data.push(reading);
        tracing::debug!(username, count = data.len(), "Reading appended");
        Ok(data.len())
    }

    /// Build the API response body for a user's readings.
    pub fn reading_response(&self, username: &str) -> Result<ReadingResponse> {
        Ok(ReadingResponse {
            username: username.to_string(),
            data: self.get_readings(username)?,
        })
    }

    /// Copy the current contents out as a fixture set.
    ///
    /// Readings are collected per listed user, so the copy never holds a
    /// sequence without its user.
    pub fn snapshot(&self) -> Fixtures {
        let mut fixtures = Fixtures::default();
        for entry in self.users.iter() {
            let username = entry.key();
            let data = self
                .readings
                .get(username)
                .map(|log| log.read().unwrap_or_else(PoisonError::into_inner).clone())
                .unwrap_or_default();
            fixtures.readings.insert(username.clone(), data);
            fixtures
                .users
                .insert(username.clone(), entry.value().clone());
        }
        fixtures
    }
}
