// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types shared by the store, the fixtures and the schemas.

use std::path::PathBuf;

/// A schema received a field of the wrong shape or is missing a required one.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Invalid {schema}: {message}")]
pub struct ValidationError {
    /// Name of the schema that rejected the input
    pub schema: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(schema: &'static str, message: impl Into<String>) -> Self {
        Self {
            schema,
            message: message.into(),
        }
    }
}

/// Store error type surfaced to the auth and API collaborators.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("User not found: {0}")]
    NotFound(String),

    #[error("User already exists: {0}")]
    AlreadyExists(String),

    #[error("Readings recorded for unknown user: {0}")]
    OrphanedReadings(String),

    #[error("Fixture key {key} does not match username {username}")]
    KeyMismatch { key: String, username: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// True when the error means the username is absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
