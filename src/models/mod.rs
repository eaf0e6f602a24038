// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod reading;
pub mod timestamp;
pub mod token;
pub mod user;

pub use reading::{Reading, ReadingResponse};
pub use timestamp::Timestamp;
pub use token::Token;
pub use user::{DbUser, User};

use crate::error::ValidationError;
use serde::de::DeserializeOwned;

/// A wire schema that can be built from untyped JSON.
///
/// Construction fails with a [`ValidationError`] naming the schema when a
/// required field is missing or a field has the wrong type.
pub trait Schema: DeserializeOwned {
    /// Schema name used in validation errors.
    const NAME: &'static str;

    fn from_json_value(value: serde_json::Value) -> Result<Self, ValidationError> {
        serde_json::from_value(value).map_err(|e| ValidationError::new(Self::NAME, e.to_string()))
    }

    fn from_json_str(raw: &str) -> Result<Self, ValidationError> {
        serde_json::from_str(raw).map_err(|e| ValidationError::new(Self::NAME, e.to_string()))
    }
}

impl Schema for Token {
    const NAME: &'static str = "Token";
}

impl Schema for Reading {
    const NAME: &'static str = "Reading";
}

impl Schema for ReadingResponse {
    const NAME: &'static str = "ReadingResponse";
}

impl Schema for User {
    const NAME: &'static str = "User";
}

impl Schema for DbUser {
    const NAME: &'static str = "DBUser";
}
