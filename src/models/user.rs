// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! User model for storage and API.

use serde::{Deserialize, Serialize};
use std::fmt;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Public-facing user identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export, export_to = "bindings/"))]
pub struct User {
    /// Unique identifier (also the store key)
    pub username: String,
    /// Email address (None if not given)
    #[serde(default)]
    pub email: Option<String>,
    /// Display name
    #[serde(default)]
    pub full_name: Option<String>,
}

impl User {
    /// User with only a username; email and full name absent.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: None,
            full_name: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }
}

/// Persisted credential record: a [`User`] plus its password hash.
///
/// The hash is a bcrypt string produced and verified by the auth layer. It
/// is stored and handed back untouched, never parsed here.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export, export_to = "bindings/"))]
pub struct DbUser {
    #[serde(flatten)]
    pub user: User,
    pub hashed_password: String,
}

impl DbUser {
    pub fn new(user: User, hashed_password: impl Into<String>) -> Self {
        Self {
            user,
            hashed_password: hashed_password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.user.username
    }

    /// Public view of the record, without the hash.
    pub fn to_user(&self) -> User {
        self.user.clone()
    }
}

impl fmt::Debug for DbUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbUser")
            .field("user", &self.user)
            .field("hashed_password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Schema;
    use serde_json::json;

    const HASH: &str = "$2a$10$z5scDKQHiJAyXnOOjCgHOulGOVb1I4ehsQT8zw8kz99IJtGYy5u/m";

    #[test]
    fn test_user_with_only_username() {
        let user = User::from_json_value(json!({ "username": "alice" })).unwrap();
        assert_eq!(user, User::new("alice"));
        assert_eq!(user.email, None);
        assert_eq!(user.full_name, None);
    }

    #[test]
    fn test_user_explicit_nulls() {
        let user =
            User::from_json_value(json!({ "username": "alice", "email": null, "full_name": null }))
                .unwrap();
        assert_eq!(user.email, None);
        assert_eq!(user.full_name, None);
    }

    #[test]
    fn test_user_missing_username_fails() {
        let err = User::from_json_value(json!({ "email": "a@example.com" })).unwrap_err();
        assert_eq!(err.schema, "User");
        assert!(err.message.contains("username"));
    }

    #[test]
    fn test_user_wrong_type_fails() {
        assert!(User::from_json_value(json!({ "username": 42 })).is_err());
        assert!(User::from_json_value(json!({ "username": "a", "email": 1 })).is_err());
    }

    #[test]
    fn test_user_serializes_absent_fields_as_null() {
        let value = serde_json::to_value(User::new("alice")).unwrap();
        assert_eq!(
            value,
            json!({ "username": "alice", "email": null, "full_name": null })
        );
    }

    #[test]
    fn test_db_user_wire_shape_is_flat() {
        let record = DbUser::new(
            User::new("testuser")
                .with_email("test@example.com")
                .with_full_name("Test User"),
            HASH,
        );
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "username": "testuser",
                "email": "test@example.com",
                "full_name": "Test User",
                "hashed_password": HASH,
            })
        );

        let parsed = DbUser::from_json_value(value).unwrap();
        assert_eq!(parsed, record);
        assert_eq!(parsed.username(), "testuser");
    }

    #[test]
    fn test_db_user_requires_hash() {
        let err = DbUser::from_json_value(json!({ "username": "testuser" })).unwrap_err();
        assert_eq!(err.schema, "DBUser");
        assert!(err.message.contains("hashed_password"));
    }

    #[test]
    fn test_db_user_debug_redacts_hash() {
        let record = DbUser::new(User::new("testuser"), HASH);
        let debug = format!("{:?}", record);
        assert!(!debug.contains(HASH));
        assert!(debug.contains("<redacted>"));
        assert!(debug.contains("testuser"));
    }
}
