// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Loading the store from fixture files.

use reading_store::models::{Reading, Schema};
use reading_store::{FixtureStore, Fixtures, StoreError};
use std::io::Write;

mod common;

fn write_fixture(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write fixture");
    file
}

#[test]
fn test_load_fixture_file() {
    let file = write_fixture(
        r#"{
            "users": {
                "alice": {
                    "username": "alice",
                    "email": "alice@example.com",
                    "hashed_password": "$2a$10$hash"
                },
                "bob": { "username": "bob", "hashed_password": "$2a$10$hash" }
            },
            "readings": {
                "alice": [
                    { "timestamp": "2024-01-01T00:00:00Z", "value": 1.5 },
                    { "timestamp": "2024-01-01T01:00:00+01:00", "value": "2.5" }
                ]
            }
        }"#,
    );

    let store = FixtureStore::from_fixtures(Fixtures::load(file.path()).unwrap()).unwrap();

    assert_eq!(store.usernames(), vec!["alice", "bob"]);
    let readings = store.get_readings("alice").unwrap();
    assert_eq!(readings.len(), 2);
    assert_eq!(readings[1].value, 2.5);
    assert_eq!(readings[1].timestamp.offset().unwrap().local_minus_utc(), 3600);
    assert!(store.get_readings("bob").unwrap().is_empty());
    assert!(store.get_user("alice").unwrap().user.full_name.is_none());
}

#[test]
fn test_orphaned_readings_rejected() {
    let file = write_fixture(
        r#"{
            "users": {},
            "readings": { "ghost": [] }
        }"#,
    );

    let fixtures = Fixtures::load(file.path()).unwrap();
    let err = FixtureStore::from_fixtures(fixtures).unwrap_err();
    assert!(matches!(err, StoreError::OrphanedReadings(ref u) if u == "ghost"));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = Fixtures::load(&path).unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn test_snapshot_reloads() {
    let store = common::test_store();
    store
        .append_reading("testuser", common::reading_at("2024-01-01T00:00:00Z", 3.5))
        .unwrap();

    let file = write_fixture(&serde_json::to_string(&store.snapshot()).unwrap());
    let reloaded = FixtureStore::from_fixtures(Fixtures::load(file.path()).unwrap()).unwrap();

    assert_eq!(
        reloaded.get_readings("testuser").unwrap(),
        store.get_readings("testuser").unwrap()
    );
    assert_eq!(
        reloaded.get_user("testuser").unwrap(),
        store.get_user("testuser").unwrap()
    );
}

#[test]
fn test_ingested_snapshot_reloads() {
    let store = common::test_store();
    for body in [
        r#"{"timestamp": "2024-01-01T00:00:00Z", "value": "3.5"}"#,
        r#"{"timestamp": "2024-01-01T01:00:00", "value": true}"#,
        r#"{"timestamp": "2024-01-01", "value": 7}"#,
    ] {
        let reading = Reading::from_json_str(body).unwrap();
        store.append_reading("testuser", reading).unwrap();
    }

    // Non-finite values never reach the store.
    assert!(Reading::from_json_str(r#"{"timestamp": "2024-01-01T00:00:00Z", "value": "nan"}"#)
        .is_err());

    let dump = serde_json::to_string_pretty(&store.snapshot()).unwrap();
    let reloaded = FixtureStore::from_fixtures(Fixtures::from_json_str(&dump).unwrap()).unwrap();
    assert_eq!(
        reloaded.get_readings("testuser").unwrap(),
        store.get_readings("testuser").unwrap()
    );
}
