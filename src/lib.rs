// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Reading-Store: users and sensor readings held in memory
//!
//! This crate provides the user store and the wire schemas consumed by the
//! authentication and API layers of the sensor-reading backend.

pub mod config;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod store;
pub mod time_utils;

pub use error::{Result, StoreError, ValidationError};
pub use fixtures::Fixtures;
pub use store::FixtureStore;
