// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Reading timestamps.
//!
//! A timestamp keeps the form it was reported in: values with an offset stay
//! offset-aware, values without one stay naive, and both serialize back the
//! way they came in.

use crate::time_utils::{
    format_naive, format_rfc3339, from_unix_seconds, parse_aware, parse_naive,
};
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};
use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Numbers above this magnitude are taken as milliseconds.
const MS_THRESHOLD: f64 = 2e10;

/// Sample time of a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timestamp {
    /// Reported with a UTC offset (Unix numbers land here as UTC)
    Aware(DateTime<FixedOffset>),
    /// Reported without an offset
    Naive(NaiveDateTime),
}

impl Timestamp {
    /// The reported offset, if any.
    pub fn offset(&self) -> Option<FixedOffset> {
        match self {
            Timestamp::Aware(dt) => Some(*dt.offset()),
            Timestamp::Naive(_) => None,
        }
    }

    /// Instant for ordering and comparison; naive values are read as UTC.
    pub fn assume_utc(&self) -> DateTime<FixedOffset> {
        match self {
            Timestamp::Aware(dt) => *dt,
            Timestamp::Naive(naive) => naive.and_utc().fixed_offset(),
        }
    }

    /// Parse any accepted string form: RFC3339, offset-aware without
    /// seconds, naive date-time, bare date, or a Unix number.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Ok(number) = raw.parse::<f64>() {
            return Self::from_unix(number);
        }
        parse_aware(raw)
            .map(Timestamp::Aware)
            .or_else(|| parse_naive(raw).map(Timestamp::Naive))
    }

    /// Unix seconds, or milliseconds when the magnitude says so.
    pub fn from_unix(raw: f64) -> Option<Self> {
        let secs = if raw.abs() > MS_THRESHOLD {
            raw / 1000.0
        } else {
            raw
        };
        from_unix_seconds(secs).map(Timestamp::Aware)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(dt: DateTime<Tz>) -> Self {
        Timestamp::Aware(dt.fixed_offset())
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(dt: NaiveDateTime) -> Self {
        Timestamp::Naive(dt)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp::Aware(dt) => f.write_str(&format_rfc3339(dt)),
            Timestamp::Naive(dt) => f.write_str(&format_naive(dt)),
        }
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TimestampVisitor)
    }
}

struct TimestampVisitor;

impl TimestampVisitor {
    fn number<E: de::Error>(&self, raw: f64) -> Result<Timestamp, E> {
        Timestamp::from_unix(raw).ok_or_else(|| E::invalid_value(Unexpected::Float(raw), self))
    }
}

impl<'de> Visitor<'de> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an ISO 8601 date-time or a Unix timestamp")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Timestamp, E> {
        Timestamp::parse(v).ok_or_else(|| E::invalid_value(Unexpected::Str(v), &self))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Timestamp, E> {
        self.number(v as f64)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Timestamp, E> {
        self.number(v as f64)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Timestamp, E> {
        self.number(v)
    }
}
