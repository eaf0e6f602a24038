// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time parsing and formatting.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Offset-carrying layouts tried after RFC3339. `Z` is rewritten to `+00:00`.
const AWARE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Format a timestamp as RFC3339, keeping its offset and sub-second digits.
pub fn format_rfc3339(date: &DateTime<FixedOffset>) -> String {
    date.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Format an offset-less timestamp as `YYYY-MM-DDTHH:MM:SS[.f]`.
pub fn format_naive(date: &NaiveDateTime) -> String {
    date.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}

/// Parse a date-time that carries a UTC offset (or `Z`).
///
/// Seconds may be omitted.
pub fn parse_aware(raw: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt);
    }

    let normalized = match raw.strip_suffix(|c: char| c == 'Z' || c == 'z') {
        Some(head) => format!("{}+00:00", head),
        None => raw.to_string(),
    };
    AWARE_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(&normalized, fmt).ok())
}

/// Parse a date-time without an offset, or a bare date (midnight).
pub fn parse_naive(raw: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Convert Unix seconds (fractional allowed) into a UTC timestamp.
pub fn from_unix_seconds(secs: f64) -> Option<DateTime<FixedOffset>> {
    if !secs.is_finite() {
        return None;
    }
    let whole = secs.floor();
    let nanos = ((secs - whole) * 1_000_000_000.0).round() as u32;
    DateTime::<Utc>::from_timestamp(whole as i64, nanos.min(999_999_999))
        .map(|dt| dt.fixed_offset())
}
