// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Whole-second UTC instants and their `YYYY-MM-DDTHH:MM:SSZ` text form.
//!
//! Formatting computes the calendar fields straight from the epoch-second
//! count through `chrono`'s UTC arithmetic.  The process time zone (`TZ`) is
//! never consulted, so the same instant prints the same text everywhere.

use crate::duration::Duration;
use crate::error::{Error, Result};
use chrono::{DateTime, Datelike, NaiveDateTime, Timelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// `chrono` format string of the text form.
const UTC_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Exact widths; `chrono` alone would also accept signed or 5-digit years.
static UTC_SHAPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}Z$")
        .expect("UTC_SHAPE_REGEX should compile - this is a bug")
});

// ═══════════════════════════════════════════════════════════════════════════
// Timestamp
// ═══════════════════════════════════════════════════════════════════════════

/// An absolute instant with whole-second resolution, stored as seconds since
/// 1970-01-01T00:00:00Z.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    secs: i64,
}

impl Timestamp {
    pub const UNIX_EPOCH: Self = Self::from_unix(0);

    #[inline]
    pub const fn from_unix(secs: i64) -> Self {
        Self { secs }
    }

    /// Seconds since the Unix epoch.
    #[inline]
    pub const fn unix(&self) -> i64 {
        self.secs
    }

    /// The current instant, truncated to the second.
    pub fn now() -> Self {
        Self::from_utc(Utc::now())
    }

    /// Convert to a `chrono::DateTime<Utc>`.
    ///
    /// Returns `None` if the value falls outside chrono's representable range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.secs, 0)
    }

    /// Build from a `chrono::DateTime<Utc>`, dropping the sub-second part.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        Self::from_unix(datetime.timestamp())
    }

    /// `self + duration`, truncating `duration` to whole seconds.
    pub fn checked_add(self, duration: Duration) -> Option<Self> {
        self.secs.checked_add(duration.as_secs()).map(Self::from_unix)
    }

    /// `self - duration`, truncating `duration` to whole seconds.
    pub fn checked_sub(self, duration: Duration) -> Option<Self> {
        self.secs.checked_sub(duration.as_secs()).map(Self::from_unix)
    }

    /// `self - earlier`, or `None` if the span does not fit [`Duration`]
    /// (roughly 292 years either way).
    pub fn checked_duration_since(self, earlier: Self) -> Option<Duration> {
        self.secs
            .checked_sub(earlier.secs)
            .and_then(Duration::checked_from_secs)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Codec
// ═══════════════════════════════════════════════════════════════════════════

/// Parses exactly `YYYY-MM-DDTHH:MM:SSZ`.
///
/// Calendar fields are validated strictly: `2024-02-30T00:00:00Z`,
/// `2024-01-32T00:00:00Z`, hour `24` and leap second `60` are all rejected
/// rather than normalised.
///
/// # Errors
///
/// [`Error::InvalidArgument`] for any deviation from the pattern or an
/// impossible date or time.
///
/// # Examples
///
/// ```
/// use tempotext::parse_utc_timestamp;
///
/// let ts = parse_utc_timestamp("2024-01-01T00:00:00Z").unwrap();
/// assert_eq!(ts.unix(), 1_704_067_200);
/// ```
pub fn parse_utc_timestamp(input: &str) -> Result<Timestamp> {
    if !UTC_SHAPE_REGEX.is_match(input) {
        tracing::debug!(input, "timestamp does not match YYYY-MM-DDTHH:MM:SSZ");
        return Err(Error::invalid(format!(
            "timestamp {input:?} does not match YYYY-MM-DDTHH:MM:SSZ"
        )));
    }

    let naive = NaiveDateTime::parse_from_str(input, UTC_FORMAT).map_err(|err| {
        tracing::debug!(input, error = %err, "invalid calendar fields");
        Error::invalid(format!("invalid UTC timestamp {input:?}: {err}"))
    })?;

    // chrono models `:60` as a leap second; the text form never produces it.
    if naive.nanosecond() >= 1_000_000_000 {
        return Err(Error::invalid(format!(
            "invalid UTC timestamp {input:?}: leap seconds are not supported"
        )));
    }

    Ok(Timestamp::from_unix(naive.and_utc().timestamp()))
}

/// Formats `value` as `YYYY-MM-DDTHH:MM:SSZ` in UTC.
///
/// The output depends only on `value`, never on the process time zone.
///
/// # Errors
///
/// [`Error::Failed`] if the instant lies outside chrono's calendar range or
/// its year cannot be written with four digits (before year 0 or after 9999).
pub fn format_utc_timestamp(value: Timestamp) -> Result<String> {
    let datetime = value
        .to_utc()
        .ok_or_else(|| Error::failed(format!("unix time {} out of calendar range", value.secs)))?;

    if !(0..=9999).contains(&datetime.year()) {
        return Err(Error::failed(format!(
            "year {} cannot be written as YYYY",
            datetime.year()
        )));
    }

    Ok(datetime.format(UTC_FORMAT).to_string())
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait implementations
// ═══════════════════════════════════════════════════════════════════════════

// ── Display / FromStr ─────────────────────────────────────────────────────

/// The UTC text form; values it cannot express print as `Unix <secs>`.
impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match format_utc_timestamp(*self) {
            Ok(text) => f.write_str(&text),
            Err(_) => write!(f, "Unix {}", self.secs),
        }
    }
}

impl FromStr for Timestamp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_utc_timestamp(s)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let text = format_utc_timestamp(*self).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        parse_utc_timestamp(&text).map_err(serde::de::Error::custom)
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

/// # Panics
///
/// On overflow; use [`Timestamp::checked_add`] otherwise.
impl Add<Duration> for Timestamp {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Duration) -> Self::Output {
        self.checked_add(rhs)
            .expect("overflow when adding duration to timestamp")
    }
}

/// # Panics
///
/// On overflow; use [`Timestamp::checked_sub`] otherwise.
impl Sub<Duration> for Timestamp {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Duration) -> Self::Output {
        self.checked_sub(rhs)
            .expect("overflow when subtracting duration from timestamp")
    }
}

/// # Panics
///
/// When the instants are more than ~292 years apart; use
/// [`Timestamp::checked_duration_since`] otherwise.
impl Sub for Timestamp {
    type Output = Duration;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_duration_since(rhs)
            .expect("timestamps too far apart for a nanosecond duration")
    }
}

// ── From/Into DateTime<Utc> ───────────────────────────────────────────────

impl From<DateTime<Utc>> for Timestamp {
    #[inline]
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::from_utc(datetime)
    }
}

impl TryFrom<Timestamp> for DateTime<Utc> {
    type Error = Error;

    fn try_from(value: Timestamp) -> Result<Self> {
        value
            .to_utc()
            .ok_or_else(|| Error::failed(format!("unix time {} out of calendar range", value.secs)))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
