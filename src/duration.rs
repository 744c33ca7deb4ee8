// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Signed, nanosecond-resolution elapsed time.
//!
//! [`Duration`] is a thin wrapper over an `i64` nanosecond count.  Unlike
//! [`std::time::Duration`] it can be negative, which the ISO-8601 grammar
//! needs (`-P1Y`).  All arithmetic is exact integer arithmetic; the parsers
//! go through the `checked_*` variants so that oversized input turns into an
//! error instead of wrapping.

use crate::error::{Error, Result};
use qtty::{Day, Days, Seconds};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const NANOS_PER_SEC: i64 = 1_000_000_000;

// ═══════════════════════════════════════════════════════════════════════════
// Duration
// ═══════════════════════════════════════════════════════════════════════════

/// A signed span of time with nanosecond resolution.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration {
    nanos: i64,
}

impl Duration {
    pub const ZERO: Self = Self::from_nanos(0);
    pub const NANOSECOND: Self = Self::from_nanos(1);
    pub const MICROSECOND: Self = Self::from_nanos(1_000);
    pub const MILLISECOND: Self = Self::from_nanos(1_000_000);
    pub const SECOND: Self = Self::from_nanos(NANOS_PER_SEC);
    pub const MINUTE: Self = Self::from_secs(60);
    pub const HOUR: Self = Self::from_secs(60 * 60);
    pub const DAY: Self = Self::from_secs(24 * 60 * 60);
    pub const WEEK: Self = Self::from_secs(7 * 24 * 60 * 60);
    /// Fixed 30-day month used by the `M` period designator of ISO-8601.
    pub const MONTH: Self = Self::from_secs(30 * 24 * 60 * 60);
    /// Fixed 365-day year; leap days are not modelled.
    pub const YEAR: Self = Self::from_secs(365 * 24 * 60 * 60);

    // ── constructors ──────────────────────────────────────────────────

    #[inline]
    pub const fn from_nanos(nanos: i64) -> Self {
        Self { nanos }
    }

    /// Whole seconds. Overflows (and panics in const context) beyond ~292 years.
    #[inline]
    pub const fn from_secs(secs: i64) -> Self {
        Self::from_nanos(secs * NANOS_PER_SEC)
    }

    /// Whole seconds, or `None` if the nanosecond count does not fit `i64`.
    #[inline]
    pub const fn checked_from_secs(secs: i64) -> Option<Self> {
        match secs.checked_mul(NANOS_PER_SEC) {
            Some(nanos) => Some(Self::from_nanos(nanos)),
            None => None,
        }
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub const fn as_nanos(&self) -> i64 {
        self.nanos
    }

    /// Whole seconds, truncated toward zero.
    #[inline]
    pub const fn as_secs(&self) -> i64 {
        self.nanos / NANOS_PER_SEC
    }

    /// Nanosecond remainder after [`as_secs`](Self::as_secs); carries the sign
    /// of the duration.
    #[inline]
    pub const fn subsec_nanos(&self) -> i64 {
        self.nanos % NANOS_PER_SEC
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.nanos == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.nanos < 0
    }

    /// Absolute value; `None` for `i64::MIN` nanoseconds.
    #[inline]
    pub const fn checked_abs(&self) -> Option<Self> {
        match self.nanos.checked_abs() {
            Some(nanos) => Some(Self::from_nanos(nanos)),
            None => None,
        }
    }

    /// The span as a `qtty` seconds quantity.
    pub fn as_seconds(&self) -> Seconds {
        Seconds::new(self.nanos as f64 / NANOS_PER_SEC as f64)
    }

    /// The span as a `qtty` days quantity.
    pub fn as_days(&self) -> Days {
        self.as_seconds().to::<Day>()
    }

    // ── checked arithmetic ────────────────────────────────────────────

    #[inline]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.nanos.checked_add(rhs.nanos) {
            Some(nanos) => Some(Self::from_nanos(nanos)),
            None => None,
        }
    }

    #[inline]
    pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.nanos.checked_sub(rhs.nanos) {
            Some(nanos) => Some(Self::from_nanos(nanos)),
            None => None,
        }
    }

    #[inline]
    pub const fn checked_mul(self, rhs: i64) -> Option<Self> {
        match self.nanos.checked_mul(rhs) {
            Some(nanos) => Some(Self::from_nanos(nanos)),
            None => None,
        }
    }

    #[inline]
    pub const fn checked_neg(self) -> Option<Self> {
        match self.nanos.checked_neg() {
            Some(nanos) => Some(Self::from_nanos(nanos)),
            None => None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait implementations
// ═══════════════════════════════════════════════════════════════════════════

// ── Display / FromStr ─────────────────────────────────────────────────────

/// ISO-8601 text when the value is a whole number of seconds, the compact
/// unit-suffixed form otherwise (`1s500ms`).
///
/// Negative values with a sub-second part print as `-1s500ms`, which no
/// grammar accepts; such text is for humans only.
impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match crate::parse::format_iso8601_duration(*self) {
            Ok(text) => f.write_str(&text),
            Err(_) => f.write_str(&crate::parse::format_unit_suffixed(*self)),
        }
    }
}

impl FromStr for Duration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::parse::parse_duration(s)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for Duration {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.is_negative() && self.subsec_nanos() != 0 {
            return Err(serde::ser::Error::custom(
                "negative duration with sub-second part has no parseable text form",
            ));
        }
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        crate::parse::parse_duration(&text).map_err(serde::de::Error::custom)
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Add for Duration {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::from_nanos(self.nanos + rhs.nanos)
    }
}

impl AddAssign for Duration {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.nanos += rhs.nanos;
    }
}

impl Sub for Duration {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_nanos(self.nanos - rhs.nanos)
    }
}

impl SubAssign for Duration {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.nanos -= rhs.nanos;
    }
}

impl Neg for Duration {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self::from_nanos(-self.nanos)
    }
}

impl Mul<i64> for Duration {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i64) -> Self::Output {
        Self::from_nanos(self.nanos * rhs)
    }
}

impl Mul<Duration> for i64 {
    type Output = Duration;
    #[inline]
    fn mul(self, rhs: Duration) -> Self::Output {
        rhs * self
    }
}

impl Sum for Duration {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

// ── Conversions ───────────────────────────────────────────────────────────

impl From<Duration> for chrono::Duration {
    #[inline]
    fn from(duration: Duration) -> Self {
        chrono::Duration::nanoseconds(duration.nanos)
    }
}

impl TryFrom<chrono::Duration> for Duration {
    type Error = Error;

    fn try_from(duration: chrono::Duration) -> Result<Self> {
        duration
            .num_nanoseconds()
            .map(Self::from_nanos)
            .ok_or_else(|| Error::invalid("duration out of nanosecond range"))
    }
}

impl TryFrom<Duration> for std::time::Duration {
    type Error = Error;

    fn try_from(duration: Duration) -> Result<Self> {
        u64::try_from(duration.nanos)
            .map(std::time::Duration::from_nanos)
            .map_err(|_| Error::invalid("negative duration has no unsigned representation"))
    }
}

impl TryFrom<std::time::Duration> for Duration {
    type Error = Error;

    fn try_from(duration: std::time::Duration) -> Result<Self> {
        i64::try_from(duration.as_nanos())
            .map(Self::from_nanos)
            .map_err(|_| Error::invalid("duration out of nanosecond range"))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
