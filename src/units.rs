// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Unit symbols of the compact duration notation.
//!
//! | Symbol | Meaning |
//! |--------|---------|
//! | `ns` | nanosecond |
//! | `us`, `µs` | microsecond |
//! | `ms` | millisecond |
//! | `s` | second |
//! | `m` | minute |
//! | `h` | hour |
//! | `d` | day |
//! | `w` | week (7 days) |
//! | `y` | year (365 days) |
//!
//! `m` is always a minute here.  Months only exist as the `M` designator in
//! the period part of an ISO-8601 duration, see [`Duration::MONTH`].

use crate::duration::Duration;

/// Symbol → length of one unit. Symbols are lower case.
const UNITS: [(&str, Duration); 10] = [
    ("ns", Duration::NANOSECOND),
    ("us", Duration::MICROSECOND),
    ("µs", Duration::MICROSECOND),
    ("ms", Duration::MILLISECOND),
    ("s", Duration::SECOND),
    ("m", Duration::MINUTE),
    ("h", Duration::HOUR),
    ("d", Duration::DAY),
    ("w", Duration::WEEK),
    ("y", Duration::YEAR),
];

/// Length of one unit of `symbol`, matched exactly against the lower-case
/// table.
pub fn unit_duration(symbol: &str) -> Option<Duration> {
    UNITS
        .iter()
        .find(|(name, _)| *name == symbol)
        .map(|(_, duration)| *duration)
}

/// Every recognised symbol with its length, in table order.
pub fn units() -> impl Iterator<Item = (&'static str, Duration)> {
    UNITS.iter().copied()
}
