// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! ISO-8601 durations: `[-]P[nY][nM][nW][nD][T[nH][nM][nS]]`.
//!
//! `M` means month before the `T` marker and minute after it.  Years and
//! months use the fixed lengths [`Duration::YEAR`] and [`Duration::MONTH`].
//! The sign applies once to the whole value, never to single components.

use crate::duration::Duration;
use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static ISO8601_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(-)?P",
        r"(?:([0-9]+)Y)?(?:([0-9]+)M)?(?:([0-9]+)W)?(?:([0-9]+)D)?",
        r"(?:T(?:([0-9]+)H)?(?:([0-9]+)M)?(?:([0-9]+)S)?)?$",
    ))
    .expect("ISO8601_REGEX should compile - this is a bug")
});

/// Length of each designator, in capture-group order (groups 2..=8).
const DESIGNATORS: [Duration; 7] = [
    Duration::YEAR,
    Duration::MONTH,
    Duration::WEEK,
    Duration::DAY,
    Duration::HOUR,
    Duration::MINUTE,
    Duration::SECOND,
];

pub(super) fn parse(input: &str) -> Result<Duration> {
    let caps = ISO8601_REGEX
        .captures(input)
        .ok_or_else(|| Error::invalid("invalid ISO8601 duration format"))?;

    let mut total = Duration::ZERO;
    for (group, unit) in (2..).zip(DESIGNATORS) {
        let Some(digits) = caps.get(group) else {
            continue;
        };

        let count: i64 = digits.as_str().parse().map_err(|_| {
            Error::invalid(format!("duration count {} out of range", digits.as_str()))
        })?;

        total = unit
            .checked_mul(count)
            .and_then(|part| total.checked_add(part))
            .ok_or_else(|| Error::invalid("duration out of range"))?;
    }

    if caps.get(1).is_some() {
        // Non-negative here, so negation cannot overflow.
        total = -total;
    }

    Ok(total)
}

/// Formats `duration` as an ISO-8601 duration accepted by
/// [`parse_duration`](super::parse_duration).
///
/// The magnitude is split into days, hours, minutes and seconds (`P1DT2H`);
/// years, months and weeks are never emitted since their fixed lengths are
/// conventions of this crate.  Negative values get a leading `-`, zero is
/// `PT0S`.
///
/// # Errors
///
/// [`Error::InvalidArgument`] if `duration` is not a whole number of seconds;
/// the grammar has no fractional seconds.
///
/// # Examples
///
/// ```
/// use tempotext::{format_iso8601_duration, Duration};
///
/// let text = format_iso8601_duration(Duration::DAY + Duration::MINUTE * 90).unwrap();
/// assert_eq!(text, "P1DT1H30M");
/// ```
pub fn format_iso8601_duration(duration: Duration) -> Result<String> {
    if duration.subsec_nanos() != 0 {
        return Err(Error::invalid(
            "duration with sub-second part has no ISO8601 form",
        ));
    }

    let secs = duration.as_secs().unsigned_abs();
    let days = secs / 86_400;
    let hours = secs % 86_400 / 3_600;
    let minutes = secs % 3_600 / 60;
    let seconds = secs % 60;

    let mut text = String::new();
    if duration.is_negative() {
        text.push('-');
    }
    text.push('P');

    if days > 0 {
        text.push_str(&format!("{days}D"));
    }

    if hours > 0 || minutes > 0 || seconds > 0 || days == 0 {
        text.push('T');
        if hours > 0 {
            text.push_str(&format!("{hours}H"));
        }
        if minutes > 0 {
            text.push_str(&format!("{minutes}M"));
        }
        if seconds > 0 || secs == 0 {
            text.push_str(&format!("{seconds}S"));
        }
    }

    Ok(text)
}
