// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Bare decimal numbers, read as seconds: `10`, `10.5`, `.5`, `-3`.

use crate::duration::Duration;
use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use qtty::Seconds;
use regex::Regex;

static NUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?(?:[0-9]+(?:\.[0-9]+)?|\.[0-9]+)$")
        .expect("NUMERIC_REGEX should compile - this is a bug")
});

pub(super) fn matches(input: &str) -> bool {
    NUMERIC_REGEX.is_match(input)
}

pub(super) fn parse(input: &str) -> Result<Duration> {
    let value: f64 = input
        .parse()
        .map_err(|_| Error::invalid(format!("invalid number {input}")))?;

    Duration::checked_from_secs(whole_seconds(Seconds::new(value)))
        .ok_or_else(|| Error::invalid("duration out of range"))
}

/// Adds half a second and truncates toward zero.
///
/// Rounds half up for non-negative values (`10.5` → 11) but pulls negative
/// values toward zero (`-1.7` → -1, `-0.7` → 0).  Out-of-range values
/// saturate and are rejected by the caller.
fn whole_seconds(seconds: Seconds) -> i64 {
    (seconds + Seconds::new(0.5)).value().trunc() as i64
}
