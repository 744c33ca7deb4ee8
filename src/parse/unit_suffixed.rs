// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Compact `<count><unit>` notation, e.g. `1h20m1s` or `200ms100us`.

use crate::duration::Duration;
use crate::error::{Error, Result};
use crate::units::unit_duration;
use once_cell::sync::Lazy;
use regex::Regex;

/// One token. ASCII unit letters are case-insensitive; `µ` has no case.
/// Alternatives are ordered so `ms`/`ns`/`us` win over `m`/`s`.
const TOKEN: &str = r"([0-9]+)((?i-u:ns|us|ms|s|m|h|d|w|y)|µ(?i-u:s))";

static TOKEN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(TOKEN).expect("TOKEN_REGEX should compile - this is a bug"));

static SHAPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^(?:{TOKEN})+$")).expect("SHAPE_REGEX should compile - this is a bug")
});

/// Whether the whole of `input` is covered by tokens.
pub(super) fn matches(input: &str) -> bool {
    SHAPE_REGEX.is_match(input)
}

/// Sums every token of `input`. Callers check [`matches`] first.
pub(super) fn parse(input: &str) -> Result<Duration> {
    let mut total = Duration::ZERO;

    for caps in TOKEN_REGEX.captures_iter(input) {
        let count: i64 = caps[1]
            .parse()
            .map_err(|_| Error::invalid(format!("duration count {} out of range", &caps[1])))?;

        let symbol = caps[2].to_ascii_lowercase();
        let Some(unit) = unit_duration(&symbol) else {
            // Only reachable if TOKEN and the unit table disagree.
            return Err(Error::failed(format!("unsupported duration unit {symbol}")));
        };

        total = unit
            .checked_mul(count)
            .and_then(|part| total.checked_add(part))
            .ok_or_else(|| Error::invalid("duration out of range"))?;
    }

    Ok(total)
}

/// Renders `duration` as non-zero `d`/`h`/`m`/`s`/`ms`/`us`/`ns` components,
/// largest first, with a leading `-` for negative values. Zero is `0s`.
///
/// Negative output is not accepted back by [`parse_duration`](super::parse_duration);
/// the compact notation is unsigned.
pub fn format_unit_suffixed(duration: Duration) -> String {
    const PARTS: [(u64, &str); 7] = [
        (86_400_000_000_000, "d"),
        (3_600_000_000_000, "h"),
        (60_000_000_000, "m"),
        (1_000_000_000, "s"),
        (1_000_000, "ms"),
        (1_000, "us"),
        (1, "ns"),
    ];

    if duration.is_zero() {
        return "0s".to_string();
    }

    let mut text = String::new();
    if duration.is_negative() {
        text.push('-');
    }

    let mut rest = duration.as_nanos().unsigned_abs();
    for (size, symbol) in PARTS {
        let count = rest / size;
        if count > 0 {
            text.push_str(&format!("{count}{symbol}"));
        }
        rest %= size;
    }

    text
}
