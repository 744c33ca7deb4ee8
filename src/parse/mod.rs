// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Duration text parsing.
//!
//! Three independent grammars sit behind [`parse_duration`]:
//!
//! | Grammar | Example | Routed when |
//! |---------|---------|-------------|
//! | ISO-8601 | `P1Y2M3W4DT5H6M7S`, `-PT30S` | text starts with `P` or contains `-P` |
//! | Numeric seconds | `10`, `10.5`, `.5`, `-3` | whole text is a signed decimal number |
//! | Unit-suffixed | `1h20m1s`, `200ms` | whole text is `<digits><unit>` repeated |
//!
//! Rules are tried in that order and the first one that applies decides the
//! grammar; there is no fallback from one grammar to the next.

mod iso8601;
mod numeric;
mod unit_suffixed;

use crate::duration::Duration;
use crate::error::{Error, Result};

pub use iso8601::format_iso8601_duration;
pub use unit_suffixed::format_unit_suffixed;

/// Grammar a duration string is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Grammar {
    Iso8601,
    NumericSeconds,
    UnitSuffixed,
}

impl Grammar {
    /// Picks the grammar from the shape of `input`; `None` if no rule applies.
    pub(crate) fn detect(input: &str) -> Option<Self> {
        if input.starts_with('P') || input.contains("-P") {
            Some(Self::Iso8601)
        } else if numeric::matches(input) {
            Some(Self::NumericSeconds)
        } else if unit_suffixed::matches(input) {
            Some(Self::UnitSuffixed)
        } else {
            None
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Iso8601 => "iso8601",
            Self::NumericSeconds => "numeric",
            Self::UnitSuffixed => "unit-suffixed",
        }
    }
}

/// Parses a duration written in any of the supported notations.
///
/// # Errors
///
/// - [`Error::Failed`] for an empty string.
/// - [`Error::InvalidArgument`] when no grammar applies, when the routed
///   grammar rejects the text, or when the value overflows `i64` nanoseconds.
///
/// # Examples
///
/// ```
/// use tempotext::{parse_duration, Duration};
///
/// assert_eq!(parse_duration("1h20m1s").unwrap(), Duration::HOUR + Duration::MINUTE * 20 + Duration::SECOND);
/// assert_eq!(parse_duration("-P1D").unwrap(), -Duration::DAY);
/// assert_eq!(parse_duration("10.5").unwrap(), Duration::from_secs(11));
/// ```
pub fn parse_duration(input: &str) -> Result<Duration> {
    if input.is_empty() {
        tracing::debug!("rejecting empty duration string");
        return Err(Error::failed("empty duration string"));
    }

    let Some(grammar) = Grammar::detect(input) else {
        tracing::debug!(input, "no duration grammar matches");
        return Err(Error::invalid("invalid duration string"));
    };

    tracing::trace!(input, grammar = grammar.name(), "parsing duration");

    let parsed = match grammar {
        Grammar::Iso8601 => iso8601::parse(input),
        Grammar::NumericSeconds => numeric::parse(input),
        Grammar::UnitSuffixed => unit_suffixed::parse(input),
    };

    if let Err(err) = &parsed {
        tracing::debug!(input, grammar = grammar.name(), error = %err, "duration rejected");
    }

    parsed
}
