// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Textual durations and UTC timestamps
//!
//! This crate turns the compact time strings found in configuration files
//! (alert thresholds, timeouts) into typed values and back.
//!
//! # Core types
//!
//! - [`Duration`] — signed nanosecond-resolution span of time.
//! - [`Timestamp`] — whole-second UTC instant.
//! - [`Error`] — the two failure kinds, [`Error::InvalidArgument`] and
//!   [`Error::Failed`].
//!
//! # Duration notations
//!
//! [`parse_duration`] accepts three notations and picks one from the shape
//! of the text:
//!
//! | Notation | Example | Value |
//! |----------|---------|-------|
//! | ISO-8601 | `P1Y1M1W1DT1H1M1S`, `-PT30S` | fixed 365-day years, 30-day months |
//! | Numeric seconds | `10.5` | rounded half up to whole seconds |
//! | Unit-suffixed | `1h20m1s`, `200ms` | units `ns us µs ms s m h d w y` |
//!
//! [`format_iso8601_duration`] writes a [`Duration`] back in ISO-8601 form.
//!
//! # Timestamps
//!
//! [`parse_utc_timestamp`] and [`format_utc_timestamp`] convert between
//! [`Timestamp`] and `YYYY-MM-DDTHH:MM:SSZ`.  Formatting never looks at the
//! process time zone.
//!
//! # Features
//!
//! - `serde` — `Serialize`/`Deserialize` for [`Duration`] and [`Timestamp`]
//!   using their text forms.

mod duration;
mod error;
pub mod parse;
mod timestamp;
pub mod units;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use duration::Duration;
pub use error::{Error, ErrorKind, Result};
pub use parse::{format_iso8601_duration, format_unit_suffixed, parse_duration};
pub use timestamp::{format_utc_timestamp, parse_utc_timestamp, Timestamp};
