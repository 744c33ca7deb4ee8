// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type shared by the duration parser and the timestamp codec.

use thiserror::Error;

/// Result alias used by every fallible operation of this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`].
///
/// Callers that wrap an error with more context (e.g. the name of the
/// configuration field being parsed) can still branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The text does not follow any recognised grammar, or violates the
    /// structure of the grammar it was routed to.
    InvalidArgument,
    /// Empty input, or a calendar/formatting step could not produce a result.
    Failed,
}

/// Errors returned by the parsing and formatting functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed or out-of-range input text.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The operation could not produce a value.
    #[error("failed: {0}")]
    Failed(String),
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub(crate) fn failed(msg: impl Into<String>) -> Self {
        Self::Failed(msg.into())
    }

    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::Failed(_) => ErrorKind::Failed,
        }
    }

    /// The message without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument(msg) | Self::Failed(msg) => msg,
        }
    }
}
