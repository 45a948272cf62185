//! Error types for message analysis.

use chrono::{DateTime, FixedOffset};

/// Errors raised by this crate.
///
/// Only precondition violations are errors. Empty inputs always produce
/// empty (or sentinel) results instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid period: start {start} is after end {end}")]
    InvalidPeriod {
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    },

    #[error("invalid username {0:?}: expected one or more of A-Z, a-z, 0-9, '_' or '-'")]
    InvalidUsername(String),

    #[error("invalid timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
