//! Error types for the calendar engine.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from clock parsing and configuration checks.
///
/// Table lookups over the closed stem/branch enumerations cannot fail and
/// have no variant here.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CalendarError {
    /// Clock time outside 00:00–23:59.
    InvalidClockTime { hour: u32, minute: u32 },
    /// Clock string is not `HH:MM`.
    ClockParse(String),
    /// Day-pillar anchor is not a valid sexagenary position.
    InvalidAnchor(&'static str),
    /// Other configuration value out of range.
    InvalidConfig(&'static str),
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidClockTime { hour, minute } => {
                write!(f, "clock time {hour:02}:{minute:02} outside 00:00-23:59")
            }
            Self::ClockParse(s) => write!(f, "cannot parse clock time {s:?}, expected HH:MM"),
            Self::InvalidAnchor(msg) => write!(f, "invalid day anchor: {msg}"),
            Self::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl Error for CalendarError {}
