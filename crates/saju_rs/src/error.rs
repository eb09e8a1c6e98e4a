//! Error type for the convenience facade.

use std::error::Error;
use std::fmt::{Display, Formatter};

use saju_base::CalendarError;

/// Errors surfaced to callers of the facade.
///
/// Every variant is raised before any pillar is computed; once a
/// [`BirthRecord`](crate::BirthRecord) exists, calculation cannot fail.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SajuError {
    /// Birth date is not a valid `YYYY-MM-DD` calendar date.
    InvalidDate(String),
    /// Birth time is not a valid `HH:MM` clock time.
    InvalidTime(String),
    /// Gender tag not recognised.
    InvalidGender(String),
    /// Error from the calendar engine.
    Calendar(CalendarError),
    /// Configuration could not be loaded or applied.
    Config(String),
}

impl Display for SajuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(s) => write!(f, "invalid birth date {s:?}, expected YYYY-MM-DD"),
            Self::InvalidTime(msg) => write!(f, "invalid birth time: {msg}"),
            Self::InvalidGender(s) => write!(f, "invalid gender {s:?}"),
            Self::Calendar(e) => write!(f, "calendar error: {e}"),
            Self::Config(msg) => write!(f, "configuration error: {msg}"),
        }
    }
}

impl Error for SajuError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Calendar(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CalendarError> for SajuError {
    fn from(e: CalendarError) -> Self {
        Self::Calendar(e)
    }
}
