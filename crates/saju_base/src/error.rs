//! Error types for chart and life-phase calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use saju_time::CalendarError;

/// Errors from four-pillar calculations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SajuError {
    /// Invalid or unsupported Gregorian input, or lunar lookup out of range.
    Calendar(CalendarError),
    /// Birth hour outside 0..=23.
    InvalidHour(u32),
    /// A life-phase configuration value is zero or too large.
    InvalidConfig(&'static str),
    /// Phase ages or years would not fit their integer types.
    PhaseRange { start_age: u32, birth_year: i32 },
}

impl Display for SajuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Calendar(e) => write!(f, "calendar error: {e}"),
            Self::InvalidHour(h) => write!(f, "invalid hour: {h} (expected 0-23)"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::PhaseRange {
                start_age,
                birth_year,
            } => write!(
                f,
                "life phases from age {start_age} (born {birth_year}) overflow the age/year range"
            ),
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
