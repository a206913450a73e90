//! Error types for calendar conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from Gregorian validation and lunar almanac lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CalendarError {
    /// The Gregorian date does not exist (month or day impossible), or its
    /// year lies outside the supported 1900..=2100 span.
    InvalidDate { year: i32, month: u32, day: u32 },
    /// A valid Gregorian date that the almanac table does not cover.
    OutOfRange { year: i32, month: u32, day: u32 },
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid date: {year:04}-{month:02}-{day:02}")
            }
            Self::OutOfRange { year, month, day } => write!(
                f,
                "date {year:04}-{month:02}-{day:02} outside almanac range (1900-01-31..=2100-12-31)"
            ),
        }
    }
}

impl Error for CalendarError {}
