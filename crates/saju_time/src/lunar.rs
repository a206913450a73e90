//! Gregorian to lunar date conversion against the almanac table.

use std::fmt;

use serde::Serialize;

use crate::almanac::{ALMANAC_EPOCH, ALMANAC_FIRST_YEAR, ALMANAC_LAST_YEAR, AlmanacEntry};
use crate::date::{CivilDate, day_number};
use crate::error::CalendarError;

/// A date in the lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LunarDate {
    /// Lunar year (the Gregorian year in which its new year falls).
    pub year: i32,
    /// Month ordinal 1-12. A leap month reports the ordinal it follows.
    pub month: u32,
    /// Day of month, 1-30.
    pub day: u32,
    /// True inside an intercalary month.
    pub is_leap_month: bool,
}

impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_leap_month {
            write!(f, "{:04}-L{:02}-{:02}", self.year, self.month, self.day)
        } else {
            write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
        }
    }
}

/// Convert a Gregorian date to its lunar date.
///
/// Fails with [`CalendarError::InvalidDate`] for an impossible date and with
/// [`CalendarError::OutOfRange`] for a date before 1900-01-31 or after the
/// last lunar year of the table.
pub fn solar_to_lunar(year: i32, month: u32, day: u32) -> Result<LunarDate, CalendarError> {
    let date = CivilDate::new(year, month, day)?;
    lunar_date_of(&date)
}

/// Lunar date of an already validated Gregorian date.
pub fn lunar_date_of(date: &CivilDate) -> Result<LunarDate, CalendarError> {
    let out_of_range = CalendarError::OutOfRange {
        year: date.year(),
        month: date.month(),
        day: date.day(),
    };

    // lunar year 2100 ends early in Gregorian 2101
    if !(ALMANAC_FIRST_YEAR..=ALMANAC_LAST_YEAR + 1).contains(&date.year()) {
        return Err(out_of_range);
    }

    let (ey, em, ed) = ALMANAC_EPOCH;
    let mut offset = date.day_number() - day_number(ey, em, ed);
    if offset < 0 {
        return Err(out_of_range);
    }

    for year in ALMANAC_FIRST_YEAR..=ALMANAC_LAST_YEAR {
        let Some(entry) = AlmanacEntry::for_year(year) else {
            break;
        };
        let year_days = entry.year_days() as i64;
        if offset >= year_days {
            offset -= year_days;
            continue;
        }

        for span in entry.months() {
            let days = span.days as i64;
            if offset < days {
                let lunar = LunarDate {
                    year,
                    month: span.month,
                    day: offset as u32 + 1,
                    is_leap_month: span.is_leap,
                };
                tracing::trace!(%date, %lunar, "converted to lunar date");
                return Ok(lunar);
            }
            offset -= days;
        }
        // month spans always sum to year_days
        break;
    }

    Err(out_of_range)
}
