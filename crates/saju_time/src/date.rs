//! Proleptic Gregorian civil dates and day-count arithmetic.
//!
//! All day offsets are derived from Julian day numbers, so differences
//! between dates are exact integers with no time-zone involvement.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CalendarError;

/// Years accepted as birth-date input.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1900..=2100;

/// Julian day number of 1900-01-01, the day-count epoch.
pub const EPOCH_1900_JDN: i64 = 2_415_021;

/// Whether `year` is a Gregorian leap year.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`, or 0 for an invalid month.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Julian day number of a Gregorian date.
///
/// Integer division truncates toward zero, which the formula relies on.
/// Input is not validated; out-of-range days roll into adjacent months.
/// Computed in `i64` so every `i32` year is representable.
pub const fn julian_day_number(year: i64, month: u32, day: u32) -> i64 {
    let (y, m, d) = (year, month as i64, day as i64);
    let a = (m - 14) / 12;
    (1461 * (y + 4800 + a)) / 4 + (367 * (m - 2 - 12 * a)) / 12
        - (3 * ((y + 4900 + a) / 100)) / 4
        + d
        - 32075
}

/// Days elapsed since 1900-01-01 (negative before the epoch).
pub const fn day_number(year: i32, month: u32, day: u32) -> i64 {
    julian_day_number(year as i64, month, day) - EPOCH_1900_JDN
}

/// A validated Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CivilDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CivilDate {
    /// Create a date, rejecting impossible month/day combinations.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return Err(CalendarError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Create a date that must also fall within [`SUPPORTED_YEARS`].
    pub fn new_supported(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        if !SUPPORTED_YEARS.contains(&year) {
            return Err(CalendarError::InvalidDate { year, month, day });
        }
        Self::new(year, month, day)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Julian day number of this date.
    pub fn jdn(&self) -> i64 {
        julian_day_number(self.year as i64, self.month, self.day)
    }

    /// Days elapsed since 1900-01-01.
    pub fn day_number(&self) -> i64 {
        day_number(self.year, self.month, self.day)
    }

    /// Signed day count from `self` to `other` (positive when `other` is later).
    pub fn days_until(&self, other: &CivilDate) -> i64 {
        other.jdn() - self.jdn()
    }

    /// Whether the (month, day) of this date is on or after the given pair.
    pub fn is_on_or_after(&self, month: u32, day: u32) -> bool {
        (self.month, self.day) >= (month, day)
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CivilDate {
    type Err = String;

    /// Parse `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('-').collect();
        if parts.len() != 3 {
            return Err(format!("expected YYYY-MM-DD, got {s}"));
        }
        let year: i32 = parts[0].parse().map_err(|e| format!("year: {e}"))?;
        let month: u32 = parts[1].parse().map_err(|e| format!("month: {e}"))?;
        let day: u32 = parts[2].parse().map_err(|e| format!("day: {e}"))?;
        Self::new(year, month, day).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn february_lengths() {
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2024, 13), 0);
    }

    #[test]
    fn jdn_reference_points() {
        assert_eq!(julian_day_number(2000, 1, 1), 2_451_545);
        assert_eq!(julian_day_number(1900, 1, 1), EPOCH_1900_JDN);
    }

    #[test]
    fn day_number_epoch_is_zero() {
        assert_eq!(day_number(1900, 1, 1), 0);
        assert_eq!(day_number(1900, 1, 31), 30);
        assert_eq!(day_number(1899, 12, 31), -1);
        assert_eq!(day_number(1901, 1, 1), 365);
    }

    #[test]
    fn day_count_spans_full_year_range() {
        assert_eq!(day_number(i32::MAX, 12, 31) - day_number(i32::MAX, 1, 1), 364);
        assert!(day_number(i32::MIN, 1, 1) < 0);
        let a = CivilDate::new(2_000_000, 1, 1).unwrap();
        let b = CivilDate::new(2_000_001, 1, 1).unwrap();
        assert_eq!(a.days_until(&b), 365);
    }

    #[test]
    fn new_rejects_impossible_days() {
        assert!(CivilDate::new(2023, 2, 29).is_err());
        assert!(CivilDate::new(2024, 2, 29).is_ok());
        assert!(CivilDate::new(2024, 4, 31).is_err());
        assert!(CivilDate::new(2024, 0, 1).is_err());
        assert!(CivilDate::new(2024, 13, 1).is_err());
        assert!(CivilDate::new(2024, 1, 0).is_err());
    }

    #[test]
    fn new_supported_bounds() {
        assert!(CivilDate::new_supported(1900, 1, 1).is_ok());
        assert!(CivilDate::new_supported(2100, 12, 31).is_ok());
        assert_eq!(
            CivilDate::new_supported(1899, 12, 31),
            Err(CalendarError::InvalidDate {
                year: 1899,
                month: 12,
                day: 31
            })
        );
        assert!(CivilDate::new_supported(2101, 1, 1).is_err());
    }

    #[test]
    fn days_until_is_signed() {
        let a = CivilDate::new(2024, 2, 28).unwrap();
        let b = CivilDate::new(2024, 3, 1).unwrap();
        assert_eq!(a.days_until(&b), 2);
        assert_eq!(b.days_until(&a), -2);
    }

    #[test]
    fn ordering_is_chronological() {
        let a = CivilDate::new(1999, 12, 31).unwrap();
        let b = CivilDate::new(2000, 1, 1).unwrap();
        assert!(a < b);
    }

    #[test]
    fn parse_and_display() {
        let d: CivilDate = "1990-05-15".parse().unwrap();
        assert_eq!(d, CivilDate::new(1990, 5, 15).unwrap());
        assert_eq!(d.to_string(), "1990-05-15");
        assert!("1990-02-30".parse::<CivilDate>().is_err());
        assert!("1990/05/15".parse::<CivilDate>().is_err());
    }
}
