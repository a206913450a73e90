//! Calendar primitives for four-pillar charts.
//!
//! This crate provides:
//! - Gregorian validation and Julian-day based day counting
//! - The bit-packed lunar almanac for lunar years 1900-2100
//! - Gregorian to lunar date conversion (leap-month aware)
//! - The 24 solar terms at fixed approximate dates, with month-window and
//!   distance lookups
//!
//! Every table is a `const`; all operations are pure functions.

pub mod almanac;
pub mod date;
pub mod error;
pub mod lunar;
pub mod solar_term;

pub use almanac::{ALMANAC_FIRST_YEAR, ALMANAC_LAST_YEAR, AlmanacEntry, LunarMonthSpan};
pub use date::{
    CivilDate, EPOCH_1900_JDN, SUPPORTED_YEARS, day_number, days_in_month, is_leap_year,
    julian_day_number,
};
pub use error::CalendarError;
pub use lunar::{LunarDate, lunar_date_of, solar_to_lunar};
pub use solar_term::{
    ALL_SOLAR_TERMS, MAJOR_SOLAR_TERMS, SolarTerm, days_since_previous_major_term,
    days_to_next_major_term, governing_major_term,
};
