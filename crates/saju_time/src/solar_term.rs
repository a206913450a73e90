//! The 24 solar terms at fixed approximate Gregorian dates.
//!
//! Real term instants drift by a day or so from year to year. This table
//! pins each term to one calendar day, so results are reproducible but
//! not astronomically exact.
//!
//! The twelve *major* terms open the twelve solar months; the month
//! windows they bound partition the whole Gregorian year.

use serde::Serialize;

use crate::date::{CivilDate, julian_day_number};

/// The 24 solar terms, starting from the start of spring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SolarTerm {
    StartOfSpring,
    RainWater,
    AwakeningOfInsects,
    SpringEquinox,
    PureBrightness,
    GrainRain,
    StartOfSummer,
    GrainBuds,
    GrainInEar,
    SummerSolstice,
    MinorHeat,
    MajorHeat,
    StartOfAutumn,
    EndOfHeat,
    WhiteDew,
    AutumnEquinox,
    ColdDew,
    FrostDescent,
    StartOfWinter,
    MinorSnow,
    MajorSnow,
    WinterSolstice,
    MinorCold,
    MajorCold,
}

/// All 24 terms in order (index 0 = start of spring).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::StartOfSpring,
    SolarTerm::RainWater,
    SolarTerm::AwakeningOfInsects,
    SolarTerm::SpringEquinox,
    SolarTerm::PureBrightness,
    SolarTerm::GrainRain,
    SolarTerm::StartOfSummer,
    SolarTerm::GrainBuds,
    SolarTerm::GrainInEar,
    SolarTerm::SummerSolstice,
    SolarTerm::MinorHeat,
    SolarTerm::MajorHeat,
    SolarTerm::StartOfAutumn,
    SolarTerm::EndOfHeat,
    SolarTerm::WhiteDew,
    SolarTerm::AutumnEquinox,
    SolarTerm::ColdDew,
    SolarTerm::FrostDescent,
    SolarTerm::StartOfWinter,
    SolarTerm::MinorSnow,
    SolarTerm::MajorSnow,
    SolarTerm::WinterSolstice,
    SolarTerm::MinorCold,
    SolarTerm::MajorCold,
];

/// The 12 month-opening terms in calendar-year order.
pub const MAJOR_SOLAR_TERMS: [SolarTerm; 12] = [
    SolarTerm::MinorCold,
    SolarTerm::StartOfSpring,
    SolarTerm::AwakeningOfInsects,
    SolarTerm::PureBrightness,
    SolarTerm::StartOfSummer,
    SolarTerm::GrainInEar,
    SolarTerm::MinorHeat,
    SolarTerm::StartOfAutumn,
    SolarTerm::WhiteDew,
    SolarTerm::ColdDew,
    SolarTerm::StartOfWinter,
    SolarTerm::MajorSnow,
];

impl SolarTerm {
    /// 0-based index (StartOfSpring=0 .. MajorCold=23).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::StartOfSpring => "Start of Spring",
            Self::RainWater => "Rain Water",
            Self::AwakeningOfInsects => "Awakening of Insects",
            Self::SpringEquinox => "Spring Equinox",
            Self::PureBrightness => "Pure Brightness",
            Self::GrainRain => "Grain Rain",
            Self::StartOfSummer => "Start of Summer",
            Self::GrainBuds => "Grain Buds",
            Self::GrainInEar => "Grain in Ear",
            Self::SummerSolstice => "Summer Solstice",
            Self::MinorHeat => "Minor Heat",
            Self::MajorHeat => "Major Heat",
            Self::StartOfAutumn => "Start of Autumn",
            Self::EndOfHeat => "End of Heat",
            Self::WhiteDew => "White Dew",
            Self::AutumnEquinox => "Autumn Equinox",
            Self::ColdDew => "Cold Dew",
            Self::FrostDescent => "Frost's Descent",
            Self::StartOfWinter => "Start of Winter",
            Self::MinorSnow => "Minor Snow",
            Self::MajorSnow => "Major Snow",
            Self::WinterSolstice => "Winter Solstice",
            Self::MinorCold => "Minor Cold",
            Self::MajorCold => "Major Cold",
        }
    }

    /// Korean reading.
    pub const fn korean_name(self) -> &'static str {
        match self {
            Self::StartOfSpring => "입춘",
            Self::RainWater => "우수",
            Self::AwakeningOfInsects => "경칩",
            Self::SpringEquinox => "춘분",
            Self::PureBrightness => "청명",
            Self::GrainRain => "곡우",
            Self::StartOfSummer => "입하",
            Self::GrainBuds => "소만",
            Self::GrainInEar => "망종",
            Self::SummerSolstice => "하지",
            Self::MinorHeat => "소서",
            Self::MajorHeat => "대서",
            Self::StartOfAutumn => "입추",
            Self::EndOfHeat => "처서",
            Self::WhiteDew => "백로",
            Self::AutumnEquinox => "추분",
            Self::ColdDew => "한로",
            Self::FrostDescent => "상강",
            Self::StartOfWinter => "입동",
            Self::MinorSnow => "소설",
            Self::MajorSnow => "대설",
            Self::WinterSolstice => "동지",
            Self::MinorCold => "소한",
            Self::MajorCold => "대한",
        }
    }

    /// Fixed (month, day) on which the term is taken to fall every year.
    pub const fn approximate_date(self) -> (u32, u32) {
        match self {
            Self::StartOfSpring => (2, 4),
            Self::RainWater => (2, 19),
            Self::AwakeningOfInsects => (3, 6),
            Self::SpringEquinox => (3, 21),
            Self::PureBrightness => (4, 5),
            Self::GrainRain => (4, 20),
            Self::StartOfSummer => (5, 6),
            Self::GrainBuds => (5, 21),
            Self::GrainInEar => (6, 6),
            Self::SummerSolstice => (6, 21),
            Self::MinorHeat => (7, 7),
            Self::MajorHeat => (7, 23),
            Self::StartOfAutumn => (8, 8),
            Self::EndOfHeat => (8, 23),
            Self::WhiteDew => (9, 8),
            Self::AutumnEquinox => (9, 23),
            Self::ColdDew => (10, 8),
            Self::FrostDescent => (10, 24),
            Self::StartOfWinter => (11, 8),
            Self::MinorSnow => (11, 22),
            Self::MajorSnow => (12, 7),
            Self::WinterSolstice => (12, 22),
            Self::MinorCold => (1, 6),
            Self::MajorCold => (1, 20),
        }
    }

    /// Month-opening terms sit at even indices.
    pub const fn is_major(self) -> bool {
        self.index() % 2 == 0
    }

    /// Julian day number of this term in the given Gregorian year.
    pub fn jdn_in(self, year: i64) -> i64 {
        let (month, day) = self.approximate_date();
        julian_day_number(year, month, day)
    }
}

/// The major term whose window contains `date`.
///
/// A window opens on its term date (inclusive) and runs until the next
/// major term. Dates before the first major term of the year belong to the
/// window opened by the previous year's major snow.
pub fn governing_major_term(date: &CivilDate) -> SolarTerm {
    MAJOR_SOLAR_TERMS
        .iter()
        .copied()
        .filter(|term| {
            let (month, day) = term.approximate_date();
            date.is_on_or_after(month, day)
        })
        .last()
        .unwrap_or(SolarTerm::MajorSnow)
}

/// Days from `date` forward to the nearest major term (0 on a term date).
pub fn days_to_next_major_term(date: &CivilDate) -> u32 {
    let (jdn, year) = (date.jdn(), date.year() as i64);
    MAJOR_SOLAR_TERMS
        .iter()
        .map(|term| {
            let diff = term.jdn_in(year) - jdn;
            if diff < 0 {
                term.jdn_in(year + 1) - jdn
            } else {
                diff
            }
        })
        .fold(i64::MAX, i64::min) as u32
}

/// Days from the nearest major term back to `date` (0 on a term date).
pub fn days_since_previous_major_term(date: &CivilDate) -> u32 {
    let (jdn, year) = (date.jdn(), date.year() as i64);
    MAJOR_SOLAR_TERMS
        .iter()
        .map(|term| {
            let diff = jdn - term.jdn_in(year);
            if diff < 0 {
                jdn - term.jdn_in(year - 1)
            } else {
                diff
            }
        })
        .fold(i64::MAX, i64::min) as u32
}
