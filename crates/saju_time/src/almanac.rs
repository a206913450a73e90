//! Bit-packed lunar almanac for lunar years 1900 through 2100.
//!
//! Each year is one word laid out as:
//!
//! | Bits    | Meaning                                                  |
//! |---------|----------------------------------------------------------|
//! | 0..=3   | Leap month ordinal (1-12), 0 when the year has no leap   |
//! | 4..=15  | Month lengths: bit `16 - m` set means month `m` has 30 days |
//! | 16      | Leap month has 30 days (only meaningful with a leap)     |
//!
//! Lunar year 1900 begins on Gregorian 1900-01-31.

/// First lunar year in the table.
pub const ALMANAC_FIRST_YEAR: i32 = 1900;

/// Last lunar year in the table.
pub const ALMANAC_LAST_YEAR: i32 = 2100;

/// Gregorian (year, month, day) of the first day of lunar year 1900.
pub const ALMANAC_EPOCH: (i32, u32, u32) = (1900, 1, 31);

/// Days in every lunar year before any long months or leap month: 12 x 29.
const BASE_YEAR_DAYS: u32 = 348;

/// Bits 4..=15 flag the long (30-day) regular months.
const MONTH_LENGTH_MASK: u32 = 0xfff0;

const LEAP_MONTH_MASK: u32 = 0xf;

const LEAP_LONG_BIT: u32 = 0x10000;

/// Encoded almanac words, one per lunar year from 1900.
#[rustfmt::skip]
pub const LUNAR_INFO: [u32; 201] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2,  // 1900
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977,  // 1910
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970,  // 1920
    0x06566, 0x0d4a0, 0x0ea50, 0x06e95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950,  // 1930
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557,  // 1940
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0,  // 1950
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0,  // 1960
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6,  // 1970
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570,  // 1980
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x055c0, 0x0ab60, 0x096d5, 0x092e0,  // 1990
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5,  // 2000
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930,  // 2010
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530,  // 2020
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45,  // 2030
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0,  // 2040
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0,  // 2050
    0x0a2e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4,  // 2060
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0,  // 2070
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160,  // 2080
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252,  // 2090
    0x0d520,  // 2100
];

/// One decoded year of the almanac.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlmanacEntry {
    year: i32,
    bits: u32,
}

/// One month of a lunar year as laid out in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarMonthSpan {
    /// Month ordinal (1-12). A leap month carries the ordinal it follows.
    pub month: u32,
    /// True for the intercalary month.
    pub is_leap: bool,
    /// 29 or 30.
    pub days: u32,
}

impl AlmanacEntry {
    /// Entry for `year`, or `None` outside 1900..=2100.
    pub fn for_year(year: i32) -> Option<Self> {
        if !(ALMANAC_FIRST_YEAR..=ALMANAC_LAST_YEAR).contains(&year) {
            return None;
        }
        let bits = LUNAR_INFO[(year - ALMANAC_FIRST_YEAR) as usize];
        Some(Self { year, bits })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Raw encoded word.
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Ordinal of the month the leap month follows, if any.
    pub fn leap_month(&self) -> Option<u32> {
        match self.bits & LEAP_MONTH_MASK {
            0 => None,
            m => Some(m),
        }
    }

    /// Length of the leap month, 0 when the year has none.
    pub fn leap_month_days(&self) -> u32 {
        match self.leap_month() {
            Some(_) if self.bits & LEAP_LONG_BIT != 0 => 30,
            Some(_) => 29,
            None => 0,
        }
    }

    /// Length of regular month `month` (1-12).
    pub fn month_days(&self, month: u32) -> u32 {
        debug_assert!((1..=12).contains(&month));
        if self.bits & (0x10000 >> month) != 0 {
            30
        } else {
            29
        }
    }

    /// Total days in the lunar year, leap month included.
    pub fn year_days(&self) -> u32 {
        BASE_YEAR_DAYS + (self.bits & MONTH_LENGTH_MASK).count_ones() + self.leap_month_days()
    }

    /// Number of months in the year (12, or 13 with a leap month).
    pub fn month_count(&self) -> usize {
        if self.leap_month().is_some() { 13 } else { 12 }
    }

    /// Months in calendar order, with the leap month directly after the
    /// regular month whose ordinal it shares.
    pub fn months(&self) -> impl Iterator<Item = LunarMonthSpan> + '_ {
        let leap = self.leap_month();
        (1..=12u32).flat_map(move |month| {
            let regular = LunarMonthSpan {
                month,
                is_leap: false,
                days: self.month_days(month),
            };
            let intercalary = (leap == Some(month)).then(|| LunarMonthSpan {
                month,
                is_leap: true,
                days: self.leap_month_days(),
            });
            std::iter::once(regular).chain(intercalary)
        })
    }
}
