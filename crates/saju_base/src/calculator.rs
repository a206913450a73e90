//! Year, month, day and hour pillars for a birth date.
//!
//! - Year: the year turns at the start-of-spring term, not on January 1.
//! - Month: branch from the solar-term window, stem tied to the year stem.
//! - Day: sexagenary count from 1900-01-01 (stem 0, branch 4).
//! - Hour: branch from twelve two-hour windows, stem tied to the day stem.
//!
//! Month windows cover the whole year. January 1-5 fall in the Zi window
//! opened by the previous December's major snow, and December 7-31 are Zi
//! as well. Some older calculators put January 1-5 in Yin and December
//! 7-31 in Chou, so charts for those dates differ from theirs.

use saju_time::{CivilDate, SolarTerm, governing_major_term};

use crate::branch::Branch;
use crate::error::SajuError;
use crate::pillar::Pillar;
use crate::stem::Stem;

/// Stem and branch offset of the year cycle: CE 4 was a Jia-Zi year.
pub const YEAR_CYCLE_OFFSET: i64 = 4;

/// Branch offset of the day cycle at 1900-01-01 (stem offset is 0).
pub const DAY_BRANCH_OFFSET: i64 = 4;

/// Two-hour windows `(start_hour, end_hour, branch)`; the first wraps
/// across midnight.
pub const HOUR_BRANCH_WINDOWS: [(u32, u32, Branch); 12] = [
    (23, 1, Branch::Zi),
    (1, 3, Branch::Chou),
    (3, 5, Branch::Yin),
    (5, 7, Branch::Mao),
    (7, 9, Branch::Chen),
    (9, 11, Branch::Si),
    (11, 13, Branch::Wu),
    (13, 15, Branch::Wei),
    (15, 17, Branch::Shen),
    (17, 19, Branch::You),
    (19, 21, Branch::Xu),
    (21, 23, Branch::Hai),
];

/// Stem paired with `branch` when the governing stem is `ruling`.
///
/// Shared by month (ruled by year stem) and hour (ruled by day stem):
/// `((ruling mod 5) * 2 + branch) mod 10`.
fn derived_stem(ruling: Stem, branch: Branch) -> Stem {
    Stem::from_cycle((ruling.index() % 5) as i64 * 2 + branch.index() as i64)
}

fn annual_pillar(year: i64) -> Pillar {
    let position = year - YEAR_CYCLE_OFFSET;
    Pillar::from_positions(position, position)
}

/// Year pillar without the spring-term adjustment. Accepts any year.
pub fn current_year_pillar(year: i32) -> Pillar {
    annual_pillar(year as i64)
}

/// Annual pillars for every year in `from..=to`.
pub fn annual_pillars(from: i32, to: i32) -> Vec<(i32, Pillar)> {
    (from..=to).map(|y| (y, current_year_pillar(y))).collect()
}

/// Year pillar of a birth date; dates before the start of spring belong
/// to the previous year.
pub fn year_pillar(date: &CivilDate) -> Pillar {
    let (month, day) = SolarTerm::StartOfSpring.approximate_date();
    let year = date.year() as i64;
    if date.is_on_or_after(month, day) {
        annual_pillar(year)
    } else {
        annual_pillar(year - 1)
    }
}

/// Branch of the solar month opened by a major term.
///
/// Non-major terms map to the branch of the window they fall inside.
pub const fn month_branch_for_term(term: SolarTerm) -> Branch {
    match term {
        SolarTerm::StartOfSpring | SolarTerm::RainWater => Branch::Yin,
        SolarTerm::AwakeningOfInsects | SolarTerm::SpringEquinox => Branch::Mao,
        SolarTerm::PureBrightness | SolarTerm::GrainRain => Branch::Chen,
        SolarTerm::StartOfSummer | SolarTerm::GrainBuds => Branch::Si,
        SolarTerm::GrainInEar | SolarTerm::SummerSolstice => Branch::Wu,
        SolarTerm::MinorHeat | SolarTerm::MajorHeat => Branch::Wei,
        SolarTerm::StartOfAutumn | SolarTerm::EndOfHeat => Branch::Shen,
        SolarTerm::WhiteDew | SolarTerm::AutumnEquinox => Branch::You,
        SolarTerm::ColdDew | SolarTerm::FrostDescent => Branch::Xu,
        SolarTerm::StartOfWinter | SolarTerm::MinorSnow => Branch::Hai,
        SolarTerm::MajorSnow | SolarTerm::WinterSolstice => Branch::Zi,
        SolarTerm::MinorCold | SolarTerm::MajorCold => Branch::Chou,
    }
}

/// Month branch of a date from its solar-term window.
pub fn month_branch(date: &CivilDate) -> Branch {
    month_branch_for_term(governing_major_term(date))
}

/// Month pillar of a birth date.
pub fn month_pillar(date: &CivilDate) -> Pillar {
    let branch = month_branch(date);
    let stem = derived_stem(year_pillar(date).stem, branch);
    Pillar::new(stem, branch)
}

/// Day pillar of a date.
pub fn day_pillar(date: &CivilDate) -> Pillar {
    let offset = date.day_number();
    Pillar::from_positions(offset, offset + DAY_BRANCH_OFFSET)
}

/// Branch of the two-hour window containing `hour` (0-23).
pub fn hour_branch(hour: u32) -> Result<Branch, SajuError> {
    if hour > 23 {
        return Err(SajuError::InvalidHour(hour));
    }
    let branch = HOUR_BRANCH_WINDOWS
        .iter()
        .find(|&&(start, end, _)| {
            if start > end {
                hour >= start || hour < end
            } else {
                hour >= start && hour < end
            }
        })
        .map(|&(_, _, branch)| branch)
        .unwrap_or(Branch::Zi);
    Ok(branch)
}

/// Hour pillar for a birth hour on `date`.
///
/// Hour 23 keeps the calendar day's stem; the day does not roll over.
pub fn hour_pillar(date: &CivilDate, hour: u32) -> Result<Pillar, SajuError> {
    let branch = hour_branch(hour)?;
    let stem = derived_stem(day_pillar(date).stem, branch);
    Ok(Pillar::new(stem, branch))
}
