//! Starting age of the first life phase.
//!
//! The distance in days from birth to the bounding major solar term (the
//! next one when walking forward, the previous one when walking backward)
//! is converted to years at a fixed days-per-year ratio.

use saju_time::{CivilDate, days_since_previous_major_term, days_to_next_major_term};

use super::types::PhaseDirection;

/// Days between `birth` and its bounding major term in `direction`.
pub fn boundary_days(birth: &CivilDate, direction: PhaseDirection) -> u32 {
    match direction {
        PhaseDirection::Forward => days_to_next_major_term(birth),
        PhaseDirection::Backward => days_since_previous_major_term(birth),
    }
}

/// `days / days_per_year`, rounded half up.
pub fn start_age_from_days(days: u32, days_per_year: u32) -> u32 {
    (2 * days + days_per_year) / (2 * days_per_year)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CivilDate {
        CivilDate::new(y, m, d).unwrap()
    }

    #[test]
    fn rounding_at_three_days_per_year() {
        let ages: Vec<u32> = (0..=7).map(|d| start_age_from_days(d, 3)).collect();
        assert_eq!(ages, vec![0, 0, 1, 1, 1, 2, 2, 2]);
    }

    #[test]
    fn rounding_halves_go_up() {
        assert_eq!(start_age_from_days(1, 2), 1);
        assert_eq!(start_age_from_days(3, 2), 2);
    }

    #[test]
    fn boundary_by_direction() {
        let d = date(1990, 5, 15);
        assert_eq!(boundary_days(&d, PhaseDirection::Forward), 22);
        assert_eq!(boundary_days(&d, PhaseDirection::Backward), 9);
    }

    #[test]
    fn birth_on_term_date_starts_at_zero() {
        let d = date(2024, 12, 7);
        for dir in [PhaseDirection::Forward, PhaseDirection::Backward] {
            assert_eq!(start_age_from_days(boundary_days(&d, dir), 3), 0);
        }
    }
}
