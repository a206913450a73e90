//! Lookups over a generated phase sequence.

use super::types::LifePhase;

/// Phase whose age span contains `age`, if any.
///
/// Ages before the first phase begins have no active phase.
pub fn find_active_phase(phases: &[LifePhase], age: u32) -> Option<&LifePhase> {
    phases.iter().find(|p| p.contains_age(age))
}

/// Phase whose calendar-year span contains `year`, if any.
pub fn phase_for_year(phases: &[LifePhase], year: i32) -> Option<&LifePhase> {
    phases.iter().find(|p| p.contains_year(year))
}
