//! Core types for decennial life-phase calculations.

use serde::Serialize;

use crate::branch::Branch;
use crate::chart::Gender;
use crate::element::Polarity;
use crate::error::SajuError;
use crate::pillar::Pillar;
use crate::stem::Stem;

/// Phases generated per chart.
pub const PHASE_COUNT: usize = 10;

/// Years spanned by one phase.
pub const YEARS_PER_PHASE: u32 = 10;

/// Days of distance to the bounding solar term that count as one year of
/// starting age.
pub const DAYS_PER_YEAR_OF_AGE: u32 = 3;

/// Upper bound on `phase_count * years_per_phase`.
pub const MAX_TIMELINE_YEARS: u32 = 1_000;

/// Direction in which phases walk the sexagenary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PhaseDirection {
    Forward,
    Backward,
}

impl PhaseDirection {
    /// Forward for a yang-year male or a yin-year female, backward otherwise.
    pub const fn from_year_polarity(polarity: Polarity, gender: Gender) -> Self {
        match (gender, polarity) {
            (Gender::Male, Polarity::Yang) | (Gender::Female, Polarity::Yin) => Self::Forward,
            _ => Self::Backward,
        }
    }

    /// Cycle step per phase: +1 or -1.
    pub const fn step(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    pub const fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

/// One ten-year life phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LifePhase {
    /// 1-indexed position in the sequence.
    pub order: u8,
    pub stem: Stem,
    pub branch: Branch,
    /// Age at which the phase begins, inclusive.
    pub start_age: u32,
    /// Last age inside the phase, inclusive.
    pub end_age: u32,
    pub start_year: i32,
    pub end_year: i32,
}

impl LifePhase {
    pub fn pillar(&self) -> Pillar {
        Pillar::new(self.stem, self.branch)
    }

    /// Whether `age` falls inside this phase.
    pub fn contains_age(&self, age: u32) -> bool {
        (self.start_age..=self.end_age).contains(&age)
    }

    /// Whether calendar `year` falls inside this phase.
    pub fn contains_year(&self, year: i32) -> bool {
        (self.start_year..=self.end_year).contains(&year)
    }
}

/// Full life-phase result for a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LifePhaseTimeline {
    pub direction: PhaseDirection,
    /// Day distance from birth to the bounding major solar term.
    pub boundary_days: u32,
    /// Age at which the first phase begins.
    pub start_age: u32,
    pub phases: Vec<LifePhase>,
}

/// Tunable parameters of life-phase generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifePhaseConfig {
    /// Number of phases to generate. Default: 10.
    pub phase_count: usize,
    /// Years per phase. Default: 10.
    pub years_per_phase: u32,
    /// Days of term distance per year of starting age. Default: 3.
    pub days_per_year_of_age: u32,
}

impl Default for LifePhaseConfig {
    fn default() -> Self {
        Self {
            phase_count: PHASE_COUNT,
            years_per_phase: YEARS_PER_PHASE,
            days_per_year_of_age: DAYS_PER_YEAR_OF_AGE,
        }
    }
}

impl LifePhaseConfig {
    /// Reject zero values, more phases than a `u8` order can number, and
    /// timelines longer than [`MAX_TIMELINE_YEARS`].
    pub fn validate(&self) -> Result<(), SajuError> {
        if self.phase_count == 0 {
            return Err(SajuError::InvalidConfig("phase_count must be positive"));
        }
        if self.years_per_phase == 0 {
            return Err(SajuError::InvalidConfig("years_per_phase must be positive"));
        }
        if self.days_per_year_of_age == 0 {
            return Err(SajuError::InvalidConfig(
                "days_per_year_of_age must be positive",
            ));
        }
        if self.phase_count > u8::MAX as usize {
            return Err(SajuError::InvalidConfig("phase_count must be at most 255"));
        }
        let total = self.phase_count as u64 * self.years_per_phase as u64;
        if total > MAX_TIMELINE_YEARS as u64 {
            return Err(SajuError::InvalidConfig(
                "phase_count * years_per_phase must not exceed 1000 years",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_rule() {
        use PhaseDirection::*;
        assert_eq!(PhaseDirection::from_year_polarity(Polarity::Yang, Gender::Male), Forward);
        assert_eq!(PhaseDirection::from_year_polarity(Polarity::Yin, Gender::Male), Backward);
        assert_eq!(PhaseDirection::from_year_polarity(Polarity::Yang, Gender::Female), Backward);
        assert_eq!(PhaseDirection::from_year_polarity(Polarity::Yin, Gender::Female), Forward);
    }

    #[test]
    fn reversed_flips_step() {
        assert_eq!(PhaseDirection::Forward.reversed().step(), -1);
        assert_eq!(PhaseDirection::Backward.reversed().step(), 1);
    }

    #[test]
    fn default_config_is_valid() {
        let c = LifePhaseConfig::default();
        assert_eq!(c.phase_count, 10);
        assert_eq!(c.years_per_phase, 10);
        assert_eq!(c.days_per_year_of_age, 3);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn zero_values_rejected() {
        let c = LifePhaseConfig {
            phase_count: 0,
            ..Default::default()
        };
        assert!(matches!(c.validate(), Err(SajuError::InvalidConfig(_))));
        let c = LifePhaseConfig {
            days_per_year_of_age: 0,
            ..Default::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn oversized_values_rejected() {
        let c = LifePhaseConfig {
            phase_count: 2,
            years_per_phase: u32::MAX,
            ..Default::default()
        };
        assert!(matches!(c.validate(), Err(SajuError::InvalidConfig(_))));
        let c = LifePhaseConfig {
            phase_count: 300,
            years_per_phase: 1,
            ..Default::default()
        };
        assert!(matches!(c.validate(), Err(SajuError::InvalidConfig(_))));
        let c = LifePhaseConfig {
            phase_count: 255,
            years_per_phase: 3,
            ..Default::default()
        };
        assert!(c.validate().is_ok());
    }

    #[test]
    fn phase_containment() {
        let p = LifePhase {
            order: 1,
            stem: Stem::Ren,
            branch: Branch::Wu,
            start_age: 7,
            end_age: 16,
            start_year: 1997,
            end_year: 2006,
        };
        assert!(p.contains_age(7));
        assert!(p.contains_age(16));
        assert!(!p.contains_age(17));
        assert!(p.contains_year(2006));
        assert!(!p.contains_year(1996));
        assert_eq!(p.pillar(), Pillar::new(Stem::Ren, Branch::Wu));
    }
}
