//! Life-phase sequence generation.
//!
//! Phase 1 is the month pillar stepped once in the phase direction; each
//! later phase steps once more. The month pillar itself is never a phase.

use saju_time::CivilDate;

use crate::chart::{Chart, Gender};
use crate::error::SajuError;
use crate::pillar::Pillar;

use super::balance::{boundary_days, start_age_from_days};
use super::types::{LifePhase, LifePhaseConfig, LifePhaseTimeline, PhaseDirection};

/// Generate the phase sequence from a month pillar.
///
/// Fails with [`SajuError::InvalidConfig`] for a config rejected by
/// [`LifePhaseConfig::validate`] and with [`SajuError::PhaseRange`] when
/// an age or year would overflow.
pub fn generate_phases(
    month_pillar: Pillar,
    direction: PhaseDirection,
    start_age: u32,
    birth_year: i32,
    config: &LifePhaseConfig,
) -> Result<Vec<LifePhase>, SajuError> {
    config.validate()?;
    let overflow = || SajuError::PhaseRange {
        start_age,
        birth_year,
    };
    let span = config.years_per_phase;
    (0..config.phase_count)
        .map(|i| {
            let order = u8::try_from(i + 1)
                .map_err(|_| SajuError::InvalidConfig("phase_count must be at most 255"))?;
            let pillar = month_pillar.step(direction.step() * (i as i64 + 1));
            // span * i stays within MAX_TIMELINE_YEARS after validation
            let age = start_age.checked_add(span * i as u32).ok_or_else(overflow)?;
            let end_age = age.checked_add(span - 1).ok_or_else(overflow)?;
            let year = i32::try_from(age)
                .ok()
                .and_then(|a| birth_year.checked_add(a))
                .ok_or_else(overflow)?;
            let end_year = year.checked_add(span as i32 - 1).ok_or_else(overflow)?;
            Ok(LifePhase {
                order,
                stem: pillar.stem,
                branch: pillar.branch,
                start_age: age,
                end_age,
                start_year: year,
                end_year,
            })
        })
        .collect()
}

/// Life phases for `chart` with the default configuration.
pub fn calculate_life_phases(
    chart: &Chart,
    birth_year: i32,
    birth_month: u32,
    birth_day: u32,
    gender: Gender,
) -> Result<LifePhaseTimeline, SajuError> {
    calculate_life_phases_with(
        chart,
        birth_year,
        birth_month,
        birth_day,
        gender,
        &LifePhaseConfig::default(),
    )
}

/// Life phases for `chart` with an explicit configuration.
///
/// Direction comes from the year-stem polarity and `gender`; the start age
/// from the day distance between birth and the bounding major term.
pub fn calculate_life_phases_with(
    chart: &Chart,
    birth_year: i32,
    birth_month: u32,
    birth_day: u32,
    gender: Gender,
    config: &LifePhaseConfig,
) -> Result<LifePhaseTimeline, SajuError> {
    config.validate()?;
    let birth = CivilDate::new_supported(birth_year, birth_month, birth_day)?;

    let direction = PhaseDirection::from_year_polarity(chart.year.stem.polarity(), gender);
    let days = boundary_days(&birth, direction);
    let start_age = start_age_from_days(days, config.days_per_year_of_age);
    let phases = generate_phases(chart.month, direction, start_age, birth_year, config)?;

    tracing::debug!(
        %birth,
        direction = direction.name(),
        boundary_days = days,
        start_age,
        "computed life phases"
    );

    Ok(LifePhaseTimeline {
        direction,
        boundary_days: days,
        start_age,
        phases,
    })
}

impl Chart {
    /// Life phases from the chart's own birth date and gender.
    pub fn life_phases(&self) -> Result<LifePhaseTimeline, SajuError> {
        calculate_life_phases(
            self,
            self.birth_date.year(),
            self.birth_date.month(),
            self.birth_date.day(),
            self.gender,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::Branch;
    use crate::chart::calculate_chart;
    use crate::phase::types::PHASE_COUNT;
    use crate::stem::Stem;

    #[test]
    fn forward_starts_one_past_month_pillar() {
        let month = Pillar::new(Stem::Xin, Branch::Si);
        let phases = generate_phases(
            month,
            PhaseDirection::Forward,
            7,
            1990,
            &LifePhaseConfig::default(),
        )
        .unwrap();
        assert_eq!(phases.len(), PHASE_COUNT);
        assert_eq!(phases[0].pillar(), Pillar::new(Stem::Ren, Branch::Wu));
        assert_eq!(phases[9].pillar(), month.step(10));
    }

    #[test]
    fn backward_steps_down() {
        let month = Pillar::new(Stem::Jia, Branch::Zi);
        let phases = generate_phases(
            month,
            PhaseDirection::Backward,
            0,
            2000,
            &LifePhaseConfig::default(),
        )
        .unwrap();
        assert_eq!(phases[0].pillar(), Pillar::new(Stem::Gui, Branch::Hai));
        assert_eq!(phases[1].pillar(), Pillar::new(Stem::Ren, Branch::Xu));
    }

    #[test]
    fn ages_and_years_line_up() {
        let phases = generate_phases(
            Pillar::new(Stem::Jia, Branch::Zi),
            PhaseDirection::Forward,
            3,
            1950,
            &LifePhaseConfig::default(),
        )
        .unwrap();
        for (i, p) in phases.iter().enumerate() {
            assert_eq!(p.order as usize, i + 1);
            assert_eq!(p.start_age, 3 + 10 * i as u32);
            assert_eq!(p.end_age, p.start_age + 9);
            assert_eq!(p.start_year, 1950 + p.start_age as i32);
            assert_eq!(p.end_year, p.start_year + 9);
        }
    }

    #[test]
    fn custom_config_shapes_sequence() {
        let config = LifePhaseConfig {
            phase_count: 4,
            years_per_phase: 5,
            ..Default::default()
        };
        let phases = generate_phases(
            Pillar::new(Stem::Jia, Branch::Zi),
            PhaseDirection::Forward,
            1,
            2000,
            &config,
        )
        .unwrap();
        assert_eq!(phases.len(), 4);
        assert_eq!(phases[3].start_age, 16);
        assert_eq!(phases[3].end_age, 20);
    }

    #[test]
    fn male_yang_year_runs_forward() {
        // 1990 is a Geng (yang) year
        let chart = calculate_chart(1990, 5, 15, None, Gender::Male).unwrap();
        let t = calculate_life_phases(&chart, 1990, 5, 15, Gender::Male).unwrap();
        assert_eq!(t.direction, PhaseDirection::Forward);
        assert_eq!(t.boundary_days, 22);
        assert_eq!(t.start_age, 7);
        assert_eq!(t.phases[0].start_year, 1997);
    }

    #[test]
    fn female_yang_year_runs_backward() {
        let chart = calculate_chart(1990, 5, 15, None, Gender::Female).unwrap();
        let t = chart.life_phases().unwrap();
        assert_eq!(t.direction, PhaseDirection::Backward);
        assert_eq!(t.boundary_days, 9);
        assert_eq!(t.start_age, 3);
        assert_eq!(t.phases[0].pillar(), Pillar::new(Stem::Geng, Branch::Chen));
    }

    #[test]
    fn invalid_birth_date_rejected() {
        let chart = calculate_chart(1990, 5, 15, None, Gender::Male).unwrap();
        assert!(calculate_life_phases(&chart, 1990, 2, 30, Gender::Male).is_err());
    }

    #[test]
    fn oversized_config_rejected_before_arithmetic() {
        let month = Pillar::new(Stem::Jia, Branch::Zi);
        for config in [
            LifePhaseConfig {
                phase_count: 2,
                years_per_phase: u32::MAX,
                ..Default::default()
            },
            LifePhaseConfig {
                phase_count: 300,
                years_per_phase: 1,
                ..Default::default()
            },
        ] {
            assert!(matches!(
                generate_phases(month, PhaseDirection::Forward, 0, 2000, &config),
                Err(SajuError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn full_u8_order_range() {
        let config = LifePhaseConfig {
            phase_count: 255,
            years_per_phase: 1,
            ..Default::default()
        };
        let phases = generate_phases(
            Pillar::new(Stem::Jia, Branch::Zi),
            PhaseDirection::Forward,
            0,
            2000,
            &config,
        )
        .unwrap();
        assert_eq!(phases.last().map(|p| p.order), Some(255));
    }

    #[test]
    fn age_and_year_overflow_reported() {
        let month = Pillar::new(Stem::Jia, Branch::Zi);
        let config = LifePhaseConfig::default();
        assert_eq!(
            generate_phases(month, PhaseDirection::Forward, u32::MAX - 5, 2000, &config),
            Err(SajuError::PhaseRange {
                start_age: u32::MAX - 5,
                birth_year: 2000
            })
        );
        assert!(matches!(
            generate_phases(month, PhaseDirection::Forward, 0, i32::MAX - 20, &config),
            Err(SajuError::PhaseRange { .. })
        ));
    }

    #[test]
    fn invalid_config_rejected() {
        let chart = calculate_chart(1990, 5, 15, None, Gender::Male).unwrap();
        let config = LifePhaseConfig {
            years_per_phase: 0,
            ..Default::default()
        };
        assert!(matches!(
            calculate_life_phases_with(&chart, 1990, 5, 15, Gender::Male, &config),
            Err(SajuError::InvalidConfig(_))
        ));
    }
}
