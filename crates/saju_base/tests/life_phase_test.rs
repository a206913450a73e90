//! Integration tests for decennial life phases.

use saju_base::phase::{PHASE_COUNT, YEARS_PER_PHASE};
use saju_base::{
    Branch, Gender, LifePhaseConfig, PhaseDirection, Pillar, Stem, calculate_chart,
    calculate_life_phases, calculate_life_phases_with, find_active_phase, phase_for_year,
};

fn timeline(y: i32, m: u32, d: u32, gender: Gender) -> saju_base::LifePhaseTimeline {
    let chart = calculate_chart(y, m, d, None, gender).unwrap();
    calculate_life_phases(&chart, y, m, d, gender).unwrap()
}

/// Geng-Wu year, male: forward from Xin-Si, 22 days to grain-in-ear.
#[test]
fn yang_year_male() {
    let t = timeline(1990, 5, 15, Gender::Male);
    assert_eq!(t.direction, PhaseDirection::Forward);
    assert_eq!(t.boundary_days, 22);
    assert_eq!(t.start_age, 7);

    let first = t.phases[0];
    assert_eq!(first.order, 1);
    assert_eq!(first.pillar(), Pillar::new(Stem::Ren, Branch::Wu));
    assert_eq!((first.start_age, first.end_age), (7, 16));
    assert_eq!((first.start_year, first.end_year), (1997, 2006));
}

/// Same birth, female: backward, 9 days since start-of-summer.
#[test]
fn yang_year_female() {
    let t = timeline(1990, 5, 15, Gender::Female);
    assert_eq!(t.direction, PhaseDirection::Backward);
    assert_eq!(t.boundary_days, 9);
    assert_eq!(t.start_age, 3);
    assert_eq!(t.phases[0].pillar(), Pillar::new(Stem::Geng, Branch::Chen));
}

/// Ji-Mao year (yin): male runs backward to the previous major snow.
#[test]
fn yin_year_directions() {
    let male = timeline(2000, 1, 1, Gender::Male);
    assert_eq!(male.direction, PhaseDirection::Backward);
    assert_eq!(male.boundary_days, 25);
    assert_eq!(male.start_age, 8);

    let female = timeline(2000, 1, 1, Gender::Female);
    assert_eq!(female.direction, PhaseDirection::Forward);
    assert_eq!(female.boundary_days, 5);
    assert_eq!(female.start_age, 2);
}

#[test]
fn birth_on_term_date_starts_at_zero() {
    for gender in [Gender::Male, Gender::Female] {
        let t = timeline(1984, 2, 4, gender);
        assert_eq!(t.boundary_days, 0);
        assert_eq!(t.start_age, 0);
        assert_eq!(t.phases[0].start_year, 1984);
    }
}

#[test]
fn phases_tile_contiguously() {
    let t = timeline(1975, 9, 30, Gender::Female);
    assert_eq!(t.phases.len(), PHASE_COUNT);
    assert_eq!(t.phases[0].start_age, t.start_age);
    for w in t.phases.windows(2) {
        assert_eq!(w[1].start_age, w[0].end_age + 1);
        assert_eq!(w[1].start_year, w[0].end_year + 1);
        assert_eq!(w[1].order, w[0].order + 1);
    }
    for p in &t.phases {
        assert_eq!(p.end_age - p.start_age + 1, YEARS_PER_PHASE);
        assert_eq!(p.start_year, 1975 + p.start_age as i32);
    }
}

#[test]
fn genders_walk_opposite_ways() {
    for (y, m, d) in [(1990, 5, 15), (2000, 1, 1), (1961, 11, 2), (2042, 7, 19)] {
        let chart = calculate_chart(y, m, d, None, Gender::Male).unwrap();
        let male = calculate_life_phases(&chart, y, m, d, Gender::Male).unwrap();
        let female = calculate_life_phases(&chart, y, m, d, Gender::Female).unwrap();
        assert_eq!(male.direction, female.direction.reversed());
        for (i, (a, b)) in male.phases.iter().zip(&female.phases).enumerate() {
            let n = i as i64 + 1;
            let fwd = chart.month.step(n);
            let bwd = chart.month.step(-n);
            if male.direction == PhaseDirection::Forward {
                assert_eq!((a.pillar(), b.pillar()), (fwd, bwd));
            } else {
                assert_eq!((a.pillar(), b.pillar()), (bwd, fwd));
            }
        }
    }
}

#[test]
fn start_age_never_exceeds_term_spacing() {
    // major terms are at most 32 days apart
    for m in 1..=12u32 {
        for gender in [Gender::Male, Gender::Female] {
            let t = timeline(2015, m, 17, gender);
            assert!(t.boundary_days <= 32);
            assert!(t.start_age <= 11);
        }
    }
}

#[test]
fn active_phase_lookup() {
    let t = timeline(1990, 5, 15, Gender::Male);
    assert!(find_active_phase(&t.phases, 6).is_none());
    assert_eq!(find_active_phase(&t.phases, 7).map(|p| p.order), Some(1));
    assert_eq!(find_active_phase(&t.phases, 35).map(|p| p.order), Some(3));
    assert_eq!(find_active_phase(&t.phases, 106).map(|p| p.order), Some(10));
    assert!(find_active_phase(&t.phases, 107).is_none());

    assert_eq!(phase_for_year(&t.phases, 2026).map(|p| p.order), Some(3));
    assert!(phase_for_year(&t.phases, 1990).is_none());
}

#[test]
fn custom_config() {
    let chart = calculate_chart(1990, 5, 15, None, Gender::Male).unwrap();
    let config = LifePhaseConfig {
        phase_count: 12,
        years_per_phase: 5,
        days_per_year_of_age: 2,
    };
    let t = calculate_life_phases_with(&chart, 1990, 5, 15, Gender::Male, &config).unwrap();
    assert_eq!(t.phases.len(), 12);
    assert_eq!(t.start_age, 11);
    assert_eq!(t.phases[1].start_age, 16);
}

#[test]
fn chart_shortcut_matches() {
    let chart = calculate_chart(1990, 5, 15, None, Gender::Female).unwrap();
    assert_eq!(
        chart.life_phases().unwrap(),
        calculate_life_phases(&chart, 1990, 5, 15, Gender::Female).unwrap()
    );
}
