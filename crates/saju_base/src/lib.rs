//! Four-pillar (saju) charts and decennial life phases.
//!
//! This crate provides:
//! - The ten stems, twelve branches, five elements and their relations
//! - Year, month, day and hour pillars for a Gregorian birth date
//! - Chart assembly with element and yin/yang aggregates
//! - Ten-year life-phase sequences with direction and starting age
//!
//! Calendar primitives (lunar almanac, solar terms) live in `saju_time`.

pub mod branch;
pub mod calculator;
pub mod chart;
pub mod element;
pub mod error;
pub mod phase;
pub mod pillar;
pub mod stem;
pub mod util;

pub use branch::{ALL_BRANCHES, BRANCH_COUNT, Branch};
pub use calculator::{
    annual_pillars, current_year_pillar, day_pillar, hour_branch, hour_pillar, month_branch,
    month_pillar, year_pillar,
};
pub use chart::{
    Chart, ElementDistribution, Gender, PolarityBalance, calculate_chart, chart_for_date,
};
pub use element::{
    ALL_ELEMENTS, Element, ElementRelation, ElementRelations, FIVE_ELEMENT_RELATIONS, Polarity,
};
pub use error::SajuError;
pub use phase::{
    LifePhase, LifePhaseConfig, LifePhaseTimeline, PhaseDirection, calculate_life_phases,
    calculate_life_phases_with, find_active_phase, phase_for_year,
};
pub use pillar::{Pillar, SEXAGENARY_CYCLE};
pub use stem::{ALL_STEMS, STEM_COUNT, Stem};
