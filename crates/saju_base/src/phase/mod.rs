//! Decennial life-phase calculations.
//!
//! A chart yields an ordered run of ten-year phases walking the
//! sexagenary cycle from its month pillar:
//! - direction from year-stem polarity and gender ([`types`])
//! - starting age from the distance to the bounding solar term ([`balance`])
//! - sequence generation ([`sequence`]) and lookups ([`query`])

pub mod balance;
pub mod query;
pub mod sequence;
pub mod types;

pub use balance::{boundary_days, start_age_from_days};
pub use query::{find_active_phase, phase_for_year};
pub use sequence::{calculate_life_phases, calculate_life_phases_with, generate_phases};
pub use types::{
    DAYS_PER_YEAR_OF_AGE, LifePhase, LifePhaseConfig, LifePhaseTimeline, MAX_TIMELINE_YEARS,
    PHASE_COUNT, PhaseDirection, YEARS_PER_PHASE,
};
