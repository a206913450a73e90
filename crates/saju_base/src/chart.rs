//! Four-pillar chart with element and polarity aggregates.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use saju_time::CivilDate;

use crate::calculator::{day_pillar, hour_pillar, month_pillar, year_pillar};
use crate::element::{ALL_ELEMENTS, Element};
use crate::error::SajuError;
use crate::pillar::Pillar;
use crate::stem::Stem;

/// Gender input; together with year-stem polarity it fixes the life-phase
/// direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            _ => Err(format!("unknown gender: {s} (expected male or female)")),
        }
    }
}

/// Occurrences of each element across the present stems and branches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ElementDistribution {
    pub wood: u8,
    pub fire: u8,
    pub earth: u8,
    pub metal: u8,
    pub water: u8,
}

impl ElementDistribution {
    pub fn count(&self, element: Element) -> u8 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    fn add(&mut self, element: Element) {
        let slot = match element {
            Element::Wood => &mut self.wood,
            Element::Fire => &mut self.fire,
            Element::Earth => &mut self.earth,
            Element::Metal => &mut self.metal,
            Element::Water => &mut self.water,
        };
        *slot += 1;
    }

    /// Sum over all elements.
    pub fn total(&self) -> u8 {
        ALL_ELEMENTS.iter().map(|&e| self.count(e)).sum()
    }

    /// Elements with zero occurrences, in production order.
    pub fn missing(&self) -> Vec<Element> {
        ALL_ELEMENTS
            .iter()
            .copied()
            .filter(|&e| self.count(e) == 0)
            .collect()
    }

    /// Element with the highest count; ties go to the earlier element in
    /// production order.
    pub fn dominant(&self) -> Element {
        ALL_ELEMENTS
            .iter()
            .copied()
            .fold(Element::Wood, |best, e| {
                if self.count(e) > self.count(best) { e } else { best }
            })
    }
}

/// Yin/yang counts across the present stems and branches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PolarityBalance {
    pub yin: u8,
    pub yang: u8,
}

impl PolarityBalance {
    pub fn total(&self) -> u8 {
        self.yin + self.yang
    }
}

/// A complete four-pillar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub birth_date: CivilDate,
    pub birth_hour: Option<u32>,
    pub gender: Gender,
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    /// Absent when the birth hour is unknown.
    pub hour: Option<Pillar>,
    pub elements: ElementDistribution,
    pub polarity: PolarityBalance,
}

impl Chart {
    /// Present pillars in year, month, day, hour order.
    pub fn pillars(&self) -> impl Iterator<Item = &Pillar> {
        [&self.year, &self.month, &self.day]
            .into_iter()
            .chain(self.hour.as_ref())
    }

    /// Number of present stem and branch slots (6 or 8).
    pub fn slot_count(&self) -> usize {
        self.pillars().count() * 2
    }

    /// The day stem, which stands for the person the chart describes.
    pub fn day_master(&self) -> Stem {
        self.day.stem
    }
}

fn element_distribution<'a>(pillars: impl Iterator<Item = &'a Pillar>) -> ElementDistribution {
    let mut dist = ElementDistribution::default();
    for p in pillars {
        for e in p.elements() {
            dist.add(e);
        }
    }
    dist
}

fn polarity_balance<'a>(pillars: impl Iterator<Item = &'a Pillar>) -> PolarityBalance {
    let mut balance = PolarityBalance::default();
    for p in pillars {
        for polarity in [p.stem.polarity(), p.branch.polarity()] {
            if polarity.is_yin() {
                balance.yin += 1;
            } else {
                balance.yang += 1;
            }
        }
    }
    balance
}

/// Compute the chart for a birth date, optional hour (0-23), and gender.
///
/// Fails with an invalid-date error for impossible dates or years outside
/// 1900..=2100, and with [`SajuError::InvalidHour`] for hours past 23.
pub fn calculate_chart(
    year: i32,
    month: u32,
    day: u32,
    hour: Option<u32>,
    gender: Gender,
) -> Result<Chart, SajuError> {
    let date = CivilDate::new_supported(year, month, day)?;
    chart_for_date(&date, hour, gender)
}

/// Compute the chart for an already validated date.
pub fn chart_for_date(
    date: &CivilDate,
    hour: Option<u32>,
    gender: Gender,
) -> Result<Chart, SajuError> {
    let hour_p = hour.map(|h| hour_pillar(date, h)).transpose()?;
    let year = year_pillar(date);
    let month = month_pillar(date);
    let day = day_pillar(date);

    let present = [Some(&year), Some(&month), Some(&day), hour_p.as_ref()];
    let elements = element_distribution(present.iter().flatten().copied());
    let polarity = polarity_balance(present.iter().flatten().copied());

    tracing::debug!(
        %date,
        ?hour,
        year = %year,
        month = %month,
        day = %day,
        "computed chart"
    );

    Ok(Chart {
        birth_date: *date,
        birth_hour: hour,
        gender,
        year,
        month,
        day,
        hour: hour_p,
        elements,
        polarity,
    })
}
