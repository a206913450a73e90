//! Stem/branch pairs and their place in the sexagenary cycle.
//!
//! Stepping a pillar advances stem and branch together, so a pillar whose
//! stem and branch share index parity stays inside the 60-pair cycle.

use std::fmt;

use serde::Serialize;

use crate::branch::{BRANCH_COUNT, Branch};
use crate::element::Element;
use crate::stem::{STEM_COUNT, Stem};

/// Length of the sexagenary cycle.
pub const SEXAGENARY_CYCLE: u8 = 60;

/// One stem/branch pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Pillar from signed stem and branch positions, each floor-wrapped.
    pub fn from_positions(stem_position: i64, branch_position: i64) -> Self {
        Self {
            stem: Stem::from_cycle(stem_position),
            branch: Branch::from_cycle(branch_position),
        }
    }

    /// Pillar at sexagenary index `index` (0 = Jia-Zi), wrapped mod 60.
    pub fn from_sexagenary_index(index: i64) -> Self {
        Self::from_positions(index, index)
    }

    /// Index in the 60-pair cycle, or `None` when stem and branch
    /// parities differ (such a pair never occurs in the cycle).
    pub fn sexagenary_index(&self) -> Option<u8> {
        let s = self.stem.index();
        let b = self.branch.index();
        if s % 2 != b % 2 {
            return None;
        }
        // smallest n with n = s (mod 10) and n = b (mod 12)
        (0..SEXAGENARY_CYCLE).find(|n| n % STEM_COUNT == s && n % BRANCH_COUNT == b)
    }

    /// Advance stem and branch by `steps` (negative steps go backward).
    pub fn step(self, steps: i64) -> Self {
        Self::from_positions(
            self.stem.index() as i64 + steps,
            self.branch.index() as i64 + steps,
        )
    }

    /// Both elements of the pillar, stem first.
    pub fn elements(&self) -> [Element; 2] {
        [self.stem.element(), self.branch.element()]
    }

    /// Glyph pair, e.g. `甲子`.
    pub fn glyphs(&self) -> String {
        format!("{}{}", self.stem.glyph(), self.branch.glyph())
    }

    /// Korean reading, e.g. `갑자`.
    pub fn korean_name(&self) -> String {
        format!("{}{}", self.stem.korean_name(), self.branch.korean_name())
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{} ({})",
            self.stem.name(),
            self.branch.name(),
            self.glyphs()
        )
    }
}
