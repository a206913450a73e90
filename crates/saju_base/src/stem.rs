//! The ten heavenly stems.
//!
//! Stems alternate yang/yin and pair up per element, starting from yang
//! wood (index 0). The cycle repeats every 10 steps.

use serde::Serialize;

use crate::element::{Element, Polarity};
use crate::util::cyclic_index;

/// The 10 heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[allow(missing_docs)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// Stems in cycle order (index 0 = Jia).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

/// Cycle length of the stems.
pub const STEM_COUNT: u8 = 10;

impl Stem {
    /// 0-based index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem at `index`, or `None` past 9.
    pub fn from_index(index: u8) -> Option<Self> {
        ALL_STEMS.get(index as usize).copied()
    }

    /// Stem at any signed cycle position, wrapped into 0..10.
    pub fn from_cycle(position: i64) -> Self {
        ALL_STEMS[cyclic_index(position, STEM_COUNT) as usize]
    }

    /// Romanised (pinyin) name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    /// Korean reading.
    pub const fn korean_name(self) -> &'static str {
        match self {
            Self::Jia => "갑",
            Self::Yi => "을",
            Self::Bing => "병",
            Self::Ding => "정",
            Self::Wu => "무",
            Self::Ji => "기",
            Self::Geng => "경",
            Self::Xin => "신",
            Self::Ren => "임",
            Self::Gui => "계",
        }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Jia | Self::Yi => Element::Wood,
            Self::Bing | Self::Ding => Element::Fire,
            Self::Wu | Self::Ji => Element::Earth,
            Self::Geng | Self::Xin => Element::Metal,
            Self::Ren | Self::Gui => Element::Water,
        }
    }

    /// Even indices are yang, odd are yin.
    pub const fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// Display colour as `#RRGGBB`.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Jia => "#2E7D32",
            Self::Yi => "#4CAF50",
            Self::Bing => "#C62828",
            Self::Ding => "#EF5350",
            Self::Wu => "#F9A825",
            Self::Ji => "#FDD835",
            Self::Geng => "#757575",
            Self::Xin => "#BDBDBD",
            Self::Ren => "#1565C0",
            Self::Gui => "#42A5F5",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
            assert_eq!(Stem::from_index(i as u8), Some(*s));
        }
        assert_eq!(Stem::from_index(10), None);
    }

    #[test]
    fn from_cycle_wraps_negative() {
        assert_eq!(Stem::from_cycle(-1), Stem::Gui);
        assert_eq!(Stem::from_cycle(10), Stem::Jia);
        assert_eq!(Stem::from_cycle(1986), Stem::Geng);
    }

    #[test]
    fn pairs_share_an_element() {
        for pair in ALL_STEMS.chunks(2) {
            assert_eq!(pair[0].element(), pair[1].element());
            assert_eq!(pair[0].polarity(), Polarity::Yang);
            assert_eq!(pair[1].polarity(), Polarity::Yin);
        }
    }

    #[test]
    fn glyphs_distinct() {
        for (i, a) in ALL_STEMS.iter().enumerate() {
            for b in &ALL_STEMS[i + 1..] {
                assert_ne!(a.glyph(), b.glyph());
            }
        }
    }
}
