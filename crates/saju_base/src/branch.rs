//! The twelve earthly branches and their animals.

use serde::Serialize;

use crate::element::{Element, Polarity};
use crate::util::cyclic_index;

/// The 12 earthly branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[allow(missing_docs)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// Branches in cycle order (index 0 = Zi).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

/// Cycle length of the branches.
pub const BRANCH_COUNT: u8 = 12;

impl Branch {
    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch at `index`, or `None` past 11.
    pub fn from_index(index: u8) -> Option<Self> {
        ALL_BRANCHES.get(index as usize).copied()
    }

    /// Branch at any signed cycle position, wrapped into 0..12.
    pub fn from_cycle(position: i64) -> Self {
        ALL_BRANCHES[cyclic_index(position, BRANCH_COUNT) as usize]
    }

    /// Romanised (pinyin) name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// Korean reading.
    pub const fn korean_name(self) -> &'static str {
        match self {
            Self::Zi => "자",
            Self::Chou => "축",
            Self::Yin => "인",
            Self::Mao => "묘",
            Self::Chen => "진",
            Self::Si => "사",
            Self::Wu => "오",
            Self::Wei => "미",
            Self::Shen => "신",
            Self::You => "유",
            Self::Xu => "술",
            Self::Hai => "해",
        }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// Zodiac animal.
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Zi => "Rat",
            Self::Chou => "Ox",
            Self::Yin => "Tiger",
            Self::Mao => "Rabbit",
            Self::Chen => "Dragon",
            Self::Si => "Snake",
            Self::Wu => "Horse",
            Self::Wei => "Goat",
            Self::Shen => "Monkey",
            Self::You => "Rooster",
            Self::Xu => "Dog",
            Self::Hai => "Pig",
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => Element::Earth,
            Self::Shen | Self::You => Element::Metal,
            Self::Hai | Self::Zi => Element::Water,
        }
    }

    /// Polarity by the functional reading. This follows index parity
    /// (even = yang) except for Zi, which counts as yin.
    pub const fn polarity(self) -> Polarity {
        match self {
            Self::Yin | Self::Chen | Self::Wu | Self::Shen | Self::Xu => Polarity::Yang,
            Self::Zi | Self::Chou | Self::Mao | Self::Si | Self::Wei | Self::You | Self::Hai => {
                Polarity::Yin
            }
        }
    }

    /// Display colour as `#RRGGBB`.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Zi => "#1565C0",
            Self::Chou => "#F9A825",
            Self::Yin => "#2E7D32",
            Self::Mao => "#4CAF50",
            Self::Chen => "#F9A825",
            Self::Si => "#EF5350",
            Self::Wu => "#C62828",
            Self::Wei => "#FDD835",
            Self::Shen => "#757575",
            Self::You => "#BDBDBD",
            Self::Xu => "#FF8F00",
            Self::Hai => "#42A5F5",
        }
    }
}
