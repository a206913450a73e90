//! Five elements, yin/yang polarity, and the production/control cycles.
//!
//! Production runs wood -> fire -> earth -> metal -> water -> wood.
//! Control skips one step: wood -> earth -> water -> fire -> metal -> wood.

use serde::Serialize;

/// The five elements in production-cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 elements in production order (index 0 = Wood).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

/// Yin/yang polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    pub const fn is_yin(self) -> bool {
        matches!(self, Self::Yin)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "Yang",
            Self::Yin => "Yin",
        }
    }
}

/// How one element stands toward another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ElementRelation {
    /// The first element produces (feeds) the second.
    Produces,
    /// The first element is produced by the second.
    ProducedBy,
    /// The first element controls the second.
    Controls,
    /// The first element is controlled by the second.
    ControlledBy,
    /// Both are the same element.
    Same,
}

impl ElementRelation {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Produces => "produces",
            Self::ProducedBy => "produced by",
            Self::Controls => "controls",
            Self::ControlledBy => "controlled by",
            Self::Same => "same",
        }
    }
}

/// One row of the five-element relation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElementRelations {
    pub element: Element,
    pub produces: Element,
    pub controls: Element,
}

/// Production/control targets for every element.
pub const FIVE_ELEMENT_RELATIONS: [ElementRelations; 5] = [
    ElementRelations {
        element: Element::Wood,
        produces: Element::Fire,
        controls: Element::Earth,
    },
    ElementRelations {
        element: Element::Fire,
        produces: Element::Earth,
        controls: Element::Metal,
    },
    ElementRelations {
        element: Element::Earth,
        produces: Element::Metal,
        controls: Element::Water,
    },
    ElementRelations {
        element: Element::Metal,
        produces: Element::Water,
        controls: Element::Wood,
    },
    ElementRelations {
        element: Element::Water,
        produces: Element::Wood,
        controls: Element::Fire,
    },
];

impl Element {
    /// 0-based index (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Korean reading.
    pub const fn korean_name(self) -> &'static str {
        match self {
            Self::Wood => "목",
            Self::Fire => "화",
            Self::Earth => "토",
            Self::Metal => "금",
            Self::Water => "수",
        }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// Everyday Korean word for the element's substance (tree, fire, soil...).
    pub const fn meaning(self) -> &'static str {
        match self {
            Self::Wood => "나무",
            Self::Fire => "불",
            Self::Earth => "흙",
            Self::Metal => "쇠",
            Self::Water => "물",
        }
    }

    /// Display colour as `#RRGGBB`.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Wood => "#4CAF50",
            Self::Fire => "#F44336",
            Self::Earth => "#FFC107",
            Self::Metal => "#9E9E9E",
            Self::Water => "#2196F3",
        }
    }

    /// Element this one produces.
    pub const fn produces(self) -> Element {
        FIVE_ELEMENT_RELATIONS[self.index() as usize].produces
    }

    /// Element this one controls.
    pub const fn controls(self) -> Element {
        FIVE_ELEMENT_RELATIONS[self.index() as usize].controls
    }

    /// Element that produces this one.
    pub const fn produced_by(self) -> Element {
        ALL_ELEMENTS[(self.index() as usize + 4) % 5]
    }

    /// Element that controls this one.
    pub const fn controlled_by(self) -> Element {
        ALL_ELEMENTS[(self.index() as usize + 3) % 5]
    }

    /// Relation of `self` toward `other`.
    pub fn relation_to(self, other: Element) -> ElementRelation {
        if self.produces() == other {
            ElementRelation::Produces
        } else if self.produced_by() == other {
            ElementRelation::ProducedBy
        } else if self.controls() == other {
            ElementRelation::Controls
        } else if self.controlled_by() == other {
            ElementRelation::ControlledBy
        } else {
            ElementRelation::Same
        }
    }
}
