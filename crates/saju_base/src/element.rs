//! Five elements (오행), yin/yang polarity, and the element cycles.
//!
//! Generative cycle: Wood → Fire → Earth → Metal → Water → Wood.
//! Destructive cycle: Wood → Earth → Water → Fire → Metal → Wood.

/// The five elements in generative order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FiveElement {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in generative order (index 0 = Wood).
pub const ALL_ELEMENTS: [FiveElement; 5] = [
    FiveElement::Wood,
    FiveElement::Fire,
    FiveElement::Earth,
    FiveElement::Metal,
    FiveElement::Water,
];

impl FiveElement {
    /// 0-based index in generative order (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
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

    /// Sino-Korean syllable (목, 화, 토, 금, 수).
    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Wood => "목",
            Self::Fire => "화",
            Self::Earth => "토",
            Self::Metal => "금",
            Self::Water => "수",
        }
    }

    /// Hanja character (木, 火, 土, 金, 水).
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// Native Korean word (나무, 불, 흙, 금, 물).
    pub const fn native(self) -> &'static str {
        match self {
            Self::Wood => "나무",
            Self::Fire => "불",
            Self::Earth => "흙",
            Self::Metal => "금",
            Self::Water => "물",
        }
    }

    /// The element this one feeds in the generative cycle.
    pub const fn generates(self) -> FiveElement {
        ALL_ELEMENTS[((self.index() + 1) % 5) as usize]
    }

    /// The element this one overcomes in the destructive cycle.
    pub const fn controls(self) -> FiveElement {
        ALL_ELEMENTS[((self.index() + 2) % 5) as usize]
    }

    /// The element that overcomes this one.
    pub const fn controlled_by(self) -> FiveElement {
        ALL_ELEMENTS[((self.index() + 3) % 5) as usize]
    }

    /// The element that feeds this one.
    pub const fn generated_by(self) -> FiveElement {
        ALL_ELEMENTS[((self.index() + 4) % 5) as usize]
    }

    /// How `other` stands relative to `self` in the two cycles.
    pub const fn relation_to(self, other: FiveElement) -> ElementRelation {
        match (other.index() + 5 - self.index()) % 5 {
            0 => ElementRelation::Same,
            1 => ElementRelation::Generates,
            2 => ElementRelation::Controls,
            3 => ElementRelation::ControlledBy,
            _ => ElementRelation::GeneratedBy,
        }
    }
}

/// Relation of a target element as seen from a reference element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRelation {
    /// Same element family.
    Same,
    /// Reference generates target.
    Generates,
    /// Reference is generated by target.
    GeneratedBy,
    /// Reference destroys target.
    Controls,
    /// Reference is destroyed by target.
    ControlledBy,
}

/// Yin/yang polarity. Stems and branches alternate, even index = Yang.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Polarity from a cycle index: even is Yang, odd is Yin.
    pub const fn from_index(index: u8) -> Polarity {
        if index % 2 == 0 { Polarity::Yang } else { Polarity::Yin }
    }

    /// 양 or 음.
    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Yang => "양",
            Self::Yin => "음",
        }
    }
}
