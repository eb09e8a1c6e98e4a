//! Earthly branches (지지, 地支): the 12-step cycle, their elements,
//! and the hidden stems (지장간) each branch carries.

use crate::element::{FiveElement, Polarity};
use crate::stem::HeavenlyStem;
use crate::util::{BRANCH_CYCLE, cycle_index};

/// The 12 earthly branches, starting from Ja (子, Rat).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EarthlyBranch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

/// All 12 branches in cycle order (0 = Ja, 11 = Hae).
pub const ALL_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Ja,
    EarthlyBranch::Chuk,
    EarthlyBranch::In,
    EarthlyBranch::Myo,
    EarthlyBranch::Jin,
    EarthlyBranch::Sa,
    EarthlyBranch::O,
    EarthlyBranch::Mi,
    EarthlyBranch::Sin,
    EarthlyBranch::Yu,
    EarthlyBranch::Sul,
    EarthlyBranch::Hae,
];

const BRANCH_HANGUL: [&str; 12] = [
    "자", "축", "인", "묘", "진", "사", "오", "미", "신", "유", "술", "해",
];
const BRANCH_HANJA: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];
const BRANCH_NAMES: [&str; 12] = [
    "Ja", "Chuk", "In", "Myo", "Jin", "Sa", "O", "Mi", "Sin", "Yu", "Sul", "Hae",
];
const BRANCH_ANIMALS: [&str; 12] = [
    "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey", "Rooster",
    "Dog", "Pig",
];

/// Hidden stems per branch, ordered by dominance (main qi first).
const HIDDEN_STEMS: [&[HeavenlyStem]; 12] = {
    use HeavenlyStem::*;
    [
        &[Gye], // 자
        &[Gi, Sin, Gye], // 축
        &[Gap, Byeong, Mu], // 인
        &[Eul], // 묘
        &[Mu, Eul, Gye], // 진
        &[Byeong, Mu, Gyeong], // 사
        &[Jeong, Gi], // 오
        &[Gi, Jeong, Eul], // 미
        &[Gyeong, Im, Mu], // 신
        &[Sin], // 유
        &[Mu, Sin, Jeong], // 술
        &[Im, Gap], // 해
    ]
};

impl EarthlyBranch {
    /// 0-based index (Ja=0 .. Hae=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch at `index`, or `None` when `index >= 12`.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < BRANCH_CYCLE {
            Some(ALL_BRANCHES[index as usize])
        } else {
            None
        }
    }

    /// Branch at a signed offset from Ja, wrapped onto the cycle.
    pub const fn from_cycle(offset: i64) -> Self {
        ALL_BRANCHES[cycle_index(offset, BRANCH_CYCLE) as usize]
    }

    /// Hangul symbol (자 .. 해).
    pub const fn hangul(self) -> &'static str {
        BRANCH_HANGUL[self as usize]
    }

    /// Hanja symbol (子 .. 亥).
    pub const fn hanja(self) -> &'static str {
        BRANCH_HANJA[self as usize]
    }

    /// Romanized Korean name.
    pub const fn name(self) -> &'static str {
        BRANCH_NAMES[self as usize]
    }

    /// Zodiac animal in English.
    pub const fn animal(self) -> &'static str {
        BRANCH_ANIMALS[self as usize]
    }

    /// Primary element of the branch.
    pub const fn element(self) -> FiveElement {
        match self {
            Self::In | Self::Myo => FiveElement::Wood,
            Self::Sa | Self::O => FiveElement::Fire,
            Self::Chuk | Self::Jin | Self::Mi | Self::Sul => FiveElement::Earth,
            Self::Sin | Self::Yu => FiveElement::Metal,
            Self::Hae | Self::Ja => FiveElement::Water,
        }
    }

    /// Yang for even index, Yin for odd.
    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// Hidden stems, 1 to 3 entries, most dominant first.
    pub const fn hidden_stems(self) -> &'static [HeavenlyStem] {
        HIDDEN_STEMS[self as usize]
    }

    /// The dominant hidden stem, used for branch element and ten-god labels.
    pub const fn primary_hidden_stem(self) -> HeavenlyStem {
        HIDDEN_STEMS[self as usize][0]
    }

    /// Start of the two-hour slot governed by this branch (Ja starts at 23:00).
    pub const fn slot_start_hour(self) -> u8 {
        (23 + 2 * self.index()) % 24
    }

    /// Parse a branch from its hangul, hanja, romanized name, or animal
    /// (romanization and animal are matched case-insensitively).
    pub fn from_symbol(s: &str) -> Option<Self> {
        let s = s.trim();
        ALL_BRANCHES.into_iter().find(|b| {
            b.hangul() == s
                || b.hanja() == s
                || b.name().eq_ignore_ascii_case(s)
                || b.animal().eq_ignore_ascii_case(s)
        })
    }

    /// All 12 branches in order.
    pub const fn all() -> &'static [EarthlyBranch; 12] {
        &ALL_BRANCHES
    }
}

impl std::fmt::Display for EarthlyBranch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.hangul(), self.hanja())
    }
}
