//! Heavenly stems (천간, 天干): the 10-step cycle.

use crate::element::{FiveElement, Polarity};
use crate::util::{STEM_CYCLE, cycle_index};

/// The 10 heavenly stems, starting from Gap (甲).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HeavenlyStem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

/// All 10 stems in cycle order (0 = Gap, 9 = Gye).
pub const ALL_STEMS: [HeavenlyStem; 10] = [
    HeavenlyStem::Gap,
    HeavenlyStem::Eul,
    HeavenlyStem::Byeong,
    HeavenlyStem::Jeong,
    HeavenlyStem::Mu,
    HeavenlyStem::Gi,
    HeavenlyStem::Gyeong,
    HeavenlyStem::Sin,
    HeavenlyStem::Im,
    HeavenlyStem::Gye,
];

const STEM_HANGUL: [&str; 10] = ["갑", "을", "병", "정", "무", "기", "경", "신", "임", "계"];
const STEM_HANJA: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];
const STEM_NAMES: [&str; 10] = [
    "Gap", "Eul", "Byeong", "Jeong", "Mu", "Gi", "Gyeong", "Sin", "Im", "Gye",
];

impl HeavenlyStem {
    /// 0-based index (Gap=0 .. Gye=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem at `index`, or `None` when `index >= 10`.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < STEM_CYCLE {
            Some(ALL_STEMS[index as usize])
        } else {
            None
        }
    }

    /// Stem at a signed offset from Gap, wrapped onto the cycle.
    pub const fn from_cycle(offset: i64) -> Self {
        ALL_STEMS[cycle_index(offset, STEM_CYCLE) as usize]
    }

    /// Hangul symbol (갑 .. 계).
    pub const fn hangul(self) -> &'static str {
        STEM_HANGUL[self as usize]
    }

    /// Hanja symbol (甲 .. 癸).
    pub const fn hanja(self) -> &'static str {
        STEM_HANJA[self as usize]
    }

    /// Romanized Korean name.
    pub const fn name(self) -> &'static str {
        STEM_NAMES[self as usize]
    }

    /// Element: stems pair up in generative order, two per element.
    pub const fn element(self) -> FiveElement {
        match self {
            Self::Gap | Self::Eul => FiveElement::Wood,
            Self::Byeong | Self::Jeong => FiveElement::Fire,
            Self::Mu | Self::Gi => FiveElement::Earth,
            Self::Gyeong | Self::Sin => FiveElement::Metal,
            Self::Im | Self::Gye => FiveElement::Water,
        }
    }

    /// Yang for even index, Yin for odd.
    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// The stem `steps` positions further along the cycle.
    pub const fn advance(self, steps: i64) -> Self {
        Self::from_cycle(self.index() as i64 + steps)
    }

    /// Parse a stem from its hangul, hanja, or romanized name
    /// (romanization is matched case-insensitively).
    pub fn from_symbol(s: &str) -> Option<Self> {
        let s = s.trim();
        ALL_STEMS.into_iter().find(|stem| {
            stem.hangul() == s || stem.hanja() == s || stem.name().eq_ignore_ascii_case(s)
        })
    }

    /// All 10 stems in order.
    pub const fn all() -> &'static [HeavenlyStem; 10] {
        &ALL_STEMS
    }
}

impl std::fmt::Display for HeavenlyStem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.hangul(), self.hanja())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_stems_count() {
        assert_eq!(ALL_STEMS.len(), 10);
    }

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
            assert_eq!(HeavenlyStem::from_index(i as u8), Some(*s));
        }
        assert_eq!(HeavenlyStem::from_index(10), None);
    }

    #[test]
    fn elements_pair_up() {
        for pair in ALL_STEMS.chunks(2) {
            assert_eq!(pair[0].element(), pair[1].element());
            assert_eq!(pair[0].polarity(), Polarity::Yang);
            assert_eq!(pair[1].polarity(), Polarity::Yin);
        }
        assert_eq!(HeavenlyStem::Gi.element(), FiveElement::Earth);
        assert_eq!(HeavenlyStem::Gye.element(), FiveElement::Water);
    }

    #[test]
    fn from_cycle_wraps_negative() {
        assert_eq!(HeavenlyStem::from_cycle(-1), HeavenlyStem::Gye);
        assert_eq!(HeavenlyStem::from_cycle(10), HeavenlyStem::Gap);
        assert_eq!(HeavenlyStem::Gye.advance(1), HeavenlyStem::Gap);
        assert_eq!(HeavenlyStem::Gap.advance(-3), HeavenlyStem::Gyeong);
    }

    #[test]
    fn parse_symbols() {
        assert_eq!(HeavenlyStem::from_symbol("기"), Some(HeavenlyStem::Gi));
        assert_eq!(HeavenlyStem::from_symbol("己"), Some(HeavenlyStem::Gi));
        assert_eq!(HeavenlyStem::from_symbol("gyeong"), Some(HeavenlyStem::Gyeong));
        assert_eq!(HeavenlyStem::from_symbol("자"), None);
    }

    #[test]
    fn display_shows_both_scripts() {
        assert_eq!(HeavenlyStem::Gap.to_string(), "갑(甲)");
    }
}
