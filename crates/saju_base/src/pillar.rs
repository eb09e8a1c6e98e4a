//! Pillars: (stem, branch) pairs for year, month, day and hour.

use crate::branch::EarthlyBranch;
use crate::stem::HeavenlyStem;
use crate::util::{SEXAGENARY_CYCLE, cycle_index};

/// Which calendar position a pillar stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PillarKind {
    Year,
    Month,
    Day,
    Hour,
}

impl PillarKind {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
        }
    }

    /// Korean name (년주, 월주, 일주, 시주).
    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Year => "년주",
            Self::Month => "월주",
            Self::Day => "일주",
            Self::Hour => "시주",
        }
    }
}

/// One calendar position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
}

impl Pillar {
    pub const fn new(stem: HeavenlyStem, branch: EarthlyBranch) -> Self {
        Self { stem, branch }
    }

    /// Pillar at position `index` of the 60-step cycle (wrapped).
    pub const fn from_sexagenary(index: i64) -> Self {
        let i = cycle_index(index, SEXAGENARY_CYCLE) as i64;
        Self {
            stem: HeavenlyStem::from_cycle(i),
            branch: EarthlyBranch::from_cycle(i),
        }
    }

    /// Position on the 60-step cycle (甲子 = 0).
    ///
    /// `None` when stem and branch parity differ: such a pair never occurs
    /// on the cycle.
    pub const fn sexagenary_index(self) -> Option<u8> {
        let s = self.stem.index();
        let b = self.branch.index();
        if s % 2 != b % 2 {
            return None;
        }
        // Smallest k with k ≡ s (mod 10) and k ≡ b (mod 12).
        let mut k = s;
        while k % 12 != b {
            k += 10;
        }
        Some(k)
    }

    /// Two-character hangul label, e.g. "기유".
    pub fn hangul(self) -> String {
        format!("{}{}", self.stem.hangul(), self.branch.hangul())
    }

    /// Two-character hanja label, e.g. "己酉".
    pub fn hanja(self) -> String {
        format!("{}{}", self.stem.hanja(), self.branch.hanja())
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.hangul(), self.hanja())
    }
}

/// The four pillars of a birth moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    /// The day stem (일간), the reference for every ten-god label.
    pub const fn day_stem(&self) -> HeavenlyStem {
        self.day.stem
    }

    /// Pillar by kind.
    pub const fn get(&self, kind: PillarKind) -> Pillar {
        match kind {
            PillarKind::Year => self.year,
            PillarKind::Month => self.month,
            PillarKind::Day => self.day,
            PillarKind::Hour => self.hour,
        }
    }

    /// Pillars in year, month, day, hour order.
    pub const fn entries(&self) -> [(PillarKind, Pillar); 4] {
        [
            (PillarKind::Year, self.year),
            (PillarKind::Month, self.month),
            (PillarKind::Day, self.day),
            (PillarKind::Hour, self.hour),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sexagenary_round_trip() {
        for i in 0..60u8 {
            let p = Pillar::from_sexagenary(i as i64);
            assert_eq!(p.sexagenary_index(), Some(i));
        }
    }

    #[test]
    fn sexagenary_wraps() {
        assert_eq!(Pillar::from_sexagenary(60), Pillar::from_sexagenary(0));
        assert_eq!(Pillar::from_sexagenary(-1), Pillar::from_sexagenary(59));
    }

    #[test]
    fn off_cycle_pair() {
        let p = Pillar::new(HeavenlyStem::Gap, EarthlyBranch::Chuk);
        assert_eq!(p.sexagenary_index(), None);
    }

    #[test]
    fn known_positions() {
        let giyu = Pillar::new(HeavenlyStem::Gi, EarthlyBranch::Yu);
        assert_eq!(giyu.sexagenary_index(), Some(45));
        assert_eq!(giyu.hangul(), "기유");
        assert_eq!(giyu.hanja(), "己酉");
        assert_eq!(Pillar::from_sexagenary(59).hangul(), "계해");
    }
}
