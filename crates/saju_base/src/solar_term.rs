//! The 12 month-opening solar terms (절기, 節氣).
//!
//! Each term opens one solar month. Cutovers use a fixed calendar day per
//! term, not the true solar-longitude crossing, so births within a day or
//! two of a cutover can land in the neighbouring month relative to an
//! ephemeris-based almanac.

use crate::branch::EarthlyBranch;

/// Month-opening solar terms, indexed by solar month (0 = 입춘, the Tiger month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarTerm {
    Ipchun,
    Gyeongchip,
    Cheongmyeong,
    Ipha,
    Mangjong,
    Soseo,
    Ipchu,
    Baengno,
    Hallo,
    Ipdong,
    Daeseol,
    Sohan,
}

/// All 12 terms by solar-month index.
pub const ALL_SOLAR_TERMS: [SolarTerm; 12] = [
    SolarTerm::Ipchun,
    SolarTerm::Gyeongchip,
    SolarTerm::Cheongmyeong,
    SolarTerm::Ipha,
    SolarTerm::Mangjong,
    SolarTerm::Soseo,
    SolarTerm::Ipchu,
    SolarTerm::Baengno,
    SolarTerm::Hallo,
    SolarTerm::Ipdong,
    SolarTerm::Daeseol,
    SolarTerm::Sohan,
];

/// Terms in calendar order within a Gregorian year (소한 falls in January).
pub const CALENDAR_ORDER: [SolarTerm; 12] = [
    SolarTerm::Sohan,
    SolarTerm::Ipchun,
    SolarTerm::Gyeongchip,
    SolarTerm::Cheongmyeong,
    SolarTerm::Ipha,
    SolarTerm::Mangjong,
    SolarTerm::Soseo,
    SolarTerm::Ipchu,
    SolarTerm::Baengno,
    SolarTerm::Hallo,
    SolarTerm::Ipdong,
    SolarTerm::Daeseol,
];

impl SolarTerm {
    /// Solar-month index m in [0, 11]; 입춘 = 0.
    pub const fn month_index(self) -> u8 {
        self as u8
    }

    /// Fixed cutover as (month, day).
    pub const fn cutover(self) -> (u32, u32) {
        match self {
            Self::Ipchun => (2, 4),
            Self::Gyeongchip => (3, 5),
            Self::Cheongmyeong => (4, 5),
            Self::Ipha => (5, 5),
            Self::Mangjong => (6, 6),
            Self::Soseo => (7, 7),
            Self::Ipchu => (8, 8),
            Self::Baengno => (9, 8),
            Self::Hallo => (10, 8),
            Self::Ipdong => (11, 7),
            Self::Daeseol => (12, 7),
            Self::Sohan => (1, 6),
        }
    }

    /// Branch of the month this term opens: (m + 2) mod 12.
    pub const fn branch(self) -> EarthlyBranch {
        EarthlyBranch::from_cycle(self.month_index() as i64 + 2)
    }

    /// Korean name.
    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Ipchun => "입춘",
            Self::Gyeongchip => "경칩",
            Self::Cheongmyeong => "청명",
            Self::Ipha => "입하",
            Self::Mangjong => "망종",
            Self::Soseo => "소서",
            Self::Ipchu => "입추",
            Self::Baengno => "백로",
            Self::Hallo => "한로",
            Self::Ipdong => "입동",
            Self::Daeseol => "대설",
            Self::Sohan => "소한",
        }
    }

    /// Hanja name.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Ipchun => "立春",
            Self::Gyeongchip => "驚蟄",
            Self::Cheongmyeong => "淸明",
            Self::Ipha => "立夏",
            Self::Mangjong => "芒種",
            Self::Soseo => "小暑",
            Self::Ipchu => "立秋",
            Self::Baengno => "白露",
            Self::Hallo => "寒露",
            Self::Ipdong => "立冬",
            Self::Daeseol => "大雪",
            Self::Sohan => "小寒",
        }
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ipchun => "Start of Spring",
            Self::Gyeongchip => "Awakening of Insects",
            Self::Cheongmyeong => "Clear and Bright",
            Self::Ipha => "Start of Summer",
            Self::Mangjong => "Grain in Ear",
            Self::Soseo => "Minor Heat",
            Self::Ipchu => "Start of Autumn",
            Self::Baengno => "White Dew",
            Self::Hallo => "Cold Dew",
            Self::Ipdong => "Start of Winter",
            Self::Daeseol => "Major Snow",
            Self::Sohan => "Minor Cold",
        }
    }
}

/// The term governing a calendar (month, day).
///
/// Dates before 소한 (Jan 1–5) are still in the previous year's 대설 month.
pub fn solar_month(month: u32, day: u32) -> SolarTerm {
    CALENDAR_ORDER
        .iter()
        .rev()
        .find(|term| term.cutover() <= (month, day))
        .copied()
        .unwrap_or(SolarTerm::Daeseol)
}

/// Whether (month, day) falls before 입춘, i.e. in the previous solar year.
pub fn before_solar_new_year(month: u32, day: u32) -> bool {
    (month, day) < SolarTerm::Ipchun.cutover()
}
