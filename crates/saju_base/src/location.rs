//! Clock times and birth-location time correction (지역시 보정).
//!
//! Civil time in Korea follows the 135°E meridian; a birthplace west of it
//! sees the sun later. One degree of longitude is four minutes of clock time.
//! Unknown region names get no correction.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// Minutes in a civil day.
pub const MINUTES_PER_DAY: i32 = 1440;

/// Clock minutes per degree of longitude.
pub const MINUTES_PER_DEGREE: f64 = 4.0;

/// Default standard meridian (KST, UTC+9).
pub const KST_MERIDIAN_DEG: f64 = 135.0;

/// Time of day, 24-hour, minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Validated clock time in 00:00–23:59.
    pub fn new(hour: u32, minute: u32) -> Result<Self, CalendarError> {
        if hour > 23 || minute > 59 {
            return Err(CalendarError::InvalidClockTime { hour, minute });
        }
        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    pub const fn hour(self) -> u8 {
        self.hour
    }

    pub const fn minute(self) -> u8 {
        self.minute
    }

    /// Minutes since midnight, [0, 1440).
    pub const fn minutes_since_midnight(self) -> i32 {
        self.hour as i32 * 60 + self.minute as i32
    }

    /// Wrap a signed minute count onto the clock.
    ///
    /// Returns the time and the number of whole days crossed.
    pub const fn from_total_minutes(total: i64) -> (Self, i64) {
        let wrapped = total.rem_euclid(MINUTES_PER_DAY as i64);
        let day_shift = total.div_euclid(MINUTES_PER_DAY as i64);
        (
            Self {
                hour: (wrapped / 60) as u8,
                minute: (wrapped % 60) as u8,
            },
            day_shift,
        )
    }
}

impl FromStr for ClockTime {
    type Err = CalendarError;

    /// Parse `HH:MM` (a single-digit hour is accepted).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || CalendarError::ClockParse(s.to_string());
        let (h, m) = s.trim().split_once(':').ok_or_else(parse_err)?;
        let digits = |part: &str, max_len: usize| {
            if part.is_empty() || part.len() > max_len || !part.bytes().all(|b| b.is_ascii_digit())
            {
                None
            } else {
                part.parse::<u32>().ok()
            }
        };
        let hour = digits(h, 2).ok_or_else(parse_err)?;
        let minute = match m.len() {
            2 => digits(m, 2).ok_or_else(parse_err)?,
            _ => return Err(parse_err()),
        };
        Self::new(hour, minute)
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// A named birthplace with its longitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Primary (Korean) name.
    pub name: String,
    /// Other accepted spellings.
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Longitude in degrees, east positive.
    pub longitude_deg: f64,
}

impl Region {
    /// Whether `name` equals the primary name or an alias (case-sensitive).
    pub fn matches(&self, name: &str) -> bool {
        self.name == name || self.aliases.iter().any(|a| a == name)
    }

    /// Signed clock offset in minutes relative to `standard_meridian_deg`.
    pub fn offset_minutes(&self, standard_meridian_deg: f64) -> i32 {
        ((self.longitude_deg - standard_meridian_deg) * MINUTES_PER_DEGREE).round() as i32
    }
}

/// Built-in Korean regions: (name, romanized alias, longitude of the
/// city or provincial capital).
const KOREAN_REGIONS: [(&str, &str, f64); 17] = [
    ("서울", "Seoul", 126.98),
    ("부산", "Busan", 129.08),
    ("대구", "Daegu", 128.60),
    ("인천", "Incheon", 126.70),
    ("광주", "Gwangju", 126.85),
    ("대전", "Daejeon", 127.38),
    ("울산", "Ulsan", 129.31),
    ("세종", "Sejong", 127.29),
    ("제주", "Jeju", 126.53),
    ("경기", "Gyeonggi", 127.01),
    ("강원", "Gangwon", 127.73),
    ("충북", "Chungbuk", 127.49),
    ("충남", "Chungnam", 126.66),
    ("전북", "Jeonbuk", 127.15),
    ("전남", "Jeonnam", 126.46),
    ("경북", "Gyeongbuk", 128.73),
    ("경남", "Gyeongnam", 128.68),
];

/// Lookup table of birthplaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionTable {
    regions: Vec<Region>,
}

impl Default for RegionTable {
    fn default() -> Self {
        Self {
            regions: KOREAN_REGIONS
                .iter()
                .map(|&(name, alias, longitude_deg)| Region {
                    name: name.to_string(),
                    aliases: vec![alias.to_string()],
                    longitude_deg,
                })
                .collect(),
        }
    }
}

impl RegionTable {
    pub fn new(regions: Vec<Region>) -> Self {
        Self { regions }
    }

    /// First region matching `name` exactly.
    pub fn find(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.matches(name))
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Clock offset for `name`; 0 when the name is unknown.
    pub fn offset_minutes(&self, name: &str, standard_meridian_deg: f64) -> i32 {
        self.find(name)
            .map_or(0, |r| r.offset_minutes(standard_meridian_deg))
    }
}

/// Result of applying a location offset to a clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrectedTime {
    /// Corrected time of day.
    pub time: ClockTime,
    /// Offset that was applied, in minutes.
    pub offset_minutes: i32,
    /// Days crossed by the correction: -1, 0 or +1 for any longitude
    /// within [-180, 180].
    ///
    /// Reported only; the day, month and year pillars keep the civil date.
    pub day_shift: i32,
}

/// Shift a clock time by a signed number of minutes, wrapping midnight.
pub const fn apply_offset(time: ClockTime, offset_minutes: i32) -> CorrectedTime {
    let total = time.minutes_since_midnight() as i64 + offset_minutes as i64;
    let (corrected, day_shift) = ClockTime::from_total_minutes(total);
    // |day_shift| <= i32::MAX / 1440 + 1
    CorrectedTime {
        time: corrected,
        offset_minutes,
        day_shift: day_shift as i32,
    }
}

/// Correct a birth clock time for the birthplace.
pub fn correct_clock(
    time: ClockTime,
    location: &str,
    regions: &RegionTable,
    standard_meridian_deg: f64,
) -> CorrectedTime {
    apply_offset(time, regions.offset_minutes(location, standard_meridian_deg))
}
