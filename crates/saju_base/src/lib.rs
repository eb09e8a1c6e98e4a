//! Four Pillars (사주, 四柱) stem/branch calendar engine.
//!
//! This crate provides:
//! - The 10 heavenly stems, 12 earthly branches and five elements
//! - Ten-god (십신) labels relative to the day stem, with hidden stems
//! - Year, month, day and hour pillar resolution from a civil date and time
//! - Birthplace longitude correction of the clock time
//!
//! Everything here is a pure function over fixed tables. The solar terms
//! use one fixed calendar day each, not ephemeris crossings.

pub mod branch;
pub mod config;
pub mod element;
pub mod error;
pub mod location;
pub mod pillar;
pub mod resolve;
pub mod solar_term;
pub mod stem;
pub mod ten_god;
pub mod util;

pub use branch::{ALL_BRANCHES, EarthlyBranch};
pub use config::{DayAnchor, SajuConfig};
pub use element::{ALL_ELEMENTS, ElementRelation, FiveElement, Polarity};
pub use error::CalendarError;
pub use location::{
    ClockTime, CorrectedTime, KST_MERIDIAN_DEG, Region, RegionTable, apply_offset, correct_clock,
};
pub use pillar::{FourPillars, Pillar, PillarKind};
pub use resolve::{
    day_pillar, days_from_anchor, four_pillars, hour_branch, hour_pillar, month_pillar,
    month_pillar_with_term, year_pillar,
};
pub use solar_term::{ALL_SOLAR_TERMS, SolarTerm, before_solar_new_year, solar_month};
pub use stem::{ALL_STEMS, HeavenlyStem};
pub use ten_god::{ALL_TEN_GODS, TenGod, branch_ten_god, ten_god};
pub use util::{BRANCH_CYCLE, SEXAGENARY_CYCLE, STEM_CYCLE, cycle_index};
