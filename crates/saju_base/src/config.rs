//! Engine configuration: calendar anchors and the region table.
//!
//! Defaults follow the conventional almanac anchors. Every constant here
//! is meant to be checked against an authoritative almanac, so all of them
//! can be overridden (the CLI reads them from JSON).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::location::{KST_MERIDIAN_DEG, RegionTable};
use crate::util::{BRANCH_CYCLE, STEM_CYCLE};

const DEFAULT_ANCHOR_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2000, 1, 1) {
    Some(d) => d,
    None => panic!("default anchor date is a valid calendar date"),
};

/// Reference day with a known (stem, branch) for the day pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAnchor {
    pub date: NaiveDate,
    /// Stem index of `date`, 0..9.
    pub stem: u8,
    /// Branch index of `date`, 0..11.
    pub branch: u8,
}

impl Default for DayAnchor {
    /// 2000-01-01 is a 戊午 day.
    fn default() -> Self {
        Self {
            date: DEFAULT_ANCHOR_DATE,
            stem: 4,
            branch: 6,
        }
    }
}

impl DayAnchor {
    /// Check the indices are in range and form a sexagenary pair.
    pub fn validate(&self) -> Result<(), CalendarError> {
        if self.stem >= STEM_CYCLE {
            return Err(CalendarError::InvalidAnchor("stem index must be 0..9"));
        }
        if self.branch >= BRANCH_CYCLE {
            return Err(CalendarError::InvalidAnchor("branch index must be 0..11"));
        }
        if self.stem % 2 != self.branch % 2 {
            return Err(CalendarError::InvalidAnchor(
                "stem and branch parity differ; pair is not on the 60-day cycle",
            ));
        }
        Ok(())
    }
}

/// Tunable constants of the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SajuConfig {
    /// Anchor for the day pillar.
    pub day_anchor: DayAnchor,
    /// A year whose pillar is 甲子 (stem 0, branch 0). Default: 1984.
    pub year_reference: i32,
    /// Added to `2 × yearStem + m` for the month stem. Default: 0.
    ///
    /// Must be even so month pillars stay on the 60-step cycle.
    /// 2 gives the almanac five-tiger table (甲/己 years open on 丙寅).
    pub month_stem_offset: u8,
    /// Meridian that civil time is kept on, degrees east. Default: 135.
    pub standard_meridian_deg: f64,
    /// Named birthplaces used for clock correction.
    pub regions: RegionTable,
}

impl Default for SajuConfig {
    fn default() -> Self {
        Self {
            day_anchor: DayAnchor::default(),
            year_reference: 1984,
            month_stem_offset: 0,
            standard_meridian_deg: KST_MERIDIAN_DEG,
            regions: RegionTable::default(),
        }
    }
}

impl SajuConfig {
    /// Validate all fields.
    pub fn validate(&self) -> Result<(), CalendarError> {
        self.day_anchor.validate()?;
        if self.month_stem_offset >= STEM_CYCLE || self.month_stem_offset % 2 != 0 {
            return Err(CalendarError::InvalidConfig(
                "month_stem_offset must be one of 0, 2, 4, 6, 8",
            ));
        }
        if !self.standard_meridian_deg.is_finite()
            || !(-180.0..=180.0).contains(&self.standard_meridian_deg)
        {
            return Err(CalendarError::InvalidConfig(
                "standard_meridian_deg must be within [-180, 180]",
            ));
        }
        if self
            .regions
            .regions()
            .iter()
            .any(|r| !r.longitude_deg.is_finite() || !(-180.0..=180.0).contains(&r.longitude_deg))
        {
            return Err(CalendarError::InvalidConfig(
                "region longitude must be within [-180, 180]",
            ));
        }
        Ok(())
    }
}
