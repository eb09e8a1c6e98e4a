//! The calculation entry point: time correction, pillar resolution and
//! annotation for one birth record.

use saju_base::{CorrectedTime, FourPillars, SajuConfig, correct_clock, four_pillars};

use crate::error::SajuError;
use crate::record::BirthRecord;
use crate::report::SajuReport;

/// A validated configuration ready to compute charts.
///
/// Holds only read-only tables, so one engine can serve any number of
/// threads at once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SajuEngine {
    config: SajuConfig,
}

impl SajuEngine {
    /// Validate `config` and wrap it.
    pub fn new(config: SajuConfig) -> Result<Self, SajuError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SajuConfig {
        &self.config
    }

    /// Apply the birthplace correction to the birth clock time.
    pub fn correct_time(&self, record: &BirthRecord) -> CorrectedTime {
        let location = record.birth_location.as_str();
        if self.config.regions.find(location).is_none() {
            tracing::debug!(location, "unknown birth location, clock left uncorrected");
        }
        let corrected = correct_clock(
            record.birth_time,
            location,
            &self.config.regions,
            self.config.standard_meridian_deg,
        );
        if corrected.day_shift != 0 {
            tracing::debug!(
                day_shift = corrected.day_shift,
                corrected = %corrected.time,
                "clock correction crossed midnight; date pillars keep the civil date"
            );
        }
        corrected
    }

    /// Four pillars for a record, with the hour pillar on corrected time.
    pub fn four_pillars(&self, record: &BirthRecord) -> FourPillars {
        let corrected = self.correct_time(record);
        four_pillars(record.birth_date, corrected.time, &self.config)
    }

    /// Full annotated chart for a record.
    pub fn calculate(&self, record: &BirthRecord) -> SajuReport {
        let corrected = self.correct_time(record);
        let pillars = four_pillars(record.birth_date, corrected.time, &self.config);
        tracing::debug!(
            birth_date = %record.birth_date,
            birth_time = %record.birth_time,
            corrected = %corrected.time,
            offset_minutes = corrected.offset_minutes,
            year = %pillars.year,
            month = %pillars.month,
            day = %pillars.day,
            hour = %pillars.hour,
            "resolved four pillars"
        );
        SajuReport::build(record, corrected, pillars)
    }
}
