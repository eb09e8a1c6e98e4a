use saju_base::{EarthlyBranch, FourPillars, HeavenlyStem, TenGod};

use crate::error::SajuError;
use crate::global::engine;
use crate::record::{BirthRecord, BirthRequest};
use crate::report::SajuReport;

/// Validate raw request fields and compute the full chart with the global
/// engine.
pub fn calculate_saju(
    birth_date: &str,
    birth_time: &str,
    gender: &str,
    birth_location: &str,
) -> Result<SajuReport, SajuError> {
    let record = BirthRecord::parse(birth_date, birth_time, gender, birth_location)?;
    Ok(engine().calculate(&record))
}

/// Compute the full chart for a deserialized request.
pub fn calculate_request(request: &BirthRequest) -> Result<SajuReport, SajuError> {
    let record = BirthRecord::try_from(request)?;
    Ok(engine().calculate(&record))
}

/// Four pillars for a validated record with the global engine.
pub fn four_pillars(record: &BirthRecord) -> FourPillars {
    engine().four_pillars(record)
}

/// Ten god of `target` relative to `day_stem`.
///
/// Shorthand for [`saju_base::ten_god`].
pub fn ten_god(day_stem: HeavenlyStem, target: HeavenlyStem) -> TenGod {
    saju_base::ten_god(day_stem, target)
}

/// Ten god of every hidden stem of `branch`, most dominant first.
pub fn hidden_ten_gods(
    day_stem: HeavenlyStem,
    branch: EarthlyBranch,
) -> Vec<(HeavenlyStem, TenGod)> {
    branch
        .hidden_stems()
        .iter()
        .map(|&s| (s, saju_base::ten_god(day_stem, s)))
        .collect()
}
