//! Year, month, day and hour pillar resolution.
//!
//! All four are pure functions of the calendar date, the corrected clock
//! time, and [`SajuConfig`]. None of them depend on each other except the
//! hour pillar, whose stem follows the day stem.

use chrono::{Datelike, NaiveDate};

use crate::branch::EarthlyBranch;
use crate::config::SajuConfig;
use crate::location::ClockTime;
use crate::pillar::{FourPillars, Pillar};
use crate::solar_term::{SolarTerm, before_solar_new_year, solar_month};
use crate::stem::HeavenlyStem;

/// Year pillar for calendar year `year`.
///
/// The year changes on January 1, not at 입춘: every date of a Gregorian
/// year shares one year pillar.
pub fn year_pillar(year: i32, config: &SajuConfig) -> Pillar {
    let offset = year as i64 - config.year_reference as i64;
    Pillar::new(
        HeavenlyStem::from_cycle(offset),
        EarthlyBranch::from_cycle(offset),
    )
}

/// Month pillar and the solar term that opened the month.
///
/// Branch is `(m + 2) mod 12`. Stem is `(2 × yearStem + m + offset) mod 10`
/// where the year stem is that of the solar year the month belongs to:
/// dates before 입춘 take the previous year's stem.
pub fn month_pillar_with_term(date: NaiveDate, config: &SajuConfig) -> (Pillar, SolarTerm) {
    let (month, day) = (date.month(), date.day());
    let term = solar_month(month, day);
    let solar_year = if before_solar_new_year(month, day) {
        date.year() - 1
    } else {
        date.year()
    };
    let year_stem = year_pillar(solar_year, config).stem;
    let m = term.month_index() as i64;
    let stem = HeavenlyStem::from_cycle(
        year_stem.index() as i64 * 2 + m + config.month_stem_offset as i64,
    );
    (Pillar::new(stem, term.branch()), term)
}

/// Month pillar for `date`.
pub fn month_pillar(date: NaiveDate, config: &SajuConfig) -> Pillar {
    month_pillar_with_term(date, config).0
}

/// Signed whole days from the configured anchor to `date`.
pub fn days_from_anchor(date: NaiveDate, config: &SajuConfig) -> i64 {
    date.signed_duration_since(config.day_anchor.date).num_days()
}

/// Day pillar for `date`; independent of the time of day.
pub fn day_pillar(date: NaiveDate, config: &SajuConfig) -> Pillar {
    let d = days_from_anchor(date, config);
    let anchor = &config.day_anchor;
    Pillar::new(
        HeavenlyStem::from_cycle(d + anchor.stem as i64),
        EarthlyBranch::from_cycle(d + anchor.branch as i64),
    )
}

/// Branch of the two-hour slot containing `time`; 子 spans 23:00–00:59.
pub const fn hour_branch(time: ClockTime) -> EarthlyBranch {
    EarthlyBranch::from_cycle((time.hour() as i64 + 1) / 2)
}

/// Hour pillar: stem is `(2 × dayStem + hourBranch) mod 10`.
pub const fn hour_pillar(day_stem: HeavenlyStem, time: ClockTime) -> Pillar {
    let branch = hour_branch(time);
    Pillar::new(
        HeavenlyStem::from_cycle(day_stem.index() as i64 * 2 + branch.index() as i64),
        branch,
    )
}

/// All four pillars for a civil date and an already-corrected clock time.
pub fn four_pillars(date: NaiveDate, time: ClockTime, config: &SajuConfig) -> FourPillars {
    let day = day_pillar(date, config);
    FourPillars {
        year: year_pillar(date.year(), config),
        month: month_pillar(date, config),
        day,
        hour: hour_pillar(day.stem, time),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn clock(h: u32, m: u32) -> ClockTime {
        ClockTime::new(h, m).unwrap()
    }

    #[test]
    fn year_1984_is_gapja() {
        let c = SajuConfig::default();
        assert_eq!(year_pillar(1984, &c).hangul(), "갑자");
        assert_eq!(year_pillar(1997, &c).hangul(), "정축");
        assert_eq!(year_pillar(2024, &c).hangul(), "갑진");
    }

    #[test]
    fn year_before_reference() {
        let c = SajuConfig::default();
        assert_eq!(year_pillar(1983, &c).hangul(), "계해");
        assert_eq!(year_pillar(4, &c).hangul(), "갑자");
        assert_eq!(year_pillar(-56, &c).hangul(), "갑자");
    }

    #[test]
    fn anchor_day() {
        let c = SajuConfig::default();
        assert_eq!(day_pillar(date(2000, 1, 1), &c).hangul(), "무오");
        assert_eq!(day_pillar(date(1999, 12, 31), &c).hangul(), "정사");
    }

    #[test]
    fn known_days() {
        let c = SajuConfig::default();
        assert_eq!(day_pillar(date(1997, 5, 7), &c).hangul(), "기유");
        assert_eq!(day_pillar(date(1900, 1, 1), &c).hangul(), "갑술");
        assert_eq!(day_pillar(date(1949, 10, 1), &c).hangul(), "갑자");
        assert_eq!(day_pillar(date(1970, 1, 1), &c).hangul(), "신사");
    }

    #[test]
    fn month_branch_follows_term() {
        let c = SajuConfig::default();
        assert_eq!(month_pillar(date(1997, 5, 7), &c).branch, EarthlyBranch::Sa);
        assert_eq!(month_pillar(date(1997, 5, 4), &c).branch, EarthlyBranch::Jin);
        assert_eq!(month_pillar(date(1997, 2, 4), &c).branch, EarthlyBranch::In);
        assert_eq!(month_pillar(date(1997, 1, 3), &c).branch, EarthlyBranch::Ja);
    }

    #[test]
    fn month_stem_rule() {
        let c = SajuConfig::default();
        // 정 (3) year, 사 month (m = 3): (6 + 3) mod 10 = 9.
        assert_eq!(month_pillar(date(1997, 5, 7), &c).hangul(), "계사");
        // 갑 (0) year opens on 갑인 under the default rule.
        assert_eq!(month_pillar(date(1984, 2, 4), &c).hangul(), "갑인");
    }

    #[test]
    fn month_stem_with_almanac_offset() {
        let c = SajuConfig {
            month_stem_offset: 2,
            ..SajuConfig::default()
        };
        assert_eq!(month_pillar(date(1984, 2, 4), &c).hangul(), "병인");
        assert_eq!(month_pillar(date(1997, 5, 7), &c).hangul(), "을사");
    }

    #[test]
    fn january_uses_previous_solar_year_stem() {
        let c = SajuConfig::default();
        // Jan 10, 1985 lies in the 축 month of solar year 1984 (갑): 0 + 11.
        let (p, term) = month_pillar_with_term(date(1985, 1, 10), &c);
        assert_eq!(term, SolarTerm::Sohan);
        assert_eq!(p.hangul(), "을축");
        // The next day after the 대설 month of 1984 continues the same stem run.
        let dec = month_pillar(date(1984, 12, 20), &c);
        assert_eq!(dec.stem.advance(1), p.stem);
    }

    #[test]
    fn hour_branch_slots() {
        assert_eq!(hour_branch(clock(23, 0)), EarthlyBranch::Ja);
        assert_eq!(hour_branch(clock(0, 30)), EarthlyBranch::Ja);
        assert_eq!(hour_branch(clock(0, 59)), EarthlyBranch::Ja);
        assert_eq!(hour_branch(clock(1, 0)), EarthlyBranch::Chuk);
        assert_eq!(hour_branch(clock(11, 28)), EarthlyBranch::O);
        assert_eq!(hour_branch(clock(12, 59)), EarthlyBranch::O);
        assert_eq!(hour_branch(clock(13, 0)), EarthlyBranch::Mi);
        assert_eq!(hour_branch(clock(22, 59)), EarthlyBranch::Hae);
    }

    #[test]
    fn hour_stem_five_rats() {
        // 갑 and 기 days open on 갑자.
        assert_eq!(hour_pillar(HeavenlyStem::Gap, clock(0, 0)).hangul(), "갑자");
        assert_eq!(hour_pillar(HeavenlyStem::Gi, clock(23, 30)).hangul(), "갑자");
        assert_eq!(hour_pillar(HeavenlyStem::Gi, clock(11, 28)).hangul(), "경오");
        assert_eq!(hour_pillar(HeavenlyStem::Gye, clock(21, 0)).hangul(), "계해");
    }

    #[test]
    fn four_pillars_1997() {
        let c = SajuConfig::default();
        let p = four_pillars(date(1997, 5, 7), clock(11, 28), &c);
        assert_eq!(p.year.hangul(), "정축");
        assert_eq!(p.month.hangul(), "계사");
        assert_eq!(p.day.hangul(), "기유");
        assert_eq!(p.hour.hangul(), "경오");
        assert_eq!(p.day_stem(), HeavenlyStem::Gi);
    }
}
