//! The output record handed to callers.
//!
//! Serialized field names follow the boundary contract consumed by the
//! UI/API layer: `stem`, `branch`, `pillar`, `stem_hanja`, `branch_hanja`,
//! `ten_god`, `branch_ten_god`, `stem_element`, `branch_element`. The compact
//! summary goes out as `saju` with camelCase keys (`dayStem`, `fiveElement`).
//! Symbols are serialized as hangul; the typed values stay available to Rust
//! callers.

use saju_base::{
    CorrectedTime, FiveElement, FourPillars, HeavenlyStem, Pillar, PillarKind, TenGod,
    branch_ten_god, ten_god,
};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::balance::ElementBalance;
use crate::convenience::hidden_ten_gods;
use crate::profile::Analysis;
use crate::record::BirthRecord;

/// One pillar annotated relative to the day stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PillarReport {
    pub kind: PillarKind,
    pub pillar: Pillar,
    pub stem_element: FiveElement,
    /// Element of the branch's primary hidden stem.
    pub branch_element: FiveElement,
    pub stem_ten_god: TenGod,
    /// Ten god of the branch's primary hidden stem.
    pub branch_ten_god: TenGod,
}

impl PillarReport {
    pub fn annotate(kind: PillarKind, pillar: Pillar, day_stem: HeavenlyStem) -> Self {
        Self {
            kind,
            pillar,
            stem_element: pillar.stem.element(),
            branch_element: pillar.branch.primary_hidden_stem().element(),
            stem_ten_god: ten_god(day_stem, pillar.stem),
            branch_ten_god: branch_ten_god(day_stem, pillar.branch),
        }
    }

    /// Hidden stems of the branch, most dominant first.
    pub fn hidden_stems(&self) -> &'static [HeavenlyStem] {
        self.pillar.branch.hidden_stems()
    }

    /// Ten god of every hidden stem, in the same order.
    pub fn hidden_ten_gods(&self, day_stem: HeavenlyStem) -> Vec<TenGod> {
        hidden_ten_gods(day_stem, self.pillar.branch)
            .into_iter()
            .map(|(_, god)| god)
            .collect()
    }
}

impl Serialize for PillarReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let hidden: Vec<&str> = self.hidden_stems().iter().map(|s| s.hangul()).collect();
        let mut st = serializer.serialize_struct("PillarReport", 10)?;
        st.serialize_field("stem", self.pillar.stem.hangul())?;
        st.serialize_field("branch", self.pillar.branch.hangul())?;
        st.serialize_field("pillar", &self.pillar.hangul())?;
        st.serialize_field("stem_hanja", self.pillar.stem.hanja())?;
        st.serialize_field("branch_hanja", self.pillar.branch.hanja())?;
        st.serialize_field("ten_god", self.stem_ten_god.hangul())?;
        st.serialize_field("branch_ten_god", self.branch_ten_god.hangul())?;
        st.serialize_field("stem_element", self.stem_element.hangul())?;
        st.serialize_field("branch_element", self.branch_element.hangul())?;
        st.serialize_field("hidden_stems", &hidden)?;
        st.end()
    }
}

/// All four annotated pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct FourPillarsReport {
    pub year: PillarReport,
    pub month: PillarReport,
    pub day: PillarReport,
    pub hour: PillarReport,
}

impl FourPillarsReport {
    pub fn annotate(pillars: &FourPillars) -> Self {
        let day_stem = pillars.day_stem();
        let at = |kind| PillarReport::annotate(kind, pillars.get(kind), day_stem);
        Self {
            year: at(PillarKind::Year),
            month: at(PillarKind::Month),
            day: at(PillarKind::Day),
            hour: at(PillarKind::Hour),
        }
    }

    /// Reports in year, month, day, hour order.
    pub fn entries(&self) -> [&PillarReport; 4] {
        [&self.year, &self.month, &self.day, &self.hour]
    }
}

/// Compact summary: pillars as two-character labels plus the day stem's
/// element and its self relation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SajuSummary {
    pub year: String,
    pub month: String,
    pub day: String,
    pub hour: String,
    pub day_stem: &'static str,
    pub day_branch: &'static str,
    pub five_element: &'static str,
    /// Always 비견: the day stem compared with itself.
    pub ten_god: &'static str,
}

impl SajuSummary {
    pub fn from_pillars(pillars: &FourPillars) -> Self {
        let day_stem = pillars.day_stem();
        Self {
            year: pillars.year.hangul(),
            month: pillars.month.hangul(),
            day: pillars.day.hangul(),
            hour: pillars.hour.hangul(),
            day_stem: day_stem.hangul(),
            day_branch: pillars.day.branch.hangul(),
            five_element: day_stem.element().hangul(),
            ten_god: ten_god(day_stem, day_stem).hangul(),
        }
    }
}

/// Full result of one calculation.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SajuReport {
    pub birth_date: String,
    pub birth_time: String,
    /// Clock time after birthplace correction; drives the hour pillar.
    pub corrected_time: String,
    pub time_offset_minutes: i32,
    /// Days crossed by the correction. Not applied to the date pillars.
    pub day_shift: i32,
    pub gender: &'static str,
    pub birth_place: String,
    pub four_pillars: FourPillarsReport,
    #[serde(rename = "saju")]
    pub summary: SajuSummary,
    pub element_balance: ElementBalance,
    pub analysis: Analysis,
    #[serde(skip)]
    pub pillars: FourPillars,
}

impl SajuReport {
    pub fn build(record: &BirthRecord, corrected: CorrectedTime, pillars: FourPillars) -> Self {
        Self {
            birth_date: record.birth_date.format("%Y-%m-%d").to_string(),
            birth_time: record.birth_time.to_string(),
            corrected_time: corrected.time.to_string(),
            time_offset_minutes: corrected.offset_minutes,
            day_shift: corrected.day_shift,
            gender: record.gender.hangul(),
            birth_place: record.birth_location.clone(),
            four_pillars: FourPillarsReport::annotate(&pillars),
            summary: SajuSummary::from_pillars(&pillars),
            element_balance: ElementBalance::from_pillars(&pillars),
            analysis: Analysis::for_stem(pillars.day_stem()),
            pillars,
        }
    }

    /// The day stem's element.
    pub fn day_element(&self) -> FiveElement {
        self.pillars.day_stem().element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_base::EarthlyBranch;

    #[test]
    fn day_pillar_is_self_companion() {
        let p = Pillar::new(HeavenlyStem::Gi, EarthlyBranch::Yu);
        let r = PillarReport::annotate(PillarKind::Day, p, HeavenlyStem::Gi);
        assert_eq!(r.stem_ten_god, TenGod::Companion);
        assert_eq!(r.branch_ten_god, TenGod::EatingGod);
        assert_eq!(r.stem_element, FiveElement::Earth);
        assert_eq!(r.branch_element, FiveElement::Metal);
    }

    #[test]
    fn hidden_ten_gods_follow_dominance() {
        let p = Pillar::new(HeavenlyStem::Jeong, EarthlyBranch::Chuk);
        let r = PillarReport::annotate(PillarKind::Year, p, HeavenlyStem::Gi);
        // 축 hides 기, 신, 계.
        assert_eq!(
            r.hidden_ten_gods(HeavenlyStem::Gi),
            vec![TenGod::Companion, TenGod::EatingGod, TenGod::IndirectWealth]
        );
        assert_eq!(r.branch_ten_god, TenGod::Companion);
    }

    #[test]
    fn serialized_field_names() {
        let p = Pillar::new(HeavenlyStem::Gi, EarthlyBranch::Yu);
        let r = PillarReport::annotate(PillarKind::Day, p, HeavenlyStem::Gi);
        let v = serde_json::to_value(r).unwrap();
        assert_eq!(v["stem"], "기");
        assert_eq!(v["branch"], "유");
        assert_eq!(v["pillar"], "기유");
        assert_eq!(v["stem_hanja"], "己");
        assert_eq!(v["branch_hanja"], "酉");
        assert_eq!(v["ten_god"], "비견");
        assert_eq!(v["branch_ten_god"], "식신");
        assert_eq!(v["stem_element"], "토");
        assert_eq!(v["branch_element"], "금");
        assert_eq!(v["hidden_stems"], serde_json::json!(["신"]));
    }

    #[test]
    fn summary_uses_camel_case_keys() {
        let pillars = FourPillars {
            year: Pillar::new(HeavenlyStem::Jeong, EarthlyBranch::Chuk),
            month: Pillar::new(HeavenlyStem::Gye, EarthlyBranch::Sa),
            day: Pillar::new(HeavenlyStem::Gi, EarthlyBranch::Yu),
            hour: Pillar::new(HeavenlyStem::Gyeong, EarthlyBranch::O),
        };
        let v = serde_json::to_value(SajuSummary::from_pillars(&pillars)).unwrap();
        assert_eq!(v["year"], "정축");
        assert_eq!(v["dayStem"], "기");
        assert_eq!(v["dayBranch"], "유");
        assert_eq!(v["fiveElement"], "토");
        assert_eq!(v["tenGod"], "비견");
        assert!(v.get("day_stem").is_none());
    }

    #[test]
    fn hidden_ten_gods_match_convenience() {
        let p = Pillar::new(HeavenlyStem::Mu, EarthlyBranch::Jin);
        let r = PillarReport::annotate(PillarKind::Month, p, HeavenlyStem::Gap);
        let pairs = hidden_ten_gods(HeavenlyStem::Gap, EarthlyBranch::Jin);
        let gods: Vec<TenGod> = pairs.iter().map(|&(_, g)| g).collect();
        assert_eq!(r.hidden_ten_gods(HeavenlyStem::Gap), gods);
        assert_eq!(gods[0], TenGod::IndirectWealth);
    }
}
