//! End-to-end tests through the facade.

use saju_base::{apply_offset, four_pillars as resolve_four_pillars};
use saju_rs::{
    BirthRecord, BirthRequest, EarthlyBranch, SajuConfig, SajuEngine, SajuError, TenGod,
    calculate_request, calculate_saju,
};

fn seoul_1997() -> BirthRecord {
    BirthRecord::parse("1997-05-07", "12:00", "남", "Seoul").unwrap()
}

#[test]
fn scenario_1997_05_07_seoul() {
    let report = SajuEngine::default().calculate(&seoul_1997());

    assert_eq!(report.corrected_time, "11:28");
    assert_eq!(report.time_offset_minutes, -32);
    assert_eq!(report.day_shift, 0);

    let s = &report.summary;
    assert_eq!(
        [s.year.as_str(), s.month.as_str(), s.day.as_str(), s.hour.as_str()],
        ["정축", "계사", "기유", "경오"]
    );
    assert_eq!(s.day_stem, "기");
    assert_eq!(s.day_branch, "유");
    assert_eq!(s.five_element, "토");
    assert_eq!(s.ten_god, "비견");

    let fp = &report.four_pillars;
    assert_eq!(fp.year.stem_ten_god, TenGod::IndirectResource);
    assert_eq!(fp.year.branch_ten_god, TenGod::Companion);
    assert_eq!(fp.month.stem_ten_god, TenGod::IndirectWealth);
    assert_eq!(fp.month.branch_ten_god, TenGod::DirectResource);
    assert_eq!(fp.day.stem_ten_god, TenGod::Companion);
    assert_eq!(fp.day.branch_ten_god, TenGod::EatingGod);
    assert_eq!(fp.hour.stem_ten_god, TenGod::HurtingOfficer);
    assert_eq!(fp.hour.branch_ten_god, TenGod::IndirectResource);
}

#[test]
fn scenario_json_shape() {
    let report = SajuEngine::default().calculate(&seoul_1997());
    let v = serde_json::to_value(&report).unwrap();
    assert_eq!(v["birth_place"], "Seoul");
    assert_eq!(v["gender"], "남");
    assert_eq!(v["four_pillars"]["month"]["pillar"], "계사");
    assert_eq!(v["four_pillars"]["month"]["stem_hanja"], "癸");
    assert_eq!(v["four_pillars"]["month"]["branch_hanja"], "巳");
    assert_eq!(v["four_pillars"]["month"]["ten_god"], "편재");
    assert_eq!(v["four_pillars"]["month"]["branch_ten_god"], "정인");
    assert_eq!(v["four_pillars"]["hour"]["stem_element"], "금");
    assert_eq!(v["four_pillars"]["hour"]["branch_element"], "화");
    assert_eq!(v["element_balance"]["fire"], 3);
    assert_eq!(v["analysis"]["emoji"], "🌍");
    assert!(v.get("pillars").is_none());

    assert!(v.get("summary").is_none());
    assert_eq!(v["saju"]["day"], "기유");
    assert_eq!(v["saju"]["dayStem"], "기");
    assert_eq!(v["saju"]["dayBranch"], "유");
    assert_eq!(v["saju"]["fiveElement"], "토");
    assert_eq!(v["saju"]["tenGod"], "비견");
    assert_eq!(v["analysis"]["personality"], "흙형 - 포용력이 크고 중재 능력이 뛰어남");
    assert_eq!(
        v["analysis"]["lifeAdvice"],
        "기일간의 특성을 살려 토 오행의 에너지를 균형있게 활용하세요."
    );
    assert!(v["analysis"]["compatibility"].as_str().unwrap().starts_with("기일간은"));
}

#[test]
fn output_is_byte_identical_across_runs() {
    let engine = SajuEngine::default();
    let first = serde_json::to_string(&engine.calculate(&seoul_1997())).unwrap();
    for _ in 0..10 {
        let again = serde_json::to_string(&engine.calculate(&seoul_1997())).unwrap();
        assert_eq!(first, again);
    }
}

#[test]
fn parallel_calls_agree() {
    let engine = SajuEngine::default();
    let expected = serde_json::to_string(&engine.calculate(&seoul_1997())).unwrap();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| serde_json::to_string(&engine.calculate(&seoul_1997())).unwrap())
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}

#[test]
fn unknown_location_matches_zero_correction() {
    let engine = SajuEngine::default();
    for time in ["00:10", "11:10", "12:00", "23:40"] {
        let record = BirthRecord::parse("1997-05-07", time, "여", "Nowhere City").unwrap();
        let zero = apply_offset(record.birth_time, 0);
        let expected = resolve_four_pillars(record.birth_date, zero.time, engine.config());
        assert_eq!(engine.four_pillars(&record), expected, "{time}");
    }
}

#[test]
fn known_location_shifts_hour_slot() {
    let engine = SajuEngine::default();
    let seoul = BirthRecord::parse("1997-05-07", "11:10", "남", "서울").unwrap();
    let nowhere = BirthRecord::parse("1997-05-07", "11:10", "남", "nowhere").unwrap();
    assert_eq!(engine.four_pillars(&seoul).hour.branch, EarthlyBranch::Sa);
    assert_eq!(engine.four_pillars(&nowhere).hour.branch, EarthlyBranch::O);
    assert_eq!(engine.four_pillars(&seoul).day, engine.four_pillars(&nowhere).day);
}

#[test]
fn korean_and_romanized_names_agree() {
    let engine = SajuEngine::default();
    let a = BirthRecord::parse("1988-11-30", "06:45", "여", "부산").unwrap();
    let b = BirthRecord::parse("1988-11-30", "06:45", "여", "Busan").unwrap();
    assert_eq!(engine.four_pillars(&a), engine.four_pillars(&b));
}

#[test]
fn global_convenience_matches_engine() {
    let report = calculate_saju("1997-05-07", "12:00", "male", "Seoul").unwrap();
    assert_eq!(report.summary, SajuEngine::default().calculate(&seoul_1997()).summary);
}

#[test]
fn request_json_round_trip() {
    let req: BirthRequest = serde_json::from_str(
        r#"{"birth_date":"1997-05-07","birth_time":"12:00","gender":"남","birth_place":"서울"}"#,
    )
    .unwrap();
    let report = calculate_request(&req).unwrap();
    assert_eq!(report.summary.day, "기유");
    assert_eq!(report.birth_place, "서울");
}

#[test]
fn invalid_input_rejected_before_engine() {
    assert!(matches!(
        calculate_saju("1997-13-01", "12:00", "남", "Seoul"),
        Err(SajuError::InvalidDate(_))
    ));
    assert!(matches!(
        calculate_saju("1997-05-07", "25:00", "남", "Seoul"),
        Err(SajuError::InvalidTime(_))
    ));
    assert!(matches!(
        calculate_saju("1997-05-07", "12:00", "?", "Seoul"),
        Err(SajuError::InvalidGender(_))
    ));
}

#[test]
fn almanac_month_offset_config() {
    let config = SajuConfig {
        month_stem_offset: 2,
        ..SajuConfig::default()
    };
    let engine = SajuEngine::new(config).unwrap();
    let report = engine.calculate(&seoul_1997());
    assert_eq!(report.summary.month, "을사");
    assert_eq!(report.summary.day, "기유");
}

#[test]
fn dates_before_anchor_and_far_future() {
    let engine = SajuEngine::default();
    for date in ["0001-01-01", "1583-10-15", "1899-12-31", "2999-12-31"] {
        let record = BirthRecord::parse(date, "08:00", "여", "Jeju").unwrap();
        let report = engine.calculate(&record);
        for p in report.four_pillars.entries() {
            assert!(p.pillar.stem.index() < 10);
            assert!(p.pillar.branch.index() < 12);
        }
    }
}
