//! Day-master (일간) personality profiles.

use saju_base::{FiveElement, HeavenlyStem};
use serde::Serialize;

/// Fixed profile for one day stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayMasterProfile {
    pub stem: HeavenlyStem,
    pub archetype: &'static str,
    pub emoji: &'static str,
    pub characteristics: &'static [&'static str],
    pub strengths: &'static [&'static str],
    pub weaknesses: &'static [&'static str],
}

static PROFILES: [DayMasterProfile; 10] = [
    DayMasterProfile {
        stem: HeavenlyStem::Gap,
        archetype: "대장군형 - 리더십이 강하고 추진력이 뛰어남",
        emoji: "🌳",
        characteristics: &["리더십", "추진력", "책임감", "정의감"],
        strengths: &["강한 의지력", "리더십", "추진력", "정의감"],
        weaknesses: &["고집", "성급함", "완고함"],
    },
    DayMasterProfile {
        stem: HeavenlyStem::Eul,
        archetype: "꽃나무형 - 유연하고 적응력이 뛰어남",
        emoji: "🌸",
        characteristics: &["유연성", "적응력", "소통능력", "협력성"],
        strengths: &["유연한 사고", "적응력", "소통능력", "협력성"],
        weaknesses: &["우유부단", "의지력 부족"],
    },
    DayMasterProfile {
        stem: HeavenlyStem::Byeong,
        archetype: "태양형 - 열정적이고 활발함",
        emoji: "☀️",
        characteristics: &["열정", "활발함", "표현력", "에너지"],
        strengths: &["강한 열정", "활발함", "표현력", "에너지"],
        weaknesses: &["성급함", "인내심 부족", "감정 기복"],
    },
    DayMasterProfile {
        stem: HeavenlyStem::Jeong,
        archetype: "달형 - 섬세하고 예술적 감각이 뛰어남",
        emoji: "🌙",
        characteristics: &["섬세함", "예술성", "감성", "직관력"],
        strengths: &["섬세한 감각", "예술적 재능", "감성", "직관력"],
        weaknesses: &["감정적", "완벽주의", "변덕"],
    },
    DayMasterProfile {
        stem: HeavenlyStem::Mu,
        archetype: "산형 - 안정적이고 신뢰할 수 있음",
        emoji: "🏔️",
        characteristics: &["안정성", "신뢰성", "인내심", "책임감"],
        strengths: &["안정성", "신뢰성", "인내심", "책임감"],
        weaknesses: &["보수적", "변화 저항", "완고함"],
    },
    DayMasterProfile {
        stem: HeavenlyStem::Gi,
        archetype: "흙형 - 포용력이 크고 중재 능력이 뛰어남",
        emoji: "🌍",
        characteristics: &["포용력", "중재능력", "협력성", "안정성"],
        strengths: &["포용력", "중재능력", "협력성", "안정성"],
        weaknesses: &["우유부단", "의지력 부족", "소극적"],
    },
    DayMasterProfile {
        stem: HeavenlyStem::Gyeong,
        archetype: "쇠형 - 강인하고 원칙적임",
        emoji: "⚔️",
        characteristics: &["강인함", "원칙성", "정확성", "완벽주의"],
        strengths: &["강인한 의지", "원칙성", "정확성", "완벽주의"],
        weaknesses: &["완고함", "유연성 부족", "냉정함"],
    },
    DayMasterProfile {
        stem: HeavenlyStem::Sin,
        archetype: "보석형 - 세련되고 완벽함",
        emoji: "💎",
        characteristics: &["세련됨", "완벽함", "정확성", "미적 감각"],
        strengths: &["세련된 감각", "완벽함", "정확성", "미적 감각"],
        weaknesses: &["완벽주의", "유연성 부족", "냉정함"],
    },
    DayMasterProfile {
        stem: HeavenlyStem::Im,
        archetype: "바다형 - 지혜롭고 포용력이 큼",
        emoji: "🌊",
        characteristics: &["지혜", "포용력", "적응력", "소통능력"],
        strengths: &["지혜", "포용력", "적응력", "소통능력"],
        weaknesses: &["우유부단", "의지력 부족", "변덕"],
    },
    DayMasterProfile {
        stem: HeavenlyStem::Gye,
        archetype: "이슬형 - 순수하고 깨끗함",
        emoji: "💧",
        characteristics: &["순수함", "깨끗함", "직관력", "감성"],
        strengths: &["순수함", "깨끗함", "직관력", "감성"],
        weaknesses: &["감정적", "완벽주의", "변덕"],
    },
];

impl DayMasterProfile {
    /// Profile for a day stem.
    pub fn for_stem(stem: HeavenlyStem) -> &'static DayMasterProfile {
        &PROFILES[stem.index() as usize]
    }

    pub const fn element(&self) -> FiveElement {
        self.stem.element()
    }

    pub fn life_advice(&self) -> String {
        format!(
            "{}일간의 특성을 살려 {} 오행의 에너지를 균형있게 활용하세요.",
            self.stem.hangul(),
            self.element().hangul()
        )
    }

    /// Compatibility follows the generative cycle around the day element.
    pub fn compatibility(&self) -> String {
        let e = self.element();
        format!(
            "{}일간은 {} 오행과 상생하는 {}·{} 오행과 좋은 궁합을 이룹니다.",
            self.stem.hangul(),
            e.hangul(),
            e.generated_by().hangul(),
            e.generates().hangul()
        )
    }
}

/// Serializable analysis derived from the day-master profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub personality: &'static str,
    pub characteristics: &'static [&'static str],
    pub strengths: &'static [&'static str],
    pub weaknesses: &'static [&'static str],
    pub life_advice: String,
    pub compatibility: String,
    pub emoji: &'static str,
}

impl Analysis {
    pub fn for_stem(stem: HeavenlyStem) -> Self {
        let p = DayMasterProfile::for_stem(stem);
        Self {
            personality: p.archetype,
            characteristics: p.characteristics,
            strengths: p.strengths,
            weaknesses: p.weaknesses,
            life_advice: p.life_advice(),
            compatibility: p.compatibility(),
            emoji: p.emoji,
        }
    }
}
