//! Ten gods (십신, 十神): how a stem relates to the day stem.
//!
//! Five element relations times two polarity outcomes give ten labels.
//! The lookup is a fixed 10×10 table keyed by (reference, target) stem
//! index; [`TenGod::from_relation`] states the rule the table encodes.

use crate::branch::EarthlyBranch;
use crate::element::ElementRelation;
use crate::stem::HeavenlyStem;

/// The ten relational categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TenGod {
    /// 비견: same element, same polarity.
    Companion,
    /// 겁재: same element, opposite polarity.
    Rival,
    /// 식신: reference generates target, same polarity.
    EatingGod,
    /// 상관: reference generates target, opposite polarity.
    HurtingOfficer,
    /// 편재: reference controls target, same polarity.
    IndirectWealth,
    /// 정재: reference controls target, opposite polarity.
    DirectWealth,
    /// 편관: target controls reference, same polarity.
    SevenKillings,
    /// 정관: target controls reference, opposite polarity.
    DirectOfficer,
    /// 편인: target generates reference, same polarity.
    IndirectResource,
    /// 정인: target generates reference, opposite polarity.
    DirectResource,
}

/// All ten gods, paired by relation (same polarity first).
pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::Companion,
    TenGod::Rival,
    TenGod::EatingGod,
    TenGod::HurtingOfficer,
    TenGod::IndirectWealth,
    TenGod::DirectWealth,
    TenGod::SevenKillings,
    TenGod::DirectOfficer,
    TenGod::IndirectResource,
    TenGod::DirectResource,
];

/// Row = reference (day) stem index, column = target stem index.
const TEN_GOD_TABLE: [[TenGod; 10]; 10] = {
    use TenGod::{
        Companion as Co, DirectOfficer as DO, DirectResource as DR, DirectWealth as DW,
        EatingGod as Ea, HurtingOfficer as Hu, IndirectResource as IR, IndirectWealth as IW,
        Rival as Ri, SevenKillings as SK,
    };
    [
        // 갑  을  병  정  무  기  경  신  임  계
        [Co, Ri, Ea, Hu, IW, DW, SK, DO, IR, DR], // 갑
        [Ri, Co, Hu, Ea, DW, IW, DO, SK, DR, IR], // 을
        [IR, DR, Co, Ri, Ea, Hu, IW, DW, SK, DO], // 병
        [DR, IR, Ri, Co, Hu, Ea, DW, IW, DO, SK], // 정
        [SK, DO, IR, DR, Co, Ri, Ea, Hu, IW, DW], // 무
        [DO, SK, DR, IR, Ri, Co, Hu, Ea, DW, IW], // 기
        [IW, DW, SK, DO, IR, DR, Co, Ri, Ea, Hu], // 경
        [DW, IW, DO, SK, DR, IR, Ri, Co, Hu, Ea], // 신
        [Ea, Hu, IW, DW, SK, DO, IR, DR, Co, Ri], // 임
        [Hu, Ea, DW, IW, DO, SK, DR, IR, Ri, Co], // 계
    ]
};

impl TenGod {
    /// Label for an element relation and polarity match.
    pub const fn from_relation(relation: ElementRelation, same_polarity: bool) -> TenGod {
        match (relation, same_polarity) {
            (ElementRelation::Same, true) => Self::Companion,
            (ElementRelation::Same, false) => Self::Rival,
            (ElementRelation::Generates, true) => Self::EatingGod,
            (ElementRelation::Generates, false) => Self::HurtingOfficer,
            (ElementRelation::Controls, true) => Self::IndirectWealth,
            (ElementRelation::Controls, false) => Self::DirectWealth,
            (ElementRelation::ControlledBy, true) => Self::SevenKillings,
            (ElementRelation::ControlledBy, false) => Self::DirectOfficer,
            (ElementRelation::GeneratedBy, true) => Self::IndirectResource,
            (ElementRelation::GeneratedBy, false) => Self::DirectResource,
        }
    }

    /// The element relation this label encodes.
    pub const fn relation(self) -> ElementRelation {
        match self {
            Self::Companion | Self::Rival => ElementRelation::Same,
            Self::EatingGod | Self::HurtingOfficer => ElementRelation::Generates,
            Self::IndirectWealth | Self::DirectWealth => ElementRelation::Controls,
            Self::SevenKillings | Self::DirectOfficer => ElementRelation::ControlledBy,
            Self::IndirectResource | Self::DirectResource => ElementRelation::GeneratedBy,
        }
    }

    /// Whether the label implies matching polarity.
    pub const fn same_polarity(self) -> bool {
        matches!(
            self,
            Self::Companion
                | Self::EatingGod
                | Self::IndirectWealth
                | Self::SevenKillings
                | Self::IndirectResource
        )
    }

    /// The other label of the same relation with the polarity flipped.
    pub const fn polarity_partner(self) -> TenGod {
        Self::from_relation(self.relation(), !self.same_polarity())
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Companion => "Companion",
            Self::Rival => "Rival",
            Self::EatingGod => "Eating God",
            Self::HurtingOfficer => "Hurting Officer",
            Self::IndirectWealth => "Indirect Wealth",
            Self::DirectWealth => "Direct Wealth",
            Self::SevenKillings => "Seven Killings",
            Self::DirectOfficer => "Direct Officer",
            Self::IndirectResource => "Indirect Resource",
            Self::DirectResource => "Direct Resource",
        }
    }

    /// Korean label (비견 .. 정인).
    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Companion => "비견",
            Self::Rival => "겁재",
            Self::EatingGod => "식신",
            Self::HurtingOfficer => "상관",
            Self::IndirectWealth => "편재",
            Self::DirectWealth => "정재",
            Self::SevenKillings => "편관",
            Self::DirectOfficer => "정관",
            Self::IndirectResource => "편인",
            Self::DirectResource => "정인",
        }
    }

    /// Hanja label (比肩 .. 正印).
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Companion => "比肩",
            Self::Rival => "劫財",
            Self::EatingGod => "食神",
            Self::HurtingOfficer => "傷官",
            Self::IndirectWealth => "偏財",
            Self::DirectWealth => "正財",
            Self::SevenKillings => "偏官",
            Self::DirectOfficer => "正官",
            Self::IndirectResource => "偏印",
            Self::DirectResource => "正印",
        }
    }
}

/// Ten god of `target` relative to the reference (day) stem.
pub const fn ten_god(reference: HeavenlyStem, target: HeavenlyStem) -> TenGod {
    TEN_GOD_TABLE[reference.index() as usize][target.index() as usize]
}

/// Ten god of a branch: the table applied to its primary hidden stem.
pub const fn branch_ten_god(reference: HeavenlyStem, branch: EarthlyBranch) -> TenGod {
    ten_god(reference, branch.primary_hidden_stem())
}
