//! Convenience facade for the saju four-pillar engine.
//!
//! Validates birth records at the boundary, applies the birthplace clock
//! correction, resolves the four pillars and annotates them relative to
//! the day stem.
//!
//! # Quick start
//!
//! ```rust
//! use saju_rs::calculate_saju;
//!
//! let report = calculate_saju("1997-05-07", "12:00", "남", "Seoul").unwrap();
//! assert_eq!(report.summary.day, "기유");
//! println!("{}", report.four_pillars.hour.pillar);
//! ```

pub mod balance;
pub mod convenience;
pub mod engine;
pub mod error;
pub mod global;
pub mod profile;
pub mod record;
pub mod report;

pub use balance::ElementBalance;
pub use convenience::{calculate_request, calculate_saju, four_pillars, hidden_ten_gods, ten_god};
pub use engine::SajuEngine;
pub use error::SajuError;
pub use global::{engine, init, is_initialized};
pub use profile::{Analysis, DayMasterProfile};
pub use record::{BirthRecord, BirthRequest, Gender, parse_date, parse_time};
pub use report::{FourPillarsReport, PillarReport, SajuReport, SajuSummary};

// Re-export engine types so callers don't need to depend on saju_base directly.
pub use saju_base::{
    ClockTime, CorrectedTime, DayAnchor, EarthlyBranch, FiveElement, HeavenlyStem, Pillar,
    PillarKind, Region, RegionTable, SajuConfig, SolarTerm, TenGod,
};
