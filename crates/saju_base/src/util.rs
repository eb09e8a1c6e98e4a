//! Cycle arithmetic shared by every resolver.
//!
//! Date differences are signed (births before an anchor are negative), so
//! every index into a stem or branch table goes through [`cycle_index`].

/// Length of the heavenly-stem cycle.
pub const STEM_CYCLE: u8 = 10;

/// Length of the earthly-branch cycle.
pub const BRANCH_CYCLE: u8 = 12;

/// Length of the combined sexagenary cycle, lcm(10, 12).
pub const SEXAGENARY_CYCLE: u8 = 60;

/// Euclidean modulo: maps any signed offset into `[0, n)`.
///
/// `n` must be non-zero.
pub const fn cycle_index(offset: i64, n: u8) -> u8 {
    offset.rem_euclid(n as i64) as u8
}
