//! Day pillar calculation.

use bazi_calendar::CivilDate;
use bazi_cycle::{Branch, Stem};

use crate::pillar::Pillar;

/// Days from 1970-01-01 to the reference date 1900-01-01.
///
/// 1900-01-01 is a geng-zi day: the fixed historical calibration for
/// day-pillar counting. Verified against `CivilDate` in the tests.
const REFERENCE_EPOCH_DAYS: i64 = -25567;

/// Stem index of the reference day (geng).
const REFERENCE_STEM: i64 = 6;

/// Branch index of the reference day (zi).
const REFERENCE_BRANCH: i64 = 0;

/// Computes the day pillar for a date.
///
/// Counts whole days from the 1900-01-01 reference and walks the stem
/// and branch cycles forward (or backward, for earlier dates) by that
/// many steps. Only calendar components enter the count, so the result
/// is the same whatever wall-clock time the birth occurred at.
pub fn day_pillar(date: CivilDate) -> Pillar {
    let days = date.days_from_epoch() - REFERENCE_EPOCH_DAYS;
    Pillar::new(
        Stem::from_cycle(REFERENCE_STEM + days),
        Branch::from_cycle(REFERENCE_BRANCH + days),
    )
}
