//! Year pillar calculation.

use bazi_calendar::{is_before_spring_start, CivilDate};
use bazi_cycle::{Branch, Stem};

use crate::pillar::Pillar;

/// The sexagenary cycle is anchored so that year 4 CE is jia-zi
/// (stem 0, branch 0). Fixed calibration, not configuration.
const STEM_EPOCH_YEAR: i64 = 4;

/// Computes the year pillar for a date.
///
/// The sexagenary year begins at the Start of Spring (~Feb 4), not on
/// January 1: dates before the boundary belong to the previous year's
/// pillar. Defined for all proleptic Gregorian years.
pub fn year_pillar(date: CivilDate) -> Pillar {
    let mut year = i64::from(date.year());
    if is_before_spring_start(date) {
        year -= 1;
    }
    Pillar::new(
        Stem::from_cycle(year - STEM_EPOCH_YEAR),
        Branch::from_cycle(year - STEM_EPOCH_YEAR),
    )
}
