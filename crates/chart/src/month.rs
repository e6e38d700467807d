//! Month pillar calculation.

use bazi_calendar::{solar_month_index, CivilDate};
use bazi_cycle::{Branch, Stem};

use crate::pillar::Pillar;

/// Solar month 1 carries branch yin (index 2); subsequent solar months
/// advance by one branch each.
const MONTH_BRANCH_START: i64 = 2;

/// Five-tiger table: stem index of solar month 1, keyed by
/// `year_stem_index % 5`.
///
/// Year stem jia/ji → bing, yi/geng → wu, bing/xin → geng,
/// ding/ren → ren, wu/gui → jia. The two stems of a pair share a base
/// because they share the same "escape" in the traditional rule.
///
/// Deliberately a separate constant from the five-rat hour table in
/// `hour.rs`; the two are easily transposed by accident.
const FIVE_TIGER_MONTH_STEMS: [i64; 5] = [2, 4, 6, 8, 0];

/// Computes the month pillar from the year stem and the date.
///
/// The month is resolved against the solar-term boundary table, not
/// the Gregorian month: a birth on March 3 falls in solar month 1
/// because Insects Awaken (~Mar 6) has not yet arrived. The stem is a
/// two-level lookup: the year stem selects a base from the five-tiger
/// table, then the solar month offsets from that base.
pub fn month_pillar(year_stem: Stem, date: CivilDate) -> Pillar {
    let solar_month = solar_month_index(date) as i64;
    let branch = Branch::from_cycle(MONTH_BRANCH_START + solar_month);
    let base = FIVE_TIGER_MONTH_STEMS[(year_stem.index() % 5) as usize];
    let stem = Stem::from_cycle(base + solar_month);
    Pillar::new(stem, branch)
}
