//! Hour pillar calculation.

use bazi_calendar::BirthHour;
use bazi_cycle::{Branch, Stem};

use crate::pillar::Pillar;

/// Five-rat table: stem index of the zi hour, keyed by
/// `day_stem_index % 5`.
///
/// Day stem jia/ji → jia, yi/geng → bing, bing/xin → wu,
/// ding/ren → geng, wu/gui → ren. A separate constant from the
/// five-tiger month table in `month.rs`.
const FIVE_RAT_HOUR_STEMS: [i64; 5] = [0, 2, 4, 6, 8];

/// Returns the branch for a birth hour.
///
/// The 24-hour clock is split into 12 two-hour windows starting at
/// 23:00, not midnight: hours 23 and 0 together form the zi window
/// (branch 0), 1-2 chou, 3-4 yin, and so on.
pub fn hour_branch(hour: BirthHour) -> Branch {
    let h = hour.get();
    if h == 23 || h == 0 {
        Branch::Zi
    } else {
        Branch::from_cycle(i64::from((h + 1) / 2))
    }
}

/// Computes the hour pillar from the day stem and the birth hour.
///
/// The branch comes from the two-hour window; the stem is the day
/// stem's five-rat base offset by the hour branch. Both hours of the
/// zi window use the same civil day's stem.
pub fn hour_pillar(day_stem: Stem, hour: BirthHour) -> Pillar {
    let branch = hour_branch(hour);
    let base = FIVE_RAT_HOUR_STEMS[(day_stem.index() % 5) as usize];
    let stem = Stem::from_cycle(base + i64::from(branch.index()));
    Pillar::new(stem, branch)
}
