//! Solar-term boundaries and solar-month resolution.
//!
//! The sexagenary month is tied to the 12 "jie" solar terms, not to
//! Gregorian month boundaries. This module uses the conventional fixed
//! approximate dates rather than astronomical ephemeris; the exact
//! boundary days are a domain constant.

use crate::date::CivilDate;

/// Approximate `(month, day)` on which each solar month begins.
///
/// Index 0 is solar month 1 (starts ~Feb 4, Start of Spring) through
/// index 11 for solar month 12 (starts ~Jan 5, Slight Cold). The last
/// entry wraps across the Gregorian year boundary.
#[rustfmt::skip]
pub(crate) const SOLAR_TERM_BOUNDARIES: [(u8, u8); 12] = [
    (2, 4),   // month 1  (yin):  Start of Spring ~Feb 4
    (3, 6),   // month 2  (mao):  Insects Awaken  ~Mar 6
    (4, 5),   // month 3  (chen): Clear and Bright ~Apr 5
    (5, 6),   // month 4  (si):   Start of Summer ~May 6
    (6, 6),   // month 5  (wu):   Grain in Ear    ~Jun 6
    (7, 7),   // month 6  (wei):  Slight Heat     ~Jul 7
    (8, 7),   // month 7  (shen): Start of Autumn ~Aug 7
    (9, 8),   // month 8  (you):  White Dew       ~Sep 8
    (10, 8),  // month 9  (xu):   Cold Dew        ~Oct 8
    (11, 7),  // month 10 (hai):  Start of Winter ~Nov 7
    (12, 7),  // month 11 (zi):   Heavy Snow      ~Dec 7
    (1, 5),   // month 12 (chou): Slight Cold     ~Jan 5
];

/// Returns true if the date falls before the spring-start boundary
/// (~Feb 4), meaning it still belongs to the previous sexagenary year.
pub fn is_before_spring_start(date: CivilDate) -> bool {
    let (month, day) = date.month_day();
    month < 2 || (month == 2 && day < 4)
}

/// Returns the 0-based solar month index (0..=11) for a date.
///
/// January needs its own rule because the solar-month boundaries wrap
/// across the Gregorian year end: Jan 1–4 still belongs to solar
/// month 11 (zi) begun the previous December, while Jan 5 onward is
/// solar month 12 (chou). For February onward, the boundaries are
/// scanned latest-to-earliest and the first one at or before the date
/// wins; dates before Feb 4 fall through to solar month 12.
pub fn solar_month_index(date: CivilDate) -> usize {
    let (month, day) = date.month_day();
    if month == 1 {
        return if day >= 5 { 11 } else { 10 };
    }
    for i in (0..SOLAR_TERM_BOUNDARIES.len() - 1).rev() {
        let (boundary_month, boundary_day) = SOLAR_TERM_BOUNDARIES[i];
        if month > boundary_month || (month == boundary_month && day >= boundary_day) {
            return i;
        }
    }
    // Feb 1-3: before Start of Spring, still solar month 12.
    11
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(month: u8, day: u8) -> CivilDate {
        CivilDate::new(2001, month, day).unwrap()
    }

    #[test]
    fn spring_start_boundary() {
        assert!(is_before_spring_start(date(1, 1)));
        assert!(is_before_spring_start(date(1, 31)));
        assert!(is_before_spring_start(date(2, 3)));
        assert!(!is_before_spring_start(date(2, 4)));
        assert!(!is_before_spring_start(date(6, 15)));
        assert!(!is_before_spring_start(date(12, 31)));
    }

    #[test]
    fn january_split() {
        assert_eq!(solar_month_index(date(1, 1)), 10);
        assert_eq!(solar_month_index(date(1, 4)), 10);
        assert_eq!(solar_month_index(date(1, 5)), 11);
        assert_eq!(solar_month_index(date(1, 31)), 11);
    }

    #[test]
    fn february_before_spring() {
        assert_eq!(solar_month_index(date(2, 1)), 11);
        assert_eq!(solar_month_index(date(2, 3)), 11);
    }

    #[test]
    fn boundary_days_start_their_month() {
        for (i, &(m, d)) in SOLAR_TERM_BOUNDARIES.iter().enumerate() {
            assert_eq!(
                solar_month_index(date(m, d)),
                i,
                "boundary ({m}, {d}) should start solar month index {i}"
            );
        }
    }

    #[test]
    fn day_before_boundary_is_previous_month() {
        // Each boundary from Mar onward: the preceding day belongs to
        // the previous solar month.
        for (i, &(m, d)) in SOLAR_TERM_BOUNDARIES.iter().enumerate().skip(1) {
            if m == 1 {
                continue; // January handled by its own tests
            }
            assert_eq!(
                solar_month_index(date(m, d - 1)),
                i - 1,
                "day before boundary ({m}, {d}) should be solar month index {}",
                i - 1
            );
        }
    }

    #[test]
    fn mid_month_samples() {
        assert_eq!(solar_month_index(date(2, 15)), 0);
        assert_eq!(solar_month_index(date(3, 15)), 1);
        assert_eq!(solar_month_index(date(6, 15)), 4);
        assert_eq!(solar_month_index(date(12, 15)), 10);
        assert_eq!(solar_month_index(date(12, 31)), 10);
    }

    #[test]
    fn index_always_in_range() {
        for m in 1..=12u8 {
            for d in 1..=28u8 {
                let idx = solar_month_index(date(m, d));
                assert!(idx < 12, "index {idx} out of range for ({m}, {d})");
            }
        }
    }
}
