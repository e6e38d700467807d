//! Validated civil date with whole-day arithmetic.

use serde::Serialize;

use crate::error::CalendarError;

/// Number of days in each month of a common year (index 0 unused,
/// index 1 = January, ..., index 12 = December).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A date in the proleptic Gregorian calendar.
///
/// Construction validates the month and the day (including February 29
/// in leap years), so every `CivilDate` in existence names a real
/// calendar day. The type is a pure value: `Copy`, structurally
/// comparable, and ordered chronologically.
// Serialize only: deserialization would bypass constructor validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CivilDate {
    year: i32,
    month: u8,
    day: u8,
}

impl PartialOrd for CivilDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CivilDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

/// Returns true if `year` is a Gregorian leap year.
pub(crate) fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

impl CivilDate {
    /// Creates a new `CivilDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    /// Returns [`CalendarError::InvalidDay`] if `day` is not valid for
    /// the given month and year.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let mut max_day = DAYS_PER_MONTH[month as usize];
        if month == 2 && is_leap_year(year) {
            max_day = 29;
        }
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                year,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns `(month, day)` as a tuple.
    pub fn month_day(self) -> (u8, u8) {
        (self.month, self.day)
    }

    /// Returns the number of whole days since 1970-01-01.
    ///
    /// Negative for earlier dates. This is pure calendar arithmetic on
    /// the date components (the civil-from-days algorithm); no clock or
    /// timezone is involved, so differencing two of these values always
    /// yields an exact whole-day count in either direction.
    pub fn days_from_epoch(self) -> i64 {
        let y = i64::from(self.year) - i64::from(self.month <= 2);
        let era = if y >= 0 { y } else { y - 399 } / 400;
        let yoe = y - era * 400;
        let m = i64::from(self.month);
        let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + i64::from(self.day) - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        era * 146097 + doe - 719468
    }

    /// Returns the signed number of whole days from `self` to `other`.
    pub fn days_until(self, other: CivilDate) -> i64 {
        other.days_from_epoch() - self.days_from_epoch()
    }
}

impl std::fmt::Display for CivilDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let date = CivilDate::new(2000, 3, 15).unwrap();
        assert_eq!(date.year(), 2000);
        assert_eq!(date.month(), 3);
        assert_eq!(date.day(), 15);
        assert_eq!(date.month_day(), (3, 15));
    }

    #[test]
    fn new_invalid_month() {
        assert_eq!(
            CivilDate::new(2000, 0, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            CivilDate::new(2000, 13, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn new_invalid_day() {
        assert_eq!(
            CivilDate::new(2001, 2, 29).unwrap_err(),
            CalendarError::InvalidDay {
                day: 29,
                month: 2,
                year: 2001,
                max_day: 28,
            }
        );
        assert_eq!(
            CivilDate::new(2000, 4, 31).unwrap_err(),
            CalendarError::InvalidDay {
                day: 31,
                month: 4,
                year: 2000,
                max_day: 30,
            }
        );
    }

    #[test]
    fn leap_year_rules() {
        assert!(is_leap_year(2000)); // divisible by 400
        assert!(!is_leap_year(1900)); // century, not by 400
        assert!(is_leap_year(1996));
        assert!(!is_leap_year(1999));
    }

    #[test]
    fn feb_29_leap_vs_common() {
        assert!(CivilDate::new(2000, 2, 29).is_ok());
        assert!(CivilDate::new(1900, 2, 29).is_err());
        assert!(CivilDate::new(2004, 2, 29).is_ok());
    }

    #[test]
    fn epoch_is_zero() {
        assert_eq!(CivilDate::new(1970, 1, 1).unwrap().days_from_epoch(), 0);
    }

    #[test]
    fn days_from_epoch_known_values() {
        // One day either side of the epoch.
        assert_eq!(CivilDate::new(1970, 1, 2).unwrap().days_from_epoch(), 1);
        assert_eq!(CivilDate::new(1969, 12, 31).unwrap().days_from_epoch(), -1);
        // 1900-01-01 is 25567 days before the epoch (70 years, 17 leap days).
        assert_eq!(
            CivilDate::new(1900, 1, 1).unwrap().days_from_epoch(),
            -25567
        );
        // 2000-01-01 is 10957 days after the epoch.
        assert_eq!(CivilDate::new(2000, 1, 1).unwrap().days_from_epoch(), 10957);
    }

    #[test]
    fn days_from_epoch_is_sequential() {
        // Walk a range crossing a leap February and a year boundary.
        let mut prev = CivilDate::new(1999, 12, 1).unwrap().days_from_epoch();
        for (y, m, max) in [
            (1999, 12, 31),
            (2000, 1, 31),
            (2000, 2, 29),
            (2000, 3, 31),
        ] {
            let start = if y == 1999 { 2 } else { 1 };
            for d in start..=max {
                let days = CivilDate::new(y, m, d).unwrap().days_from_epoch();
                assert_eq!(days, prev + 1, "gap at {y}-{m:02}-{d:02}");
                prev = days;
            }
        }
    }

    #[test]
    fn days_until_signed() {
        let a = CivilDate::new(1900, 1, 1).unwrap();
        let b = CivilDate::new(1900, 1, 31).unwrap();
        assert_eq!(a.days_until(b), 30);
        assert_eq!(b.days_until(a), -30);
        assert_eq!(a.days_until(a), 0);
    }

    #[test]
    fn ordering_is_chronological() {
        let a = CivilDate::new(1999, 12, 31).unwrap();
        let b = CivilDate::new(2000, 1, 1).unwrap();
        let c = CivilDate::new(2000, 1, 2).unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn display_format() {
        let date = CivilDate::new(512, 2, 4).unwrap();
        assert_eq!(date.to_string(), "0512-02-04");
    }

    #[test]
    fn copy_trait() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<CivilDate>();
    }
}
