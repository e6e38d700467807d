use bazi_calendar::{BirthHour, CivilDate};
use bazi_chart::{day_pillar, hour_branch, hour_pillar, month_pillar, year_pillar, Chart};
use bazi_cycle::{Branch, Stem};

fn date(year: i32, month: u8, day: u8) -> CivilDate {
    CivilDate::new(year, month, day).unwrap()
}

#[test]
fn year_cutover_feb_3_vs_feb_5() {
    // The spring boundary advances the sexagenary year by exactly one
    // step in both cycles.
    for y in [1950, 1990, 2000, 2024] {
        let before = year_pillar(date(y, 2, 3));
        let after = year_pillar(date(y, 2, 5));
        assert_eq!(
            i64::from(after.stem().index()),
            (i64::from(before.stem().index()) + 1).rem_euclid(10),
            "stem cutover wrong for year {y}"
        );
        assert_eq!(
            i64::from(after.branch().index()),
            (i64::from(before.branch().index()) + 1).rem_euclid(12),
            "branch cutover wrong for year {y}"
        );
    }
}

#[test]
fn day_pillar_60_day_round_trip() {
    let starts = [date(1900, 1, 1), date(1975, 6, 10), date(2024, 2, 29)];
    for start in starts {
        let shifted_days = start.days_from_epoch() + 60;
        // Reconstruct the shifted date by walking forward.
        let mut probe = start;
        while probe.days_from_epoch() < shifted_days {
            let (y, m, d) = (probe.year(), probe.month(), probe.day());
            probe = CivilDate::new(y, m, d + 1)
                .or_else(|_| CivilDate::new(y, m + 1, 1))
                .or_else(|_| CivilDate::new(y + 1, 1, 1))
                .unwrap();
        }
        assert_eq!(
            day_pillar(start),
            day_pillar(probe),
            "day pillar should repeat after 60 days from {start}"
        );
    }
}

#[test]
fn reference_date_calibration() {
    let pillar = day_pillar(date(1900, 1, 1));
    assert_eq!(pillar.stem().index(), 6);
    assert_eq!(pillar.branch().index(), 0);
}

#[test]
fn hour_branch_boundaries() {
    assert_eq!(hour_branch(BirthHour::new(23).unwrap()).index(), 0);
    assert_eq!(hour_branch(BirthHour::new(0).unwrap()).index(), 0);
    assert_eq!(hour_branch(BirthHour::new(1).unwrap()).index(), 1);
    // 13:00 is in the wei window (11:00-12:59 is wu, 13:00-14:59 wei):
    // (13 + 1) / 2 = 7.
    assert_eq!(hour_branch(BirthHour::new(13).unwrap()).index(), 7);
    assert_eq!(
        hour_branch(BirthHour::new(13).unwrap()),
        hour_branch(BirthHour::new(14).unwrap()),
        "13:00 and 14:00 share the wei window"
    );
}

#[test]
fn escape_table_spot_checks() {
    // Five-rat: day stem 0, zi hour -> hour stem 0.
    let hp = hour_pillar(Stem::Jia, BirthHour::new(0).unwrap());
    assert_eq!(hp.stem().index(), 0);
    // Five-tiger: year stem 0, solar month 0 -> month stem 2.
    let mp = month_pillar(Stem::Jia, date(2001, 2, 10));
    assert_eq!(mp.stem().index(), 2);
}

#[test]
fn all_indices_in_range_over_a_century() {
    // Sweep the first day of every month over 120 years.
    for y in 1900..2020 {
        for m in 1..=12u8 {
            let d = date(y, m, 1);
            let yp = year_pillar(d);
            let mp = month_pillar(yp.stem(), d);
            let dp = day_pillar(d);
            for p in [yp, mp, dp] {
                assert!(p.stem().index() < 10, "stem out of range at {d}");
                assert!(p.branch().index() < 12, "branch out of range at {d}");
            }
        }
    }
}

#[test]
fn chart_end_to_end_1990() {
    let chart = Chart::compute(date(1990, 1, 1), None);
    assert_eq!(chart.year().stem(), Stem::Ji);
    assert_eq!(chart.year().branch(), Branch::Si);
    assert_eq!(chart.month().branch(), Branch::Zi); // solar month 11
    assert_eq!(chart.day().stem(), Stem::Ren);
    assert_eq!(chart.day().branch(), Branch::Chen);
    assert!(chart.hour().is_none());
}

#[test]
fn chart_end_to_end_2000_with_hour() {
    let chart = Chart::compute(date(2000, 3, 15), Some(BirthHour::new(14).unwrap()));
    let hour = chart.hour().expect("hour pillar must be present");
    assert_eq!(hour.branch().index(), 7); // (14 + 1) / 2
    assert_eq!(chart.year().to_string(), "庚辰");
    assert_eq!(chart.month().to_string(), "己卯");
    assert_eq!(chart.day().to_string(), "戊戌");
    assert_eq!(hour.to_string(), "己未");
}
