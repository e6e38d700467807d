//! # bazi-chart
//!
//! The four-pillar (BaZi) chart calculators: year, month, day, and
//! hour pillars, each a pure function from calendar components to a
//! `(stem, branch)` pair, plus the [`Chart`] value that ties them
//! together.
//!
//! Everything here is deterministic table-and-modulo arithmetic over
//! read-only constants. There is no I/O, no shared state, and no
//! failure path for in-contract inputs: validation happens when the
//! caller constructs a [`CivilDate`](bazi_calendar::CivilDate) or
//! [`BirthHour`](bazi_calendar::BirthHour).
//!
//! ## Quick start
//!
//! ```
//! use bazi_calendar::{BirthHour, CivilDate};
//! use bazi_chart::Chart;
//!
//! let date = CivilDate::new(2000, 3, 15).unwrap();
//! let hour = BirthHour::new(14).unwrap();
//! let chart = Chart::compute(date, Some(hour));
//!
//! assert_eq!(chart.day_master(), chart.day().stem());
//! assert!(chart.hour().is_some());
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Chart::compute()
//!   ├─ year_pillar()    (year.rs: spring-start adjustment, epoch offset)
//!   ├─ month_pillar()   (month.rs: solar month + five-tiger table)
//!   ├─ day_pillar()     (day.rs: day count from 1900-01-01 reference)
//!   └─ hour_pillar()    (hour.rs: two-hour windows + five-rat table)
//! ```

mod chart;
mod day;
mod hour;
mod month;
mod pillar;
mod year;

pub use chart::Chart;
pub use day::day_pillar;
pub use hour::{hour_branch, hour_pillar};
pub use month::month_pillar;
pub use pillar::{Pillar, PillarSlot};
pub use year::year_pillar;
