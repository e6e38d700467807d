//! # bazi-calendar
//!
//! Pure civil-date arithmetic for the proleptic Gregorian calendar,
//! plus the fixed solar-term boundary table that partitions the year
//! into 12 solar months.
//!
//! The chart calculators never see a clock or a timezone: callers
//! normalize to the intended civil date before constructing a
//! [`CivilDate`], and all day counting here is whole-day arithmetic on
//! calendar components, so a wall-clock time component can never shift
//! a pillar by a day.
//!
//! ## Quick start
//!
//! ```
//! use bazi_calendar::{solar_month_index, BirthHour, CivilDate};
//!
//! let date = CivilDate::new(2000, 3, 15).unwrap();
//! assert_eq!(solar_month_index(date), 1); // Mar 15 is in solar month 2
//!
//! let hour = BirthHour::new(14).unwrap();
//! assert_eq!(hour.get(), 14);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Validated civil date and days-from-epoch arithmetic |
//! | `hour` | Birth-hour newtype (0..=23) |
//! | `solar` | Solar-term boundaries and solar-month resolution |
//! | `error` | Error types |

mod date;
mod error;
mod hour;
mod solar;

pub use date::CivilDate;
pub use error::CalendarError;
pub use hour::BirthHour;
pub use solar::{is_before_spring_start, solar_month_index};
