//! The four-pillar chart value.

use serde::{Deserialize, Serialize};
use tracing::debug;

use bazi_calendar::{BirthHour, CivilDate};
use bazi_cycle::{Element, Stem};

use crate::day::day_pillar;
use crate::hour::hour_pillar;
use crate::month::month_pillar;
use crate::pillar::Pillar;
use crate::year::year_pillar;

/// A four-pillar sexagenary chart.
///
/// Year, month, and day pillars are always present; the hour pillar
/// exists exactly when the birth hour was known. The day master and
/// primary element are derived from the day pillar on access and never
/// stored, so they can't drift from it.
///
/// Charts are pure values with structural equality, safe to share
/// across threads and to serialize as an opaque JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chart {
    year: Pillar,
    month: Pillar,
    day: Pillar,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    hour: Option<Pillar>,
}

impl Chart {
    /// Computes the chart for a birth date and optional birth hour.
    ///
    /// The date must already be the intended civil date; any timezone
    /// normalization is the caller's concern. Deterministic for all
    /// valid inputs, with no failure path.
    pub fn compute(date: CivilDate, hour: Option<BirthHour>) -> Self {
        let year = year_pillar(date);
        let month = month_pillar(year.stem(), date);
        let day = day_pillar(date);
        let hour = hour.map(|h| hour_pillar(day.stem(), h));
        debug!(%date, %year, %month, %day, hour_known = hour.is_some(), "chart computed");
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    /// Returns the year pillar.
    pub fn year(self) -> Pillar {
        self.year
    }

    /// Returns the month pillar.
    pub fn month(self) -> Pillar {
        self.month
    }

    /// Returns the day pillar.
    pub fn day(self) -> Pillar {
        self.day
    }

    /// Returns the hour pillar, if the birth hour was known.
    pub fn hour(self) -> Option<Pillar> {
        self.hour
    }

    /// Returns the day master: the day pillar's stem.
    pub fn day_master(self) -> Stem {
        self.day.stem()
    }

    /// Returns the chart's primary element: the day master's element.
    pub fn primary_element(self) -> Element {
        self.day_master().element()
    }
}
