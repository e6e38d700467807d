//! Enriched pillar records.

use serde::Serialize;

use bazi_calendar::{BirthHour, CivilDate};
use bazi_chart::{Chart, Pillar, PillarSlot};
use bazi_cycle::{Element, Polarity};

/// Life area governed by a pillar slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LifeArea {
    /// Thai display label.
    pub label: &'static str,
    /// English description, with the age range the slot governs.
    pub detail: &'static str,
}

/// Returns the fixed life-area record for a pillar slot.
pub(crate) fn life_area(slot: PillarSlot) -> LifeArea {
    match slot {
        PillarSlot::Year => LifeArea {
            label: "บรรพบุรุษ & สังคม",
            detail: "Ancestors, social image, early childhood (0-15)",
        },
        PillarSlot::Month => LifeArea {
            label: "พ่อแม่ & การทำงาน",
            detail: "Parents, career path, young adulthood (15-30)",
        },
        PillarSlot::Day => LifeArea {
            label: "ตัวคุณ & คู่ครอง",
            detail: "Self identity, spouse, middle age (30-45)",
        },
        PillarSlot::Hour => LifeArea {
            label: "ลูกหลาน & อนาคต",
            detail: "Children, late career, later life (45+)",
        },
    }
}

/// A pillar expanded to its full display record.
///
/// Every field is a fixed attribute of the stem, the branch, or the
/// slot; no computation happens beyond lookup, and all indices are
/// in range by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnrichedPillar {
    /// The underlying stem-branch pair.
    #[serde(flatten)]
    pub pillar: Pillar,
    /// Which chart slot this pillar fills.
    pub slot: PillarSlot,
    /// Stem chinese character.
    pub stem_chinese: &'static str,
    /// Stem pinyin romanization.
    pub stem_pinyin: &'static str,
    /// Stem element.
    pub stem_element: Element,
    /// Stem yin/yang polarity.
    pub stem_polarity: Polarity,
    /// Branch chinese character.
    pub branch_chinese: &'static str,
    /// Branch pinyin romanization.
    pub branch_pinyin: &'static str,
    /// Branch zodiac animal.
    pub branch_animal: &'static str,
    /// Branch element.
    pub branch_element: Element,
    /// Life area governed by the slot.
    pub life_area: LifeArea,
}

impl EnrichedPillar {
    /// Expands a pillar into its enriched record for the given slot.
    pub fn new(pillar: Pillar, slot: PillarSlot) -> Self {
        let stem = pillar.stem();
        let branch = pillar.branch();
        Self {
            pillar,
            slot,
            stem_chinese: stem.chinese(),
            stem_pinyin: stem.pinyin(),
            stem_element: stem.element(),
            stem_polarity: stem.polarity(),
            branch_chinese: branch.chinese(),
            branch_pinyin: branch.pinyin(),
            branch_animal: branch.animal(),
            branch_element: branch.element(),
            life_area: life_area(slot),
        }
    }
}

/// A chart with every pillar expanded to its enriched record.
///
/// Mirrors [`Chart`]'s shape: the hour record exists exactly when the
/// birth hour was known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnrichedChart {
    pub year: EnrichedPillar,
    pub month: EnrichedPillar,
    pub day: EnrichedPillar,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour: Option<EnrichedPillar>,
}

impl EnrichedChart {
    /// Expands an already-computed chart.
    pub fn from_chart(chart: &Chart) -> Self {
        Self {
            year: EnrichedPillar::new(chart.year(), PillarSlot::Year),
            month: EnrichedPillar::new(chart.month(), PillarSlot::Month),
            day: EnrichedPillar::new(chart.day(), PillarSlot::Day),
            hour: chart
                .hour()
                .map(|p| EnrichedPillar::new(p, PillarSlot::Hour)),
        }
    }

    /// Computes and expands a chart in one step.
    pub fn compute(date: CivilDate, hour: Option<BirthHour>) -> Self {
        Self::from_chart(&Chart::compute(date, hour))
    }

    /// Returns the present pillars in canonical slot order.
    pub fn pillars(&self) -> Vec<&EnrichedPillar> {
        let mut pillars = vec![&self.year, &self.month, &self.day];
        if let Some(hour) = &self.hour {
            pillars.push(hour);
        }
        pillars
    }
}
