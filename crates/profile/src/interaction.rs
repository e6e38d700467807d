//! Pairwise five-element interaction analysis.

use serde::Serialize;

use bazi_chart::PillarSlot;
use bazi_cycle::Element;

use crate::enrich::EnrichedChart;

/// How one element relates to another through the five-element cycles.
///
/// The relation is read from the first element's perspective:
/// `Producing` means "A feeds B", `Weakening` means "A is drained by
/// producing into B's source" mirror, and so on. Swapping the
/// arguments swaps producing/weakening and controlling/overacting;
/// `Same` and `Neutral` are symmetric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    /// Both pillars share an element.
    Same,
    /// A produces B.
    Producing,
    /// B produces A; A is drained.
    Weakening,
    /// A controls B.
    Controlling,
    /// B controls A.
    Overacting,
    /// No cycle relationship. Unreachable for valid elements, since
    /// the two five-cycles cover every ordered pair of distinct
    /// elements, but kept as a defined fallback.
    Neutral,
}

/// Qualitative strength of an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionStrength {
    Strong,
    Mild,
    Weak,
}

/// Classification of an ordered element pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementRelation {
    pub kind: InteractionKind,
    pub strength: InteractionStrength,
    pub description: String,
}

/// Classifies the relation from element `a` to element `b`.
pub fn classify_elements(a: Element, b: Element) -> ElementRelation {
    if a == b {
        return ElementRelation {
            kind: InteractionKind::Same,
            strength: InteractionStrength::Mild,
            description: format!("{a} reinforces {b}"),
        };
    }
    if a.produces() == b {
        return ElementRelation {
            kind: InteractionKind::Producing,
            strength: InteractionStrength::Strong,
            description: format!("{a} produces {b}"),
        };
    }
    if b.produces() == a {
        return ElementRelation {
            kind: InteractionKind::Weakening,
            strength: InteractionStrength::Mild,
            description: format!("{b} drains {a}"),
        };
    }
    if a.controls() == b {
        return ElementRelation {
            kind: InteractionKind::Controlling,
            strength: InteractionStrength::Strong,
            description: format!("{a} controls {b}"),
        };
    }
    if b.controls() == a {
        return ElementRelation {
            kind: InteractionKind::Overacting,
            strength: InteractionStrength::Mild,
            description: format!("{b} controls {a}"),
        };
    }
    ElementRelation {
        kind: InteractionKind::Neutral,
        strength: InteractionStrength::Weak,
        description: "No direct cycle relationship".to_string(),
    }
}

/// One classified interaction between two pillar slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementInteraction {
    /// The earlier slot of the pair (canonical order).
    pub from_slot: PillarSlot,
    /// The earlier slot's stem element.
    pub from_element: Element,
    /// The later slot of the pair.
    pub to_slot: PillarSlot,
    /// The later slot's stem element.
    pub to_element: Element,
    /// The relation, read from the earlier slot's perspective.
    pub kind: InteractionKind,
    /// Qualitative strength of the relation.
    pub strength: InteractionStrength,
    /// Human-readable summary of the relation.
    pub description: String,
}

/// Classifies every pillar pair of a chart on stem elements.
///
/// Pairs are generated in fixed canonical order (year-month, year-day,
/// year-hour, month-day, month-hour, day-hour, skipping absent slots)
/// and the output preserves that order. Neutral entries are filtered
/// out: only meaningful relationships surface.
pub fn pillar_interactions(chart: &EnrichedChart) -> Vec<ElementInteraction> {
    let pillars = chart.pillars();
    let mut interactions = Vec::new();
    for i in 0..pillars.len() {
        for j in (i + 1)..pillars.len() {
            let a = pillars[i];
            let b = pillars[j];
            let relation = classify_elements(a.stem_element, b.stem_element);
            if relation.kind == InteractionKind::Neutral {
                continue;
            }
            interactions.push(ElementInteraction {
                from_slot: a.slot,
                from_element: a.stem_element,
                to_slot: b.slot,
                to_element: b.stem_element,
                kind: relation.kind,
                strength: relation.strength,
                description: relation.description,
            });
        }
    }
    interactions
}
