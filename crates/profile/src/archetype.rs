//! Per-element personality archetypes.

use serde::Serialize;

use bazi_cycle::Element;

use crate::enrich::EnrichedPillar;

/// Static archetype data for one element.
struct Archetype {
    core_personality: &'static str,
    strengths: &'static [&'static str],
    weaknesses: &'static [&'static str],
    compatible_elements: [Element; 2],
    conflicting_element: Element,
}

static WOOD: Archetype = Archetype {
    core_personality: "มีความเมตตากรุณา ชอบเติบโตและพัฒนาตัวเอง มีวิสัยทัศน์กว้างไกล",
    strengths: &["มีความเมตตา", "สร้างสรรค์", "ยืดหยุ่น", "มีวิสัยทัศน์"],
    weaknesses: &["โอนเอนตามคนอื่น", "ตัดสินใจช้า", "ใจอ่อน"],
    compatible_elements: [Element::Water, Element::Fire],
    conflicting_element: Element::Metal,
};

static FIRE: Archetype = Archetype {
    core_personality: "มีพลังงานสูง กล้าหาญ มีเสน่ห์ดึงดูดใจ เป็นผู้นำโดยธรรมชาติ",
    strengths: &["กล้าหาญ", "มีเสน่ห์", "มีพลังงานสูง", "เป็นผู้นำ"],
    weaknesses: &["ใจร้อน", "หุนหันพลันแล่น", "เบื่อง่าย"],
    compatible_elements: [Element::Wood, Element::Earth],
    conflicting_element: Element::Water,
};

static EARTH: Archetype = Archetype {
    core_personality: "มั่นคง เชื่อถือได้ เป็นที่พึ่งพาของคนรอบข้าง มีความอดทนสูง",
    strengths: &["อดทน", "ซื่อสัตย์", "มีระเบียบ", "เชื่อถือได้"],
    weaknesses: &["ดื้อรั้น", "เครียดง่าย", "ยึดติดกับอดีต"],
    compatible_elements: [Element::Fire, Element::Metal],
    conflicting_element: Element::Wood,
};

static METAL: Archetype = Archetype {
    core_personality: "มีความเด็ดขาด มีวินัยสูง มุ่งมั่นในเป้าหมาย ซื่อตรงและยุติธรรม",
    strengths: &["เด็ดขาด", "มีวินัย", "ซื่อตรง", "มุ่งมั่น"],
    weaknesses: &["เจ้าระเบียบเกินไป", "ขาดความยืดหยุ่น", "เข้มงวดกับตนเองและผู้อื่น"],
    compatible_elements: [Element::Earth, Element::Water],
    conflicting_element: Element::Fire,
};

static WATER: Archetype = Archetype {
    core_personality: "ฉลาดหลักแหลม มีปัญญาลึกซึ้ง ปรับตัวเก่ง มีสัญชาตญาณที่ดี",
    strengths: &["ฉลาด", "ปรับตัวเก่ง", "มีสัญชาตญาณดี", "เข้าใจคนอื่น"],
    weaknesses: &["อารมณ์อ่อนไหว", "ลังเลใจ", "วิตกกังวลง่าย"],
    compatible_elements: [Element::Metal, Element::Wood],
    conflicting_element: Element::Earth,
};

/// Fixed archetype table, one entry per element (Thai copy).
fn archetype(element: Element) -> &'static Archetype {
    match element {
        Element::Wood => &WOOD,
        Element::Fire => &FIRE,
        Element::Earth => &EARTH,
        Element::Metal => &METAL,
        Element::Water => &WATER,
    }
}

/// Deterministic personality profile for a day master's element.
///
/// The record owns its lists: mutating a returned profile cannot
/// corrupt the static archetype table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementProfile {
    /// The day master's element.
    pub primary_element: Element,
    /// Core personality description.
    pub core_personality: String,
    /// Characteristic strengths.
    pub strengths: Vec<String>,
    /// Characteristic weaknesses.
    pub weaknesses: Vec<String>,
    /// Elements this one harmonizes with (its producer and product).
    pub compatible_elements: Vec<Element>,
    /// The element that controls this one.
    pub conflicting_element: Element,
}

impl ElementProfile {
    /// Builds the profile for an element by copying out of the fixed
    /// archetype table.
    pub fn for_element(element: Element) -> Self {
        let a = archetype(element);
        Self {
            primary_element: element,
            core_personality: a.core_personality.to_string(),
            strengths: a.strengths.iter().map(|s| s.to_string()).collect(),
            weaknesses: a.weaknesses.iter().map(|s| s.to_string()).collect(),
            compatible_elements: a.compatible_elements.to_vec(),
            conflicting_element: a.conflicting_element,
        }
    }
}

/// Returns the element profile for a day pillar.
///
/// The profile is keyed on the day master's element (the day pillar's
/// stem element), never assigned independently.
pub fn element_profile(day: &EnrichedPillar) -> ElementProfile {
    ElementProfile::for_element(day.stem_element)
}
