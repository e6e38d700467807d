//! Heavenly stems (tiangan) and their fixed attributes.

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};
use crate::error::CycleError;

/// One of the 10 heavenly stems, ordered 0..=9.
///
/// Each stem carries a fixed element and polarity. Stems alternate
/// yang/yin and advance through the elements in producing order, two
/// stems per element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in cycle order. Index in this table is the stem index.
const STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

impl Stem {
    /// All 10 stems in cycle order.
    pub const ALL: [Stem; 10] = STEMS;

    /// Creates a stem from its cycle index.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::InvalidStemIndex`] if `index` is not in 0..=9.
    pub fn new(index: u8) -> Result<Self, CycleError> {
        STEMS
            .get(index as usize)
            .copied()
            .ok_or(CycleError::InvalidStemIndex { index })
    }

    /// Creates a stem from an arbitrary cycle position.
    ///
    /// Reduces `n` modulo 10 with the non-negative remainder, so any
    /// integer — including negative offsets produced by subtraction —
    /// maps to a valid stem.
    pub fn from_cycle(n: i64) -> Self {
        STEMS[n.rem_euclid(10) as usize]
    }

    /// Returns the cycle index (0..=9).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Returns the stem's fixed element.
    pub fn element(self) -> Element {
        match self {
            Stem::Jia | Stem::Yi => Element::Wood,
            Stem::Bing | Stem::Ding => Element::Fire,
            Stem::Wu | Stem::Ji => Element::Earth,
            Stem::Geng | Stem::Xin => Element::Metal,
            Stem::Ren | Stem::Gui => Element::Water,
        }
    }

    /// Returns the stem's fixed polarity. Even indices are yang.
    pub fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// Returns the chinese character.
    pub fn chinese(self) -> &'static str {
        match self {
            Stem::Jia => "甲",
            Stem::Yi => "乙",
            Stem::Bing => "丙",
            Stem::Ding => "丁",
            Stem::Wu => "戊",
            Stem::Ji => "己",
            Stem::Geng => "庚",
            Stem::Xin => "辛",
            Stem::Ren => "壬",
            Stem::Gui => "癸",
        }
    }

    /// Returns the pinyin romanization with tone marks.
    pub fn pinyin(self) -> &'static str {
        match self {
            Stem::Jia => "jiǎ",
            Stem::Yi => "yǐ",
            Stem::Bing => "bǐng",
            Stem::Ding => "dīng",
            Stem::Wu => "wù",
            Stem::Ji => "jǐ",
            Stem::Geng => "gēng",
            Stem::Xin => "xīn",
            Stem::Ren => "rén",
            Stem::Gui => "guǐ",
        }
    }

    /// Returns the plain lowercase key used in serialized output.
    pub fn name(self) -> &'static str {
        match self {
            Stem::Jia => "jia",
            Stem::Yi => "yi",
            Stem::Bing => "bing",
            Stem::Ding => "ding",
            Stem::Wu => "wu",
            Stem::Ji => "ji",
            Stem::Geng => "geng",
            Stem::Xin => "xin",
            Stem::Ren => "ren",
            Stem::Gui => "gui",
        }
    }
}

impl std::fmt::Display for Stem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
