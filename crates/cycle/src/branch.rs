//! Earthly branches (dizhi) and their fixed attributes.

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::error::CycleError;

/// One of the 12 earthly branches, ordered 0..=11.
///
/// Each branch carries a fixed element and zodiac animal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in cycle order. Index in this table is the branch index.
const BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

impl Branch {
    /// All 12 branches in cycle order.
    pub const ALL: [Branch; 12] = BRANCHES;

    /// Creates a branch from its cycle index.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::InvalidBranchIndex`] if `index` is not in 0..=11.
    pub fn new(index: u8) -> Result<Self, CycleError> {
        BRANCHES
            .get(index as usize)
            .copied()
            .ok_or(CycleError::InvalidBranchIndex { index })
    }

    /// Creates a branch from an arbitrary cycle position.
    ///
    /// Reduces `n` modulo 12 with the non-negative remainder, so any
    /// integer maps to a valid branch.
    pub fn from_cycle(n: i64) -> Self {
        BRANCHES[n.rem_euclid(12) as usize]
    }

    /// Returns the cycle index (0..=11).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Returns the branch's fixed element.
    pub fn element(self) -> Element {
        match self {
            Branch::Zi | Branch::Hai => Element::Water,
            Branch::Chou | Branch::Chen | Branch::Wei | Branch::Xu => Element::Earth,
            Branch::Yin | Branch::Mao => Element::Wood,
            Branch::Si | Branch::Wu => Element::Fire,
            Branch::Shen | Branch::You => Element::Metal,
        }
    }

    /// Returns the zodiac animal label (Thai with English gloss).
    pub fn animal(self) -> &'static str {
        match self {
            Branch::Zi => "หนู (Rat)",
            Branch::Chou => "วัว (Ox)",
            Branch::Yin => "เสือ (Tiger)",
            Branch::Mao => "กระต่าย (Rabbit)",
            Branch::Chen => "มังกร (Dragon)",
            Branch::Si => "งู (Snake)",
            Branch::Wu => "ม้า (Horse)",
            Branch::Wei => "แพะ (Goat)",
            Branch::Shen => "ลิง (Monkey)",
            Branch::You => "ไก่ (Rooster)",
            Branch::Xu => "สุนัข (Dog)",
            Branch::Hai => "หมู (Pig)",
        }
    }

    /// Returns the chinese character.
    pub fn chinese(self) -> &'static str {
        match self {
            Branch::Zi => "子",
            Branch::Chou => "丑",
            Branch::Yin => "寅",
            Branch::Mao => "卯",
            Branch::Chen => "辰",
            Branch::Si => "巳",
            Branch::Wu => "午",
            Branch::Wei => "未",
            Branch::Shen => "申",
            Branch::You => "酉",
            Branch::Xu => "戌",
            Branch::Hai => "亥",
        }
    }

    /// Returns the pinyin romanization with tone marks.
    pub fn pinyin(self) -> &'static str {
        match self {
            Branch::Zi => "zǐ",
            Branch::Chou => "chǒu",
            Branch::Yin => "yín",
            Branch::Mao => "mǎo",
            Branch::Chen => "chén",
            Branch::Si => "sì",
            Branch::Wu => "wǔ",
            Branch::Wei => "wèi",
            Branch::Shen => "shēn",
            Branch::You => "yǒu",
            Branch::Xu => "xū",
            Branch::Hai => "hài",
        }
    }

    /// Returns the plain lowercase key used in serialized output.
    pub fn name(self) -> &'static str {
        match self {
            Branch::Zi => "zi",
            Branch::Chou => "chou",
            Branch::Yin => "yin",
            Branch::Mao => "mao",
            Branch::Chen => "chen",
            Branch::Si => "si",
            Branch::Wu => "wu",
            Branch::Wei => "wei",
            Branch::Shen => "shen",
            Branch::You => "you",
            Branch::Xu => "xu",
            Branch::Hai => "hai",
        }
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
