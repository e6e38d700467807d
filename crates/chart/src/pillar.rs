//! Pillar value type and chart slot labels.

use serde::{Deserialize, Serialize};

use bazi_cycle::{Branch, Stem};

/// A stem-branch pair for one time unit of a birth moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pillar {
    stem: Stem,
    branch: Branch,
}

impl Pillar {
    /// Creates a new pillar.
    pub fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Returns the heavenly stem.
    pub fn stem(self) -> Stem {
        self.stem
    }

    /// Returns the earthly branch.
    pub fn branch(self) -> Branch {
        self.branch
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.chinese(), self.branch.chinese())
    }
}

/// The four pillar slots of a chart, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PillarSlot {
    Year,
    Month,
    Day,
    Hour,
}

impl PillarSlot {
    /// All four slots in canonical order (year, month, day, hour).
    pub const ALL: [PillarSlot; 4] = [
        PillarSlot::Year,
        PillarSlot::Month,
        PillarSlot::Day,
        PillarSlot::Hour,
    ];

    /// Returns the lowercase slot name.
    pub fn name(self) -> &'static str {
        match self {
            PillarSlot::Year => "year",
            PillarSlot::Month => "month",
            PillarSlot::Day => "day",
            PillarSlot::Hour => "hour",
        }
    }
}

impl std::fmt::Display for PillarSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let pillar = Pillar::new(Stem::Geng, Branch::Chen);
        assert_eq!(pillar.stem(), Stem::Geng);
        assert_eq!(pillar.branch(), Branch::Chen);
    }

    #[test]
    fn display_is_chinese_pair() {
        let pillar = Pillar::new(Stem::Jia, Branch::Zi);
        assert_eq!(pillar.to_string(), "甲子");
    }

    #[test]
    fn structural_equality() {
        let a = Pillar::new(Stem::Ren, Branch::Chen);
        let b = Pillar::new(Stem::Ren, Branch::Chen);
        assert_eq!(a, b);
        assert_ne!(a, Pillar::new(Stem::Ren, Branch::Si));
    }

    #[test]
    fn slot_order() {
        assert_eq!(
            PillarSlot::ALL,
            [
                PillarSlot::Year,
                PillarSlot::Month,
                PillarSlot::Day,
                PillarSlot::Hour
            ]
        );
        assert_eq!(PillarSlot::Hour.to_string(), "hour");
    }

    #[test]
    fn copy_trait() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<Pillar>();
        assert_copy::<PillarSlot>();
    }
}
