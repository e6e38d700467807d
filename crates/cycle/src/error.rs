//! Error types for the bazi-cycle crate.

/// Error type for fallible index conversions in the bazi-cycle crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CycleError {
    /// Returned when a stem index is outside the valid range 0..=9.
    #[error("invalid stem index: {index} (must be 0..=9)")]
    InvalidStemIndex {
        /// The invalid stem index that was provided.
        index: u8,
    },

    /// Returned when a branch index is outside the valid range 0..=11.
    #[error("invalid branch index: {index} (must be 0..=11)")]
    InvalidBranchIndex {
        /// The invalid branch index that was provided.
        index: u8,
    },
}
