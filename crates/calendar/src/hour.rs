//! Birth-hour newtype.

use serde::Serialize;

use crate::error::CalendarError;

/// Hour of birth on the 24-hour clock (0..=23).
///
/// The hour pillar is computed only when the birth time is known, so
/// chart inputs carry an `Option<BirthHour>`. Range validation lives
/// here, at construction; the hour-pillar calculator assumes a valid
/// value.
// Serialize only: deserialization would bypass range validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BirthHour(u8);

impl BirthHour {
    /// Creates a new `BirthHour`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidHour`] if `hour` is not in 0..=23.
    pub fn new(hour: u8) -> Result<Self, CalendarError> {
        if hour > 23 {
            return Err(CalendarError::InvalidHour { hour });
        }
        Ok(Self(hour))
    }

    /// Returns the inner hour value (0..=23).
    pub fn get(self) -> u8 {
        self.0
    }
}
