//! Accepted date range.

use serde::Serialize;

use crate::date::GregorianDate;
use crate::error::CalendarError;

/// Inclusive range of dates a [`KinConfig`](crate::KinConfig) accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    min: GregorianDate,
    max: GregorianDate,
}

impl DateRange {
    /// Creates a new inclusive range.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidRange`] if `min` is after `max`.
    pub fn new(min: GregorianDate, max: GregorianDate) -> Result<Self, CalendarError> {
        if min > max {
            return Err(CalendarError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Returns the first accepted date.
    pub fn min(&self) -> GregorianDate {
        self.min
    }

    /// Returns the last accepted date.
    pub fn max(&self) -> GregorianDate {
        self.max
    }

    /// Returns `true` if `date` lies inside the range.
    pub fn contains(&self, date: GregorianDate) -> bool {
        (self.min..=self.max).contains(&date)
    }

    /// Checks that `date` lies inside the range.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DateOutOfRange`] otherwise.
    pub fn check(&self, date: GregorianDate) -> Result<(), CalendarError> {
        if !self.contains(date) {
            return Err(CalendarError::DateOutOfRange {
                date,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

impl Default for DateRange {
    /// Years 1 through 5000.
    fn default() -> Self {
        Self {
            min: GregorianDate::from_ymd_unchecked(1, 1, 1),
            max: GregorianDate::from_ymd_unchecked(5000, 12, 31),
        }
    }
}
