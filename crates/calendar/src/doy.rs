//! Day-of-year in the 365-day count that skips February 29.
//!
//! The 13-Moon calendar is laid over this count: every year has the same
//! 365 positions and the leap day sits outside it.

use crate::date::GregorianDate;
use crate::error::CalendarError;

/// Day-of-year in the 365-day no-leap count (1..=365).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Doy(u16);

/// Number of days in each month with a 28-day February (index 0 unused).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Day-of-year on which each month starts (index 0 unused).
pub(crate) const MONTH_START_DOY: [u16; 13] =
    [0, 1, 32, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];

impl Doy {
    /// July 26, the first day of the 13-Moon year.
    pub const MOON_NEW_YEAR: Doy = Doy(207);

    /// Creates a new `Doy` from a (month, day) pair.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    /// Returns [`CalendarError::InvalidDay`] if `day` is not valid for the
    /// month; February 29 is always rejected.
    pub fn from_month_day(month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let max_day = DAYS_PER_MONTH[month as usize];
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self(MONTH_START_DOY[month as usize] + u16::from(day) - 1))
    }

    /// Returns the position of `date` in the no-leap count, or `None` for
    /// February 29.
    pub fn of_date(date: GregorianDate) -> Option<Self> {
        Self::from_month_day(date.month(), date.day()).ok()
    }

    /// Returns the inner day-of-year value (1..=365).
    pub fn get(self) -> u16 {
        self.0
    }

    /// Days from `origin` forward to `self`, wrapping at the year end
    /// (0..=364).
    pub fn days_since(self, origin: Doy) -> u16 {
        (self.0 + 365 - origin.0) % 365
    }
}
