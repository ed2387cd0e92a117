//! Gregorian date to Kin mapping.

use dreamspell_kin::Kin;
use serde::{Serialize, Serializer};

use crate::config::KinConfig;
use crate::date::GregorianDate;
use crate::error::CalendarError;

/// The Kin of a calendar day.
///
/// February 29 is outside the 260-day count; it is a regular result, not an
/// error, and callers are expected to branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayKin {
    /// A day inside the cycle.
    InCycle(Kin),
    /// February 29, the day out of time. Its numeric value is 0.
    OutOfCycle,
}

impl DayKin {
    /// Returns the Kin value, or 0 for [`DayKin::OutOfCycle`].
    pub fn value(self) -> u16 {
        match self {
            Self::InCycle(kin) => kin.get(),
            Self::OutOfCycle => 0,
        }
    }

    /// Returns the Kin, if the day is inside the cycle.
    pub fn kin(self) -> Option<Kin> {
        match self {
            Self::InCycle(kin) => Some(kin),
            Self::OutOfCycle => None,
        }
    }

    /// Returns `true` for February 29.
    pub fn is_out_of_cycle(self) -> bool {
        matches!(self, Self::OutOfCycle)
    }
}

impl Serialize for DayKin {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.value())
    }
}

/// Returns the number of February 29 dates in the half-open interval
/// between `a` and `b` (whichever is earlier is included, the later one is
/// not).
pub fn leap_days_between(a: GregorianDate, b: GregorianDate) -> i64 {
    (b.leap_days_before() - a.leap_days_before()).abs()
}

/// Returns the signed number of counted days from `from` to `to`.
///
/// This is the calendar-aware day difference minus every February 29 in
/// between, so it is negative when `to` precedes `from`.
pub fn counted_days_between(from: GregorianDate, to: GregorianDate) -> i64 {
    let raw = to.day_number() - from.day_number();
    let leap_days = to.leap_days_before() - from.leap_days_before();
    raw - leap_days
}

impl KinConfig {
    /// Returns the Kin of an already validated date.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidAnchor`] if the configured anchor is
    /// February 29 and [`CalendarError::DateOutOfRange`] if `date` lies
    /// outside the configured range.
    pub fn kin_of(&self, date: GregorianDate) -> Result<DayKin, CalendarError> {
        if date.is_leap_day() {
            return Ok(DayKin::OutOfCycle);
        }
        self.validate()?;
        self.range().check(date)?;
        let delta = counted_days_between(self.anchor_date(), date);
        Ok(DayKin::InCycle(self.anchor_kin().advance(delta)))
    }
}

/// Computes the Kin for a year, month, and day.
///
/// February 29 returns [`DayKin::OutOfCycle`] for every year without further
/// checks. All other inputs must form a real date inside the configured range.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] or [`CalendarError::InvalidDay`]
/// for impossible dates, plus the errors of [`KinConfig::kin_of`].
///
/// # Example
///
/// ```
/// use dreamspell_calendar::{DayKin, KinConfig, compute_kin};
///
/// let config = KinConfig::default();
/// assert_eq!(compute_kin(1986, 5, 20, &config).unwrap().value(), 122);
/// assert_eq!(compute_kin(2024, 2, 29, &config).unwrap(), DayKin::OutOfCycle);
/// ```
pub fn compute_kin(
    year: i32,
    month: u8,
    day: u8,
    config: &KinConfig,
) -> Result<DayKin, CalendarError> {
    if month == 2 && day == 29 {
        return Ok(DayKin::OutOfCycle);
    }
    let date = GregorianDate::new(year, month, day)?;
    config.kin_of(date)
}
