//! Error types for the dreamspell-calendar crate.

use dreamspell_kin::KinError;

use crate::date::GregorianDate;

/// Error type for all fallible operations in the dreamspell-calendar crate.
///
/// `InvalidMonth` and `InvalidDay` together describe a date that does not
/// exist in the proleptic Gregorian calendar. February 29 is never reported
/// here by [`compute_kin`](crate::compute_kin): it is a valid answer
/// ([`DayKin::OutOfCycle`](crate::DayKin::OutOfCycle)), not a failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },

    /// Returned when a date falls outside the configured accepted range.
    #[error("date {date} outside accepted range {min}..={max}")]
    DateOutOfRange {
        /// The rejected date.
        date: GregorianDate,
        /// First accepted date.
        min: GregorianDate,
        /// Last accepted date.
        max: GregorianDate,
    },

    /// Returned when a range is constructed with `min` after `max`.
    #[error("invalid date range: {min} is after {max}")]
    InvalidRange {
        /// Requested first date.
        min: GregorianDate,
        /// Requested last date.
        max: GregorianDate,
    },

    /// Returned when the anchor date is February 29, which has no Kin.
    #[error("invalid anchor: {date} is outside the 260-day count")]
    InvalidAnchor {
        /// The rejected anchor date.
        date: GregorianDate,
    },

    /// Returned when a string is not a `YYYY-MM-DD` date.
    #[error("cannot parse date {input:?} (expected YYYY-MM-DD)")]
    Parse {
        /// The text that failed to parse.
        input: String,
    },

    /// A Kin-level error surfaced through calendar configuration.
    #[error(transparent)]
    Kin(#[from] KinError),
}
