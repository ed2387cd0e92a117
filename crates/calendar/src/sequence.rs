//! Kin sequences over consecutive calendar days.

use serde::Serialize;
use tracing::debug;

use crate::config::KinConfig;
use crate::date::GregorianDate;
use crate::error::CalendarError;
use crate::tzolkin::DayKin;

/// A calendar day paired with its Kin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatedKin {
    pub date: GregorianDate,
    pub kin: DayKin,
}

/// Generates `n_days` consecutive calendar days starting at `start`, each
/// with its Kin.
///
/// Every Gregorian day appears, February 29 included (as
/// [`DayKin::OutOfCycle`]).
///
/// # Errors
///
/// Returns [`CalendarError::DateOutOfRange`] if `start` or any later day
/// falls outside the configured range (checked before anything is
/// allocated), and [`CalendarError::InvalidAnchor`] for a
/// February 29 anchor.
///
/// # Example
///
/// ```
/// use dreamspell_calendar::{GregorianDate, KinConfig, kin_sequence};
///
/// let start = GregorianDate::new(2024, 2, 28).unwrap();
/// let days = kin_sequence(start, 3, &KinConfig::default()).unwrap();
/// let kins: Vec<u16> = days.iter().map(|d| d.kin.value()).collect();
/// assert_eq!(kins, vec![131, 0, 132]);
/// ```
#[tracing::instrument(skip(config), fields(start = %start))]
pub fn kin_sequence(
    start: GregorianDate,
    n_days: usize,
    config: &KinConfig,
) -> Result<Vec<DatedKin>, CalendarError> {
    if n_days == 0 {
        return Ok(Vec::new());
    }
    let range = config.range();
    range.check(start)?;
    // Days from `start` through the end of the range, both included.
    let available = range.max().day_number() - start.day_number() + 1;
    if !usize::try_from(available).is_ok_and(|available| n_days <= available) {
        return Err(CalendarError::DateOutOfRange {
            date: range.max().next(),
            min: range.min(),
            max: range.max(),
        });
    }

    let mut days = Vec::with_capacity(n_days);
    let mut date = start;
    for i in 0..n_days {
        if i > 0 {
            date = date.next();
        }
        let kin = config.kin_of(date)?;
        days.push(DatedKin { date, kin });
    }
    debug!(
        n_days = days.len(),
        out_of_cycle = days.iter().filter(|d| d.kin.is_out_of_cycle()).count(),
        "kin sequence generated"
    );
    Ok(days)
}
