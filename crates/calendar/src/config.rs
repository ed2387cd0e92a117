//! Anchor and range configuration for Kin computation.

use dreamspell_kin::Kin;

use crate::date::GregorianDate;
use crate::error::CalendarError;
use crate::range::DateRange;

/// 1986-05-19, the most widely used Dreamspell correlation date.
pub const CANONICAL_ANCHOR_DATE: GregorianDate = GregorianDate::from_ymd_unchecked(1986, 5, 19);

/// Kin of [`CANONICAL_ANCHOR_DATE`].
pub const CANONICAL_ANCHOR_KIN: Kin = match Kin::new(121) {
    Ok(kin) => kin,
    Err(_) => panic!("121 is inside the cycle"),
};

/// Configuration for mapping Gregorian dates to Kin.
///
/// The anchor pairs a known date with its Kin and fixes the correlation
/// between the two calendars; the range bounds which dates are accepted.
///
/// # Example
///
/// ```
/// use dreamspell_calendar::{DateRange, GregorianDate, KinConfig};
/// use dreamspell_kin::Kin;
///
/// let range = DateRange::new(
///     GregorianDate::new(1700, 1, 1).unwrap(),
///     GregorianDate::new(2300, 12, 31).unwrap(),
/// )
/// .unwrap();
/// let config = KinConfig::default().with_range(range);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.anchor_kin(), Kin::new(121).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KinConfig {
    /// Reference date with a known Kin.
    anchor_date: GregorianDate,
    /// Kin of the reference date.
    anchor_kin: Kin,
    /// Accepted dates.
    range: DateRange,
}

impl KinConfig {
    /// Creates a configuration with the given anchor and the default range.
    pub fn new(anchor_date: GregorianDate, anchor_kin: Kin) -> Self {
        Self {
            anchor_date,
            anchor_kin,
            range: DateRange::default(),
        }
    }

    /// Sets the anchor pair.
    pub fn with_anchor(mut self, anchor_date: GregorianDate, anchor_kin: Kin) -> Self {
        self.anchor_date = anchor_date;
        self.anchor_kin = anchor_kin;
        self
    }

    /// Sets the accepted date range.
    pub fn with_range(mut self, range: DateRange) -> Self {
        self.range = range;
        self
    }

    /// Returns the anchor date.
    pub fn anchor_date(&self) -> GregorianDate {
        self.anchor_date
    }

    /// Returns the anchor Kin.
    pub fn anchor_kin(&self) -> Kin {
        self.anchor_kin
    }

    /// Returns the accepted date range.
    pub fn range(&self) -> &DateRange {
        &self.range
    }

    /// Validates this configuration.
    ///
    /// Returns an error if the anchor falls on February 29, which has no Kin.
    pub fn validate(&self) -> Result<(), CalendarError> {
        if self.anchor_date.is_leap_day() {
            return Err(CalendarError::InvalidAnchor {
                date: self.anchor_date,
            });
        }
        Ok(())
    }
}

impl Default for KinConfig {
    fn default() -> Self {
        Self {
            anchor_date: CANONICAL_ANCHOR_DATE,
            anchor_kin: CANONICAL_ANCHOR_KIN,
            range: DateRange::default(),
        }
    }
}
