//! Proleptic Gregorian date with day-number arithmetic.

use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::CalendarError;

/// Days from 0000-03-01 to 1970-01-01 in the proleptic Gregorian calendar.
const UNIX_EPOCH_OFFSET: i64 = 719_468;

/// Days in a 400-year Gregorian era.
const DAYS_PER_ERA: i64 = 146_097;

/// A validated date in the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    year: i32,
    month: u8,
    day: u8,
}

/// Returns `true` if `year` is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in `month` of `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        2 if is_leap_year(year) => Ok(29),
        2 => Ok(28),
        _ => Err(CalendarError::InvalidMonth { month }),
    }
}

impl GregorianDate {
    /// Creates a new `GregorianDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] or [`CalendarError::InvalidDay`]
    /// if the triple does not name a real calendar day.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let max_day = days_in_month(year, month)?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Builds a date whose validity is known at compile time.
    pub(crate) const fn from_ymd_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns `(month, day)` as a tuple.
    pub fn month_day(self) -> (u8, u8) {
        (self.month, self.day)
    }

    /// Returns `true` for February 29.
    pub fn is_leap_day(self) -> bool {
        self.month == 2 && self.day == 29
    }

    /// Returns the number of days since 1970-01-01 (negative before it).
    ///
    /// Closed form over 400-year eras, so leap years are accounted for
    /// without iterating.
    pub fn day_number(self) -> i64 {
        let m = i64::from(self.month);
        let d = i64::from(self.day);
        let y = i64::from(self.year) - i64::from(m <= 2);
        let era = y.div_euclid(400);
        let yoe = y - era * 400;
        let mp = (m + 9) % 12;
        let doy = (153 * mp + 2) / 5 + d - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        era * DAYS_PER_ERA + doe - UNIX_EPOCH_OFFSET
    }

    /// Returns the number of February 29 dates strictly before this date,
    /// counted from an arbitrary fixed origin.
    ///
    /// Only differences between two calls are meaningful.
    pub(crate) fn leap_days_before(self) -> i64 {
        let prev = i64::from(self.year) - 1;
        let through_prev = prev.div_euclid(4) - prev.div_euclid(100) + prev.div_euclid(400);
        through_prev + i64::from(is_leap_year(self.year) && self.month > 2)
    }

    /// Returns the next calendar day, including February 29 in leap years.
    pub fn next(self) -> Self {
        // Safety: days_in_month only fails for months outside 1..=12,
        // which a constructed date never holds.
        let max_day = days_in_month(self.year, self.month).unwrap_or(31);
        if self.day < max_day {
            Self::from_ymd_unchecked(self.year, self.month, self.day + 1)
        } else if self.month < 12 {
            Self::from_ymd_unchecked(self.year, self.month + 1, 1)
        } else {
            Self::from_ymd_unchecked(self.year + 1, 1, 1)
        }
    }

    /// Returns the previous calendar day.
    pub fn prev(self) -> Self {
        if self.day > 1 {
            Self::from_ymd_unchecked(self.year, self.month, self.day - 1)
        } else if self.month > 1 {
            let month = self.month - 1;
            let day = days_in_month(self.year, month).unwrap_or(31);
            Self::from_ymd_unchecked(self.year, month, day)
        } else {
            Self::from_ymd_unchecked(self.year - 1, 12, 31)
        }
    }
}

impl std::fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for GregorianDate {
    type Err = CalendarError;

    /// Parses `YYYY-MM-DD`. A leading `-` marks a year before year 0.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || CalendarError::Parse {
            input: s.to_string(),
        };
        let trimmed = s.trim();
        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let mut parts = body.splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(parse_err());
        };
        let year: i32 = y.parse().map_err(|_| parse_err())?;
        let month: u8 = m.parse().map_err(|_| parse_err())?;
        let day: u8 = d.parse().map_err(|_| parse_err())?;
        let year = if negative { -year } else { year };
        Self::new(year, month, day)
    }
}

impl Serialize for GregorianDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> GregorianDate {
        GregorianDate::new(y, m, d).unwrap()
    }

    #[test]
    fn new_valid() {
        let d = date(1986, 5, 19);
        assert_eq!(d.year(), 1986);
        assert_eq!(d.month(), 5);
        assert_eq!(d.day(), 19);
        assert_eq!(d.month_day(), (5, 19));
    }

    #[test]
    fn new_invalid_month() {
        assert_eq!(
            GregorianDate::new(2000, 0, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            GregorianDate::new(2000, 13, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn new_feb_30_rejected() {
        assert_eq!(
            GregorianDate::new(2024, 2, 30).unwrap_err(),
            CalendarError::InvalidDay {
                day: 30,
                month: 2,
                max_day: 29,
            }
        );
    }

    #[test]
    fn new_feb_29_only_in_leap_years() {
        assert!(GregorianDate::new(2024, 2, 29).is_ok());
        assert!(GregorianDate::new(2000, 2, 29).is_ok());
        assert_eq!(
            GregorianDate::new(1900, 2, 29).unwrap_err(),
            CalendarError::InvalidDay {
                day: 29,
                month: 2,
                max_day: 28,
            }
        );
    }

    #[test]
    fn new_day_zero_rejected() {
        assert!(matches!(
            GregorianDate::new(2000, 1, 0),
            Err(CalendarError::InvalidDay { day: 0, .. })
        ));
    }

    #[test]
    fn leap_year_rules() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(-1));
    }

    #[test]
    fn day_number_epoch() {
        assert_eq!(date(1970, 1, 1).day_number(), 0);
        assert_eq!(date(1970, 1, 2).day_number(), 1);
        assert_eq!(date(1969, 12, 31).day_number(), -1);
    }

    #[test]
    fn day_number_known_values() {
        assert_eq!(date(2000, 3, 1).day_number(), 11_017);
        assert_eq!(date(1986, 5, 19).day_number(), 5_982);
        assert_eq!(date(1, 1, 1).day_number(), -719_162);
    }

    #[test]
    fn day_number_matches_stepping() {
        let mut d = date(1895, 1, 1);
        let mut n = d.day_number();
        while d < date(1905, 12, 31) {
            let next = d.next();
            assert_eq!(next.day_number(), n + 1, "gap after {d}");
            d = next;
            n += 1;
        }
    }

    #[test]
    fn leap_days_before_counts_feb_29() {
        // 2024-02-29 lies between these two dates.
        assert_eq!(
            date(2024, 3, 1).leap_days_before() - date(2024, 2, 29).leap_days_before(),
            1
        );
        assert_eq!(
            date(2024, 2, 29).leap_days_before() - date(2024, 2, 28).leap_days_before(),
            0
        );
        // 1900 is not a leap year.
        assert_eq!(
            date(1901, 1, 1).leap_days_before() - date(1900, 1, 1).leap_days_before(),
            0
        );
        // 1996, 2000, 2004 between these.
        assert_eq!(
            date(2005, 1, 1).leap_days_before() - date(1995, 1, 1).leap_days_before(),
            3
        );
    }

    #[test]
    fn next_month_and_year_boundaries() {
        assert_eq!(date(2000, 1, 31).next(), date(2000, 2, 1));
        assert_eq!(date(2024, 2, 28).next(), date(2024, 2, 29));
        assert_eq!(date(2024, 2, 29).next(), date(2024, 3, 1));
        assert_eq!(date(2023, 2, 28).next(), date(2023, 3, 1));
        assert_eq!(date(2000, 12, 31).next(), date(2001, 1, 1));
    }

    #[test]
    fn prev_month_and_year_boundaries() {
        assert_eq!(date(2024, 3, 1).prev(), date(2024, 2, 29));
        assert_eq!(date(2023, 3, 1).prev(), date(2023, 2, 28));
        assert_eq!(date(2001, 1, 1).prev(), date(2000, 12, 31));
        assert_eq!(date(2000, 5, 1).prev(), date(2000, 4, 30));
    }

    #[test]
    fn next_negative_year_boundary() {
        assert_eq!(date(-1, 12, 31).next(), date(0, 1, 1));
    }

    #[test]
    fn is_leap_day() {
        assert!(date(2024, 2, 29).is_leap_day());
        assert!(!date(2024, 2, 28).is_leap_day());
    }

    #[test]
    fn display_pads() {
        assert_eq!(date(1986, 5, 19).to_string(), "1986-05-19");
        assert_eq!(date(1, 1, 1).to_string(), "0001-01-01");
    }

    #[test]
    fn parse_valid() {
        assert_eq!("1986-05-19".parse::<GregorianDate>().unwrap(), date(1986, 5, 19));
        assert_eq!(" 2024-2-29 ".parse::<GregorianDate>().unwrap(), date(2024, 2, 29));
        assert_eq!("-0044-03-15".parse::<GregorianDate>().unwrap(), date(-44, 3, 15));
    }

    #[test]
    fn parse_rejects_malformed() {
        for input in ["", "1986", "1986-05", "19.05.1986", "1986-xx-19", "1986-05-19-1"] {
            assert!(
                matches!(
                    input.parse::<GregorianDate>(),
                    Err(CalendarError::Parse { .. })
                ),
                "expected parse error for {input:?}"
            );
        }
    }

    #[test]
    fn parse_rejects_impossible_date() {
        assert_eq!(
            "2023-02-29".parse::<GregorianDate>().unwrap_err(),
            CalendarError::InvalidDay {
                day: 29,
                month: 2,
                max_day: 28,
            }
        );
    }

    #[test]
    fn ord_follows_calendar() {
        assert!(date(1999, 12, 31) < date(2000, 1, 1));
        assert!(date(2000, 1, 31) < date(2000, 2, 1));
        assert!(date(-1, 6, 1) < date(0, 1, 1));
    }

    #[test]
    fn serializes_as_string() {
        let json = serde_json::to_string(&date(2012, 12, 21)).unwrap();
        assert_eq!(json, "\"2012-12-21\"");
    }
}
