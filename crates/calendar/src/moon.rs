//! 13-Moon calendar position.
//!
//! The 13-Moon year starts on July 26 and runs through thirteen 28-day
//! moons. July 25 closes the year as the Day Out of Time; February 29 is the
//! Hunab Ku day and belongs to no moon.

use dreamspell_kin::Color;
use serde::Serialize;

use crate::date::GregorianDate;
use crate::doy::Doy;

/// Days in one moon.
pub const DAYS_PER_MOON: u8 = 28;

/// Moons in one year.
pub const MOONS_PER_YEAR: u8 = 13;

/// A day inside one of the thirteen moons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MoonDate {
    /// Gregorian year in which this 13-Moon year began.
    pub year: i32,
    /// Moon number (1..=13).
    pub moon: u8,
    /// Day within the moon (1..=28).
    pub day: u8,
    /// Week within the moon (1..=4).
    pub week: u8,
    /// Radial plasma, the day of the week (1..=7).
    pub plasma: u8,
}

impl MoonDate {
    /// Returns the week color: Red, White, Blue, Yellow for weeks 1..=4.
    pub fn week_color(&self) -> Color {
        Color::rotation(usize::from(self.week - 1))
    }
}

/// Position of a Gregorian day in the 13-Moon calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MoonDay {
    /// A regular day of one of the thirteen moons.
    Moon(MoonDate),
    /// July 25, closing the 13-Moon year that began in `year`.
    DayOutOfTime { year: i32 },
    /// February 29.
    HunabKu,
}

/// Returns the 13-Moon position of `date`.
///
/// # Example
///
/// ```
/// use dreamspell_calendar::{GregorianDate, MoonDay, moon_day};
///
/// let d = GregorianDate::new(2024, 7, 26).unwrap();
/// let MoonDay::Moon(m) = moon_day(d) else { panic!() };
/// assert_eq!((m.year, m.moon, m.day), (2024, 1, 1));
/// ```
pub fn moon_day(date: GregorianDate) -> MoonDay {
    let Some(doy) = Doy::of_date(date) else {
        return MoonDay::HunabKu;
    };
    let year = if doy >= Doy::MOON_NEW_YEAR {
        date.year()
    } else {
        date.year() - 1
    };
    let idx = doy.days_since(Doy::MOON_NEW_YEAR);
    let moon_days = u16::from(DAYS_PER_MOON) * u16::from(MOONS_PER_YEAR);
    if idx >= moon_days {
        return MoonDay::DayOutOfTime { year };
    }
    let moon = (idx / u16::from(DAYS_PER_MOON)) as u8 + 1;
    let day = (idx % u16::from(DAYS_PER_MOON)) as u8 + 1;
    MoonDay::Moon(MoonDate {
        year,
        moon,
        day,
        week: (day - 1) / 7 + 1,
        plasma: (day - 1) % 7 + 1,
    })
}
