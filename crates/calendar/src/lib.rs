//! # dreamspell-calendar
//!
//! Gregorian dates mapped onto the 260-day Tzolkin count and the 13-Moon year.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["GregorianDate"] -->|".day_number()"| B["i64 day count"]
//!     A -->|"KinConfig::kin_of()"| C["DayKin"]
//!     A -->|"kin_sequence()"| D["Vec of DatedKin"]
//!     A -->|"moon_day()"| E["MoonDay"]
//!     A -->|"Doy::of_date()"| F["Doy (1..=365)"]
//!     F --> E
//! ```
//!
//! February 29 is excluded from the Tzolkin count: it yields
//! [`DayKin::OutOfCycle`], and the day after it continues from the day before
//! it. Kin values are computed in closed form from the distance to an anchor
//! date, so any date in the configured range costs the same.
//!
//! ## Quick Start
//!
//! ```
//! use dreamspell_calendar::{GregorianDate, KinConfig, MoonDay, kin_sequence, moon_day};
//!
//! let config = KinConfig::default(); // 1986-05-19 is Kin 121
//! let date: GregorianDate = "2000-01-01".parse().unwrap();
//! assert_eq!(config.kin_of(date).unwrap().value(), 153);
//!
//! let week = kin_sequence(date, 7, &config).unwrap();
//! assert_eq!(week[6].kin.value(), 159);
//!
//! assert!(matches!(moon_day(date), MoonDay::Moon(_)));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Gregorian date, leap rules, absolute day numbers |
//! | `doy` | No-leap day-of-year newtype and month tables |
//! | `range` | Supported date range |
//! | `config` | Anchor date and Kin, range |
//! | `tzolkin` | Date to Kin mapping |
//! | `sequence` | Kin sequences over consecutive days |
//! | `moon` | 13-Moon calendar position |
//! | `error` | Error types |

mod config;
mod date;
mod doy;
mod error;
mod moon;
mod range;
mod sequence;
mod tzolkin;

pub use config::{CANONICAL_ANCHOR_DATE, CANONICAL_ANCHOR_KIN, KinConfig};
pub use date::{GregorianDate, days_in_month, is_leap_year};
pub use doy::Doy;
pub use error::CalendarError;
pub use moon::{DAYS_PER_MOON, MOONS_PER_YEAR, MoonDate, MoonDay, moon_day};
pub use range::DateRange;
pub use sequence::{DatedKin, kin_sequence};
pub use tzolkin::{DayKin, compute_kin, counted_days_between, leap_days_between};
