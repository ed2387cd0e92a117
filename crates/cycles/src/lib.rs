//! # dreamspell-cycles
//!
//! Positions of a Kin in the fixed sub-cycles of the Tzolkin.
//!
//! ```mermaid
//! graph LR
//!     K["Kin"] --> H["Harmonic (65 x 4)"]
//!     K --> C["Chromatic (52 x 5)"]
//!     K --> W["Wavespell (20 x 13)"]
//!     K --> Ca["Castle (5 x 52)"]
//!     K --> S["Season (4 x 65)"]
//!     K --> Sp["Spin (2 x 130)"]
//!     K -->|".seal()"| F["EarthFamily / TimeCell"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use dreamspell_cycles::{CycleAnnotation, annotate};
//! use dreamspell_kin::{Color, Kin};
//!
//! let a = CycleAnnotation::of(Kin::new(260).unwrap());
//! assert_eq!(a.castle.color, Color::Green);
//! assert_eq!(a.season.index, 3);
//!
//! assert!(annotate(0).is_err());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `position` | Harmonic, chromatic, wavespell, castle, season and spin |
//! | `family` | Earth families and time cells |
//! | `annotation` | All positions of a Kin together |

mod annotation;
mod family;
mod position;

pub use annotation::{CycleAnnotation, annotate};
pub use family::{EarthFamily, TimeCell};
pub use position::{
    CASTLE_LEN, CHROMATIC_LEN, Castle, Chromatic, HARMONIC_LEN, Harmonic, SEASON_LEN, SPIN_LEN,
    Season, Spin, WAVESPELL_LEN, Wavespell,
};
