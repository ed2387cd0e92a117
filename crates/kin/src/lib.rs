//! # dreamspell-kin
//!
//! Value types for the 260-day Tzolkin cycle.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Kin (1..=260)"] -->|".seal()"| B["Seal (1..=20)"]
//!     A -->|".tone()"| C["Tone (1..=13)"]
//!     B -->|"Kin::from_seal_tone()"| A
//!     C -->|"Kin::from_seal_tone()"| A
//!     B -->|".color()"| D["Color"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use dreamspell_kin::{Kin, Seal, Tone};
//!
//! let kin = Kin::new(121).unwrap();
//! assert_eq!(kin.seal().get(), 1);
//! assert_eq!(kin.tone().get(), 4);
//!
//! let back = Kin::from_seal_tone(Seal::new(1).unwrap(), Tone::new(4).unwrap());
//! assert_eq!(back, kin);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `kin` | Kin newtype and CRT reconstruction |
//! | `seal` | Seal and tone newtypes |
//! | `color` | Four-color rotation |
//! | `error` | Error types |

mod color;
mod error;
mod kin;
mod seal;

pub use color::{Color, ROTATION};
pub use error::KinError;
pub use kin::{CYCLE_LEN, Kin, resolve_kin};
pub use seal::{SEAL_COUNT, Seal, TONE_COUNT, Tone};
