//! # dreamspell-content
//!
//! Read-only seal and tone content, keyed by id.
//!
//! A content document is JSON of the form
//!
//! ```json
//! {
//!   "seals": [{ "id": 1, "name": "Red Dragon", "action": "Nurtures" }],
//!   "tones": [{ "id": 1, "name": "Magnetic", "psychology": { "light": "..." } }]
//! }
//! ```
//!
//! Only ids are checked (range and uniqueness). All text is opaque.
//!
//! ## Quick Start
//!
//! ```
//! use dreamspell_content::ContentTable;
//! use dreamspell_kin::Kin;
//!
//! let table = ContentTable::builtin().unwrap();
//! let kin = Kin::new(121).unwrap();
//! assert_eq!(table.seal_name(kin.seal()), "Red Dragon");
//! assert_eq!(table.tone_name(kin.tone()), "Self-Existing");
//! ```

mod entry;
mod error;
mod table;

pub use entry::{Psychology, SealEntry, ToneEntry};
pub use error::ContentError;
pub use table::ContentTable;
