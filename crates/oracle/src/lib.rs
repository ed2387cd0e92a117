//! # dreamspell-oracle
//!
//! The oracle of a Kin: its guide, analog, antipode and occult partners.
//!
//! ```mermaid
//! graph TD
//!     D["destiny (s, t)"] -->|"s + GUIDE_SHIFT[t % 5]"| G["guide"]
//!     D -->|"19 - s"| A["analog"]
//!     D -->|"s + 10"| P["antipode"]
//!     D -->|"261 - kin"| O["occult"]
//! ```
//!
//! `s` and `t` are the 0-based seal and tone indices. Every partner except
//! the occult is rebuilt from `(seal, tone)` with
//! [`Kin::from_seal_tone`](dreamspell_kin::Kin::from_seal_tone).
//!
//! ## Quick Start
//!
//! ```
//! use dreamspell_kin::Kin;
//! use dreamspell_oracle::{Oracle, compute_oracle};
//!
//! let oracle = Oracle::of(Kin::new(153).unwrap());
//! assert_eq!(oracle.guide.get(), 101);
//!
//! assert!(compute_oracle(0).is_err());
//! ```

mod oracle;

pub use oracle::{GUIDE_SHIFT, Oracle, analog, antipode, compute_oracle, guide, occult};
