//! The Kin newtype and seal/tone reconstruction.

use serde::Serialize;

use crate::error::KinError;
use crate::seal::{SEAL_COUNT, Seal, TONE_COUNT, Tone};

/// Length of the Tzolkin cycle.
pub const CYCLE_LEN: u16 = 260;

/// Multiplier that is 1 mod 20 and 0 mod 13.
const SEAL_BASIS: u16 = 221;

/// Multiplier that is 0 mod 20 and 1 mod 13.
const TONE_BASIS: u16 = 40;

/// A position in the 260-day Tzolkin cycle (1..=260).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Kin(u16);

impl Kin {
    /// Kin 1, the Red Magnetic Dragon.
    pub const FIRST: Kin = Kin(1);

    /// Kin 260, the Yellow Cosmic Sun.
    pub const LAST: Kin = Kin(CYCLE_LEN);

    /// Creates a new `Kin` from a value in 1..=260.
    ///
    /// # Errors
    ///
    /// Returns [`KinError::OutOfCycle`] for the 0 sentinel and
    /// [`KinError::KinOutOfRange`] for anything above 260.
    pub const fn new(kin: u16) -> Result<Self, KinError> {
        match kin {
            0 => Err(KinError::OutOfCycle),
            1..=CYCLE_LEN => Ok(Self(kin)),
            _ => Err(KinError::KinOutOfRange { kin }),
        }
    }

    /// Returns the Kin reached by moving `days` positions from this one,
    /// wrapping around the cycle in both directions.
    pub fn advance(self, days: i64) -> Self {
        let offset = (i64::from(self.index()) + days).rem_euclid(i64::from(CYCLE_LEN));
        Self(offset as u16 + 1)
    }

    /// Returns the following Kin (260 wraps to 1).
    pub fn next(self) -> Self {
        self.advance(1)
    }

    /// Returns the inner Kin value (1..=260).
    pub fn get(self) -> u16 {
        self.0
    }

    /// Returns the 0-based index suitable for array indexing (0..=259).
    pub fn index(self) -> u16 {
        self.0 - 1
    }

    /// Returns the seal, `((kin - 1) mod 20) + 1`.
    pub fn seal(self) -> Seal {
        Seal::from_index(self.index() % u16::from(SEAL_COUNT))
    }

    /// Returns the tone, `((kin - 1) mod 13) + 1`.
    pub fn tone(self) -> Tone {
        Tone::from_index(self.index() % u16::from(TONE_COUNT))
    }

    /// Returns the unique Kin carrying `seal` and `tone`.
    ///
    /// 20 and 13 are coprime, so the Chinese Remainder Theorem gives exactly
    /// one solution in 1..=260 without searching.
    pub fn from_seal_tone(seal: Seal, tone: Tone) -> Self {
        let s = u32::from(seal.index());
        let t = u32::from(tone.index());
        let idx = (u32::from(SEAL_BASIS) * s + u32::from(TONE_BASIS) * t) % u32::from(CYCLE_LEN);
        Self(idx as u16 + 1)
    }

    /// Iterates over all 260 Kin in order.
    pub fn all() -> impl Iterator<Item = Kin> {
        (1..=CYCLE_LEN).map(Kin)
    }
}

impl TryFrom<u16> for Kin {
    type Error = KinError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Kin> for u16 {
    fn from(kin: Kin) -> u16 {
        kin.0
    }
}

impl std::fmt::Display for Kin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Kin {}", self.0)
    }
}

/// Resolves a 0-based seal index and 0-based tone index to their Kin.
///
/// # Errors
///
/// Returns [`KinError::SealOutOfRange`] if `seal_index` is not in 0..=19 and
/// [`KinError::ToneOutOfRange`] if `tone_index` is not in 0..=12. Both report
/// the 1-based number that was implied.
///
/// # Example
///
/// ```
/// use dreamspell_kin::resolve_kin;
///
/// // Seal 1 (index 0), tone 4 (index 3)
/// assert_eq!(resolve_kin(0, 3).unwrap().get(), 121);
/// ```
pub fn resolve_kin(seal_index: u8, tone_index: u8) -> Result<Kin, KinError> {
    if seal_index >= SEAL_COUNT {
        return Err(KinError::SealOutOfRange {
            seal: u16::from(seal_index) + 1,
        });
    }
    if tone_index >= TONE_COUNT {
        return Err(KinError::ToneOutOfRange {
            tone: u16::from(tone_index) + 1,
        });
    }
    Ok(Kin::from_seal_tone(
        Seal::from_index(u16::from(seal_index)),
        Tone::from_index(u16::from(tone_index)),
    ))
}
