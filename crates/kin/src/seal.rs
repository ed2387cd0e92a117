//! Seal and tone newtypes.

use serde::Serialize;

use crate::color::Color;
use crate::error::KinError;

/// Number of seals in the Tzolkin.
pub const SEAL_COUNT: u8 = 20;

/// Number of tones in the Tzolkin.
pub const TONE_COUNT: u8 = 13;

/// One of the 20 solar seals (1..=20).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Seal(u8);

/// One of the 13 galactic tones (1..=13).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Tone(u8);

impl Seal {
    /// Creates a new `Seal` from its 1-based number.
    ///
    /// # Errors
    ///
    /// Returns [`KinError::SealOutOfRange`] if `seal` is not in 1..=20.
    pub fn new(seal: u8) -> Result<Self, KinError> {
        if !(1..=SEAL_COUNT).contains(&seal) {
            return Err(KinError::SealOutOfRange {
                seal: u16::from(seal),
            });
        }
        Ok(Self(seal))
    }

    /// Creates a `Seal` from a 0-based index already reduced below 20.
    pub(crate) fn from_index(index: u16) -> Self {
        debug_assert!(index < u16::from(SEAL_COUNT));
        Self(index as u8 + 1)
    }

    /// Returns the seal at 0-based `index` taken modulo 20, so negative and
    /// oversized indices wrap around the seal ring.
    ///
    /// ```
    /// use dreamspell_kin::Seal;
    ///
    /// assert_eq!(Seal::wrapping(20).get(), 1);
    /// assert_eq!(Seal::wrapping(-1).get(), 20);
    /// ```
    pub fn wrapping(index: i32) -> Self {
        Self::from_index(index.rem_euclid(i32::from(SEAL_COUNT)) as u16)
    }

    /// Returns the seal number (1..=20).
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the 0-based seal index (0..=19).
    pub fn index(self) -> u8 {
        self.0 - 1
    }

    /// Returns the seal color: Red, White, Blue, Yellow repeating from seal 1.
    pub fn color(self) -> Color {
        Color::rotation(usize::from(self.index()))
    }

    /// Iterates over all 20 seals in order.
    pub fn all() -> impl Iterator<Item = Seal> {
        (1..=SEAL_COUNT).map(Seal)
    }
}

impl Tone {
    /// Creates a new `Tone` from its 1-based number.
    ///
    /// # Errors
    ///
    /// Returns [`KinError::ToneOutOfRange`] if `tone` is not in 1..=13.
    pub fn new(tone: u8) -> Result<Self, KinError> {
        if !(1..=TONE_COUNT).contains(&tone) {
            return Err(KinError::ToneOutOfRange {
                tone: u16::from(tone),
            });
        }
        Ok(Self(tone))
    }

    pub(crate) fn from_index(index: u16) -> Self {
        debug_assert!(index < u16::from(TONE_COUNT));
        Self(index as u8 + 1)
    }

    /// Returns the tone number (1..=13).
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the 0-based tone index (0..=12).
    pub fn index(self) -> u8 {
        self.0 - 1
    }

    /// Iterates over all 13 tones in order.
    pub fn all() -> impl Iterator<Item = Tone> {
        (1..=TONE_COUNT).map(Tone)
    }
}

impl TryFrom<u8> for Seal {
    type Error = KinError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<u8> for Tone {
    type Error = KinError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for Seal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "seal {}", self.0)
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tone {}", self.0)
    }
}
