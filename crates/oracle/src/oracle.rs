//! The five-part oracle of a Kin.

use dreamspell_kin::{Kin, KinError, Seal};
use serde::Serialize;

/// Seal shift of the guide power, indexed by `tone_index % 5`.
///
/// Tones 1, 6, 11 are guided by their own seal; the other groups move
/// 12, 4, 16 or 8 seals forward. Every shift is a multiple of four, so the
/// guide always shares the destiny's color.
pub const GUIDE_SHIFT: [u8; 5] = [0, 12, 4, 16, 8];

/// Seal distance between a Kin and its antipode.
const ANTIPODE_SHIFT: i32 = 10;

/// Destiny Kin with its four oracle partners.
///
/// Guide, analog and antipode keep the destiny's tone and change only the
/// seal. The occult is the mirror position in the cycle, so destiny and
/// occult always sum to 261.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Oracle {
    pub destiny: Kin,
    pub guide: Kin,
    pub analog: Kin,
    pub antipode: Kin,
    pub occult: Kin,
}

impl Oracle {
    /// Resolves the oracle of `destiny`.
    pub fn of(destiny: Kin) -> Self {
        Self {
            destiny,
            guide: guide(destiny),
            analog: analog(destiny),
            antipode: antipode(destiny),
            occult: occult(destiny),
        }
    }

    /// Returns the five Kin in display order: destiny, guide, analog,
    /// antipode, occult.
    pub fn kins(&self) -> [Kin; 5] {
        [self.destiny, self.guide, self.analog, self.antipode, self.occult]
    }
}

/// Replaces the seal of `kin`, keeping its tone.
fn with_seal(kin: Kin, seal: Seal) -> Kin {
    Kin::from_seal_tone(seal, kin.tone())
}

/// Guide: same tone, seal moved by the shift of the tone's group.
pub fn guide(kin: Kin) -> Kin {
    let shift = GUIDE_SHIFT[usize::from(kin.tone().index() % 5)];
    with_seal(kin, Seal::wrapping(i32::from(kin.seal().index()) + i32::from(shift)))
}

/// Analog: same tone, seal index mirrored as `19 - s`.
pub fn analog(kin: Kin) -> Kin {
    with_seal(kin, Seal::wrapping(19 - i32::from(kin.seal().index())))
}

/// Antipode: same tone, seal ten positions away.
pub fn antipode(kin: Kin) -> Kin {
    with_seal(kin, Seal::wrapping(i32::from(kin.seal().index()) + ANTIPODE_SHIFT))
}

/// Occult: `261 - kin`.
pub fn occult(kin: Kin) -> Kin {
    // 1 and 260 swap, the result never leaves the cycle.
    Kin::LAST.advance(-i64::from(kin.index()))
}

/// Resolves the oracle of a raw Kin number.
///
/// # Errors
///
/// Returns [`KinError::OutOfCycle`] for 0 (the value reported for
/// February 29) and [`KinError::KinOutOfRange`] above 260.
///
/// # Example
///
/// ```
/// use dreamspell_oracle::compute_oracle;
///
/// let oracle = compute_oracle(121).unwrap();
/// assert_eq!(oracle.guide.get(), 17);
/// assert_eq!(oracle.antipode.get(), 251);
/// assert_eq!(oracle.occult.get(), 140);
/// ```
pub fn compute_oracle(kin: u16) -> Result<Oracle, KinError> {
    Ok(Oracle::of(Kin::new(kin)?))
}
