//! All cycle positions of a Kin in one record.

use dreamspell_kin::{Kin, KinError};
use serde::Serialize;

use crate::family::{EarthFamily, TimeCell};
use crate::position::{Castle, Chromatic, Harmonic, Season, Spin, Wavespell};

/// Where a Kin sits in every sub-cycle of the Tzolkin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CycleAnnotation {
    pub kin: Kin,
    pub harmonic: Harmonic,
    pub chromatic: Chromatic,
    pub wavespell: Wavespell,
    pub castle: Castle,
    pub season: Season,
    pub spin: Spin,
    pub family: EarthFamily,
    pub time_cell: TimeCell,
}

impl CycleAnnotation {
    pub fn of(kin: Kin) -> Self {
        let seal = kin.seal();
        Self {
            kin,
            harmonic: Harmonic::of(kin),
            chromatic: Chromatic::of(kin),
            wavespell: Wavespell::of(kin),
            castle: Castle::of(kin),
            season: Season::of(kin),
            spin: Spin::of(kin),
            family: EarthFamily::of(seal),
            time_cell: TimeCell::of(seal),
        }
    }
}

/// Annotates a raw Kin number.
///
/// # Errors
///
/// Returns [`KinError::OutOfCycle`] for 0 and [`KinError::KinOutOfRange`]
/// above 260.
///
/// # Example
///
/// ```
/// use dreamspell_cycles::annotate;
///
/// let a = annotate(121).unwrap();
/// assert_eq!(a.harmonic.index, 31);
/// assert_eq!(a.wavespell.start.get(), 118);
/// assert_eq!(a.castle.index, 2);
/// ```
pub fn annotate(kin: u16) -> Result<CycleAnnotation, KinError> {
    Ok(CycleAnnotation::of(Kin::new(kin)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotate_rejects_outside_values() {
        assert_eq!(annotate(0), Err(KinError::OutOfCycle));
        assert_eq!(annotate(300), Err(KinError::KinOutOfRange { kin: 300 }));
    }

    #[test]
    fn kin_1_starts_everything() {
        let a = annotate(1).unwrap();
        assert_eq!(a.harmonic.index, 1);
        assert_eq!(a.chromatic.index, 1);
        assert_eq!(a.wavespell.index, 1);
        assert_eq!(a.castle.day, 1);
        assert_eq!(a.season.day, 1);
        assert_eq!(a.family, EarthFamily::Cardinal);
        assert_eq!(a.time_cell, TimeCell::Input);
    }

    #[test]
    fn serialized_shape() {
        let value = serde_json::to_value(annotate(121).unwrap()).unwrap();
        assert_eq!(value["kin"], 121);
        assert_eq!(value["wavespell"]["seal"], 18);
        assert_eq!(value["wavespell"]["color"], "white");
        assert_eq!(value["castle"]["color"], "blue");
        assert_eq!(value["family"], "cardinal");
        assert_eq!(value["spin"], "first");
        assert_eq!(value["wavespell"]["end"], 130);
    }
}
