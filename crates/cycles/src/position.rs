//! Fixed-length sub-cycles of the Tzolkin.
//!
//! Each sub-cycle splits the 260 Kin into consecutive blocks of equal length.
//! `index` numbers the block and `position` (or `day`) is the 1-based offset
//! inside it.

use dreamspell_kin::{Color, Kin, Seal};
use serde::Serialize;

/// Length of a harmonic block.
pub const HARMONIC_LEN: u16 = 4;
/// Length of a chromatic block.
pub const CHROMATIC_LEN: u16 = 5;
/// Length of a wavespell.
pub const WAVESPELL_LEN: u16 = 13;
/// Length of a castle.
pub const CASTLE_LEN: u16 = 52;
/// Length of a season.
pub const SEASON_LEN: u16 = 65;
/// Length of one galactic spin, half the cycle.
pub const SPIN_LEN: u16 = 130;

/// Position in the 65 harmonics of four Kin each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Harmonic {
    /// 1..=65
    pub index: u16,
    /// 1..=4
    pub position: u16,
    pub color: Color,
}

impl Harmonic {
    pub fn of(kin: Kin) -> Self {
        let index = kin.index() / HARMONIC_LEN + 1;
        Self {
            index,
            position: kin.index() % HARMONIC_LEN + 1,
            color: Color::rotation(usize::from(index - 1)),
        }
    }
}

/// Position in the 52 chromatics of five Kin each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Chromatic {
    /// 1..=52
    pub index: u16,
    /// 1..=5
    pub position: u16,
    pub color: Color,
}

impl Chromatic {
    pub fn of(kin: Kin) -> Self {
        let block = kin.index() / CHROMATIC_LEN;
        Self {
            index: block + 1,
            position: kin.index() % CHROMATIC_LEN + 1,
            color: Color::rotation(usize::from(block)),
        }
    }
}

/// Position in the 20 wavespells of thirteen Kin each.
///
/// A wavespell takes its identity and color from the seal of its first Kin,
/// the one on tone 1. Its last Kin, on tone 13, is the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Wavespell {
    /// 1..=20
    pub index: u16,
    /// 1..=13, equal to the tone of the Kin.
    pub position: u16,
    pub start: Kin,
    pub end: Kin,
    pub seal: Seal,
    pub color: Color,
}

impl Wavespell {
    pub fn of(kin: Kin) -> Self {
        let block = kin.index() / WAVESPELL_LEN;
        let start = Kin::FIRST.advance(i64::from(block * WAVESPELL_LEN));
        let seal = start.seal();
        Self {
            index: block + 1,
            position: kin.index() % WAVESPELL_LEN + 1,
            start,
            end: start.advance(i64::from(WAVESPELL_LEN - 1)),
            seal,
            color: seal.color(),
        }
    }

    /// Percentage of the wavespell completed on this day, from 100/13 on
    /// day 1 to 100 on day 13.
    pub fn progress(&self) -> f64 {
        f64::from(self.position) / f64::from(WAVESPELL_LEN) * 100.0
    }
}

/// Castle colors in cycle order; the fifth castle is Green.
const CASTLE_COLORS: [Color; 5] = [
    Color::Red,
    Color::White,
    Color::Blue,
    Color::Yellow,
    Color::Green,
];

const CASTLE_NAMES: [&str; 5] = ["Turning", "Crossing", "Burning", "Giving", "Enchantment"];

/// Position in the five castles of 52 Kin (four wavespells) each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Castle {
    /// 0..=4
    pub index: u16,
    /// 1..=52
    pub day: u16,
    /// Wavespell within the castle, 1..=4.
    pub wavespell: u16,
    pub start: Kin,
    pub color: Color,
}

impl Castle {
    pub fn of(kin: Kin) -> Self {
        let index = kin.index() / CASTLE_LEN;
        let day = kin.index() % CASTLE_LEN + 1;
        Self {
            index,
            day,
            wavespell: (day - 1) / WAVESPELL_LEN + 1,
            start: Kin::FIRST.advance(i64::from(index * CASTLE_LEN)),
            color: CASTLE_COLORS[usize::from(index)],
        }
    }

    /// Returns the castle's name, "Turning" through "Enchantment".
    pub fn name(&self) -> &'static str {
        CASTLE_NAMES[usize::from(self.index)]
    }

    /// The four wavespells of this castle in order. Their colors run Red,
    /// White, Blue, Yellow in every castle.
    pub fn wavespells(&self) -> [Wavespell; 4] {
        [0u16, 1, 2, 3].map(|i| Wavespell::of(self.start.advance(i64::from(i * WAVESPELL_LEN))))
    }
}

const SEASON_DIRECTIONS: [&str; 4] = ["East", "North", "West", "South"];

/// Position in the four seasons of 65 Kin each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Season {
    /// 0..=3
    pub index: u16,
    /// 1..=65
    pub day: u16,
    pub color: Color,
}

impl Season {
    pub fn of(kin: Kin) -> Self {
        let index = kin.index() / SEASON_LEN;
        Self {
            index,
            day: kin.index() % SEASON_LEN + 1,
            color: Color::rotation(usize::from(index)),
        }
    }

    /// Returns the season's cardinal direction.
    pub fn direction(&self) -> &'static str {
        SEASON_DIRECTIONS[usize::from(self.index)]
    }
}

/// Half of the 260-day cycle: Kin 1..=130 or 131..=260.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Spin {
    First,
    Second,
}

impl Spin {
    pub fn of(kin: Kin) -> Self {
        if kin.get() <= SPIN_LEN {
            Self::First
        } else {
            Self::Second
        }
    }
}

impl std::fmt::Display for Spin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::First => f.write_str("first"),
            Self::Second => f.write_str("second"),
        }
    }
}
