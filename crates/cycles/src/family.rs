//! Seal groupings: earth families and time cells.

use dreamspell_kin::{Color, Seal};
use serde::Serialize;

/// The five earth families. Each holds the four seals that share
/// `(seal - 1) mod 5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EarthFamily {
    /// Seals 1, 6, 11, 16.
    Cardinal,
    /// Seals 2, 7, 12, 17.
    Core,
    /// Seals 3, 8, 13, 18.
    Polar,
    /// Seals 4, 9, 14, 19.
    Signal,
    /// Seals 5, 10, 15, 20.
    Gateway,
}

const FAMILIES: [EarthFamily; 5] = [
    EarthFamily::Cardinal,
    EarthFamily::Core,
    EarthFamily::Polar,
    EarthFamily::Signal,
    EarthFamily::Gateway,
];

impl EarthFamily {
    pub fn of(seal: Seal) -> Self {
        FAMILIES[usize::from(seal.index() % 5)]
    }

    /// The four member seals in ascending order.
    pub fn seals(self) -> [Seal; 4] {
        let base = self as i32;
        [0, 5, 10, 15].map(|offset| Seal::wrapping(base + offset))
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Cardinal => "Cardinal",
            Self::Core => "Core",
            Self::Polar => "Polar",
            Self::Signal => "Signal",
            Self::Gateway => "Gateway",
        }
    }
}

impl std::fmt::Display for EarthFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The five time cells of four consecutive seals each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeCell {
    /// Seals 1..=4.
    Input,
    /// Seals 5..=8.
    Store,
    /// Seals 9..=12.
    Process,
    /// Seals 13..=16.
    Output,
    /// Seals 17..=20.
    Matrix,
}

const CELLS: [TimeCell; 5] = [
    TimeCell::Input,
    TimeCell::Store,
    TimeCell::Process,
    TimeCell::Output,
    TimeCell::Matrix,
];

impl TimeCell {
    pub fn of(seal: Seal) -> Self {
        CELLS[usize::from(seal.index() / 4)]
    }

    /// Position of `seal` inside its cell (1..=4).
    pub fn position(seal: Seal) -> u8 {
        seal.index() % 4 + 1
    }

    /// Cell color: Red, White, Blue, Yellow, then Green for the matrix.
    pub fn color(self) -> Color {
        match self {
            Self::Input => Color::Red,
            Self::Store => Color::White,
            Self::Process => Color::Blue,
            Self::Output => Color::Yellow,
            Self::Matrix => Color::Green,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Input => "Input",
            Self::Store => "Store",
            Self::Process => "Process",
            Self::Output => "Output",
            Self::Matrix => "Matrix",
        }
    }
}

impl std::fmt::Display for TimeCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
