//! The Dreamspell color rotation.

use serde::Serialize;

/// One of the five Dreamspell colors.
///
/// Red, White, Blue and Yellow rotate through every four-fold structure
/// (seals, harmonics, castles, seasons). Green only appears as the fifth
/// castle and on the day out of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    White,
    Blue,
    Yellow,
    Green,
}

/// The four-color rotation in order.
pub const ROTATION: [Color; 4] = [Color::Red, Color::White, Color::Blue, Color::Yellow];

impl Color {
    /// Returns the color at position `n` of the Red/White/Blue/Yellow rotation.
    pub fn rotation(n: usize) -> Self {
        ROTATION[n % 4]
    }

    /// Returns the lowercase color name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::White => "white",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Green => "green",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_wraps() {
        assert_eq!(Color::rotation(0), Color::Red);
        assert_eq!(Color::rotation(3), Color::Yellow);
        assert_eq!(Color::rotation(4), Color::Red);
        assert_eq!(Color::rotation(257), Color::White);
    }

    #[test]
    fn rotation_never_green() {
        for n in 0..100 {
            assert_ne!(Color::rotation(n), Color::Green);
        }
    }

    #[test]
    fn display_is_lowercase() {
        assert_eq!(Color::Blue.to_string(), "blue");
        assert_eq!(Color::Green.to_string(), "green");
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Color::Yellow).unwrap();
        assert_eq!(json, "\"yellow\"");
    }
}
