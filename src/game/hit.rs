//! Hit resolution
//!
//! Pure color comparison; the controller applies the consequences.

use super::colors::Color;

/// Result of a marker arriving at the wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitVerdict {
    /// Marker color matches the exposed sector
    Hit,
    /// Wrong color, or no sector exposed under the pointer
    Miss,
}

/// Compare the exposed sector color against the marker's color.
///
/// `None` means a cleared gap is under the pointer at the moment of arrival;
/// that always misses.
pub fn resolve(exposed: Option<Color>, marker: Color) -> HitVerdict {
    match exposed {
        Some(color) if color == marker => HitVerdict::Hit,
        _ => HitVerdict::Miss,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::colors::PALETTE;

    #[test]
    fn test_same_color_hits() {
        for color in PALETTE {
            assert_eq!(resolve(Some(color), color), HitVerdict::Hit);
        }
    }

    #[test]
    fn test_different_color_misses() {
        assert_eq!(resolve(Some(Color::Red), Color::Blue), HitVerdict::Miss);
        assert_eq!(resolve(Some(Color::Blue), Color::Red), HitVerdict::Miss);
    }

    #[test]
    fn test_exposed_gap_misses() {
        assert_eq!(resolve(None, Color::Amber), HitVerdict::Miss);
    }
}
