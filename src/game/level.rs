//! Static level catalog
//!
//! One compiled-in table, looked up by 1-based level number. Levels only
//! carry layout parameters; colors are assigned fresh at every start.

use thiserror::Error;

use super::colors::PALETTE;

/// Recoverable game errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("level {0} is not in the catalog")]
    UnknownLevel(u32),
}

/// Layout configuration for one level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Level {
    /// Relative angular weight of each sector, in wheel order.
    /// One entry per sector; the wheel scales them to a full turn.
    pub sector_slots: &'static [u32],
    /// Wheel rotation rate, in turns per second
    pub rotation_rate: f32,
    /// Marker flight speed, as the fraction of the firing path covered
    /// per second (1.0 means a one-second flight)
    pub marker_speed: f32,
}

impl Level {
    /// Number of sectors, and therefore of assigned colors
    pub fn sector_count(&self) -> usize {
        self.sector_slots.len()
    }
}

/// The level table. Sector counts rise toward the palette size; later
/// levels also spin faster and subdivide unevenly.
const LEVELS: [Level; 10] = [
    Level { sector_slots: &[1, 1, 1], rotation_rate: 0.06, marker_speed: 3.2 },
    Level { sector_slots: &[1, 1, 1, 1], rotation_rate: 0.08, marker_speed: 3.2 },
    Level { sector_slots: &[1, 1, 1, 1, 1], rotation_rate: 0.10, marker_speed: 3.0 },
    Level { sector_slots: &[2, 1, 1, 2, 1, 1], rotation_rate: 0.11, marker_speed: 3.0 },
    Level { sector_slots: &[1, 1, 2, 1, 1, 1, 2], rotation_rate: 0.13, marker_speed: 2.8 },
    Level { sector_slots: &[1, 2, 1, 1, 2, 1, 1, 1], rotation_rate: 0.15, marker_speed: 2.8 },
    Level { sector_slots: &[1, 1, 1, 2, 1, 1, 1, 2, 1], rotation_rate: 0.17, marker_speed: 2.6 },
    Level { sector_slots: &[2, 1, 1, 1, 2, 1, 1, 1, 1, 2], rotation_rate: 0.19, marker_speed: 2.6 },
    Level { sector_slots: &[1, 1, 2, 1, 1, 1, 2, 1, 1, 1, 1], rotation_rate: 0.22, marker_speed: 2.4 },
    Level { sector_slots: &[1, 2, 1, 1, 1, 2, 1, 1, 2, 1, 1, 1], rotation_rate: 0.25, marker_speed: 2.4 },
];

/// Highest level number in the catalog
pub const LEVEL_COUNT: u32 = LEVELS.len() as u32;

/// Look up a level's configuration. Pure; fails for numbers with no entry.
pub fn level_config(number: u32) -> Result<&'static Level, GameError> {
    if number == 0 {
        return Err(GameError::UnknownLevel(number));
    }
    LEVELS
        .get(number as usize - 1)
        .ok_or(GameError::UnknownLevel(number))
}

// Palette invariant: every level must be colorable without repeats.
const _: () = {
    let mut i = 0;
    while i < LEVELS.len() {
        assert!(LEVELS[i].sector_slots.len() <= PALETTE.len());
        i += 1;
    }
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_one_based() {
        assert_eq!(level_config(0), Err(GameError::UnknownLevel(0)));
        assert_eq!(level_config(1).unwrap().sector_count(), 3);
        assert!(level_config(LEVEL_COUNT).is_ok());
        assert_eq!(
            level_config(LEVEL_COUNT + 1),
            Err(GameError::UnknownLevel(LEVEL_COUNT + 1))
        );
    }

    #[test]
    fn test_every_level_has_sectors_and_motion() {
        for number in 1..=LEVEL_COUNT {
            let level = level_config(number).unwrap();
            assert!(level.sector_count() >= 1);
            assert!(level.rotation_rate > 0.0);
            assert!(level.marker_speed > 0.0);
        }
    }
}
