//! Headless wheel and marker models
//!
//! Reference implementations of the stepping contracts in [`crate::host`].
//! They carry geometry only, no pixels: a rendering host draws from their
//! state, and the native demo and tests drive them as-is.

use crate::consts::POINTER_TURN;
use crate::game::{Color, Level};
use crate::host::{Projectile, Wheel};
use crate::normalize_turn;

/// One colored wedge, in wheel-local turns
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorArc {
    pub color: Color,
    /// Leading edge, in turns from the wheel origin
    pub start: f32,
    /// Angular width, in turns
    pub span: f32,
}

/// A slot-weighted sector wheel spinning at the level's rotation rate.
///
/// Removing a sector leaves a gap: the survivors keep their angles, so the
/// pointer can sit over cleared space and expose nothing.
#[derive(Debug, Default)]
pub struct SectorWheel {
    sectors: Vec<SectorArc>,
    /// Current rotation, in turns
    rotation: f32,
    /// Turns per second
    rate: f32,
}

impl SectorWheel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn sectors(&self) -> &[SectorArc] {
        &self.sectors
    }

    /// Index of the sector under the hit pointer, if any
    fn exposed_index(&self) -> Option<usize> {
        // Pointer position in the wheel's own frame
        let pointer = normalize_turn(POINTER_TURN - self.rotation);
        self.sectors.iter().position(|sector| {
            let offset = normalize_turn(pointer - sector.start);
            offset < sector.span
        })
    }
}

impl Wheel for SectorWheel {
    fn render_sectors(&mut self, level: &Level, colors: &[Color]) {
        debug_assert_eq!(level.sector_count(), colors.len());
        let total: u32 = level.sector_slots.iter().sum();
        let mut start = 0.0;
        self.sectors = level
            .sector_slots
            .iter()
            .zip(colors)
            .map(|(&weight, &color)| {
                let span = weight as f32 / total as f32;
                let sector = SectorArc { color, start, span };
                start += span;
                sector
            })
            .collect();
        self.rotation = 0.0;
        self.rate = level.rotation_rate;
    }

    fn advance_rotation(&mut self, delta_ms: u64) {
        self.rotation = normalize_turn(self.rotation + self.rate * delta_ms as f32 / 1000.0);
    }

    fn exposed_sector_color(&self) -> Option<Color> {
        self.exposed_index().map(|i| self.sectors[i].color)
    }

    fn remove_exposed_sector(&mut self) {
        if let Some(i) = self.exposed_index() {
            self.sectors.remove(i);
        }
    }

    fn remaining_sector_count(&self) -> usize {
        self.sectors.len()
    }

    fn clear_sectors(&mut self) {
        self.sectors.clear();
        self.rotation = 0.0;
    }
}

/// Marker launcher: one flight at a time, colors cycling one per flight
#[derive(Debug, Default)]
pub struct MarkerGun {
    colors: Vec<Color>,
    next: usize,
    /// Flight progress in [0, 1]; 1.0 is the wheel's edge
    path: f32,
    /// Path fraction covered per second
    speed: f32,
}

impl MarkerGun {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(&self) -> f32 {
        self.path
    }
}

impl Projectile for MarkerGun {
    fn render_projectile(&mut self, level: &Level, colors: &[Color]) {
        self.colors = colors.to_vec();
        self.next = 0;
        self.path = 0.0;
        self.speed = level.marker_speed;
    }

    fn advance_projectile(&mut self, delta_ms: u64) {
        self.path = (self.path + self.speed * delta_ms as f32 / 1000.0).min(1.0);
    }

    fn has_arrived(&self) -> bool {
        self.path >= 1.0
    }

    fn active_color(&self) -> Color {
        self.colors[self.next]
    }

    fn reset_flight(&mut self) {
        self.path = 0.0;
        if !self.colors.is_empty() {
            self.next = (self.next + 1) % self.colors.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::level_config;

    fn colors(n: usize) -> Vec<Color> {
        crate::game::PALETTE[..n].to_vec()
    }

    #[test]
    fn test_sectors_cover_one_full_turn() {
        let level = level_config(4).unwrap();
        let mut wheel = SectorWheel::new();
        wheel.render_sectors(level, &colors(level.sector_count()));

        assert_eq!(wheel.remaining_sector_count(), level.sector_count());
        let covered: f32 = wheel.sectors().iter().map(|s| s.span).sum();
        assert!((covered - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_exposure_follows_rotation() {
        // Level 2: four equal sectors, 0.08 turns/s
        let level = level_config(2).unwrap();
        let palette = colors(4);
        let mut wheel = SectorWheel::new();
        wheel.render_sectors(level, &palette);

        assert_eq!(wheel.exposed_sector_color(), Some(palette[0]));

        // A quarter turn brings the last sector under the pointer
        wheel.advance_rotation(3125);
        assert!((wheel.rotation() - 0.25).abs() < 1e-3);
        assert_eq!(wheel.exposed_sector_color(), Some(palette[3]));
    }

    #[test]
    fn test_removal_leaves_a_gap() {
        let level = level_config(2).unwrap();
        let palette = colors(4);
        let mut wheel = SectorWheel::new();
        wheel.render_sectors(level, &palette);

        wheel.remove_exposed_sector();
        assert_eq!(wheel.remaining_sector_count(), 3);
        // The survivors keep their angles, so the pointer now sits over
        // cleared space
        assert_eq!(wheel.exposed_sector_color(), None);
    }

    #[test]
    fn test_remove_without_exposure_is_a_no_op() {
        let level = level_config(2).unwrap();
        let palette = colors(4);
        let mut wheel = SectorWheel::new();
        wheel.render_sectors(level, &palette);

        wheel.remove_exposed_sector();
        wheel.remove_exposed_sector();
        assert_eq!(wheel.remaining_sector_count(), 3);
    }

    #[test]
    fn test_marker_arrives_after_its_flight_time() {
        // Level 1: 3.2 path fractions per second, ~313 ms a flight
        let level = level_config(1).unwrap();
        let mut gun = MarkerGun::new();
        gun.render_projectile(level, &colors(3));

        gun.advance_projectile(200);
        assert!(!gun.has_arrived());
        gun.advance_projectile(200);
        assert!(gun.has_arrived());
        assert_eq!(gun.path(), 1.0);
    }

    #[test]
    fn test_reset_cycles_to_the_next_color() {
        let level = level_config(1).unwrap();
        let palette = colors(3);
        let mut gun = MarkerGun::new();
        gun.render_projectile(level, &palette);

        assert_eq!(gun.active_color(), palette[0]);
        gun.reset_flight();
        assert_eq!(gun.active_color(), palette[1]);
        assert!(!gun.has_arrived());
        gun.reset_flight();
        gun.reset_flight();
        assert_eq!(gun.active_color(), palette[0]);
    }
}
