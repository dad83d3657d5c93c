//! Collaborator interfaces the host environment implements
//!
//! The core never touches a screen, a storage backend or a real timer; it
//! talks to these seams. Hosts wire them to the DOM, a terminal, or the
//! in-memory doubles in [`crate::platform`] and [`crate::model`].

use serde::{Deserialize, Serialize};

use crate::game::{Color, Level};

/// Opaque reference to a recurring timer armed through [`TickTimer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerHandle(pub u64);

/// Clock and tick scheduling, as one seam.
///
/// The host must call [`crate::game::GameLoop::tick`] on every firing of an
/// armed handle until that handle is cancelled. `now_ms` only has to be
/// monotonic; its origin is the host's business.
pub trait TickTimer {
    fn now_ms(&self) -> u64;
    /// Arm a recurring timer with the given period
    fn schedule(&mut self, period_ms: u64) -> TimerHandle;
    /// Cancel a previously armed timer; firings already queued may still be
    /// delivered and must be absorbed by the receiver
    fn cancel(&mut self, handle: TimerHandle);
}

/// The rotating wheel: rendering plus the rotation-stepping contract
pub trait Wheel {
    /// Lay out one sector per assigned color using the level's slot weights
    fn render_sectors(&mut self, level: &Level, colors: &[Color]);
    /// Advance rotation by elapsed wall time
    fn advance_rotation(&mut self, delta_ms: u64);
    /// Color of the sector currently under the hit pointer, if any
    fn exposed_sector_color(&self) -> Option<Color>;
    /// Remove the sector currently under the hit pointer
    fn remove_exposed_sector(&mut self);
    fn remaining_sector_count(&self) -> usize;
    /// Drop all sectors (level reset/exit)
    fn clear_sectors(&mut self);
}

/// The fired marker: rendering plus the flight-stepping contract
pub trait Projectile {
    /// Prepare marker state for a fresh level
    fn render_projectile(&mut self, level: &Level, colors: &[Color]);
    /// Advance the active flight by elapsed wall time
    fn advance_projectile(&mut self, delta_ms: u64);
    /// True once the active flight has reached the wheel
    fn has_arrived(&self) -> bool;
    /// Color of the marker currently loaded or in flight
    fn active_color(&self) -> Color;
    /// Discard flight progress and load the next marker
    fn reset_flight(&mut self);
}

/// Screen/menu presentation
pub trait Presenter {
    fn show_play_screen(&mut self);
    fn show_pause_screen(&mut self);
    fn show_win_screen(&mut self);
    fn show_lose_screen(&mut self);
    fn show_start_screen(&mut self);
    /// Tell the start screen whether a saved level exists to continue from
    fn reflect_continuable(&mut self, continuable: bool);
}

/// Persistent key-value storage (LocalStorage on the web)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// Navigation-history bookkeeping. Human-visible URL/back-button state only;
/// nothing here feeds back into game rules.
pub trait HistorySink {
    fn replace_current_entry(&mut self, label: &str, path: &str, level: u32);
}
