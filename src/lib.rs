//! Spinshot - a color-matching reflex game core
//!
//! Core modules:
//! - `game`: Game-loop state machine (levels, color assignment, hit resolution)
//! - `host`: Collaborator interfaces the host environment implements
//! - `model`: Headless wheel/marker stepping models
//! - `progress`: Persisted "furthest level reached" bookkeeping
//! - `platform`: Browser/native host adapters

pub mod game;
pub mod host;
pub mod model;
pub mod platform;
pub mod progress;

pub use game::{Color, GameError, GameLoop, HitVerdict, Level, Outcome, PALETTE, Phase};
pub use progress::Progress;

/// Game configuration constants
pub mod consts {
    /// Nominal period of the recurring game tick, in milliseconds
    pub const TICK_PERIOD_MS: u64 = 25;

    /// Angular position of the hit pointer, in turns from the wheel's origin.
    /// The exposed sector is whichever sector sits under this point.
    pub const POINTER_TURN: f32 = 0.0;
}

/// Normalize a position in turns to [0, 1)
#[inline]
pub fn normalize_turn(mut turn: f32) -> f32 {
    turn = turn.fract();
    if turn < 0.0 {
        turn += 1.0;
    }
    turn
}
