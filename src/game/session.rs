//! Session state and phase types
//!
//! A `GameSession` exists only while a level is live; win, lose and reset
//! all destroy it (and its timer) before anything else happens.

use serde::{Deserialize, Serialize};

use super::colors::Color;
use crate::host::TimerHandle;

/// Where the controller's state machine currently sits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No session; start screen territory
    Idle,
    /// Live session, ticking
    Playing,
    /// Live session, ticks are no-ops
    Paused,
    /// Terminal: all sectors cleared
    Won,
    /// Terminal: wrong-color hit
    Lost,
}

/// Per-tick outcome of the active session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Continuing,
    Won,
    Lost,
}

/// Mutable state of one level attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    /// 1-based catalog level number
    pub level_number: u32,
    /// Ticks still fire while paused, but advance nothing
    pub paused: bool,
    /// Timestamp of the previous tick, in host milliseconds
    pub last_tick: u64,
    /// Set while a marker flight is in progress or pending resolution;
    /// doubles as the once-per-flight arrival latch
    pub fire_armed: bool,
    /// Colors assigned to this attempt's sectors, in wheel order
    pub colors: Vec<Color>,
    /// Handle of the recurring tick timer
    pub timer: TimerHandle,
}

impl GameSession {
    pub fn new(level_number: u32, colors: Vec<Color>, now: u64, timer: TimerHandle) -> Self {
        Self {
            level_number,
            paused: false,
            last_tick: now,
            fire_armed: false,
            colors,
            timer,
        }
    }
}
