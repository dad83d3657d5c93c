//! Game-loop state machine
//!
//! All game rules live here. This module owns no rendering, storage or real
//! timers; it drives the collaborator seams in [`crate::host`]:
//! - One level attempt at a time, with its own timer and color assignment
//! - Fixed-cadence ticks advance rotation and marker flight
//! - Arrival resolves to exactly one Hit/Miss per flight

pub mod colors;
pub mod control;
pub mod hit;
pub mod level;
pub mod session;

pub use colors::{Color, PALETTE, select_colors};
pub use control::GameLoop;
pub use hit::{HitVerdict, resolve};
pub use level::{GameError, LEVEL_COUNT, Level, level_config};
pub use session::{GameSession, Outcome, Phase};
