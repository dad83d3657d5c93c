//! The game-loop controller
//!
//! Owns the one live session, the tick cycle and every state transition.
//! All entry points run on the host's single callback thread; nothing here
//! blocks, and every path that ends a session cancels its timer before a
//! new one can be armed.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::colors::{Color, PALETTE, select_colors};
use super::hit::{HitVerdict, resolve};
use super::level::{GameError, level_config};
use super::session::{GameSession, Outcome, Phase};
use crate::consts::TICK_PERIOD_MS;
use crate::host::{HistorySink, Presenter, Projectile, TickTimer, Wheel};
use crate::progress::Progress;

/// Orchestrates one level attempt at a time against the host collaborators
pub struct GameLoop {
    wheel: Box<dyn Wheel>,
    marker: Box<dyn Projectile>,
    presenter: Box<dyn Presenter>,
    timer: Box<dyn TickTimer>,
    history: Box<dyn HistorySink>,
    progress: Progress,
    rng: Pcg32,
    phase: Phase,
    session: Option<GameSession>,
    /// Level of the most recent session; outlives it for the menu flows
    level_number: u32,
}

impl GameLoop {
    pub fn new(
        wheel: Box<dyn Wheel>,
        marker: Box<dyn Projectile>,
        presenter: Box<dyn Presenter>,
        timer: Box<dyn TickTimer>,
        history: Box<dyn HistorySink>,
        progress: Progress,
        seed: u64,
    ) -> Self {
        Self {
            wheel,
            marker,
            presenter,
            timer,
            history,
            progress,
            rng: Pcg32::seed_from_u64(seed),
            phase: Phase::Idle,
            session: None,
            level_number: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn level_number(&self) -> u32 {
        self.level_number
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    /// Sectors still on the wheel
    pub fn remaining_sectors(&self) -> usize {
        self.wheel.remaining_sector_count()
    }

    /// Color under the hit pointer right now
    pub fn exposed_color(&self) -> Option<Color> {
        self.wheel.exposed_sector_color()
    }

    /// Color of the marker currently loaded or in flight
    pub fn marker_color(&self) -> Option<Color> {
        self.session.as_ref().map(|_| self.marker.active_color())
    }

    /// Begin a level. Replaces any running session; its timer is cancelled
    /// before the new one is armed. An unknown level rejects without
    /// touching whatever is currently running.
    pub fn start(&mut self, number: u32) -> Result<(), GameError> {
        let level = level_config(number)?;
        self.teardown();

        let colors = select_colors(&mut self.rng, &PALETTE, level.sector_count());
        self.wheel.render_sectors(level, &colors);
        self.marker.render_projectile(level, &colors);

        let now = self.timer.now_ms();
        let handle = self.timer.schedule(TICK_PERIOD_MS);
        self.session = Some(GameSession::new(number, colors, now, handle));
        self.level_number = number;
        self.phase = Phase::Playing;

        self.history.replace_current_entry(
            &format!("Level {number}"),
            &format!("#level/{number}"),
            number,
        );
        self.presenter.show_play_screen();
        log::info!("level {number} started with {} sectors", level.sector_count());
        Ok(())
    }

    /// One firing of the recurring timer. Ticks queued behind a cancellation
    /// are absorbed here with no observable effect.
    pub fn tick(&mut self) {
        debug_assert_eq!(
            self.session.is_some(),
            matches!(self.phase, Phase::Playing | Phase::Paused),
            "session/phase out of sync"
        );
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let now = self.timer.now_ms();
        let delta = now.saturating_sub(session.last_tick);
        // Always moves, paused or not, so resuming never replays paused time
        session.last_tick = now;
        if session.paused {
            return;
        }

        let fire_armed = session.fire_armed;
        self.wheel.advance_rotation(delta);
        if fire_armed {
            self.marker.advance_projectile(delta);
            if self.marker.has_arrived() {
                self.on_arrival();
            }
        }
    }

    /// The single external fire trigger. Ignored while paused or while a
    /// flight is armed or pending resolution; stray and doubled triggers
    /// are expected user input, not errors.
    pub fn fire(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.paused || session.fire_armed {
            log::debug!("fire trigger ignored");
            return;
        }
        session.fire_armed = true;
        log::debug!("marker fired: {:?}", self.marker.active_color());
    }

    pub fn pause(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.paused {
            return;
        }
        session.paused = true;
        self.phase = Phase::Paused;

        let number = self.level_number;
        self.history.replace_current_entry(
            &format!("Level {number} | Paused"),
            &format!("#level/{number}/paused"),
            number,
        );
        self.presenter.show_pause_screen();
    }

    pub fn resume(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if !session.paused {
            return;
        }
        session.paused = false;
        self.phase = Phase::Playing;

        let number = self.level_number;
        self.history.replace_current_entry(
            &format!("Level {number}"),
            &format!("#level/{number}"),
            number,
        );
        self.presenter.show_play_screen();
    }

    /// Cancel the session and return to Idle. Collaborator visuals are
    /// cleared here, not on the win/lose transition.
    pub fn reset(&mut self) {
        self.teardown();
        self.phase = Phase::Idle;
    }

    /// Start from the persisted level, falling back to level 1 when nothing
    /// usable is stored (including progress past the end of the catalog).
    pub fn resume_from_saved_level(&mut self) -> Result<(), GameError> {
        let number = self.progress.current_level().unwrap_or(1);
        match self.start(number) {
            Err(GameError::UnknownLevel(_)) if number != 1 => {
                log::warn!("saved level {number} unknown, falling back to level 1");
                self.start(1)
            }
            result => result,
        }
    }

    /// Wipe saved progress and start over from level 1
    pub fn new_game(&mut self) -> Result<(), GameError> {
        self.progress.clear();
        self.start(1)
    }

    /// From the win screen: move on to the next level and persist it
    pub fn next_level(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::Won {
            return Ok(());
        }
        let next = self.level_number + 1;
        self.start(next)?;
        self.progress.advance(next);
        Ok(())
    }

    /// From the lose screen: replay the level just failed
    pub fn try_again(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::Lost {
            return Ok(());
        }
        self.start(self.level_number)
    }

    /// From the win screen: persist the next level and go back to the menu
    pub fn exit_after_win(&mut self) {
        if self.phase != Phase::Won {
            return;
        }
        self.progress.advance(self.level_number + 1);
        self.to_start_screen();
    }

    /// Leave whatever is happening and go back to the menu
    pub fn exit_to_menu(&mut self) {
        self.teardown();
        self.to_start_screen();
    }

    /// The marker reached the wheel: resolve this flight exactly once
    fn on_arrival(&mut self) {
        debug_assert!(
            self.session.as_ref().is_some_and(|s| s.fire_armed),
            "marker arrival without an armed flight"
        );

        let exposed = self.wheel.exposed_sector_color();
        let marker = self.marker.active_color();
        match resolve(exposed, marker) {
            HitVerdict::Hit => {
                if let Some(session) = self.session.as_mut() {
                    session.fire_armed = false;
                }
                self.wheel.remove_exposed_sector();
                self.marker.reset_flight();
                let remaining = self.wheel.remaining_sector_count();
                log::debug!("hit {marker:?}, {remaining} sectors remain");
                if remaining == 0 {
                    self.settle(Outcome::Won);
                }
            }
            HitVerdict::Miss => {
                log::debug!("miss: {marker:?} against {exposed:?}");
                self.settle(Outcome::Lost);
            }
        }
    }

    /// Terminal transition: cancel the timer, drop the session and notify.
    /// The wheel keeps its sectors until `reset`/`start` clears them.
    fn settle(&mut self, outcome: Outcome) {
        debug_assert!(outcome != Outcome::Continuing, "settling a live session");
        let Some(session) = self.session.take() else {
            return;
        };
        self.timer.cancel(session.timer);

        let number = self.level_number;
        match outcome {
            Outcome::Won => {
                self.phase = Phase::Won;
                self.history.replace_current_entry(
                    &format!("Level {number} | Win"),
                    &format!("#level/{number}/win"),
                    number,
                );
                self.presenter.show_win_screen();
                log::info!("level {number} cleared");
            }
            Outcome::Lost => {
                self.phase = Phase::Lost;
                self.history.replace_current_entry(
                    &format!("Level {number} | Lose"),
                    &format!("#level/{number}/lose"),
                    number,
                );
                self.presenter.show_lose_screen();
                log::info!("level {number} lost");
            }
            Outcome::Continuing => {}
        }
    }

    /// Cancel any live timer and clear collaborator visuals
    fn teardown(&mut self) {
        if let Some(session) = self.session.take() {
            self.timer.cancel(session.timer);
        }
        self.marker.reset_flight();
        self.wheel.clear_sectors();
    }

    fn to_start_screen(&mut self) {
        self.phase = Phase::Idle;
        let continuable = self.progress.current_level().is_some();
        self.presenter.show_start_screen();
        self.presenter.reflect_continuable(continuable);
    }
}
