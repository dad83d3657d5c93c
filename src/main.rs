//! Spinshot entry point
//!
//! The library is the product; this binary autoplays one level headlessly so
//! the loop can be watched end to end from a terminal. Browser shells link
//! the cdylib and drive the loop themselves.

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use spinshot::consts::TICK_PERIOD_MS;
    use spinshot::host::Presenter;
    use spinshot::model::{MarkerGun, SectorWheel};
    use spinshot::platform::{MemoryStore, NullHistory, VirtualClock};
    use spinshot::{GameLoop, Phase, Progress};

    /// Narrates screen changes into the log
    struct LogPresenter;

    impl Presenter for LogPresenter {
        fn show_play_screen(&mut self) {
            log::info!("screen: play");
        }
        fn show_pause_screen(&mut self) {
            log::info!("screen: pause");
        }
        fn show_win_screen(&mut self) {
            log::info!("screen: win");
        }
        fn show_lose_screen(&mut self) {
            log::info!("screen: lose");
        }
        fn show_start_screen(&mut self) {
            log::info!("screen: start");
        }
        fn reflect_continuable(&mut self, continuable: bool) {
            log::info!("continuable: {continuable}");
        }
    }

    /// Ticks at the nominal cadence (virtual time, faster than realtime) and
    /// fires whenever the exposed sector matches the loaded marker.
    pub fn run() {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        log::info!("autoplay with seed {seed}");

        let clock = VirtualClock::new();
        let store = MemoryStore::new();
        let mut game = GameLoop::new(
            Box::new(SectorWheel::new()),
            Box::new(MarkerGun::new()),
            Box::new(LogPresenter),
            Box::new(clock.clone()),
            Box::new(NullHistory),
            Progress::new(Box::new(store.clone())),
            seed,
        );

        game.new_game().expect("level 1 exists");

        let mut attempts = 1;
        for _ in 0..40_000 {
            clock.advance(TICK_PERIOD_MS);
            game.tick();

            match game.phase() {
                Phase::Playing => {
                    let armed = game.session().is_some_and(|s| s.fire_armed);
                    let matched =
                        game.exposed_color().is_some() && game.exposed_color() == game.marker_color();
                    if !armed && matched {
                        game.fire();
                    }
                }
                Phase::Won => {
                    log::info!("cleared level {} on attempt {attempts}", game.level_number());
                    game.exit_after_win();
                    break;
                }
                Phase::Lost => {
                    attempts += 1;
                    if attempts > 6 {
                        log::warn!("giving up after {} attempts", attempts - 1);
                        break;
                    }
                    game.try_again().expect("same level restarts");
                }
                _ => break,
            }
        }

        log::info!(
            "saved progress: {:?}",
            game.progress().current_level()
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Spinshot (headless) starting...");
    demo::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM hosts call into the library directly; nothing to run here
}
