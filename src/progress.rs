//! Persisted "furthest level reached" bookkeeping
//!
//! Pure storage plumbing; no timing or rules. The wire format is the plain
//! decimal level number, and anything unreadable degrades to "no saved
//! progress" rather than an error.

use crate::host::KeyValueStore;

/// Saved-progress accessor over the host's key-value store
pub struct Progress {
    store: Box<dyn KeyValueStore>,
}

impl Progress {
    /// Storage key for the saved level number
    const STORAGE_KEY: &'static str = "spinshot_level";

    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// The level to resume from, if a usable one is stored
    pub fn current_level(&self) -> Option<u32> {
        let raw = self.store.get(Self::STORAGE_KEY)?;
        match raw.trim().parse::<u32>() {
            Ok(number) if number >= 1 => Some(number),
            _ => {
                log::warn!("ignoring unreadable saved level {raw:?}");
                None
            }
        }
    }

    /// Persist `level` as the one to resume from
    pub fn advance(&mut self, level: u32) {
        self.store.set(Self::STORAGE_KEY, &level.to_string());
        log::info!("progress saved: level {level}");
    }

    /// Forget saved progress
    pub fn clear(&mut self) {
        self.store.remove(Self::STORAGE_KEY);
    }
}
