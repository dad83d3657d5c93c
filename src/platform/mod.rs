//! Browser/native host adapters
//!
//! Handles browser/native differences for:
//! - Storage (LocalStorage on the web, an in-memory map elsewhere)
//! - Navigation history
//! - Time and tick scheduling
//!
//! Everything here is single-threaded on purpose: the core's concurrency
//! model is one cooperative callback thread, so shared handles clone via
//! `Rc` rather than anything atomic.

#[cfg(target_arch = "wasm32")]
pub mod web;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::host::{HistorySink, KeyValueStore, TickTimer, TimerHandle};

/// In-memory key-value store. Clones share one map, so a host can hand the
/// same store to several consumers and inspect it afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore(Rc<RefCell<HashMap<String, String>>>);

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.0.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.0.borrow_mut().remove(key);
    }
}

/// History sink for hosts with no address bar
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHistory;

impl HistorySink for NullHistory {
    fn replace_current_entry(&mut self, _label: &str, _path: &str, _level: u32) {}
}

#[derive(Debug, Default)]
struct ClockState {
    now_ms: u64,
    next_handle: u64,
    armed: Vec<(TimerHandle, u64)>,
}

/// Manually advanced clock and tick scheduler.
///
/// The driver (a test, or the headless demo) owns one handle, advances time
/// and delivers ticks itself; the game owns a clone. Cancelled handles are
/// forgotten, which is what makes "no ticks after cancellation" observable.
#[derive(Debug, Clone, Default)]
pub struct VirtualClock(Rc<RefCell<ClockState>>);

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward
    pub fn advance(&self, delta_ms: u64) {
        self.0.borrow_mut().now_ms += delta_ms;
    }

    /// Number of currently armed recurring timers
    pub fn armed_timers(&self) -> usize {
        self.0.borrow().armed.len()
    }

    pub fn is_armed(&self, handle: TimerHandle) -> bool {
        self.0.borrow().armed.iter().any(|(h, _)| *h == handle)
    }
}

impl TickTimer for VirtualClock {
    fn now_ms(&self) -> u64 {
        self.0.borrow().now_ms
    }

    fn schedule(&mut self, period_ms: u64) -> TimerHandle {
        let mut state = self.0.borrow_mut();
        let handle = TimerHandle(state.next_handle);
        state.next_handle += 1;
        state.armed.push((handle, period_ms));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.0.borrow_mut().armed.retain(|(h, _)| *h != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_clones_share_state() {
        let mut a = MemoryStore::new();
        let b = a.clone();
        a.set("k", "v");
        assert_eq!(b.get("k"), Some("v".to_string()));
        a.remove("k");
        assert_eq!(b.get("k"), None);
    }

    #[test]
    fn test_virtual_clock_schedule_and_cancel() {
        let mut clock = VirtualClock::new();
        assert_eq!(clock.now_ms(), 0);

        let first = clock.schedule(25);
        let second = clock.schedule(25);
        assert_ne!(first, second);
        assert_eq!(clock.armed_timers(), 2);

        clock.advance(100);
        assert_eq!(clock.now_ms(), 100);

        clock.cancel(first);
        assert!(!clock.is_armed(first));
        assert!(clock.is_armed(second));
    }
}
