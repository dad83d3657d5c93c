//! Browser adapters (wasm32 only)
//!
//! LocalStorage for persisted progress and `history.replaceState` for the
//! address bar. An unavailable storage area behaves like an empty one.

use serde::Serialize;

use crate::host::{HistorySink, KeyValueStore};

/// Route `log` output to the browser console and panics to its error stream
pub fn init_logging() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
}

/// LocalStorage-backed key-value store
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        storage()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&mut self, key: &str) {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Payload attached to the history entry
#[derive(Serialize)]
struct EntryState {
    level: u32,
}

/// Address-bar state via `history.replaceState`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHistory;

impl HistorySink for BrowserHistory {
    fn replace_current_entry(&mut self, label: &str, path: &str, level: u32) {
        let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
            return;
        };
        let state = serde_json::to_string(&EntryState { level })
            .ok()
            .and_then(|json| js_sys::JSON::parse(&json).ok())
            .unwrap_or(wasm_bindgen::JsValue::NULL);
        let title = format!("Spinshot | {label}");
        let _ = history.replace_state_with_url(&state, &title, Some(path));
    }
}
