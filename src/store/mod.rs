//! Persistent key-value storage
//!
//! The assistant persists a handful of string keys (zoom level, opt-in flag,
//! login marker) through the [`KeyValueStore`] seam. Two implementations
//! ship with the crate: a locked, atomically-written JSON file for real
//! sessions and an in-memory map for tests and ephemeral hosts.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::sync::{Arc, Mutex};

/// Persisted key for the raw zoom level (integer string)
pub const ZOOM_LEVEL_KEY: &str = "a11y:zoomLevel";

/// Persisted key for the zoom opt-in flag ("true"/"false")
pub const USER_ADJUSTED_KEY: &str = "a11y:userAdjusted";

/// Presence of this key marks a logged-in session
pub const LOGGED_IN_KEY: &str = "isLoggedIn";

/// Durable string key-value storage
///
/// Writes must be durable before the call returns so an in-memory mutation
/// and its persisted copy cannot diverge across a crash.
pub trait KeyValueStore {
    /// Read a value, `None` if the key was never set
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value through to durable storage
    fn set(&mut self, key: &str, value: &str);

    /// Delete a key (missing keys are not an error)
    fn remove(&mut self, key: &str);
}

/// Store handle shared between session components
///
/// All mutation happens on the single UI thread, so the mutex is
/// uncontended; it exists to satisfy shared ownership across components.
pub type SharedStore = Arc<Mutex<dyn KeyValueStore + Send>>;

/// Wrap a store for sharing between components
pub fn shared(store: impl KeyValueStore + Send + 'static) -> SharedStore {
    Arc::new(Mutex::new(store))
}

/// Read a key from a shared store, `None` on a poisoned lock
pub fn read_key(store: &SharedStore, key: &str) -> Option<String> {
    match store.lock() {
        Ok(guard) => guard.get(key),
        Err(_) => None,
    }
}

/// Write a key through a shared store
pub fn write_key(store: &SharedStore, key: &str, value: &str) {
    if let Ok(mut guard) = store.lock() {
        guard.set(key, value);
    } else {
        tracing::warn!(key, "store lock poisoned, write dropped");
    }
}

/// Remove a key through a shared store
pub fn remove_key(store: &SharedStore, key: &str) {
    if let Ok(mut guard) = store.lock() {
        guard.remove(key);
    } else {
        tracing::warn!(key, "store lock poisoned, removal dropped");
    }
}
