//! Persistent slot holding the current bearer token.
//!
//! The store performs no validation; it is a string slot. A store that is
//! unavailable (no window, storage disabled) behaves as an empty slot.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::sync::{Arc, Mutex, PoisonError};

/// Fixed `localStorage` key for the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Slot for the single current credential.
pub trait TokenStore: Send + Sync {
    /// Replace the stored token.
    fn save(&self, token: &str);
    /// Current token, or `None` when absent or the storage is unavailable.
    fn read(&self) -> Option<String>;
    /// Remove the stored token. Clearing an empty store is a no-op.
    fn clear(&self);
}

impl<T: TokenStore + ?Sized> TokenStore for Arc<T> {
    fn save(&self, token: &str) {
        (**self).save(token);
    }

    fn read(&self) -> Option<String> {
        (**self).read()
    }

    fn clear(&self) {
        (**self).clear();
    }
}

/// In-process token slot used by tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `token`.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn save(&self, token: &str) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn read(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .filter(|t| !t.is_empty())
    }

    fn clear(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// Log a rejected storage write (quota exceeded, storage disabled by policy).
/// Returns whether the write went through.
#[cfg(any(test, feature = "browser"))]
fn log_storage_failure<E: std::fmt::Debug>(action: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            log::warn!("token store: {action} rejected by localStorage: {err:?}");
            false
        }
    }
}

/// Browser `localStorage` slot keyed by a fixed name.
#[cfg(feature = "browser")]
#[derive(Clone, Debug)]
pub struct LocalStorageTokenStore {
    key: String,
}

#[cfg(feature = "browser")]
impl Default for LocalStorageTokenStore {
    fn default() -> Self {
        Self::new(TOKEN_STORAGE_KEY)
    }
}

#[cfg(feature = "browser")]
impl LocalStorageTokenStore {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "browser")]
impl TokenStore for LocalStorageTokenStore {
    fn save(&self, token: &str) {
        let Some(storage) = Self::storage() else {
            log::warn!("token store: localStorage unavailable, token not saved");
            return;
        };
        log_storage_failure("save", storage.set_item(&self.key, token));
    }

    fn read(&self) -> Option<String> {
        let storage = Self::storage()?;
        storage.get_item(&self.key).ok().flatten().filter(|t| !t.is_empty())
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            log_storage_failure("clear", storage.remove_item(&self.key));
        }
    }
}
