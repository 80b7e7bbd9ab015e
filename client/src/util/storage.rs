//! Browser storage backing for the color-scheme preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes hydrate-only `sessionStorage`/`localStorage` access so the core
//! crate's [`PreferenceStore`] stays browser-agnostic.

use burger_menu::scheme::{Persistence, PreferenceStore};

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// [`PreferenceStore`] over the storage area selected by [`Persistence`].
///
/// Storage being unavailable (private mode, sandboxed iframe) degrades to
/// remembering nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserStore {
    persistence: Persistence,
}

impl BrowserStore {
    #[must_use]
    pub fn new(persistence: Persistence) -> Self {
        Self { persistence }
    }

    #[must_use]
    pub fn persistence(&self) -> Persistence {
        self.persistence
    }

    #[cfg(feature = "hydrate")]
    fn storage(&self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match self.persistence {
            Persistence::None => None,
            Persistence::Session => window.session_storage().ok().flatten(),
            Persistence::Local => window.local_storage().ok().flatten(),
        }
    }
}

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            self.storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = self.storage() {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = self.storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}
