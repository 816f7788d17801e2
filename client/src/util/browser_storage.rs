//! `localStorage`-backed preference store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The theme controller persists one key through [`PreferenceStore`]. This is
//! the browser implementation. Private browsing modes and sandboxed iframes
//! can deny storage access; that surfaces as
//! [`StateError::PersistenceUnavailable`] and the controller carries on in
//! memory. Without the `hydrate` feature every call reports unavailable.

#[cfg(test)]
#[path = "browser_storage_test.rs"]
mod browser_storage_test;

use shell_state::{PreferenceStore, StateError};

/// Handle to `window.localStorage`, looked up on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    #[cfg(feature = "hydrate")]
    fn storage() -> Result<web_sys::Storage, StateError> {
        let window = web_sys::window().ok_or_else(|| unavailable("no window"))?;
        window
            .local_storage()
            .map_err(|_| unavailable("localStorage access denied"))?
            .ok_or_else(|| unavailable("localStorage missing"))
    }
}

impl PreferenceStore for LocalStorageStore {
    fn read(&self, key: &str) -> Result<Option<String>, StateError> {
        #[cfg(feature = "hydrate")]
        {
            Self::storage()?.get_item(key).map_err(|_| unavailable("localStorage read failed"))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(unavailable("no browser storage outside hydrate"))
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StateError> {
        #[cfg(feature = "hydrate")]
        {
            Self::storage()?.set_item(key, value).map_err(|_| unavailable("localStorage write failed"))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(unavailable("no browser storage outside hydrate"))
        }
    }
}

fn unavailable(reason: &str) -> StateError {
    StateError::PersistenceUnavailable(reason.to_owned())
}
