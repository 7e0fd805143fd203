//! `localStorage` backend for the preference store.

use a11y_prefs::{PreferenceSet, PrefsStore, StorageBackend, StorageError};
use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::dom;

/// [`StorageBackend`] over the browser's `localStorage`.
pub struct LocalStore;

impl LocalStore {
    fn storage(&self) -> Result<Storage, StorageError> {
        dom::local_storage().map_err(|_| StorageError::Unavailable)
    }
}

impl StorageBackend for LocalStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|err| backend_error("read", &err))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| backend_error("write", &err))
    }
}

fn backend_error(op: &'static str, err: &JsValue) -> StorageError {
    StorageError::Backend {
        op,
        detail: dom::js_error_message(err),
    }
}

/// Restore the saved preference set.
///
/// Absent, malformed or inaccessible records fall back to the default set;
/// an accessibility control must never block the page over storage.
#[must_use]
pub fn load_prefs() -> PreferenceSet {
    PrefsStore::new(LocalStore).load().unwrap_or_else(|err| {
        log::debug!("restoring default preferences, stored record unusable: {err}");
        PreferenceSet::default()
    })
}

/// Persist the full preference set.
///
/// Write failures are absorbed; the in-memory set stays authoritative for
/// the session even when it will not be remembered.
pub fn save_prefs(prefs: &PreferenceSet) {
    if let Err(err) = PrefsStore::new(LocalStore).save(prefs) {
        log::debug!("preferences not persisted: {err}");
    }
}
