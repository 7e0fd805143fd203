//! Preference persistence over an abstract key-value substrate.
//!
//! Failures stay visible as `Result`s inside this module and collapse to
//! defaults at the `load_or_default`/`save_quietly` boundary, so callers
//! in the widget never see an error.

use crate::prefs::PreferenceSet;
use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;

/// Fixed storage key for the serialized preference record.
pub const PREF_KEY: &str = "a11yPreferences";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage substrate unavailable")]
    Unavailable,
    #[error("storage {op} rejected: {detail}")]
    Backend { op: &'static str, detail: String },
    #[error("malformed preference record: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A synchronous key-value substrate holding string values.
///
/// The web crate implements this over `localStorage`; tests use
/// [`MemoryBackend`].
pub trait StorageBackend {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    /// Returns an error when the substrate is unavailable or rejects the read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns an error when the substrate is unavailable or rejects the write.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Loads and saves the [`PreferenceSet`] under [`PREF_KEY`].
pub struct PrefsStore<B> {
    backend: B,
}

impl<B: StorageBackend> PrefsStore<B> {
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Read the stored preference record.
    ///
    /// An absent record is not an error: it yields the default set.
    /// Recognized keys in the record merge over the defaults.
    ///
    /// # Errors
    /// Returns an error when the substrate fails or the record is malformed.
    pub fn load(&self) -> Result<PreferenceSet, StorageError> {
        match self.backend.read(PREF_KEY)? {
            Some(text) => Ok(serde_json::from_str(&text)?),
            None => Ok(PreferenceSet::default()),
        }
    }

    /// Boundary form of [`load`](Self::load): any failure collapses to the
    /// default set, so preferences behave as defaults for this session.
    #[must_use]
    pub fn load_or_default(&self) -> PreferenceSet {
        self.load().unwrap_or_else(|err| {
            log::debug!("preference load failed, using defaults: {err}");
            PreferenceSet::default()
        })
    }

    /// Serialize the full set and write it under [`PREF_KEY`].
    ///
    /// # Errors
    /// Returns an error when serialization or the substrate write fails.
    pub fn save(&self, prefs: &PreferenceSet) -> Result<(), StorageError> {
        let text = serde_json::to_string(prefs)?;
        self.backend.write(PREF_KEY, &text)
    }

    /// Boundary form of [`save`](Self::save): a failed write is discarded
    /// and the in-memory set stays authoritative for the session.
    pub fn save_quietly(&self, prefs: &PreferenceSet) {
        if let Err(err) = self.save(prefs) {
            log::debug!("preference save failed, keeping in-memory state: {err}");
        }
    }
}

/// HashMap-backed substrate for tests and headless rendering.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing serialization.
    pub fn seed(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    /// Raw stored value under `key`, if any.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
