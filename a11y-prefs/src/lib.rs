//! Accessibility Preference Model
//!
//! Platform-agnostic preference state and storage logic for the floating
//! accessibility widget. This crate has no browser dependencies; the web
//! crate supplies the `localStorage` backend.

#![forbid(unsafe_code)]

pub mod prefs;
pub mod store;

// Re-export commonly used types
pub use prefs::{PreferenceSet, Toggle};
pub use store::{MemoryBackend, PREF_KEY, PrefsStore, StorageBackend, StorageError};
