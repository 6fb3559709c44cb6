//! Reading and writing the saved model settings.

#[cfg(test)]
#[path = "persistence_test.rs"]
mod persistence_test;

use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use serde_json::Value;
use shared::models::{ModelSettings, SavedSettings};

pub const SETTINGS_KEY: &str = "modelSettings";

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("local storage is not available")]
    Unavailable,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("could not encode settings: {0}")]
    Encode(#[from] serde_json::Error),
}

/// JSON key-value store holding the settings record.
pub trait KeyValueStore {
    fn load_value(&self, key: &str) -> Result<Value, PersistError>;
    fn store_value(&self, key: &str, value: &Value) -> Result<(), PersistError>;
}

/// The browser's `localStorage`.
pub struct BrowserStore;

impl BrowserStore {
    fn ensure_available() -> Result<(), PersistError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .map(|_| ())
            .ok_or(PersistError::Unavailable)
    }
}

impl KeyValueStore for BrowserStore {
    fn load_value(&self, key: &str) -> Result<Value, PersistError> {
        Self::ensure_available()?;
        Ok(LocalStorage::get(key)?)
    }

    fn store_value(&self, key: &str, value: &Value) -> Result<(), PersistError> {
        Self::ensure_available()?;
        Ok(LocalStorage::set(key, value)?)
    }
}

/// Overwrites the saved record. Last write wins.
pub fn save_settings<S: KeyValueStore>(
    store: &S,
    settings: &ModelSettings,
) -> Result<(), PersistError> {
    let value = serde_json::to_value(settings)?;
    store.store_value(SETTINGS_KEY, &value)
}

/// Returns what should be applied on page load, or `None` when the stored
/// text could not be read at all. A missing key reads as an empty record.
pub fn restore_settings<S: KeyValueStore>(store: &S) -> Option<SavedSettings> {
    match store.load_value(SETTINGS_KEY) {
        Ok(value) => Some(SavedSettings::from_value(&value)),
        Err(PersistError::Storage(StorageError::KeyNotFound(_))) => {
            tracing::debug!("No saved settings under {SETTINGS_KEY}");
            Some(SavedSettings::default())
        }
        Err(e) => {
            tracing::debug!("Skipping settings restore: {e}");
            None
        }
    }
}
