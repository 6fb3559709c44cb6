use super::*;
use shared::models::Provider;
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory stand-in for `localStorage`, storing raw text like the browser does.
#[derive(Default)]
struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    read_only: bool,
}

impl MemoryStore {
    fn with_raw(key: &str, raw: &str) -> Self {
        let store = Self::default();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), raw.to_string());
        store
    }

    fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn load_value(&self, key: &str) -> Result<Value, PersistError> {
        let raw = self
            .raw(key)
            .ok_or_else(|| StorageError::KeyNotFound(key.to_string()))?;
        serde_json::from_str(&raw).map_err(|e| PersistError::Storage(StorageError::SerdeError(e)))
    }

    fn store_value(&self, key: &str, value: &Value) -> Result<(), PersistError> {
        if self.read_only {
            return Err(PersistError::Unavailable);
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), serde_json::to_string(value)?);
        Ok(())
    }
}

fn sample_settings() -> ModelSettings {
    ModelSettings {
        provider: Provider::Anthropic,
        model: "claude-x".to_string(),
        temperature: 0.7,
        max_tokens: 512,
    }
}

#[test]
fn save_writes_json_under_settings_key() {
    let store = MemoryStore::default();
    save_settings(&store, &sample_settings()).unwrap();

    let raw = store.raw(SETTINGS_KEY).unwrap();
    let value: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["provider"], "anthropic");
    assert_eq!(value["model"], "claude-x");
    assert_eq!(value["max_tokens"], 512);
}

#[test]
fn save_then_restore_round_trips() {
    let store = MemoryStore::default();
    save_settings(&store, &sample_settings()).unwrap();

    let saved = restore_settings(&store).unwrap();
    assert_eq!(saved.provider, Some(Provider::Anthropic));
    assert_eq!(saved.model.as_deref(), Some("claude-x"));
    assert_eq!(saved.temperature, Some(0.7));
    assert_eq!(saved.max_tokens, Some(512));
}

#[test]
fn last_write_wins() {
    let store = MemoryStore::default();
    save_settings(&store, &sample_settings()).unwrap();

    let mut second = sample_settings();
    second.provider = Provider::OpenAi;
    second.model = "gpt-4o".to_string();
    save_settings(&store, &second).unwrap();

    assert_eq!(store.entries.borrow().len(), 1);
    let saved = restore_settings(&store).unwrap();
    assert_eq!(saved.provider, Some(Provider::OpenAi));
    assert_eq!(saved.model.as_deref(), Some("gpt-4o"));
}

#[test]
fn restore_with_nothing_saved_is_empty() {
    let store = MemoryStore::default();
    let saved = restore_settings(&store).unwrap();
    assert!(saved.is_empty());
}

#[test]
fn restore_with_corrupted_text_is_skipped() {
    let store = MemoryStore::with_raw(SETTINGS_KEY, "{\"provider\": oops");
    assert!(restore_settings(&store).is_none());
}

#[test]
fn restore_with_null_is_empty() {
    let store = MemoryStore::with_raw(SETTINGS_KEY, "null");
    assert!(restore_settings(&store).unwrap().is_empty());
}

#[test]
fn save_failure_is_reported_and_nothing_stored() {
    let store = MemoryStore::read_only();
    let err = save_settings(&store, &sample_settings()).unwrap_err();
    assert!(matches!(err, PersistError::Unavailable));
    assert!(store.raw(SETTINGS_KEY).is_none());
}
