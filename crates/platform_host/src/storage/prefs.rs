//! Lightweight preference storage contracts and adapters.
//!
//! Preferences are small JSON documents stored as text under a flat string key. The browser
//! backend (`localStorage`) is synchronous, so the contract is synchronous as well: callers can
//! read persisted layout during component setup instead of hydrating after first paint.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Errors surfaced by [`PrefsStore`] implementations and the typed helpers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PrefsError {
    /// The backing store cannot be reached (for example, storage disabled by the browser).
    #[error("preference storage unavailable")]
    Unavailable,
    /// The backend rejected the operation.
    #[error("preference storage backend error: {0}")]
    Backend(String),
    /// A value could not be encoded as JSON.
    #[error("failed to serialize preference `{key}`: {message}")]
    Serialize {
        /// Preference key being written.
        key: String,
        /// Encoder message.
        message: String,
    },
    /// A stored value could not be decoded into the requested type.
    #[error("failed to deserialize preference `{key}`: {message}")]
    Deserialize {
        /// Preference key being read.
        key: String,
        /// Decoder message.
        message: String,
    },
}

/// Host service for lightweight preference values (JSON stored as text per key).
pub trait PrefsStore {
    /// Loads the raw JSON text stored for `key`.
    fn load_pref(&self, key: &str) -> Result<Option<String>, PrefsError>;

    /// Stores raw JSON text for `key`, replacing any previous value.
    fn save_pref(&self, key: &str, raw_json: &str) -> Result<(), PrefsError>;

    /// Removes `key`. Removing a missing key succeeds.
    fn delete_pref(&self, key: &str) -> Result<(), PrefsError>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op preference store for unsupported targets and baseline tests.
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load_pref(&self, _key: &str) -> Result<Option<String>, PrefsError> {
        Ok(None)
    }

    fn save_pref(&self, _key: &str, _raw_json: &str) -> Result<(), PrefsError> {
        Ok(())
    }

    fn delete_pref(&self, _key: &str) -> Result<(), PrefsError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory preference store keyed by string.
///
/// Clones share the same backing map, which lets tests hand one clone to the code under test and
/// inspect another.
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPrefsStore {
    /// Returns `true` when a value is stored for `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.inner.borrow().contains_key(key)
    }

    /// Returns the stored keys in sorted order.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.inner.borrow().keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref(&self, key: &str) -> Result<Option<String>, PrefsError> {
        Ok(self.inner.borrow().get(key).cloned())
    }

    fn save_pref(&self, key: &str, raw_json: &str) -> Result<(), PrefsError> {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), raw_json.to_string());
        Ok(())
    }

    fn delete_pref(&self, key: &str) -> Result<(), PrefsError> {
        self.inner.borrow_mut().remove(key);
        Ok(())
    }
}

/// Loads and deserializes a typed preference value through a [`PrefsStore`] implementation.
///
/// # Errors
///
/// Returns an error when the store fails or the stored text is not valid JSON for `T`.
pub fn load_pref_with<S: PrefsStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, PrefsError> {
    let Some(raw) = store.load_pref(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| PrefsError::Deserialize {
            key: key.to_string(),
            message: e.to_string(),
        })
}

/// Serializes and saves a typed preference value through a [`PrefsStore`] implementation.
///
/// # Errors
///
/// Returns an error when serialization or the store write fails.
pub fn save_pref_with<S: PrefsStore + ?Sized, T: Serialize + ?Sized>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), PrefsError> {
    let raw = serde_json::to_string(value).map_err(|e| PrefsError::Serialize {
        key: key.to_string(),
        message: e.to_string(),
    })?;
    store.save_pref(key, &raw)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct IconSpot {
        x: i32,
        y: i32,
    }

    #[test]
    fn memory_prefs_store_round_trip_and_delete() {
        let store = MemoryPrefsStore::default();
        let store_obj: &dyn PrefsStore = &store;

        store_obj.save_pref("pref.key", "{\"k\":1}").expect("save");
        assert_eq!(
            store_obj.load_pref("pref.key").expect("load"),
            Some("{\"k\":1}".to_string())
        );
        store_obj.delete_pref("pref.key").expect("delete");
        assert_eq!(store_obj.load_pref("pref.key").expect("load"), None);
    }

    #[test]
    fn memory_prefs_store_clones_share_backing_map() {
        let store = MemoryPrefsStore::default();
        let observer = store.clone();

        store.save_pref("portfolio-theme", "\"dark\"").expect("save");

        assert!(observer.contains("portfolio-theme"));
        assert_eq!(observer.keys(), vec!["portfolio-theme".to_string()]);
    }

    #[test]
    fn typed_pref_helpers_round_trip() {
        let store = MemoryPrefsStore::default();
        save_pref_with(&store, "spot", &IconSpot { x: 24, y: 124 }).expect("save typed pref");

        let loaded: Option<IconSpot> = load_pref_with(&store, "spot").expect("load typed pref");
        assert_eq!(loaded, Some(IconSpot { x: 24, y: 124 }));
    }

    #[test]
    fn typed_load_reports_malformed_json() {
        let store = MemoryPrefsStore::default();
        store.save_pref("spot", "{not json").expect("save raw");

        let err = load_pref_with::<_, IconSpot>(&store, "spot").expect_err("malformed");
        assert!(matches!(err, PrefsError::Deserialize { ref key, .. } if key == "spot"));
    }

    #[test]
    fn noop_prefs_store_is_empty_and_successful() {
        let store = NoopPrefsStore;
        let store_obj: &dyn PrefsStore = &store;
        assert_eq!(store_obj.load_pref("k").expect("load"), None);
        store_obj.save_pref("k", "{}").expect("save");
        store_obj.delete_pref("k").expect("delete");
    }
}
