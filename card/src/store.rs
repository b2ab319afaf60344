//! Durable cache of the last accepted message.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser the backing store is `localStorage`; tests use
//! [`MemoryStore`]. The cache is best-effort: a failed write or an
//! unreadable entry never reaches the user. Both still come back as a
//! [`StorageError`] so callers decide what to log.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;

use crate::message::MessagePayload;

/// Fixed key of the cached message.
pub const STORAGE_KEY: &str = "valentine_message_v1";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No durable storage is reachable in this environment.
    #[error("storage unavailable")]
    Unavailable,

    /// The store refused a write or removal (quota, privacy mode).
    #[error("storage write rejected: {0}")]
    WriteRejected(String),

    /// The stored value is not a well-formed message.
    #[error("stored message is corrupt: {0}")]
    Corrupt(String),
}

/// String key/value storage scoped to one origin.
pub trait KeyValueStore {
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] if the store cannot be reached.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    ///
    /// Returns an error if the store is unreachable or rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns an error if the store is unreachable or rejects the removal.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-process [`KeyValueStore`]. Can be switched to reject writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    reject_writes: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `value` under `key`.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_owned(), value.to_owned());
        store
    }

    /// Make every subsequent `set` fail, as a full quota would.
    pub fn reject_writes(&mut self, reject: bool) {
        self.reject_writes = reject;
    }

    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.reject_writes {
            return Err(StorageError::WriteRejected("quota exceeded".into()));
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Reads and writes the cached message under [`STORAGE_KEY`].
#[derive(Debug, Clone, Default)]
pub struct MessageCache<S> {
    store: S,
}

impl<S: KeyValueStore> MessageCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Last accepted message, if one is stored and well-formed.
    ///
    /// A corrupt entry is removed so the next load sees an empty store.
    pub fn load(&mut self) -> Option<MessagePayload> {
        let raw = match self.store.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::debug!("message cache not loaded: {e}");
                return None;
            }
        };
        match serde_json::from_str::<MessagePayload>(&raw) {
            Ok(payload) => Some(payload),
            Err(e) => {
                log::warn!("{}", StorageError::Corrupt(e.to_string()));
                if let Err(e) = self.store.remove(STORAGE_KEY) {
                    log::warn!("corrupt message not removed: {e}");
                }
                None
            }
        }
    }

    /// Serialize `payload` under the fixed key.
    ///
    /// If the write fails, any older entry is removed so the cache never
    /// holds a message other than the last accepted one.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the write fails.
    pub fn save(&mut self, payload: &MessagePayload) -> Result<(), StorageError> {
        let written = serde_json::to_string(payload)
            .map_err(|e| StorageError::WriteRejected(e.to_string()))
            .and_then(|raw| self.store.set(STORAGE_KEY, &raw));
        if written.is_err() {
            if let Err(e) = self.store.remove(STORAGE_KEY) {
                log::warn!("stale cached message not removed: {e}");
            }
        }
        written
    }

    /// Remove the cached message.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the removal fails.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.store.remove(STORAGE_KEY)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}
