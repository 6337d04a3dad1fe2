//! Durable key-value storage and the JSON bridge in front of it.
//!
//! Backends implement [`KeyValueStore`] and report failures through
//! [`Result`]. Consumers never talk to a backend directly: they go through
//! [`KvBridge`], which serializes values as JSON and degrades every failure
//! (unreadable store, missing key, corrupt payload) to "no data", logging it
//! instead of surfacing it.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex, PoisonError},
};

use log::warn;
use serde::{de::DeserializeOwned, Serialize};

use crate::{db::Database, error::Result};

/// Raw string storage addressed by key.
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value stored under `key`. A reader never observes a
    /// partially written value.
    fn put(&self, key: &str, value: &str) -> Result<()>;
}

/// SQLite-backed store, the production backend.
pub struct SqliteStore {
    db: Mutex<Database>,
}

impl SqliteStore {
    /// Opens (or creates) the store at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            db: Mutex::new(Database::new(path)?),
        })
    }

    /// Opens a private in-memory store.
    pub fn in_memory() -> Result<Self> {
        Ok(Self {
            db: Mutex::new(Database::in_memory()?),
        })
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.db
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get_value(key)
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        self.db
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .put_value(key, value)
    }
}

/// Process-local store, used for ephemeral sessions and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with a raw value.
    pub fn with_value(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value.into());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Infallible JSON facade over a [`KeyValueStore`].
#[derive(Clone)]
pub struct KvBridge {
    store: Arc<dyn KeyValueStore>,
}

impl KvBridge {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Raw value under `key`; `None` when absent or unreadable.
    pub fn load(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to read '{key}' from storage: {e}");
                None
            }
        }
    }

    /// Overwrites `key` with `value`. Failures are logged, not returned.
    pub fn save(&self, key: &str, value: &str) {
        if let Err(e) = self.store.put(key, value) {
            warn!("Failed to write '{key}' to storage: {e}");
        }
    }

    /// Decodes the JSON value under `key`, falling back to `T::default()`.
    pub fn load_json<T>(&self, key: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        let Some(raw) = self.load(key) else {
            return T::default();
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("Discarding malformed value under '{key}': {e}");
                T::default()
            }
        }
    }

    /// Encodes `value` as JSON and saves it under `key`.
    pub fn save_json<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.save(key, &raw),
            Err(e) => warn!("Failed to encode value for '{key}': {e}"),
        }
    }
}
