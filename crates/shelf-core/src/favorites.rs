//! Persisted set of favorite recipe ids.
//!
//! The store loads its state once from the [`KvBridge`] and writes the whole
//! set back after every mutation, while still holding the lock that guarded
//! the mutation. Two toggles racing on the same id therefore always persist
//! in the order they were applied.
//!
//! The persisted shape is `{"ids": ["..."]}` under [`FAVORITES_KEY`]. Any
//! other shape is treated as an empty collection.

use std::{
    collections::BTreeSet,
    sync::{Mutex, MutexGuard, PoisonError},
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::storage::KvBridge;

/// Storage key holding the favorites record.
pub const FAVORITES_KEY: &str = "recipeShelf:favorites";

#[derive(Debug, Default, Serialize, Deserialize)]
struct FavoritesRecord {
    ids: Vec<String>,
}

/// Membership set kept in sorted order, so that the persisted form depends
/// only on membership.
#[derive(Debug, Default)]
struct FavoriteSet {
    members: BTreeSet<String>,
}

impl FavoriteSet {
    fn from_ids(ids: Vec<String>) -> Self {
        Self {
            members: ids.into_iter().collect(),
        }
    }

    fn record(&self) -> FavoritesRecord {
        FavoritesRecord {
            ids: self.members.iter().cloned().collect(),
        }
    }
}

/// Favorites collection with write-through persistence.
pub struct FavoritesStore {
    bridge: KvBridge,
    state: Mutex<FavoriteSet>,
}

impl FavoritesStore {
    /// Loads the favorites from storage. Missing or malformed data yields an
    /// empty collection.
    pub fn load(bridge: KvBridge) -> Self {
        let record: FavoritesRecord = bridge.load_json(FAVORITES_KEY);
        debug!("Loaded {} favorite(s)", record.ids.len());
        Self {
            bridge,
            state: Mutex::new(FavoriteSet::from_ids(record.ids)),
        }
    }

    /// Adds `id` if absent, removes it if present, and persists the result.
    /// Returns the new membership.
    pub fn toggle(&self, id: &str) -> bool {
        let mut state = self.lock();
        let now_favorite = if state.members.remove(id) {
            false
        } else {
            state.members.insert(id.to_string());
            true
        };
        self.persist(&state);
        now_favorite
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.lock().members.contains(id)
    }

    /// Removes every favorite and persists the empty collection.
    pub fn clear(&self) {
        let mut state = self.lock();
        *state = FavoriteSet::default();
        self.persist(&state);
    }

    /// Favorite ids in sorted order.
    pub fn ids(&self) -> Vec<String> {
        self.lock().members.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().members.is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, FavoriteSet> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, state: &FavoriteSet) {
        self.bridge.save_json(FAVORITES_KEY, &state.record());
    }
}
