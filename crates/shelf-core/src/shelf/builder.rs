//! Builder for creating and configuring Shelf instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use log::debug;
use tokio::task;

use super::Shelf;
use crate::{
    error::{Result, ShelfError},
    favorites::FavoritesStore,
    loader::CatalogLoader,
    source::CatalogSource,
    storage::{KeyValueStore, KvBridge, SqliteStore},
};

/// Builder for creating and configuring Shelf instances.
#[derive(Default)]
pub struct ShelfBuilder {
    database_path: Option<PathBuf>,
    store: Option<Arc<dyn KeyValueStore>>,
    source: Option<Arc<dyn CatalogSource>>,
}

impl ShelfBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/recipe-shelf/shelf.db` or
    /// `~/.local/share/recipe-shelf/shelf.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses `store` for persistence instead of a database file.
    pub fn with_store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Sets the catalog source. Required.
    pub fn with_source(mut self, source: Arc<dyn CatalogSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Builds the configured shelf, loading persisted favorites.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::Configuration` if no catalog source was set
    /// Returns `ShelfError::FileSystem` if the database path is invalid
    /// Returns `ShelfError::Database` if database initialization fails
    pub async fn build(self) -> Result<Shelf> {
        let source = self.source.ok_or_else(|| ShelfError::Configuration {
            message: "No catalog source configured".to_string(),
        })?;

        let store = match self.store {
            Some(store) => store,
            None => {
                let db_path = match self.database_path {
                    Some(path) => path,
                    None => Self::default_database_path()?,
                };
                Self::open_store(db_path).await?
            }
        };

        let bridge = KvBridge::new(store);
        let favorites_bridge = bridge.clone();
        let favorites = task::spawn_blocking(move || FavoritesStore::load(favorites_bridge))
            .await
            .map_err(|e| ShelfError::Configuration {
                message: format!("Task join error: {e}"),
            })?;

        Ok(Shelf::new(CatalogLoader::new(source), favorites, bridge))
    }

    async fn open_store(db_path: PathBuf) -> Result<Arc<dyn KeyValueStore>> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ShelfError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("Opening store at {}", db_path.display());
        let store = task::spawn_blocking(move || SqliteStore::open(&db_path))
            .await
            .map_err(|e| ShelfError::Configuration {
                message: format!("Task join error: {e}"),
            })??;

        Ok(Arc::new(store))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("recipe-shelf")
            .place_data_file("shelf.db")
            .map_err(|e| ShelfError::XdgDirectory(e.to_string()))
    }
}
