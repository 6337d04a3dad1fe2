//! Application state container for the recipe shelf.
//!
//! A [`Shelf`] owns every piece of client state: the catalog loader and its
//! request lines, the favorites collection, the theme preference and the
//! current weekly plan. Interfaces hold one `Shelf` and drive it through the
//! command methods defined in the handler submodules.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────────┐    ┌─────────────────┐
//! │   Handlers   │    │  Loader, derive, │    │  CatalogSource  │
//! │ (catalog,    │───▶│  favorites,      │───▶│  KeyValueStore  │
//! │  plan, pref) │    │  meal planning   │    │                 │
//! └──────────────┘    └──────────────────┘    └─────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use shelf_core::{params::BrowseRecipes, source::StaticSource, ShelfBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let shelf = ShelfBuilder::new()
//!     .with_source(Arc::new(StaticSource::new("catalog.json")))
//!     .build()
//!     .await?;
//!
//! let cards = shelf.browse(&BrowseRecipes::default()).await?;
//! println!("{cards}");
//! # Ok(())
//! # }
//! ```

use std::sync::{PoisonError, RwLock};

use crate::{
    favorites::FavoritesStore, loader::CatalogLoader, models::MealPlan, storage::KvBridge,
};

pub mod builder;
pub mod catalog_handlers;
pub mod plan_handlers;
pub mod preference_handlers;


pub use builder::ShelfBuilder;

/// Client state for one user session.
pub struct Shelf {
    pub(crate) loader: CatalogLoader,
    pub(crate) favorites: FavoritesStore,
    pub(crate) preferences: KvBridge,
    pub(crate) week_plan: RwLock<Option<MealPlan>>,
}

impl Shelf {
    pub(crate) fn new(
        loader: CatalogLoader,
        favorites: FavoritesStore,
        preferences: KvBridge,
    ) -> Self {
        Self {
            loader,
            favorites,
            preferences,
            week_plan: RwLock::new(None),
        }
    }

    /// The catalog loader and its request lines.
    pub fn loader(&self) -> &CatalogLoader {
        &self.loader
    }

    /// The favorites collection.
    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    /// The weekly plan generated in this session, if any.
    pub fn week_plan(&self) -> Option<MealPlan> {
        self.week_plan
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
