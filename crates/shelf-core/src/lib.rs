//! Core library for the Recipe Shelf client.
//!
//! This crate holds the client state and logic behind the recipe browser:
//! loading a recipe catalog from a source, deriving filtered and sorted
//! views of it, keeping a persisted favorites collection, and allocating
//! recipes to days of a meal plan.
//!
//! # Architecture
//!
//! - [`storage`]: durable key-value storage and the infallible JSON bridge
//! - [`favorites`]: the favorites collection, written through on every change
//! - [`source`] and [`loader`]: catalog sources and the request lines that
//!   track list, detail and bulk-detail fetches
//! - [`normalize`]: conversion of upstream records into [`models::Recipe`]
//! - [`derive`]: pure search, filter and sort functions over a catalog
//! - [`mealplan`]: list and weekly-grid plan allocation
//! - [`shelf`]: the [`Shelf`] container and its commands
//! - [`display`]: markdown formatting for the terminal
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use shelf_core::{
//!     params::{GeneratePlan, Id},
//!     source::RemoteSource,
//!     ShelfBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let source = RemoteSource::new("https://api.spoonacular.com/recipes", None)?;
//! let shelf = ShelfBuilder::new()
//!     .with_database_path(Some("shelf.db"))
//!     .with_source(Arc::new(source))
//!     .build()
//!     .await?;
//!
//! shelf.toggle_favorite(&Id { id: "716429".to_string() });
//! let plan = shelf.plan_days(&GeneratePlan::default()).await?;
//! println!("{plan}");
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod derive;
pub mod display;
pub mod error;
pub mod favorites;
pub mod loader;
pub mod mealplan;
pub mod models;
pub mod normalize;
pub mod params;
pub mod shelf;
pub mod source;
pub mod storage;

// Re-export commonly used types
pub use display::{
    Cuisines, LocalDateTime, OperationStatus, RecipeCard, RecipeCards, RecipeDetail,
};
pub use error::{Result, ShelfError};
pub use favorites::FavoritesStore;
pub use loader::{CatalogLoader, Completion};
pub use models::{
    CatalogEntry, Day, DayPlan, Difficulty, Meal, MealPlan, PlanConstraints, Recipe,
    RequestStatus, SortKey, Theme, ViewQuery,
};
pub use shelf::{Shelf, ShelfBuilder};
pub use source::{CatalogSource, RemoteSource, StaticSource};
pub use storage::{KeyValueStore, KvBridge, MemoryStore, SqliteStore};
