use std::{path::PathBuf, sync::Arc};

use serde_json::json;
use shelf_core::{Shelf, ShelfBuilder, StaticSource};
use tempfile::TempDir;

/// Writes a catalog of `count` recipes with ready times cycling through
/// 10, 25, 40 and 55 minutes, and returns its path.
pub fn write_catalog(dir: &TempDir, count: usize) -> PathBuf {
    let cuisines = ["Thai", "Korean", "Italian", "Mexican"];
    let recipes: Vec<_> = (0..count)
        .map(|i| {
            json!({
                "id": i + 1,
                "title": format!("Recipe {}", i + 1),
                "cuisines": [cuisines[i % cuisines.len()]],
                "readyInMinutes": 10 + 15 * (i % 4),
                "summary": format!("<p>Dish number <b>{}</b></p>", i + 1),
                "vegan": i % 2 == 0,
            })
        })
        .collect();

    let path = dir.path().join("catalog.json");
    std::fs::write(&path, json!({ "recipes": recipes }).to_string())
        .expect("Failed to write catalog");
    path
}

/// Helper function to create a test shelf backed by a database file
pub async fn create_test_shelf(count: usize) -> (TempDir, Shelf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let catalog = write_catalog(&temp_dir, count);
    let shelf = open_shelf(&temp_dir, catalog).await;
    (temp_dir, shelf)
}

/// Opens a shelf over the database in `dir`.
pub async fn open_shelf(dir: &TempDir, catalog: PathBuf) -> Shelf {
    ShelfBuilder::new()
        .with_database_path(Some(dir.path().join("shelf.db")))
        .with_source(Arc::new(StaticSource::new(catalog)))
        .build()
        .await
        .expect("Failed to create shelf")
}
