//! Favorites and theme commands.
//!
//! These never suspend: the favorites store and the preference bridge are
//! synchronous and write through to storage.

use log::debug;

use super::Shelf;
use crate::{
    display::OperationStatus,
    error::{Result, ShelfError},
    models::Theme,
    params::{ClearFavorites, Id},
};

/// Storage key holding the theme preference.
pub const THEME_KEY: &str = "recipeShelf:theme";

impl Shelf {
    /// Flips the favorite state of a recipe.
    pub fn toggle_favorite(&self, params: &Id) -> OperationStatus {
        let now_favorite = self.favorites.toggle(&params.id);
        OperationStatus::favorite_toggled(&params.id, now_favorite)
    }

    /// Favorite ids in sorted order.
    pub fn favorite_ids(&self) -> Vec<String> {
        self.favorites.ids()
    }

    /// Empties the favorites collection.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::InvalidInput` unless the request is confirmed.
    pub fn clear_favorites(&self, params: &ClearFavorites) -> Result<OperationStatus> {
        if !params.confirmed {
            return Err(ShelfError::invalid_input("confirmed")
                .with_reason("clearing favorites must be confirmed"));
        }
        let removed = self.favorites.len();
        self.favorites.clear();
        Ok(OperationStatus::success(format!(
            "Removed {removed} favorite(s)"
        )))
    }

    /// The stored theme, or the default when none is stored.
    pub fn theme(&self) -> Theme {
        self.preferences.load_json(THEME_KEY)
    }

    /// Stores the theme preference.
    pub fn set_theme(&self, theme: Theme) -> OperationStatus {
        debug!("Setting theme to {}", theme.as_str());
        self.preferences.save_json(THEME_KEY, &theme);
        OperationStatus::success(format!("Theme set to {}", theme.as_str()))
    }
}
