//! Catalog commands: loading, browsing, details and the favorites
//! collection view.

use std::sync::Arc;

use super::Shelf;
use crate::{
    derive,
    display::{RecipeCard, RecipeCards, RecipeDetail},
    error::{Result, ShelfError},
    loader::Completion,
    models::{Recipe, RequestStatus, ViewQuery},
    params::{BrowseRecipes, Id},
};

/// Turns a request line into a result. Only a succeeded line yields data.
fn settled(status: RequestStatus, error: Option<String>, fallback: &str) -> Result<()> {
    match status {
        RequestStatus::Succeeded => Ok(()),
        RequestStatus::Failed => Err(ShelfError::fetch(
            error.unwrap_or_else(|| fallback.to_string()),
        )),
        RequestStatus::Idle | RequestStatus::Loading => {
            Err(ShelfError::fetch(fallback.to_string()))
        }
    }
}

impl Shelf {
    /// Loads the catalog if it has not been loaded yet and returns it. When
    /// another call is already loading it, waits for that load instead.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::Fetch` with the source's message when loading
    /// fails.
    pub async fn load_catalog(&self) -> Result<Arc<Vec<Recipe>>> {
        self.loader.fetch_catalog().await;
        // A load started elsewhere may still be in flight
        let status = self.loader.settle_catalog().await;
        settled(
            status,
            self.loader.catalog_error(),
            "Failed to fetch recipes.",
        )?;
        Ok(self.loader.catalog())
    }

    /// Reloads the catalog, replacing the previous one.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::Fetch` when the reload fails.
    pub async fn refresh_catalog(&self) -> Result<Arc<Vec<Recipe>>> {
        self.loader.refresh_catalog().await;
        let status = self.loader.settle_catalog().await;
        settled(
            status,
            self.loader.catalog_error(),
            "Failed to fetch recipes.",
        )?;
        Ok(self.loader.catalog())
    }

    /// Derives a catalog view and marks favorites in it.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::Fetch` when the catalog cannot be loaded.
    pub async fn browse(&self, params: &BrowseRecipes) -> Result<RecipeCards> {
        let catalog = self.load_catalog().await?;
        let view = derive::apply(catalog.iter(), &ViewQuery::from(params));

        let cards = derive::annotate(view, &self.favorites)
            .into_iter()
            .filter(|entry| !params.favorites_only || entry.favorite)
            .collect();
        Ok(cards)
    }

    /// Fetches the detail record for one recipe.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::Fetch` when the request fails or was
    /// superseded by a newer one.
    pub async fn show_recipe(&self, params: &Id) -> Result<RecipeDetail> {
        let completion = self.loader.fetch_by_id(&params.id).await;
        if completion == Completion::Discarded {
            return Err(ShelfError::fetch(format!(
                "Request for recipe {} was superseded",
                params.id
            )));
        }
        settled(
            self.loader.detail_status(),
            self.loader.detail_error(),
            "Failed to fetch recipe details.",
        )?;

        let recipe = self
            .loader
            .selected()
            .ok_or_else(|| ShelfError::RecipeNotFound {
                id: params.id.clone(),
            })?;
        let favorite = self.favorites.is_favorite(&recipe.id);
        Ok(RecipeDetail(RecipeCard { recipe, favorite }))
    }

    /// Fetches details for every favorite recipe.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::Fetch` when the bulk request fails or was
    /// superseded by a newer one.
    pub async fn load_collection(&self) -> Result<RecipeCards> {
        let ids = self.favorites.ids();
        if self.loader.fetch_by_ids(&ids).await == Completion::Discarded {
            return Err(ShelfError::fetch(
                "Request for favorite recipes was superseded",
            ));
        }
        settled(
            self.loader.bulk_status(),
            self.loader.bulk_error(),
            "Failed to fetch favorite recipes.",
        )?;

        let details = self.loader.bulk_details();
        Ok(derive::annotate(&details, &self.favorites)
            .into_iter()
            .collect())
    }

    /// Distinct cuisines in the loaded catalog.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::Fetch` when the catalog cannot be loaded.
    pub async fn cuisines(&self) -> Result<Vec<String>> {
        let catalog = self.load_catalog().await?;
        Ok(derive::cuisines(catalog.iter()))
    }
}
