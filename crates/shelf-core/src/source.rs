//! Catalog sources: where upstream recipe records come from.
//!
//! The loader only depends on the [`CatalogSource`] trait. Two
//! implementations ship with the crate: [`RemoteSource`], a client for a
//! Spoonacular-compatible HTTP API, and [`StaticSource`], which reads a JSON
//! file holding the whole catalog.

use std::{path::PathBuf, time::Duration};

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Deserialize};
use tokio::task;

use crate::{
    error::{FetchResultExt, Result, ShelfError},
    normalize::{RawId, RawRecipe},
};

/// Default number of recipes requested from the remote list endpoint.
pub const DEFAULT_CATALOG_SIZE: u32 = 24;

/// Image host of the Spoonacular API.
pub const DEFAULT_IMAGE_HOST: &str = "https://spoonacular.com/recipeImages";

/// Supplier of upstream recipe records.
///
/// Every failure must be reported as an error whose display string is fit
/// for the user, usually [`ShelfError::Fetch`].
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the full recipe list.
    async fn fetch_catalog(&self) -> Result<Vec<RawRecipe>>;

    /// Fetch one detail record.
    async fn fetch_by_id(&self, id: &str) -> Result<RawRecipe>;

    /// Fetch detail records for several ids. Never called with an empty list.
    async fn fetch_by_ids(&self, ids: &[String]) -> Result<Vec<RawRecipe>>;

    /// Host that record ids can be turned into image URLs against.
    fn image_host(&self) -> Option<&str> {
        None
    }
}

#[derive(Debug, Deserialize)]
struct RandomRecipes {
    #[serde(default)]
    recipes: Vec<RawRecipe>,
}

#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

/// Client for a Spoonacular-compatible recipe API.
pub struct RemoteSource {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    catalog_size: u32,
    image_host: Option<String>,
}

impl RemoteSource {
    /// Creates a client for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::Configuration` if the HTTP client cannot be
    /// constructed.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ShelfError::Configuration {
                message: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            catalog_size: DEFAULT_CATALOG_SIZE,
            image_host: Some(DEFAULT_IMAGE_HOST.to_string()),
        })
    }

    /// Number of recipes requested by [`CatalogSource::fetch_catalog`].
    pub fn with_catalog_size(mut self, size: u32) -> Self {
        self.catalog_size = size;
        self
    }

    /// Host used to construct image URLs for records without one. Defaults
    /// to [`DEFAULT_IMAGE_HOST`].
    pub fn with_image_host(mut self, host: impl Into<String>) -> Self {
        self.image_host = Some(host.into());
        self
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        fallback: &str,
    ) -> Result<T> {
        let url = format!("{}{path}", self.base_url);
        debug!("GET {url}");

        let mut req = self.client.get(&url).query(query);
        if let Some(key) = &self.api_key {
            req = req.query(&[("apiKey", key)]);
        }

        let response = req
            .send()
            .await
            .fetch_context("Failed to reach recipe source")?;
        let response = Self::check_status(response, fallback).await?;
        response
            .json()
            .await
            .fetch_context("Failed to decode recipe source response")
    }

    /// Turn a non-success response into a fetch error, preferring the
    /// message the API put in the body.
    async fn check_status(response: Response, fallback: &str) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body: ApiErrorBody = response.json().await.unwrap_or_default();
        debug!("Recipe source answered {status}");
        Err(ShelfError::fetch(
            body.message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| fallback.to_string()),
        ))
    }
}

#[async_trait]
impl CatalogSource for RemoteSource {
    async fn fetch_catalog(&self) -> Result<Vec<RawRecipe>> {
        let page: RandomRecipes = self
            .get(
                "/random",
                &[("number", self.catalog_size.to_string())],
                "Failed to fetch recipes from the recipe source.",
            )
            .await?;
        Ok(page.recipes)
    }

    async fn fetch_by_id(&self, id: &str) -> Result<RawRecipe> {
        self.get(
            &format!("/{}/information", urlencoding::encode(id)),
            &[],
            &format!("Failed to fetch recipe with ID {id}."),
        )
        .await
    }

    async fn fetch_by_ids(&self, ids: &[String]) -> Result<Vec<RawRecipe>> {
        self.get(
            "/informationBulk",
            &[("ids", ids.join(","))],
            "Failed to fetch favorite recipes.",
        )
        .await
    }

    fn image_host(&self) -> Option<&str> {
        self.image_host.as_deref()
    }
}

/// Catalog file wrapped in an object, as the remote list endpoint answers.
#[derive(Debug, Deserialize)]
struct WrappedCatalog {
    recipes: Vec<RawRecipe>,
}

/// Parses a catalog file holding either a bare array or an object with a
/// `recipes` array. The shape is picked from the first character so that
/// errors point at the offending record.
fn parse_catalog(contents: &str) -> serde_json::Result<Vec<RawRecipe>> {
    if contents.trim_start().starts_with('[') {
        serde_json::from_str(contents)
    } else {
        serde_json::from_str::<WrappedCatalog>(contents).map(|file| file.recipes)
    }
}

/// Catalog read from a JSON file on every request.
pub struct StaticSource {
    path: PathBuf,
}

impl StaticSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read_all(&self) -> Result<Vec<RawRecipe>> {
        let path = self.path.clone();

        task::spawn_blocking(move || {
            let contents = std::fs::read_to_string(&path).map_err(|e| {
                ShelfError::fetch(format!(
                    "Failed to read catalog file '{}': {e}",
                    path.display()
                ))
            })?;
            parse_catalog(&contents).map_err(|e| {
                ShelfError::fetch(format!(
                    "Failed to parse catalog file '{}': {e}",
                    path.display()
                ))
            })
        })
        .await
        .map_err(|e| ShelfError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}

fn record_id(raw: &RawRecipe) -> Option<String> {
    raw.id.as_ref().map(RawId::as_string)
}

#[async_trait]
impl CatalogSource for StaticSource {
    async fn fetch_catalog(&self) -> Result<Vec<RawRecipe>> {
        self.read_all().await
    }

    async fn fetch_by_id(&self, id: &str) -> Result<RawRecipe> {
        self.read_all()
            .await?
            .into_iter()
            .find(|raw| record_id(raw).as_deref() == Some(id))
            .ok_or_else(|| ShelfError::RecipeNotFound { id: id.to_string() })
    }

    async fn fetch_by_ids(&self, ids: &[String]) -> Result<Vec<RawRecipe>> {
        let all = self.read_all().await?;
        Ok(ids
            .iter()
            .filter_map(|id| {
                all.iter()
                    .find(|raw| record_id(raw).as_deref() == Some(id.as_str()))
                    .cloned()
            })
            .collect())
    }
}
