use std::path::PathBuf;

use clap::{Parser, Subcommand};
use shelf_core::source::DEFAULT_CATALOG_SIZE;

use crate::cli::{BrowseArgs, CuisinesArgs, FavCommands, IdArgs, PlanArgs, ThemeArgs};

/// Recipe shelf: browse a recipe catalog, keep favorites and plan meals
///
/// Recipes come from a remote recipe API, or from a local JSON file given
/// with `--catalog-file`. Favorites and the color theme are stored in a
/// local SQLite database and survive between runs.
#[derive(Parser)]
#[command(version, about, name = "shelf")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/recipe-shelf/shelf.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Read recipes from a local JSON file instead of the recipe API
    #[arg(long, global = true)]
    pub catalog_file: Option<PathBuf>,

    /// Base URL of the recipe API
    #[arg(
        long,
        global = true,
        env = "SHELF_API_URL",
        default_value = "https://api.spoonacular.com/recipes"
    )]
    pub api_url: String,

    /// API key sent with every request to the recipe API
    #[arg(long, global = true, env = "SHELF_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Number of recipes to request for the catalog
    #[arg(long, global = true, default_value_t = DEFAULT_CATALOG_SIZE)]
    pub count: u32,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the shelf CLI
///
/// Without a command the catalog is listed, the same as `shelf browse`.
#[derive(Subcommand)]
pub enum Commands {
    /// Search, filter and sort the catalog
    #[command(alias = "b")]
    Browse(BrowseArgs),
    /// Show the full details of one recipe
    #[command(alias = "s")]
    Show(IdArgs),
    /// Manage favorite recipes
    #[command(alias = "f")]
    Fav {
        #[command(subcommand)]
        command: FavCommands,
    },
    /// Generate a meal plan from the catalog
    #[command(alias = "p")]
    Plan(PlanArgs),
    /// List the cuisines present in the catalog
    Cuisines(CuisinesArgs),
    /// Show or change the color theme
    Theme(ThemeArgs),
}
