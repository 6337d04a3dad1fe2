//! Command argument types and their handlers.
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types with `From`, keeping `shelf-core` free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Shelf
//! ```

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use shelf_core::{
    models::{ALL_CUISINES, KNOWN_CUISINES},
    params::{BrowseRecipes, ClearFavorites, GeneratePlan, Id},
    Cuisines, Shelf, SortKey, Theme,
};

use crate::renderer::TerminalRenderer;

/// Browse the catalog
#[derive(Args, Default)]
pub struct BrowseArgs {
    /// Only list recipes whose title or summary contains this text
    #[arg(short, long)]
    pub query: Option<String>,
    /// Only list recipes of this cuisine ("All" lists every cuisine)
    #[arg(short, long)]
    pub cuisine: Option<String>,
    /// Only list recipes ready within this many minutes
    #[arg(short = 't', long)]
    pub max_time: Option<u32>,
    /// Sort order
    #[arg(short, long, value_enum)]
    pub sort: Option<SortArg>,
    /// Match the query against cuisines as well
    #[arg(long)]
    pub search_cuisine: bool,
    /// Only list favorites
    #[arg(short, long)]
    pub favorites: bool,
    /// Fetch a fresh catalog before listing
    #[arg(long)]
    pub refresh: bool,
}

impl From<BrowseArgs> for BrowseRecipes {
    fn from(args: BrowseArgs) -> Self {
        BrowseRecipes {
            query: args.query,
            cuisine: args.cuisine,
            max_time: args.max_time,
            sort: args.sort.map(SortKey::from),
            search_cuisine: args.search_cuisine,
            favorites_only: args.favorites,
        }
    }
}

/// Sort orders accepted on the command line
#[derive(Clone, Copy, ValueEnum)]
pub enum SortArg {
    Title,
    Time,
    Difficulty,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Title => SortKey::Title,
            SortArg::Time => SortKey::Time,
            SortArg::Difficulty => SortKey::Difficulty,
        }
    }
}

/// Address a single recipe
#[derive(Args)]
pub struct IdArgs {
    /// Recipe ID
    pub id: String,
}

impl From<IdArgs> for Id {
    fn from(args: IdArgs) -> Self {
        Id { id: args.id }
    }
}

/// Favorites commands
#[derive(Subcommand)]
pub enum FavCommands {
    /// Add a recipe to favorites, or remove it if already there
    #[command(alias = "t")]
    Toggle(IdArgs),
    /// List favorite recipes with their details
    #[command(alias = "ls")]
    List,
    /// Remove every favorite
    Clear(ClearArgs),
}

/// Clear all favorites
#[derive(Args)]
pub struct ClearArgs {
    /// Confirm removal of every favorite
    #[arg(long)]
    pub confirm: bool,
}

impl From<ClearArgs> for ClearFavorites {
    fn from(args: ClearArgs) -> Self {
        ClearFavorites {
            confirmed: args.confirm,
        }
    }
}

/// Generate a meal plan
#[derive(Args)]
pub struct PlanArgs {
    /// Number of days to plan (1-7)
    #[arg(short, long, default_value_t = 7)]
    pub days: u8,
    /// Shortest acceptable ready time in minutes
    #[arg(long, default_value_t = 0)]
    pub min_time: u32,
    /// Longest acceptable ready time in minutes
    #[arg(long, default_value_t = 180)]
    pub max_time: u32,
    /// Seed for a reproducible plan
    #[arg(long)]
    pub seed: Option<u64>,
    /// Fill breakfast, lunch and dinner for the whole week
    #[arg(short, long)]
    pub week: bool,
}

impl From<&PlanArgs> for GeneratePlan {
    fn from(args: &PlanArgs) -> Self {
        GeneratePlan {
            days: args.days,
            min_time: args.min_time,
            max_time: args.max_time,
            seed: args.seed,
        }
    }
}

/// List cuisines
#[derive(Args)]
pub struct CuisinesArgs {
    /// List the cuisines accepted by `browse --cuisine` without loading
    /// the catalog
    #[arg(short, long)]
    pub known: bool,
}

/// Show or change the theme
#[derive(Args)]
pub struct ThemeArgs {
    /// New theme; prints the current one when omitted
    #[arg(value_enum)]
    pub theme: Option<ThemeArg>,
}

/// Themes accepted on the command line
#[derive(Clone, Copy, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

/// Runs commands against a shelf and renders the results.
pub struct Cli {
    shelf: Shelf,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(shelf: Shelf, renderer: TerminalRenderer) -> Self {
        Self { shelf, renderer }
    }

    pub async fn browse(&self, args: BrowseArgs) -> Result<()> {
        if args.refresh {
            self.shelf
                .refresh_catalog()
                .await
                .context("Failed to refresh catalog")?;
        }

        let params = BrowseRecipes::from(args);
        let cards = self
            .shelf
            .browse(&params)
            .await
            .context("Failed to browse recipes")?;

        let heading = if params.favorites_only {
            "Favorites"
        } else {
            "Recipes"
        };
        self.renderer
            .render(&format!("# {heading} ({})\n\n{cards}", cards.len()))
    }

    pub async fn show(&self, args: IdArgs) -> Result<()> {
        let params = Id::from(args);
        let detail = self
            .shelf
            .show_recipe(&params)
            .await
            .with_context(|| format!("Failed to show recipe {}", params.id))?;
        self.renderer.render(&detail.to_string())
    }

    pub async fn handle_fav_command(&self, command: FavCommands) -> Result<()> {
        match command {
            FavCommands::Toggle(args) => {
                let status = self.shelf.toggle_favorite(&args.into());
                self.renderer.render(&status.to_string())
            }
            FavCommands::List => {
                let cards = self
                    .shelf
                    .load_collection()
                    .await
                    .context("Failed to load favorites")?;
                self.renderer
                    .render(&format!("# Favorites ({})\n\n{cards}", cards.len()))
            }
            FavCommands::Clear(args) => {
                let status = self
                    .shelf
                    .clear_favorites(&args.into())
                    .context("Failed to clear favorites")?;
                self.renderer.render(&status.to_string())
            }
        }
    }

    pub async fn plan(&self, args: PlanArgs) -> Result<()> {
        let params = GeneratePlan::from(&args);
        let rendered = if args.week {
            self.shelf
                .plan_week(&params)
                .await
                .context("Failed to plan the week")?
                .to_string()
        } else {
            self.shelf
                .plan_days(&params)
                .await
                .context("Failed to plan meals")?
                .to_string()
        };
        self.renderer.render(&rendered)
    }

    pub async fn cuisines(&self, args: CuisinesArgs) -> Result<()> {
        let cuisines: Vec<String> = if args.known {
            std::iter::once(ALL_CUISINES)
                .chain(KNOWN_CUISINES)
                .map(str::to_string)
                .collect()
        } else {
            self.shelf
                .cuisines()
                .await
                .context("Failed to list cuisines")?
        };
        self.renderer
            .render(&format!("# Cuisines\n\n{}", Cuisines(cuisines)))
    }

    pub fn theme(&self, args: ThemeArgs) -> Result<()> {
        match args.theme {
            Some(theme) => {
                let status = self.shelf.set_theme(theme.into());
                self.renderer.render(&status.to_string())
            }
            None => self
                .renderer
                .render(&format!("Current theme: {}\n", self.shelf.theme())),
        }
    }
}
