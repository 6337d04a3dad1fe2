//! Recipe shelf CLI
//!
//! Command-line interface for browsing recipes, keeping favorites and
//! planning meals.

mod args;
mod cli;
mod renderer;

use std::sync::Arc;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{BrowseArgs, Cli};
use log::info;
use renderer::TerminalRenderer;
use shelf_core::{CatalogSource, RemoteSource, ShelfBuilder, StaticSource};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        catalog_file,
        api_url,
        api_key,
        count,
        command,
    } = Args::parse();

    let source: Arc<dyn CatalogSource> = match catalog_file {
        Some(path) => Arc::new(StaticSource::new(path)),
        None => Arc::new(
            RemoteSource::new(api_url, api_key)
                .context("Failed to create recipe client")?
                .with_catalog_size(count),
        ),
    };

    let shelf = ShelfBuilder::new()
        .with_database_path(database_file)
        .with_source(source)
        .build()
        .await
        .context("Failed to initialize shelf")?;

    let renderer = TerminalRenderer::new(!no_color, shelf.theme());

    info!("Recipe shelf started");

    let cli = Cli::new(shelf, renderer);
    match command {
        Some(Browse(args)) => cli.browse(args).await,
        Some(Show(args)) => cli.show(args).await,
        Some(Fav { command }) => cli.handle_fav_command(command).await,
        Some(Plan(args)) => cli.plan(args).await,
        Some(Cuisines(args)) => cli.cuisines(args).await,
        Some(Theme(args)) => cli.theme(args),
        None => cli.browse(BrowseArgs::default()).await,
    }
}
