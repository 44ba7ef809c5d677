//! CLI tool to inspect a recipe catalog outside the browser.
//!
//! Usage:
//!   catalog-run [catalog.json]
//!   catalog-run [catalog.json] --category Mains
//!   catalog-run [catalog.json] --search bread
//!   catalog-run [catalog.json] --id 3
//!
//! Prints the same grid or detail view the site would render, as text.

use clap::Parser;
use recipe_catalog::{Catalog, DetailView, GridView, ListFilter, LoadStatus, SiteConfig};
use std::io::{self, Write};
use std::process;

/// Render a recipe catalog as the list or detail page would show it.
#[derive(Parser)]
#[command(name = "catalog-run")]
struct Cli {
    /// Catalog file (JSON array of recipes)
    catalog: Option<String>,

    /// Show only recipes in this category ("All Recipes" shows everything)
    #[arg(short, long, conflicts_with_all = ["search", "id"])]
    category: Option<String>,

    /// Show only recipes whose title contains this text
    #[arg(short, long, conflicts_with = "id")]
    search: Option<String>,

    /// Show the detail page for this recipe id
    #[arg(long)]
    id: Option<String>,

    /// Show path and record counts on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let config = SiteConfig::default();
    let path = cli.catalog.unwrap_or(config.data_path);

    let catalog = match Catalog::from_path(&path) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error loading catalog: {e}");
            process::exit(1);
        }
    };

    for id in catalog.duplicate_ids() {
        eprintln!("Warning: duplicate recipe id '{id}'; lookups use the first");
    }

    if cli.verbose {
        eprintln!("Catalog:  {path}");
        eprintln!("Recipes:  {}", catalog.len());
    }

    let output = if let Some(id) = cli.id.as_deref() {
        DetailView::build(LoadStatus::Ready, &catalog, Some(id)).to_text()
    } else {
        let filter = match (cli.category, cli.search) {
            (Some(category), _) => Some(ListFilter::Category(category)),
            (None, Some(query)) => Some(ListFilter::Search(query)),
            (None, None) => None,
        };
        let view = GridView::build(LoadStatus::Ready, &catalog, filter.as_ref());
        if cli.verbose {
            let shown = match &view {
                GridView::Cards(cards) => cards.len(),
                _ => 0,
            };
            eprintln!("Shown:    {shown}");
        }
        view.to_text()
    };

    if let Err(e) = io::stdout().write_all(output.as_bytes()) {
        eprintln!("Error writing output: {e}");
        process::exit(1);
    }
}
