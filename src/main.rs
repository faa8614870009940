use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use urbantrees::core::stats::Summary;
use urbantrees::{Config, Query, RecordStore, project_all};

#[derive(Parser)]
#[command(name = "urbantrees")]
#[command(about = "Browse, search and map the municipal tree inventory")]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// JSON record file (overrides the config file)
    #[arg(short, long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "urbantrees=trace" (RUST_LOG wins)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the dashboard window
    #[cfg(feature = "gui")]
    Gui {
        /// View to open first (dashboard, map, inventory, ...)
        #[arg(long, value_name = "VIEW")]
        view: Option<urbantrees::View>,
    },
    /// List trees whose name, species or area contains QUERY
    Search { query: String },
    /// Print registry statistics
    Stats,
    /// Print map positions of trees, optionally filtered by QUERY
    Project { query: Option<String> },
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let mut config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config {:?}", path))?,
        None => Config::default(),
    };
    if let Some(data) = args.data {
        config.data = Some(data);
    }
    if let Some(level) = args.log_level {
        config.log_level = level;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_target(false)
        .init();

    match args.command {
        #[cfg(feature = "gui")]
        Some(Command::Gui { view }) => {
            if let Some(view) = view {
                config.start_view = view;
            }
            run_gui(config)
        }
        #[cfg(feature = "gui")]
        None => run_gui(config),
        #[cfg(not(feature = "gui"))]
        None => print_stats(&config),
        Some(Command::Stats) => print_stats(&config),
        Some(Command::Search { query }) => search(&config, &query),
        Some(Command::Project { query }) => print_projection(&config, query.as_deref().unwrap_or("")),
    }
}

#[cfg(feature = "gui")]
fn run_gui(config: Config) -> anyhow::Result<()> {
    // Fail fast on a bad box before any window opens.
    config.bounds().context("Invalid map bounds")?;
    config.viewport().context("Invalid map viewport")?;
    urbantrees::gui::run(config).map_err(|e| anyhow::anyhow!("GUI failed: {}", e))
}

fn open_store(config: &Config) -> anyhow::Result<urbantrees::InMemoryStore> {
    config
        .open_store()
        .with_context(|| format!("Failed to open tree registry {:?}", config.data))
}

fn print_stats(config: &Config) -> anyhow::Result<()> {
    let store = open_store(config)?;
    let summary = Summary::of(store.records());

    println!("=== Tree Registry ===");
    println!("Total trees:     {}", summary.total);
    println!("Species:         {}", summary.species);
    println!("Areas covered:   {}", summary.areas);
    println!("Health issues:   {}", summary.health_issues());
    println!();
    println!("Healthy:  {}", summary.health.healthy);
    println!("Moderate: {}", summary.health.moderate);
    println!("Poor:     {}", summary.health.poor);

    println!("\nTrees by area:");
    for (area, count) in &summary.area_distribution {
        println!("  {:<12} {}", area, count);
    }
    println!("\nTrees by species:");
    for (species, count) in &summary.species_distribution {
        println!("  {:<12} {}", species, count);
    }
    Ok(())
}

fn search(config: &Config, query: &str) -> anyhow::Result<()> {
    let store = open_store(config)?;
    let found = Query::new(query).filter(store.records());

    if found.is_empty() {
        println!("No trees match {:?}.", query);
        return Ok(());
    }
    println!("{} of {} trees match {:?}:", found.len(), store.len(), query);
    for tree in found {
        println!(
            "  #{:<4} {:<16} {:<12} {:<10} {}",
            tree.id, tree.name, tree.species, tree.area, tree.health
        );
    }
    Ok(())
}

fn print_projection(config: &Config, query: &str) -> anyhow::Result<()> {
    let store = open_store(config)?;
    let bounds = config.resolve_bounds(&store).context("Invalid map bounds")?;
    let trees = Query::new(query).filter(store.records());
    let viewport = config.viewport().context("Invalid map viewport")?;
    let markers = project_all(trees.iter().copied(), &bounds, &viewport);

    println!("=== Marker Positions ===");
    for (tree, marker) in trees.iter().zip(&markers) {
        let note = if marker.position.is_within(&viewport) {
            ""
        } else {
            "  (off map)"
        };
        println!(
            "  #{:<4} {:<16} x={:>7.2} y={:>7.2}{}",
            tree.id, tree.name, marker.position.x, marker.position.y, note
        );
    }
    Ok(())
}
