mod commands;

#[cfg(feature = "watch")]
mod watch;

use anyhow::Result;
use clap::{Parser, Subcommand};
use skpaths::GeneratorConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skpaths")]
#[command(version, about = "Generate a TypeScript RoutePath type from a SvelteKit route tree", long_about = None)]
struct Cli {
    /// Config file to read (default: skpaths.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Route directory to scan (overrides the config file)
    #[arg(long, global = true)]
    routes: Option<PathBuf>,

    /// Declaration file to write (overrides the config file)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one scan-and-emit cycle
    Generate,

    /// Regenerate continuously as the route tree changes
    Watch,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    match cli.command {
        Commands::Generate => commands::generate::execute(config),
        Commands::Watch => commands::watch::execute(config),
    }
}

/// Loads the config file and applies command-line overrides on top.
fn resolve_config(cli: &Cli) -> Result<GeneratorConfig> {
    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::load_default()?,
    };

    if let Some(routes) = &cli.routes {
        config.routes_dir = routes.clone();
    }
    if let Some(output) = &cli.output {
        config.output = output.clone();
    }

    Ok(config)
}
