use anyhow::Result;
use colored::Colorize;
use skpaths::GeneratorConfig;

#[cfg(feature = "watch")]
pub fn execute(config: GeneratorConfig) -> Result<()> {
    use crate::watch::RouteWatcher;

    println!("{}", "Preparing route path watcher...".green().bold());
    println!();

    // Initial cycle runs before the watcher installs; a failure here
    // aborts instead of watching a tree that cannot be scanned
    let routes = skpaths::generate(&config)?;
    println!(
        "  {} {} route template(s) -> {}",
        "✓".green(),
        routes.len(),
        config.output.display()
    );

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let handle = RouteWatcher::new(config).watch().await?;
            println!("  {} Press Ctrl-C to stop", "👀".cyan());

            tokio::signal::ctrl_c().await?;
            println!();
            println!("{}", "Shutting down...".yellow());
            handle.shutdown().await;
            Ok(())
        })
}

#[cfg(not(feature = "watch"))]
pub fn execute(_config: GeneratorConfig) -> Result<()> {
    println!("{}", "⚠ Watch mode not available".yellow());
    println!();
    println!("Watch mode requires the 'watch' feature.");
    println!("Rebuild with: cargo build --features watch");
    Ok(())
}
