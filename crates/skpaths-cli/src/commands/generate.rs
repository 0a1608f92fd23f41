use anyhow::Result;
use colored::Colorize;
use skpaths::GeneratorConfig;

pub fn execute(config: GeneratorConfig) -> Result<()> {
    println!("{}", "Generating route path types...".green().bold());
    println!();
    println!("  {} Routes: {}", "📂".cyan(), config.routes_dir.display());

    // One full cycle; any scan or write failure aborts the command
    let routes = skpaths::generate(&config)?;

    println!("  {} {} route template(s)", "✓".green(), routes.len());
    for template in &routes {
        println!("  {} {}", "→".green(), template);
    }
    println!();
    println!("  {} Wrote {}", "✓".green(), config.output.display());

    Ok(())
}
