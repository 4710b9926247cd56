use anyhow::{Context, Result};
use chantier::Config;

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let summary = chantier::generate_site(&config).context("Failed to generate site")?;

    let index_path = config.output.join("index.html");
    if summary.used_fallback {
        println!(
            "Generated: {} (fallback page, article index unavailable)",
            index_path.display()
        );
    } else {
        println!(
            "Generated: {} ({} articles, {} unavailable)",
            index_path.display(),
            summary.article_count,
            summary.failed_articles
        );
    }

    if !config.no_open
        && let Err(e) = open::that(&index_path)
    {
        eprintln!("Warning: Failed to open {}: {}", index_path.display(), e);
    }

    Ok(())
}
