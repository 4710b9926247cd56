//! Site generation orchestration.
//!
//! The single entry point a host invokes once per run. Pages are produced
//! one at a time in index order, so article loads never overlap and there
//! is no out-of-order completion to guard against.

use anyhow::{Context, Result};
use std::fs;

use crate::assets::write_css_assets;
use crate::config::Config;
use crate::loader;
use crate::markdown;
use crate::pages;
use crate::pages::index::IndexPageData;

/// Counts reported after a generation run.
#[derive(Debug, Clone, Copy)]
pub struct SiteSummary {
    /// Entries loaded from the article index.
    pub article_count: usize,
    /// Article bodies that could not be loaded (notice pages written).
    pub failed_articles: usize,
    /// True when the index could not be loaded and the fallback page was
    /// written instead of the grid.
    pub used_fallback: bool,
}

/// Generates the full site into the configured output directory.
///
/// Writes bundled CSS assets, the index page (grid or fallback), and one
/// article page per index entry. A failed index load degrades to the
/// fallback page; a failed article body degrades to a notice page and a
/// stderr warning. Neither failure aborts the run.
///
/// # Arguments
///
/// * `config`: Validated command line configuration
///
/// # Returns
///
/// Summary counts for the completed run
///
/// # Errors
///
/// Returns error if output files or directories cannot be written, or the
/// site name cannot be determined.
pub fn generate_site(config: &Config) -> Result<SiteSummary> {
    let site_name = config.site_name().context("Failed to determine site name")?;
    let posts_dir = config.posts_dir();

    fs::create_dir_all(&config.output).context("Failed to create output directory")?;

    let assets_dir = config.output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    write_css_assets(&assets_dir).context("Failed to write CSS assets")?;

    let index_path = config.output.join("index.html");

    let entries = match loader::load_index(&posts_dir) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Warning: {:#}", anyhow::Error::new(e));

            let html = pages::index::generate_fallback(&site_name);
            fs::write(&index_path, html.into_string()).with_context(|| {
                format!("Failed to write fallback page to {}", index_path.display())
            })?;

            return Ok(SiteSummary {
                article_count: 0,
                failed_articles: 0,
                used_fallback: true,
            });
        }
    };

    let html = pages::index::generate(IndexPageData {
        site_name: &site_name,
        entries: &entries,
        image_base: &config.image_base,
    });
    fs::write(&index_path, html.into_string())
        .with_context(|| format!("Failed to write index page to {}", index_path.display()))?;

    let articles_dir = config.output.join("articles");
    fs::create_dir_all(&articles_dir).context("Failed to create articles directory")?;

    let mut failed_articles = 0;
    for entry in &entries {
        let page = match loader::load_article(&posts_dir, &entry.file) {
            Ok(body) => {
                pages::article::generate(&site_name, &entry.title, &markdown::convert(&body))
            }
            Err(e) => {
                eprintln!("Warning: {:#}", anyhow::Error::new(e));
                failed_articles += 1;
                pages::article::generate_unavailable(&site_name, &entry.title)
            }
        };

        let page_path = articles_dir.join(entry.page_name());
        fs::write(&page_path, page.into_string())
            .with_context(|| format!("Failed to write article page {}", page_path.display()))?;
    }

    Ok(SiteSummary {
        article_count: entries.len(),
        failed_articles,
        used_fallback: false,
    })
}
