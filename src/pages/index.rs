//! Build-guide index page generation

use maud::{Markup, html};

use crate::article::ArticleEntry;
use crate::components::card::{article_counter, article_grid, fallback_panel};
use crate::components::layout::page_wrapper;

/// Data container for index page generation
pub struct IndexPageData<'a> {
    pub site_name: &'a str,
    pub entries: &'a [ArticleEntry],
    pub image_base: &'a str,
}

/// Generates the build-guide index page
///
/// Renders the hero header with the article counter, then the full card
/// grid in index order. The grid is always built from scratch; an empty
/// collection yields an empty grid and a zero counter, not an error state.
///
/// # Arguments
///
/// * `data`: Index page data container
///
/// # Returns
///
/// Complete HTML markup for the index page
pub fn generate(data: IndexPageData<'_>) -> Markup {
    page_wrapper(
        data.site_name,
        &["assets/index.css"],
        html! {
            header class="hero" {
                h1 class="site-name" { (data.site_name) }
                p class="hero-subtitle" { "Building a contemporary mountain chalet" }
                (article_counter(data.entries.len()))
            }

            main id="build-articles" class="article-section" {
                (article_grid(data.entries, data.image_base))
            }
        },
    )
}

/// Generates the index page shown when the article index cannot be loaded
///
/// The fallback replaces the grid with a static panel; the counter region
/// is omitted entirely rather than shown with a stale or zero value.
///
/// # Arguments
///
/// * `site_name`: Site name for the hero header
///
/// # Returns
///
/// Complete HTML markup for the fallback index page
pub fn generate_fallback(site_name: &str) -> Markup {
    page_wrapper(
        site_name,
        &["assets/index.css"],
        html! {
            header class="hero" {
                h1 class="site-name" { (site_name) }
                p class="hero-subtitle" { "Building a contemporary mountain chalet" }
            }

            main id="build-articles" class="article-section" {
                (fallback_panel())
            }
        },
    )
}
