//! Article card and grid components

use maud::{Markup, html};

use crate::article::ArticleEntry;
use crate::images::resolve_image;

/// Renders a single article card
///
/// Displays the resolved card image with a phase badge, then title,
/// description, date, and status badge. The whole card links to the
/// article's generated page; the grid is rendered fresh each run, so the
/// card carries no identity beyond its markup.
///
/// # Arguments
///
/// * `entry`: Article entry to render
/// * `phase`: 1-based position of the entry in the index
/// * `image`: Resolved image path for the card background
///
/// # Returns
///
/// Clickable article card markup
pub fn article_card(entry: &ArticleEntry, phase: usize, image: &str) -> Markup {
    let href = format!("articles/{}", entry.page_name());
    let status_class = format!("article-status {}", entry.status_class());

    html! {
        a href=(href) class="article-card" {
            div class="article-image" style=(format!("background-image: url('{}')", image)) {
                div class="article-phase" { "Phase " (phase) }
            }
            div class="article-content" {
                h3 class="article-title" { (entry.title) }
                p class="article-description" { (entry.description) }
                div class="article-meta" {
                    span class="article-date" { (entry.date) }
                    span class=(status_class) { (entry.status_label()) }
                }
            }
        }
    }
}

/// Renders the full article grid from a collection
///
/// Produces the entire grid contents in one pass: one card per entry, in
/// index order, with phase numbers derived from position. There is no
/// incremental diffing; callers always rebuild from an empty container.
///
/// # Arguments
///
/// * `entries`: Ordered article collection
/// * `image_base`: Base directory for resolved card images
///
/// # Returns
///
/// Grid markup containing all article cards
pub fn article_grid(entries: &[ArticleEntry], image_base: &str) -> Markup {
    html! {
        div class="article-grid" {
            @for (index, entry) in entries.iter().enumerate() {
                (article_card(entry, index + 1, &resolve_image(entry, image_base)))
            }
        }
    }
}

/// Renders the article counter region
///
/// # Arguments
///
/// * `count`: Number of articles in the loaded collection
pub fn article_counter(count: usize) -> Markup {
    html! {
        p class="article-count" {
            span class="count-value" { (count) }
            " construction guides"
        }
    }
}

/// Renders the static fallback panel shown when the index cannot be loaded
pub fn fallback_panel() -> Markup {
    html! {
        div class="error-message" {
            h3 { "Unable to load construction guides" }
            p { "Please check back later for our build documentation." }
        }
    }
}
