//! Article page generation
//!
//! Article pages play the role of the reading surface: a converted body in
//! a card-style wrapper with a link back to the grid. Body HTML arrives
//! finished from the markdown module and is inserted pre-escaped.

use maud::{Markup, PreEscaped, html};

use crate::components::layout::page_wrapper;

/// Generates an article page from a converted body
///
/// # Arguments
///
/// * `site_name`: Site name for the page title and back link
/// * `title`: Article title from the index entry
/// * `body_html`: Finished HTML from the markdown converter
///
/// # Returns
///
/// Complete HTML markup for the article page
pub fn generate(site_name: &str, title: &str, body_html: &str) -> Markup {
    page_wrapper(
        title,
        &["../assets/article.css"],
        html! {
            header class="article-nav" {
                a href="../index.html" class="back-link" { "← " (site_name) }
            }

            main class="article-panel" {
                div class="article-body" {
                    (PreEscaped(body_html))
                }
            }
        },
    )
}

/// Generates the notice page used when an article body cannot be loaded
///
/// Keeps the card's link alive with an inline notice instead of a dead
/// page; the failure itself is only logged.
///
/// # Arguments
///
/// * `site_name`: Site name for the page title and back link
/// * `title`: Article title from the index entry
///
/// # Returns
///
/// Complete HTML markup for the notice page
pub fn generate_unavailable(site_name: &str, title: &str) -> Markup {
    page_wrapper(
        title,
        &["../assets/article.css"],
        html! {
            header class="article-nav" {
                a href="../index.html" class="back-link" { "← " (site_name) }
            }

            main class="article-panel" {
                div class="error-message" {
                    h3 { "This guide is not available right now" }
                    p { "The article could not be loaded. Please try again later." }
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_inserts_body_unescaped() {
        // Arrange
        let body = "<h1>Groundworks</h1><p>Some <strong>bold</strong> text.</p>";

        // Act
        let html = generate("Chalet Miage", "Groundworks", body).into_string();

        // Assert
        assert!(
            html.contains("<h1>Groundworks</h1>"),
            "Converted body must pass through unescaped: {}",
            html
        );
        assert!(
            html.contains("<strong>bold</strong>"),
            "Inline tags must survive: {}",
            html
        );
        assert!(
            html.contains(r#"href="../index.html""#),
            "Should link back to the grid"
        );
    }

    #[test]
    fn test_generate_title_in_head() {
        // Act
        let html = generate("Chalet Miage", "The Pour", "<p>x</p>").into_string();

        // Assert
        assert!(
            html.contains("<title>The Pour - Chantier</title>"),
            "Article title should drive the page title: {}",
            html
        );
    }

    #[test]
    fn test_generate_unavailable_notice() {
        // Act
        let html = generate_unavailable("Chalet Miage", "Missing").into_string();

        // Assert
        assert!(
            html.contains("This guide is not available right now"),
            "Notice should be inline: {}",
            html
        );
        assert!(
            html.contains(r#"href="../index.html""#),
            "Back link should still work"
        );
    }
}
