//! Markdown conversion for article bodies.
//!
//! The build-guide articles use a deliberately small grammar: headers, bold,
//! italic, images, links, and blank-line paragraphs. Conversion is an
//! ordered list of rewrite rules applied left to right, not a general
//! markdown parser; a full parser would be over-engineering for this bounded
//! grammar. Rule order is load-bearing:
//!
//! 1. Headers run longest-prefix-first (`### ` before `## ` before `# `),
//!    otherwise a greedy single-hash rule would mis-capture deeper headers.
//! 2. Bold runs before italic, otherwise a bold span's double asterisks
//!    would be misread as two italic markers.
//! 3. Images run before links, since image syntax is link syntax prefixed
//!    with `!`; links first would corrupt every image into a malformed link
//!    wrapping an orphan `!`.
//! 4. Paragraph wrapping runs last, followed by cleanup that unnests
//!    headers from paragraph tags.
//!
//! Raw angle brackets and ampersands in input pass through unescaped;
//! article content is author-controlled and trusted.

use regex::Regex;
use std::sync::LazyLock;

/// Span and header rewrite rules, in mandatory application order.
static REWRITE_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        // Line-anchored headers, longest prefix first
        (r"(?m)^### (.*)$", "<h3>$1</h3>"),
        (r"(?m)^## (.*)$", "<h2>$1</h2>"),
        (r"(?m)^# (.*)$", "<h1>$1</h1>"),
        // Bold before italic
        (r"\*\*(.*?)\*\*", "<strong>$1</strong>"),
        (r"\*(.*?)\*", "<em>$1</em>"),
        // Images before links
        (r"!\[(.*?)\]\((.*?)\)", r#"<img src="$2" alt="$1" />"#),
        (r"\[(.*?)\]\((.*?)\)", r#"<a href="$2">$1</a>"#),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (
            Regex::new(pattern).expect("rewrite pattern compiles"),
            replacement,
        )
    })
    .collect()
});

/// Matches a paragraph open tag nested directly before a header open tag.
static PARA_BEFORE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<p>(<h[1-6]>)").expect("cleanup pattern compiles"));

/// Matches a paragraph close tag nested directly after a header close tag.
static PARA_AFTER_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(</h[1-6]>)</p>").expect("cleanup pattern compiles"));

/// Converts an article markdown body to HTML.
///
/// Pure, deterministic, and total: malformed input degrades to literal text
/// rather than erroring, and empty input yields empty output.
///
/// # Arguments
///
/// * `markdown`: Raw article body text
///
/// # Returns
///
/// Converted HTML string
pub fn convert(markdown: &str) -> String {
    let mut html = markdown.to_string();

    for (pattern, replacement) in REWRITE_RULES.iter() {
        html = pattern.replace_all(&html, *replacement).into_owned();
    }

    // Blank lines become paragraph boundaries, then one outer wrap
    html = html.replace("\n\n", "</p><p>");
    html = format!("<p>{}</p>", html);

    // Drop empty pairs and unnest headers from paragraph tags
    html = html.replace("<p></p>", "");
    html = PARA_BEFORE_HEADER.replace_all(&html, "$1").into_owned();
    html = PARA_AFTER_HEADER.replace_all(&html, "$1").into_owned();

    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_header_and_emphasis() {
        // Arrange
        let markdown = "# Title\n\nSome **bold** and *italic* text.";

        // Act
        let html = convert(markdown);

        // Assert
        assert_eq!(
            html,
            "<h1>Title</h1><p>Some <strong>bold</strong> and <em>italic</em> text.</p>"
        );
    }

    #[test]
    fn test_convert_header_levels() {
        // Arrange
        let markdown = "# One\n\n## Two\n\n### Three";

        // Act
        let html = convert(markdown);

        // Assert
        assert!(html.contains("<h1>One</h1>"), "Should convert h1: {}", html);
        assert!(html.contains("<h2>Two</h2>"), "Should convert h2: {}", html);
        assert!(
            html.contains("<h3>Three</h3>"),
            "Should convert h3: {}",
            html
        );
    }

    #[test]
    fn test_convert_deep_header_not_mis_captured() {
        // Arrange: a greedy single-hash rule would produce "<h1>## text</h1>"
        let html = convert("### Roof Details");

        // Assert
        assert_eq!(html, "<h3>Roof Details</h3>");
    }

    #[test]
    fn test_convert_headers_on_every_matching_line() {
        // Arrange: multi-line scan, not just the first match
        let markdown = "# First\ntext\n# Second";

        // Act
        let html = convert(markdown);

        // Assert
        assert!(html.contains("<h1>First</h1>"), "First header: {}", html);
        assert!(html.contains("<h1>Second</h1>"), "Second header: {}", html);
    }

    #[test]
    fn test_convert_header_marker_mid_line_ignored() {
        // Arrange: header markers are line-anchored
        let html = convert("weight # not a header");

        // Assert
        assert!(
            !html.contains("<h1>"),
            "Mid-line hash must not become a header: {}",
            html
        );
    }

    #[test]
    fn test_convert_bold_before_italic_ordering() {
        // Arrange: if italic ran first, ** would be eaten as two em markers
        let html = convert("**strong**");

        // Assert
        assert_eq!(html, "<p><strong>strong</strong></p>");
    }

    #[test]
    fn test_convert_bold_non_greedy() {
        // Arrange
        let html = convert("**a** and **b**");

        // Assert
        assert_eq!(html, "<p><strong>a</strong> and <strong>b</strong></p>");
    }

    #[test]
    fn test_convert_image_before_link_ordering() {
        // Arrange: link-first would yield a malformed link wrapping "!"
        let html = convert("![alt](img.jpg)");

        // Assert
        assert_eq!(html, r#"<p><img src="img.jpg" alt="alt" /></p>"#);
        assert!(!html.contains("<a "), "Image must not become a link");
        assert!(!html.contains('!'), "No orphan bang may survive: {}", html);
    }

    #[test]
    fn test_convert_link() {
        // Arrange
        let html = convert("[the mairie](https://saintgervais.com)");

        // Assert
        assert_eq!(
            html,
            r#"<p><a href="https://saintgervais.com">the mairie</a></p>"#
        );
    }

    #[test]
    fn test_convert_image_and_link_together() {
        // Arrange
        let html = convert("![site](dig.jpg) and [plans](plans.pdf)");

        // Assert
        assert!(
            html.contains(r#"<img src="dig.jpg" alt="site" />"#),
            "Image intact: {}",
            html
        );
        assert!(
            html.contains(r#"<a href="plans.pdf">plans</a>"#),
            "Link intact: {}",
            html
        );
    }

    #[test]
    fn test_convert_paragraph_boundaries() {
        // Arrange
        let html = convert("first block\n\nsecond block");

        // Assert
        assert_eq!(html, "<p>first block</p><p>second block</p>");
    }

    #[test]
    fn test_convert_single_newline_is_not_a_boundary() {
        // Arrange
        let html = convert("line one\nline two");

        // Assert
        assert_eq!(html, "<p>line one\nline two</p>");
    }

    #[test]
    fn test_convert_header_not_nested_in_paragraph() {
        // Arrange
        let html = convert("intro\n\n## Works\n\noutro");

        // Assert
        assert!(
            !html.contains("<p><h2>") && !html.contains("</h2></p>"),
            "Header must not be nested inside a paragraph: {}",
            html
        );
        assert_eq!(html, "<p>intro</p><h2>Works</h2><p>outro</p>");
    }

    #[test]
    fn test_convert_empty_input() {
        // Act
        let html = convert("");

        // Assert
        assert!(
            html.trim().is_empty(),
            "Empty input yields empty output: {:?}",
            html
        );
    }

    #[test]
    fn test_convert_unclosed_emphasis_degrades() {
        // Arrange: malformed input passes through as literal text
        let html = convert("an *unclosed span");

        // Assert
        assert_eq!(html, "<p>an *unclosed span</p>");
    }

    #[test]
    fn test_convert_raw_html_passes_through() {
        // Arrange: trusted content, no escaping by design
        let html = convert("5 < 7 & <b>raw</b>");

        // Assert
        assert_eq!(html, "<p>5 < 7 & <b>raw</b></p>");
    }

    #[test]
    fn test_convert_is_deterministic() {
        // Arrange
        let markdown = "# T\n\n**b** *i* ![a](u) [t](u)";

        // Act & Assert
        assert_eq!(convert(markdown), convert(markdown));
    }

    #[test]
    fn test_convert_full_article() {
        // Arrange
        let markdown = "# Groundworks\n\n\
            The digger arrived on a **cold** morning.\n\n\
            ## The Pour\n\n\
            We used *fibre-reinforced* concrete.\n\n\
            ![the slab](slab.jpg)\n\n\
            More detail in [the planning notes](02-planning.md).";

        // Act
        let html = convert(markdown);

        // Assert
        assert!(html.starts_with("<h1>Groundworks</h1>"), "Got: {}", html);
        assert!(html.contains("<strong>cold</strong>"), "Got: {}", html);
        assert!(html.contains("<h2>The Pour</h2>"), "Got: {}", html);
        assert!(html.contains("<em>fibre-reinforced</em>"), "Got: {}", html);
        assert!(
            html.contains(r#"<img src="slab.jpg" alt="the slab" />"#),
            "Got: {}",
            html
        );
        assert!(
            html.contains(r#"<a href="02-planning.md">the planning notes</a>"#),
            "Got: {}",
            html
        );
    }
}
