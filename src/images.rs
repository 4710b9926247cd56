//! Card image resolution.
//!
//! Pure filename heuristics, no filesystem checks: an explicit image that
//! does not exist still resolves to its path and simply renders broken.

use crate::article::ArticleEntry;

/// Default directory prepended to resolved image filenames.
pub const DEFAULT_IMAGE_BASE: &str = "../images/build";

/// Placeholder chosen when no keyword rule matches.
const DEFAULT_PLACEHOLDER: &str = "construction-default.jpg";

/// Keyword classification rules, in priority order. First match wins, so a
/// filename matching several rules resolves to the earliest one.
const PLACEHOLDER_RULES: &[(&[&str], &str)] = &[
    (&["plot", "land"], "land-placeholder.jpg"),
    (&["planning"], "planning-placeholder.jpg"),
    (&["ground", "concrete"], "groundworks-placeholder.jpg"),
    (&["sip"], "sip-placeholder.jpg"),
    (&["window", "cladding"], "exterior-placeholder.jpg"),
];

/// Resolves the display image path for an article card.
///
/// An explicit `image` field always wins and is joined onto the base
/// directory verbatim. Otherwise the entry's `file` is classified by
/// case-insensitive substring match against the keyword rules, falling back
/// to the generic construction placeholder.
///
/// # Arguments
///
/// * `entry`: Article entry to resolve an image for
/// * `image_base`: Base directory prepended to the resolved filename
///
/// # Returns
///
/// Image path string; total and deterministic, never fails
pub fn resolve_image(entry: &ArticleEntry, image_base: &str) -> String {
    if let Some(image) = &entry.image {
        return format!("{}/{}", image_base, image);
    }

    let filename = entry.file.to_lowercase();
    for (keywords, placeholder) in PLACEHOLDER_RULES {
        if keywords.iter().any(|keyword| filename.contains(keyword)) {
            return format!("{}/{}", image_base, placeholder);
        }
    }

    format!("{}/{}", image_base, DEFAULT_PLACEHOLDER)
}
