//! Article index data model.
//!
//! Entries come from the `posts/posts.json` index. Only `file` is required;
//! every other field has a display fallback. Entries are never mutated after
//! deserialization, and display order is index order.

use serde::{Deserialize, Deserializer};
use std::path::Path;

/// Rejects empty or whitespace-only `file` values during deserialization.
///
/// The index is all-or-nothing: one entry without a usable body path makes
/// the whole index malformed.
fn deserialize_file<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    if value.trim().is_empty() {
        return Err(serde::de::Error::custom(
            "article `file` must be a non-empty relative path",
        ));
    }
    Ok(value)
}

/// One record of the article index.
///
/// `date` is opaque display text; it is shown verbatim, never parsed.
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleEntry {
    /// Relative path of the markdown body under the posts directory.
    #[serde(deserialize_with = "deserialize_file")]
    pub file: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: String,
    /// Free-form status text ("Complete", "In Progress", ...).
    #[serde(default)]
    pub status: Option<String>,
    /// Explicit image filename under the image base directory.
    #[serde(default)]
    pub image: Option<String>,
}

impl ArticleEntry {
    /// Status text for the card badge, defaulting to "Complete".
    pub fn status_label(&self) -> &str {
        self.status.as_deref().unwrap_or("Complete")
    }

    /// CSS class for the status badge.
    ///
    /// Unrecognized status text falls back to the complete style rather
    /// than an unstyled badge.
    pub fn status_class(&self) -> &'static str {
        let Some(status) = self.status.as_deref() else {
            return "status-complete";
        };

        match status.to_lowercase().as_str() {
            "complete" | "completed" => "status-complete",
            "in progress" | "progress" | "ongoing" => "status-progress",
            "planned" | "upcoming" => "status-planned",
            _ => "status-complete",
        }
    }

    /// Output page filename for this entry (`01-plot.md` -> `01-plot.html`).
    pub fn page_name(&self) -> String {
        let stem = Path::new(&self.file)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(self.file.as_str());
        format!("{}.html", stem)
    }
}
