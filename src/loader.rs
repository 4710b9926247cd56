//! Article index and body loading.
//!
//! The index read is all-or-nothing: any read or parse failure surfaces as
//! an index error and the caller renders the fallback panel instead of a
//! partial grid. Body reads fail per article and only degrade that one page.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::article::ArticleEntry;

/// Filename of the article index inside the posts directory.
pub const INDEX_FILE: &str = "posts.json";

/// Failures while loading article content.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Index file unreadable. Recovered with the fallback panel.
    #[error("cannot read article index {path}")]
    IndexRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Index file is not a well-formed article list. Recovered with the
    /// fallback panel.
    #[error("article index {path} is not well-formed")]
    IndexParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Single article body unreadable. Recovered by logging and rendering
    /// an inline notice in place of the body.
    #[error("cannot read article body {file}")]
    Article {
        file: String,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    /// True when the index fetch itself failed.
    ///
    /// Both index variants share one recovery path (the fallback panel);
    /// an article failure degrades only that article's page.
    pub fn is_index_error(&self) -> bool {
        matches!(self, Self::IndexRead { .. } | Self::IndexParse { .. })
    }
}

/// Loads the article index from the posts directory.
///
/// Returns entries in index order; display order and phase numbering derive
/// from this order.
///
/// # Arguments
///
/// * `posts_dir`: Directory containing `posts.json` and article bodies
///
/// # Errors
///
/// Returns `LoadError::IndexRead` if the file cannot be read, or
/// `LoadError::IndexParse` if it is not a JSON array of article entries.
pub fn load_index(posts_dir: impl AsRef<Path>) -> Result<Vec<ArticleEntry>, LoadError> {
    let path = posts_dir.as_ref().join(INDEX_FILE);

    let raw = fs::read_to_string(&path).map_err(|source| LoadError::IndexRead {
        path: path.clone(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| LoadError::IndexParse { path, source })
}

/// Loads one raw markdown article body.
///
/// # Arguments
///
/// * `posts_dir`: Directory containing article bodies
/// * `file`: Relative body path from the entry's `file` field
///
/// # Errors
///
/// Returns `LoadError::Article` if the body cannot be read.
pub fn load_article(posts_dir: impl AsRef<Path>, file: &str) -> Result<String, LoadError> {
    fs::read_to_string(posts_dir.as_ref().join(file)).map_err(|source| LoadError::Article {
        file: file.to_string(),
        source,
    })
}
