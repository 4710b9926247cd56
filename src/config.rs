//! Command line configuration.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;

use crate::images::DEFAULT_IMAGE_BASE;

/// Command line configuration for Chantier.
#[derive(Debug, Clone, Parser)]
#[command(name = "chantier", version, about, long_about = None)]
pub struct Config {
    /// Site content directory containing the posts folder
    #[arg(default_value = ".")]
    pub content: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Site name shown in the hero header
    #[arg(long)]
    pub name: Option<String>,

    /// Base directory prepended to card image paths
    #[arg(long, default_value = DEFAULT_IMAGE_BASE)]
    pub image_base: String,

    /// Do not open the generated index page in a browser
    #[arg(long)]
    pub no_open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the content directory does not exist.
    pub fn validate(&self) -> Result<()> {
        if !self.content.exists() {
            bail!(
                "Content directory does not exist: {}",
                self.content.display()
            );
        }

        Ok(())
    }

    /// Returns the posts directory holding the index and article bodies.
    pub fn posts_dir(&self) -> PathBuf {
        self.content.join("posts")
    }

    /// Returns site name from configuration or the content directory name.
    ///
    /// # Errors
    ///
    /// Returns error if the content path has no name component or contains
    /// invalid UTF8.
    pub fn site_name(&self) -> Result<String> {
        if let Some(name) = &self.name {
            return Ok(name.clone());
        }

        let path = self
            .content
            .canonicalize()
            .unwrap_or_else(|_| self.content.clone());

        path.file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("Cannot extract site name from path: {}", path.display()))
            .map(String::from)
    }
}
