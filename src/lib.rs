//! Static site generator for construction build-guide articles.

mod assets;
pub mod article;
pub mod components;
mod config;
pub mod images;
pub mod loader;
pub mod markdown;
pub mod pages;
pub mod site;

pub use article::ArticleEntry;
pub use assets::write_css_assets;
pub use config::Config;
pub use images::{DEFAULT_IMAGE_BASE, resolve_image};
pub use loader::{LoadError, load_article, load_index};
pub use markdown::convert;
pub use site::{SiteSummary, generate_site};
