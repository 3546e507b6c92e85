//! morefusion: content pipeline and calculators for the MoreFusion site
//!
//! The [`content`] module turns a directory of Markdown/MDX posts into
//! normalized [`content::Post`] values; the [`calc`] module holds the pure
//! EMI, calorie, BMI and date calculators behind the site's tools.

pub mod calc;
pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{Category, ContentLoader, FsStore};

/// A site checkout: configuration plus the blog content it points at
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Blog root, one directory per category
    pub content_dir: PathBuf,
}

impl Site {
    /// Open a site directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No _config.yml in {:?}, using defaults", base_dir);
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
        })
    }

    /// A loader reading posts from this site's content directory
    pub fn loader(&self) -> ContentLoader<FsStore> {
        ContentLoader::new(FsStore::new(&self.content_dir))
            .with_default_author(self.config.default_author.clone())
    }

    /// Scaffold a new post file and return its path
    pub fn new_post(&self, title: &str, category: Category) -> Result<PathBuf> {
        commands::new::create_post(self, title, category, None)
    }
}
