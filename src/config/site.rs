//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::content::loader::DEFAULT_AUTHOR;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site name, shown in listing headings
    pub title: String,

    // Content
    /// Blog root, relative to the site directory; holds one directory per category
    pub content_dir: String,
    pub default_author: String,
    /// Number of posts in "latest" listings
    pub latest_limit: usize,

    // Display
    /// Moment.js-style date format used in listings
    pub date_format: String,
    pub currency_symbol: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "MoreFusion".to_string(),

            content_dir: "src/content/blog".to_string(),
            default_author: DEFAULT_AUTHOR.to_string(),
            latest_limit: 6,

            date_format: "YYYY-MM-DD".to_string(),
            currency_symbol: "₹".to_string(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "MoreFusion");
        assert_eq!(config.content_dir, "src/content/blog");
        assert_eq!(config.default_author, "MoreFusion Team");
        assert_eq!(config.latest_limit, 6);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Blog
content_dir: content/posts
default_author: Test User
latest_limit: 3
analytics_id: G-123
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.content_dir, "content/posts");
        assert_eq!(config.default_author, "Test User");
        assert_eq!(config.latest_limit, 3);
        assert_eq!(config.date_format, "YYYY-MM-DD");
        assert!(config.extra.contains_key("analytics_id"));
    }

    #[test]
    fn test_load_from_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("_config.yml");
        fs::write(&path, "title: From Disk\n").unwrap();
        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.title, "From Disk");

        fs::write(&path, "latest_limit: [not a number\n").unwrap();
        assert!(SiteConfig::load(&path).is_err());
    }
}
