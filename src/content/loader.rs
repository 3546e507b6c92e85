//! Content loader - builds posts from a content store

use chrono::Utc;
use std::collections::{HashMap, HashSet};
use std::path::Path;

use super::frontmatter::parse_date;
use super::markdown;
use super::post::{normalize_category, Category, Post, PrevNext};
use super::store::ContentStore;
use super::FrontMatter;
use crate::error::{ContentError, Result};

/// Author used when a post does not name one
pub const DEFAULT_AUTHOR: &str = "MoreFusion Team";

/// Extensions recognised as post files (compared case-insensitively)
const CONTENT_EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Loads posts from a content store organised as `<category>/<slug>.<ext>`.
///
/// Nothing is cached: every query rescans the store.
pub struct ContentLoader<S> {
    store: S,
    default_author: String,
}

impl<S: ContentStore> ContentLoader<S> {
    /// Create a new content loader
    pub fn new(store: S) -> Self {
        Self {
            store,
            default_author: DEFAULT_AUTHOR.to_string(),
        }
    }

    /// Use a different fallback author
    pub fn with_default_author(mut self, author: impl Into<String>) -> Self {
        self.default_author = author.into();
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load all posts, newest first.
    ///
    /// Categories are scanned in their fixed order and files in name order;
    /// posts with equal dates keep that order.
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let mut posts = Vec::new();

        for category in Category::ALL {
            let Some(files) = self.store.list(category.as_str())? else {
                tracing::debug!("No directory for category {}", category);
                continue;
            };

            for file in files {
                if let Some(post) = self.read_post(category, &file)? {
                    posts.push(post);
                }
            }
        }

        let mut seen = HashSet::new();
        for post in &posts {
            if !seen.insert(post.id.as_str()) {
                return Err(ContentError::DuplicateId(post.id.clone()));
            }
        }

        // Stable sort: ties keep scan order
        posts.sort_by(|a, b| b.date.cmp(&a.date));

        tracing::debug!("Loaded {} posts", posts.len());
        Ok(posts)
    }

    /// The `limit` most recent posts
    pub fn latest_posts(&self, limit: usize) -> Result<Vec<Post>> {
        let mut posts = self.load_posts()?;
        posts.truncate(limit);
        Ok(posts)
    }

    /// Posts of one category, newest first
    pub fn posts_by_category(&self, category: Category) -> Result<Vec<Post>> {
        Ok(self
            .load_posts()?
            .into_iter()
            .filter(|p| p.category == category)
            .collect())
    }

    /// Look a post up by slug without scanning the whole store.
    ///
    /// Only the `category` directory is read, so a post whose front-matter
    /// moves it to another category is found under its directory.
    pub fn post_by_slug(&self, category: Category, slug: &str) -> Result<Option<Post>> {
        if slug.is_empty() || slug.contains(['/', '\\']) || slug.starts_with('.') {
            return Ok(None);
        }

        for ext in CONTENT_EXTENSIONS {
            if let Some(post) = self.read_post(category, &format!("{}.{}", slug, ext))? {
                return Ok(Some(post));
            }
        }

        Ok(None)
    }

    /// The newer and older neighbours of a post within its category
    pub fn prev_next(&self, category: Category, slug: &str) -> Result<PrevNext> {
        let posts = self.posts_by_category(category)?;
        let Some(post) = posts.iter().find(|p| p.slug == slug) else {
            return Ok(PrevNext::default());
        };

        Ok(PrevNext {
            prev: post.prev(&posts).cloned(),
            next: post.next(&posts).cloned(),
        })
    }

    /// Tags with the number of posts carrying them, most used first
    pub fn tag_counts(&self) -> Result<Vec<(String, usize)>> {
        let posts = self.load_posts()?;
        let mut tags: HashMap<String, usize> = HashMap::new();
        for tag in posts.iter().flat_map(|p| p.tags.iter()) {
            *tags.entry(tag.clone()).or_insert(0) += 1;
        }

        let mut counts: Vec<_> = tags.into_iter().collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        Ok(counts)
    }

    /// Read a single post from `<category>/<file_name>`.
    ///
    /// Returns `None` for files that are not markdown and for missing files.
    pub fn read_post(&self, category: Category, file_name: &str) -> Result<Option<Post>> {
        let Some((slug, ext)) = split_content_file_name(file_name) else {
            return Ok(None);
        };

        let path = format!("{}/{}", category.as_str(), file_name);
        let Some(raw) = self.store.read(&path)? else {
            return Ok(None);
        };

        let (fm, body) = FrontMatter::parse(&raw).map_err(|source| ContentError::FrontMatter {
            path: path.clone(),
            source,
        })?;

        // A front-matter category moves the post out of its directory
        let category = match &fm.category {
            Some(value) => normalize_category(value).ok_or_else(|| ContentError::InvalidCategory {
                path: path.clone(),
                value: describe_value(value),
            })?,
            None => category,
        };

        let date = match fm.raw_date() {
            Some(raw_date) => parse_date(raw_date).ok_or_else(|| ContentError::InvalidDate {
                path: path.clone(),
                value: raw_date.to_string(),
            })?,
            None => self
                .store
                .modified(&path)?
                .unwrap_or_else(|| Utc::now().fixed_offset()),
        };

        let excerpt = match non_empty(fm.excerpt) {
            Some(excerpt) => excerpt,
            None if ext.eq_ignore_ascii_case("mdx") => {
                markdown::excerpt(&markdown::strip_mdx_modules(body))
            }
            None => markdown::excerpt(body),
        };

        let post = Post {
            id: format!("{}/{}", category, slug),
            slug: slug.to_string(),
            title: non_empty(fm.title).unwrap_or_else(|| slug.replace('-', " ")),
            excerpt,
            date,
            author: non_empty(fm.author).unwrap_or_else(|| self.default_author.clone()),
            category,
            tags: fm.tags,
            image: non_empty(fm.image),
            content: body.to_string(),
            read_time: markdown::read_time(body),
        };

        tracing::debug!("Loaded post {} from {}", post.id, path);
        Ok(Some(post))
    }
}

/// Split a post file name into slug and extension
fn split_content_file_name(file_name: &str) -> Option<(&str, &str)> {
    if file_name.contains(['/', '\\']) {
        return None;
    }
    let path = Path::new(file_name);
    let ext = path.extension()?.to_str()?;
    if !CONTENT_EXTENSIONS
        .iter()
        .any(|known| ext.eq_ignore_ascii_case(known))
    {
        return None;
    }
    let slug = path.file_stem()?.to_str()?;
    if slug.is_empty() {
        return None;
    }
    Some((slug, ext))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn describe_value(value: &serde_yaml::Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => serde_yaml::to_string(value)
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|_| format!("{:?}", value)),
    }
}
