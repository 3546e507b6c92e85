//! Post and category models

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A blog category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "AI")]
    Ai,
    #[serde(rename = "coding")]
    Coding,
    #[serde(rename = "drama")]
    Drama,
    #[serde(rename = "film")]
    Film,
    #[serde(rename = "general")]
    General,
    #[serde(rename = "shopping")]
    Shopping,
}

impl Category {
    /// All categories in scan order
    pub const ALL: [Category; 6] = [
        Category::Ai,
        Category::Coding,
        Category::Drama,
        Category::Film,
        Category::General,
        Category::Shopping,
    ];

    /// Canonical name, also the category's directory in the content store
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Ai => "AI",
            Category::Coding => "coding",
            Category::Drama => "drama",
            Category::Film => "film",
            Category::General => "general",
            Category::Shopping => "shopping",
        }
    }

    /// Case-insensitive lookup; surrounding whitespace is ignored
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "ai" => Some(Category::Ai),
            "coding" => Some(Category::Coding),
            "drama" => Some(Category::Drama),
            "film" => Some(Category::Film),
            "general" => Some(Category::General),
            "shopping" => Some(Category::Shopping),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_name(s).ok_or_else(|| {
            let names: Vec<_> = Category::ALL.iter().map(|c| c.as_str()).collect();
            format!("unknown category {:?} (expected one of: {})", s, names.join(", "))
        })
    }
}

/// Normalize a raw front-matter value into a category.
///
/// Only strings are considered; any other value yields `None`.
pub fn normalize_category(value: &serde_yaml::Value) -> Option<Category> {
    value.as_str().and_then(Category::from_name)
}

/// A blog post with all derived fields filled in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// `<category>/<slug>`
    pub id: String,

    /// File name without extension
    pub slug: String,

    pub title: String,

    /// Explicit or derived summary
    pub excerpt: String,

    /// Publication date
    pub date: DateTime<FixedOffset>,

    pub author: String,

    pub category: Category,

    /// Tags in front-matter order
    pub tags: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Raw markdown body
    pub content: String,

    /// Estimated minutes to read, at least 1
    pub read_time: u32,
}

impl Post {
    /// Get the previous (newer) post in a list
    pub fn prev<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        let pos = posts.iter().position(|p| p.id == self.id)?;
        if pos > 0 {
            Some(&posts[pos - 1])
        } else {
            None
        }
    }

    /// Get the next (older) post in a list
    pub fn next<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        let pos = posts.iter().position(|p| p.id == self.id)?;
        posts.get(pos + 1)
    }
}

/// Neighbours of a post within its category
#[derive(Debug, Clone, Default, Serialize)]
pub struct PrevNext {
    pub prev: Option<Post>,
    pub next: Option<Post>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_lookup_is_case_insensitive() {
        assert_eq!(Category::from_name("  AI "), Some(Category::Ai));
        assert_eq!(Category::from_name("Coding"), Some(Category::Coding));
        assert_eq!(Category::from_name("SHOPPING"), Some(Category::Shopping));
        assert_eq!(Category::from_name("unknown"), None);
        assert_eq!(Category::from_name(""), None);
    }

    #[test]
    fn test_normalize_category_rejects_non_strings() {
        assert_eq!(
            normalize_category(&serde_yaml::Value::from("  AI ")),
            Some(Category::Ai)
        );
        assert_eq!(normalize_category(&serde_yaml::Value::from("unknown")), None);
        assert_eq!(normalize_category(&serde_yaml::Value::from(42)), None);
        assert_eq!(normalize_category(&serde_yaml::Value::Null), None);
    }

    #[test]
    fn test_category_display_round_trips() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>(), Ok(category));
        }
        assert!("sports".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serializes_canonical_name() {
        let json = serde_json::to_string(&Category::Ai).unwrap();
        assert_eq!(json, "\"AI\"");
        let json = serde_json::to_string(&Category::Film).unwrap();
        assert_eq!(json, "\"film\"");
    }
}
