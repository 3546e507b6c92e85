//! Content stores - where post files come from
//!
//! Entries are addressed by `<dir>/<file>` keys with `/` separators,
//! regardless of platform. Stores are read-only.

use chrono::{DateTime, FixedOffset, Utc};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use walkdir::WalkDir;

/// A read-only, two-level store of text files
pub trait ContentStore {
    /// File names directly inside `dir`, in name order.
    /// Returns `None` when the directory does not exist.
    fn list(&self, dir: &str) -> io::Result<Option<Vec<String>>>;

    /// Contents of the entry at `path`, or `None` when it does not exist
    fn read(&self, path: &str) -> io::Result<Option<String>>;

    /// Last modification time of the entry at `path`
    fn modified(&self, path: &str) -> io::Result<Option<DateTime<FixedOffset>>>;
}

/// Store backed by a directory on disk
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> PathBuf {
        path.split('/')
            .filter(|c| !c.is_empty())
            .fold(self.root.clone(), |acc, c| acc.join(c))
    }
}

impl ContentStore for FsStore {
    fn list(&self, dir: &str) -> io::Result<Option<Vec<String>>> {
        let dir = self.resolve(dir);
        if !dir.is_dir() {
            return Ok(None);
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }
            match entry.file_name().to_str() {
                Some(name) => names.push(name.to_string()),
                None => tracing::warn!("Skipping non UTF-8 file name {:?}", entry.path()),
            }
        }

        Ok(Some(names))
    }

    fn read(&self, path: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.resolve(path)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn modified(&self, path: &str) -> io::Result<Option<DateTime<FixedOffset>>> {
        match fs::metadata(self.resolve(path)) {
            Ok(metadata) => {
                let modified = metadata.modified()?;
                Ok(Some(DateTime::<Utc>::from(modified).fixed_offset()))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[derive(Debug, Clone)]
struct MemoryEntry {
    content: String,
    modified: DateTime<FixedOffset>,
}

/// Store held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, MemoryEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry whose modification time is the Unix epoch
    pub fn insert(&mut self, path: &str, content: &str) -> &mut Self {
        self.insert_with_modified(path, content, DateTime::<Utc>::UNIX_EPOCH.fixed_offset())
    }

    pub fn insert_with_modified(
        &mut self,
        path: &str,
        content: &str,
        modified: DateTime<FixedOffset>,
    ) -> &mut Self {
        self.entries.insert(
            path.trim_matches('/').to_string(),
            MemoryEntry {
                content: content.to_string(),
                modified,
            },
        );
        self
    }
}

impl ContentStore for MemoryStore {
    fn list(&self, dir: &str) -> io::Result<Option<Vec<String>>> {
        let prefix = format!("{}/", dir.trim_matches('/'));
        let mut found_dir = false;
        let mut names = Vec::new();

        for key in self.entries.keys() {
            if let Some(rest) = key.strip_prefix(&prefix) {
                found_dir = true;
                if !rest.contains('/') {
                    names.push(rest.to_string());
                }
            }
        }

        Ok(found_dir.then_some(names))
    }

    fn read(&self, path: &str) -> io::Result<Option<String>> {
        Ok(self
            .entries
            .get(path.trim_matches('/'))
            .map(|e| e.content.clone()))
    }

    fn modified(&self, path: &str) -> io::Result<Option<DateTime<FixedOffset>>> {
        Ok(self.entries.get(path.trim_matches('/')).map(|e| e.modified))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_fs_store_lists_files_in_name_order() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("AI");
        fs::create_dir_all(dir.join("nested")).unwrap();
        fs::write(dir.join("b.md"), "b").unwrap();
        fs::write(dir.join("a.mdx"), "a").unwrap();
        fs::write(dir.join("nested").join("c.md"), "c").unwrap();

        let store = FsStore::new(tmp.path());
        let names = store.list("AI").unwrap().unwrap();
        assert_eq!(names, vec!["a.mdx", "b.md"]);
        assert_eq!(store.list("film").unwrap(), None);
    }

    #[test]
    fn test_fs_store_read_and_modified() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("coding")).unwrap();
        fs::write(tmp.path().join("coding").join("post.md"), "hello").unwrap();

        let store = FsStore::new(tmp.path());
        assert_eq!(store.read("coding/post.md").unwrap().as_deref(), Some("hello"));
        assert_eq!(store.read("coding/missing.md").unwrap(), None);
        assert!(store.modified("coding/post.md").unwrap().is_some());
        assert_eq!(store.modified("coding/missing.md").unwrap(), None);
    }

    #[test]
    fn test_memory_store_list() {
        let mut store = MemoryStore::new();
        store
            .insert("AI/two.md", "2")
            .insert("AI/one.md", "1")
            .insert("AI/deep/three.md", "3")
            .insert("film/x.md", "x");

        assert_eq!(store.list("AI").unwrap().unwrap(), vec!["one.md", "two.md"]);
        assert_eq!(store.list("drama").unwrap(), None);
        assert_eq!(store.read("film/x.md").unwrap().as_deref(), Some("x"));
        assert_eq!(
            store.modified("film/x.md").unwrap(),
            Some(DateTime::<Utc>::UNIX_EPOCH.fixed_offset())
        );
    }
}
