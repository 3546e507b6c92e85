//! Create a new post

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::content::Category;
use crate::Site;

/// Scaffold used when the site has no `scaffolds/post.md`
const DEFAULT_SCAFFOLD: &str = "---\ntitle: {{ title }}\ndate: {{ date }}\nauthor: {{ author }}\ntags: []\n---\n";

/// Create a post file under the category directory.
///
/// The file name is the slugified title unless `slug` is given.
pub fn create_post(
    site: &Site,
    title: &str,
    category: Category,
    slug: Option<&str>,
) -> Result<PathBuf> {
    let now = chrono::Local::now();

    let slug = match slug {
        Some(s) => slug::slugify(s),
        None => slug::slugify(title),
    };
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a file name from {:?}", title);
    }

    let target_dir = site.content_dir.join(category.as_str());
    fs::create_dir_all(&target_dir)?;

    let file_path = target_dir.join(format!("{}.md", slug));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let scaffold_path = site.base_dir.join("scaffolds").join("post.md");
    let scaffold = if scaffold_path.exists() {
        fs::read_to_string(&scaffold_path)?
    } else {
        DEFAULT_SCAFFOLD.to_string()
    };

    // JSON strings are valid YAML scalars, so titles with `:` stay intact
    let content = scaffold
        .replace("{{ title }}", &serde_json::to_string(title)?)
        .replace("{{ author }}", &serde_json::to_string(&site.config.default_author)?)
        .replace("{{ category }}", category.as_str())
        .replace("{{ date }}", &now.format("%Y-%m-%d %H:%M:%S").to_string());

    fs::write(&file_path, content)?;
    tracing::info!("Created {:?}", file_path);

    Ok(file_path)
}
