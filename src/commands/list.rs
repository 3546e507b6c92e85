//! List site content

use anyhow::Result;

use crate::content::Category;
use crate::helpers::format_date;
use crate::Site;

/// List site content by type
pub fn run(
    site: &Site,
    content_type: &str,
    category: Option<Category>,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let loader = site.loader();

    match content_type {
        "post" | "posts" => {
            let mut posts = match category {
                Some(category) => loader.posts_by_category(category)?,
                None => loader.load_posts()?,
            };
            if let Some(limit) = limit {
                posts.truncate(limit);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&posts)?);
                return Ok(());
            }

            println!("{}", heading(site, "posts", posts.len()));
            for post in posts {
                println!(
                    "  {} - {} [{}] ({} min read)",
                    format_date(&post.date, &site.config.date_format),
                    post.title,
                    post.id,
                    post.read_time
                );
            }
        }
        "latest" => {
            let posts = loader.latest_posts(limit.unwrap_or(site.config.latest_limit))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&posts)?);
                return Ok(());
            }
            println!("{}", heading(site, "latest", posts.len()));
            for post in posts {
                println!(
                    "  {} - {} [{}]",
                    format_date(&post.date, &site.config.date_format),
                    post.title,
                    post.id
                );
            }
        }
        "tag" | "tags" => {
            let tags = loader.tag_counts()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&tags)?);
                return Ok(());
            }
            println!("{}", heading(site, "tags", tags.len()));
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
        "category" | "categories" => {
            let posts = loader.load_posts()?;
            let counts: Vec<(Category, usize)> = Category::ALL
                .iter()
                .map(|&c| (c, posts.iter().filter(|p| p.category == c).count()))
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&counts)?);
                return Ok(());
            }
            println!("{}", heading(site, "categories", counts.len()));
            for (category, count) in counts {
                println!("  {} ({})", category, count);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, latest, tag, category",
                content_type
            );
        }
    }

    Ok(())
}

fn heading(site: &Site, label: &str, count: usize) -> String {
    format!("{} {} ({}):", site.config.title, label, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_heading_names_the_site() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("_config.yml"), "title: Fusion Notes\n").unwrap();
        let site = Site::new(tmp.path()).unwrap();
        assert_eq!(heading(&site, "tags", 4), "Fusion Notes tags (4):");
    }

    #[test]
    fn test_unknown_type_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let site = Site::new(tmp.path()).unwrap();
        assert!(run(&site, "pages", None, None, false).is_err());
    }
}
