//! Show a single post

use anyhow::Result;
use serde::Serialize;

use crate::content::{Category, Post};
use crate::helpers::full_date;
use crate::Site;

#[derive(Serialize)]
struct PostView<'a> {
    #[serde(flatten)]
    post: &'a Post,
    prev: Option<&'a str>,
    next: Option<&'a str>,
}

/// Print a post with its neighbours in the category
pub fn run(site: &Site, category: Category, slug: &str, json: bool) -> Result<()> {
    let loader = site.loader();
    let Some(post) = loader.post_by_slug(category, slug)? else {
        anyhow::bail!("No post {}/{}", category, slug);
    };
    let nav = loader.prev_next(post.category, &post.slug)?;

    if json {
        let view = PostView {
            post: &post,
            prev: nav.prev.as_ref().map(|p| p.id.as_str()),
            next: nav.next.as_ref().map(|p| p.id.as_str()),
        };
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("{}", post.title);
    println!(
        "{} · {} · {} min read",
        post.author,
        full_date(&post.date),
        post.read_time
    );
    if !post.tags.is_empty() {
        println!("Tags: {}", post.tags.join(", "));
    }
    println!();
    println!("{}", post.content.trim_end());
    println!();
    if let Some(prev) = nav.prev {
        println!("Newer: {} [{}]", prev.title, prev.id);
    }
    if let Some(next) = nav.next {
        println!("Older: {} [{}]", next.title, next.id);
    }

    Ok(())
}
