//! Content module - posts, front-matter and the stores they are read from

mod frontmatter;
pub mod loader;
pub mod markdown;
mod post;
mod store;

pub use frontmatter::{parse_date, FrontMatter, FrontMatterError};
pub use loader::ContentLoader;
pub use post::{normalize_category, Category, Post, PrevNext};
pub use store::{ContentStore, FsStore, MemoryStore};
