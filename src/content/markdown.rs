//! Plain-text views of markdown bodies: excerpts and reading time

use lazy_static::lazy_static;
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use regex::Regex;
use std::borrow::Cow;

/// Reading speed used for `read_time`
pub const WORDS_PER_MINUTE: usize = 200;

/// Maximum excerpt length in characters, before the ellipsis
pub const EXCERPT_LENGTH: usize = 180;

lazy_static! {
    /// MDX module statements at the top level of a document
    static ref MDX_MODULE_LINE: Regex = Regex::new(r"(?m)^(?:import|export)\s.*$").unwrap();
}

/// Number of whitespace-delimited words in `body`
pub fn word_count(body: &str) -> usize {
    body.split_whitespace().count()
}

/// Estimated minutes to read `body`, never less than one
pub fn read_time(body: &str) -> u32 {
    let minutes = word_count(body).div_ceil(WORDS_PER_MINUTE).max(1);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}

/// Remove MDX `import`/`export` statements from an MDX body
pub fn strip_mdx_modules(body: &str) -> Cow<'_, str> {
    MDX_MODULE_LINE.replace_all(body, "")
}

/// Strip markdown syntax down to the visible prose.
///
/// Code (fenced, indented and inline), images and raw HTML/JSX are
/// dropped. Links keep their text. Whitespace is collapsed to single
/// spaces.
pub fn plain_text(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(markdown, options);

    let mut text = String::new();
    // Depth of enclosing code blocks and images, whose text is hidden
    let mut hidden = 0usize;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(_)) | Event::Start(Tag::Image { .. }) => hidden += 1,
            Event::End(TagEnd::CodeBlock) | Event::End(TagEnd::Image) => {
                hidden = hidden.saturating_sub(1);
            }
            Event::Text(t) if hidden == 0 => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            Event::End(
                TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::Item | TagEnd::TableCell,
            ) => text.push(' '),
            _ => {}
        }
    }

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Build an excerpt from a markdown body
pub fn excerpt(body: &str) -> String {
    let text = plain_text(body);
    if text.chars().count() > EXCERPT_LENGTH {
        let cut: String = text.chars().take(EXCERPT_LENGTH).collect();
        format!("{}...", cut)
    } else {
        text
    }
}
