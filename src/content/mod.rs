//! Content module - front-matter, excerpts, the content index and documents

mod document;
pub mod excerpt;
mod frontmatter;
mod item;
pub mod loader;
mod markdown;

pub use document::{Document, DocumentMeta, DocumentRoute};
pub use frontmatter::{FrontMatter, FrontValue};
pub use item::{
    strip_markdown_ext, Announcement, ContentIndex, ContentItem, Dated, Experiences, Member,
    MARKDOWN_EXT,
};
pub use loader::IndexBuilder;
pub use markdown::MarkdownRenderer;
