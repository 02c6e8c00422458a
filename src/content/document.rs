//! A single post opened in the detail view

use serde::Serialize;

use super::item::strip_markdown_ext;
use super::FrontMatter;
use crate::config::ViewerDefaults;

/// Route parameters identifying a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRoute {
    /// Content type, e.g. `experiences`
    pub kind: String,
    pub category: Option<String>,
    pub filename: String,
}

impl DocumentRoute {
    pub fn new(kind: &str, category: Option<&str>, filename: &str) -> Self {
        Self {
            kind: kind.to_string(),
            category: category.map(str::to_string),
            filename: filename.to_string(),
        }
    }

    /// Path of the markdown file relative to the content root.
    ///
    /// Only experience posts live in category subdirectories.
    pub fn path(&self) -> String {
        match (&self.category, self.kind.as_str()) {
            (Some(category), "experiences") => {
                format!("{}/{}/{}", self.kind, category, self.filename)
            }
            _ => format!("{}/{}", self.kind, self.filename),
        }
    }
}

/// Header metadata displayed above an article
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentMeta {
    pub title: String,
    pub category: String,
    pub author: String,
    pub date: String,
    pub tags: Vec<String>,
}

/// A fetched markdown document split into metadata and body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub meta: DocumentMeta,
    /// Markdown body without the front-matter block
    pub body: String,
}

impl Document {
    /// Parse raw markdown fetched for `route`
    pub fn parse(raw: &str, route: &DocumentRoute, defaults: &ViewerDefaults) -> Self {
        let (fm, body) = FrontMatter::parse(raw);

        let title = fm
            .text("title")
            .map(str::to_string)
            .unwrap_or_else(|| title_from_filename(&route.filename));

        let category = fm
            .text("category")
            .or_else(|| fm.text("type"))
            .or(route.category.as_deref().filter(|c| !c.is_empty()))
            .unwrap_or(&defaults.category)
            .to_string();

        let meta = DocumentMeta {
            title,
            category,
            author: fm.text("author").unwrap_or(&defaults.author).to_string(),
            date: fm.text("date").unwrap_or(&defaults.date).to_string(),
            tags: fm.tags().map(<[String]>::to_vec).unwrap_or_default(),
        };

        Self {
            meta,
            body: body.to_string(),
        }
    }
}

/// `my-first-post.md` -> `My First Post`
fn title_from_filename(filename: &str) -> String {
    let spaced = strip_markdown_ext(filename).replace('-', " ");

    let mut title = String::with_capacity(spaced.len());
    let mut prev_is_word = false;
    for c in spaced.chars() {
        let is_word = c.is_ascii_alphanumeric() || c == '_';
        if is_word && !prev_is_word {
            title.push(c.to_ascii_uppercase());
        } else {
            title.push(c);
        }
        prev_is_word = is_word;
    }
    title
}
