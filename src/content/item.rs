//! Content index models

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{excerpt, FrontMatter};
use crate::config::ItemDefaults;

/// Markdown file extension recognised by the index builder
pub const MARKDOWN_EXT: &str = ".md";

/// Anything that carries a display date string
pub trait Dated {
    fn date(&self) -> &str;
}

/// One indexed post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub title: String,
    pub author: String,
    pub year: String,
    pub date: String,
    pub excerpt: String,
    pub tags: Vec<String>,
    /// Category directory the file was found in
    pub category: String,
    /// Path relative to the content root, always `/`-separated
    pub file: String,
}

impl ContentItem {
    /// Build an item from a markdown file, applying fallbacks for missing fields
    pub fn from_markdown(
        raw: &str,
        filename: &str,
        category: &str,
        file: String,
        defaults: &ItemDefaults,
        excerpt_length: usize,
    ) -> Self {
        let (fm, body) = FrontMatter::parse(raw);

        let or_default = |key: &str, fallback: &str| {
            fm.text(key).unwrap_or(fallback).to_string()
        };

        let title = fm
            .text("title")
            .map(str::to_string)
            .unwrap_or_else(|| strip_markdown_ext(filename).to_string());

        let excerpt = fm
            .text("excerpt")
            .map(str::to_string)
            .unwrap_or_else(|| excerpt::generate(body, excerpt_length));

        Self {
            title,
            author: or_default("author", &defaults.author),
            year: or_default("year", &defaults.year),
            date: or_default("date", &defaults.date),
            excerpt,
            tags: fm.tags().map(<[String]>::to_vec).unwrap_or_default(),
            category: category.to_string(),
            file,
        }
    }

    /// File name component of `file`
    pub fn filename(&self) -> &str {
        self.file.rsplit('/').next().unwrap_or(&self.file)
    }
}

impl Dated for ContentItem {
    fn date(&self) -> &str {
        &self.date
    }
}

/// Announcement record of the legacy top-level list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub title: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub excerpt: String,
    pub file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participants: Option<String>,
}

impl Dated for Announcement {
    fn date(&self) -> &str {
        &self.date
    }
}

/// Experience posts grouped by category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experiences {
    /// Category -> items, most recently modified first
    pub categories: IndexMap<String, Vec<ContentItem>>,
    /// Every item, concatenated in category order
    pub all: Vec<ContentItem>,
}

/// The generated `index.json` document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentIndex {
    /// Kept for readers of older indexes; always written empty
    #[serde(default)]
    pub announcements: Vec<Announcement>,
    #[serde(default)]
    pub experiences: Experiences,
    pub last_updated: String,
}

impl ContentIndex {
    /// Empty index stamped with the current time
    pub fn new() -> Self {
        Self {
            announcements: Vec::new(),
            experiences: Experiences::default(),
            last_updated: chrono::Utc::now()
                .to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        }
    }

    /// Items of one category, or an empty slice when it is absent
    pub fn category(&self, name: &str) -> &[ContentItem] {
        self.experiences
            .categories
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Append a category's items, keeping `all` in step
    pub fn push_category(&mut self, name: &str, items: Vec<ContentItem>) {
        self.experiences.all.extend(items.iter().cloned());
        self.experiences.categories.insert(name.to_string(), items);
    }
}

impl Default for ContentIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// An entry of the member list shown on the about page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub avatar: String,
    pub homepage: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// File name without the markdown extension
pub fn strip_markdown_ext(filename: &str) -> &str {
    filename.strip_suffix(MARKDOWN_EXT).unwrap_or(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(raw: &str, filename: &str) -> ContentItem {
        ContentItem::from_markdown(
            raw,
            filename,
            "就业",
            format!("experiences/就业/{}", filename),
            &ItemDefaults::default(),
            excerpt::DEFAULT_LENGTH,
        )
    }

    #[test]
    fn test_item_from_frontmatter() {
        let raw = "---\ntitle: 秋招总结\nauthor: 王五\nyear: 2025\ndate: 2025-10-01\nexcerpt: 手写摘要\ntags: [秋招, 后端]\n---\n正文";
        let item = item(raw, "autumn.md");
        assert_eq!(item.title, "秋招总结");
        assert_eq!(item.author, "王五");
        assert_eq!(item.year, "2025");
        assert_eq!(item.date, "2025-10-01");
        assert_eq!(item.excerpt, "手写摘要");
        assert_eq!(item.tags, vec!["秋招", "后端"]);
        assert_eq!(item.category, "就业");
        assert_eq!(item.file, "experiences/就业/autumn.md");
        assert_eq!(item.filename(), "autumn.md");
    }

    #[test]
    fn test_item_fallbacks() {
        let item = item("Just a **body**.", "no-header.md");
        assert_eq!(item.title, "no-header");
        assert_eq!(item.author, "匿名");
        assert_eq!(item.year, "未知");
        assert_eq!(item.date, "2024-01-01");
        assert_eq!(item.excerpt, "Just a body....");
        assert!(item.tags.is_empty());
    }

    #[test]
    fn test_index_json_shape() {
        let mut index = ContentIndex::new();
        index.push_category("实习", vec![item("body", "a.md")]);
        let json = serde_json::to_value(&index).unwrap();

        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["announcements", "experiences", "lastUpdated"]);
        assert_eq!(json["experiences"]["categories"]["实习"][0]["title"], "a");
        assert_eq!(json["experiences"]["all"].as_array().unwrap().len(), 1);

        let item_keys: Vec<_> = json["experiences"]["all"][0]
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(
            item_keys,
            vec!["title", "author", "year", "date", "excerpt", "tags", "category", "file"]
        );
    }

    #[test]
    fn test_last_updated_format() {
        let index = ContentIndex::new();
        assert!(index.last_updated.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&index.last_updated).is_ok());
    }

    #[test]
    fn test_legacy_announcement_deserializes() {
        let json = r#"{
            "announcements": [
                {"title": "迎新会", "date": "2025-11-05", "type": "活动", "excerpt": "", "file": "a.md", "location": "九龙湖"}
            ],
            "experiences": {"categories": {}, "all": []},
            "lastUpdated": "2025-11-02T00:00:00.000Z"
        }"#;
        let index: ContentIndex = serde_json::from_str(json).unwrap();
        assert_eq!(index.announcements[0].kind, "活动");
        assert_eq!(index.announcements[0].location.as_deref(), Some("九龙湖"));
        assert!(index.category("保研").is_empty());
    }
}
