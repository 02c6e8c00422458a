//! Site configuration (_config.yml)

use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    /// Base URL the content client fetches from
    pub url: String,

    // Directory
    pub public_dir: String,
    /// Content root, relative to `public_dir`
    pub content_dir: String,
    /// Experience posts directory, relative to the content root
    pub experiences_dir: String,
    /// Generated index file name, written inside the content root
    pub index_file: String,
    /// Member list file name, relative to `public_dir`
    pub members_file: String,

    // Content
    /// Category subdirectories in declared order
    pub categories: Vec<String>,
    /// Category the latest-announcements widget reads from
    pub announcement_category: String,
    pub excerpt_length: usize,
    #[serde(default)]
    pub item_defaults: ItemDefaults,
    #[serde(default)]
    pub viewer_defaults: ViewerDefaults,

    // Listing
    #[serde(default)]
    pub labels: LabelConfig,
    pub latest_limit: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "711Club".to_string(),
            url: "http://localhost:4000".to_string(),

            public_dir: "public".to_string(),
            content_dir: "content".to_string(),
            experiences_dir: "experiences".to_string(),
            index_file: "index.json".to_string(),
            members_file: "members.json".to_string(),

            categories: ["保研", "就业", "留学", "实习", "考研", "技术栈", "announcements"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            announcement_category: "announcements".to_string(),
            excerpt_length: 150,
            item_defaults: ItemDefaults::default(),
            viewer_defaults: ViewerDefaults::default(),

            labels: LabelConfig::default(),
            latest_limit: 3,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Whether `name` is one of the declared category directories
    pub fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c == name)
    }
}

/// Fallbacks applied when an indexed post lacks a frontmatter field
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemDefaults {
    pub author: String,
    pub year: String,
    pub date: String,
}

impl Default for ItemDefaults {
    fn default() -> Self {
        Self {
            author: "匿名".to_string(),
            year: "未知".to_string(),
            date: "2024-01-01".to_string(),
        }
    }
}

/// Fallbacks applied by the detail view
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerDefaults {
    pub author: String,
    pub date: String,
    pub category: String,
}

impl Default for ViewerDefaults {
    fn default() -> Self {
        Self {
            author: "711Club成员".to_string(),
            date: "2025-11-02".to_string(),
            category: "未分类".to_string(),
        }
    }
}

/// Category filter labels shown by listing views
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Sentinel label selecting every item
    pub all: String,
    /// Display label -> storage category
    pub aliases: IndexMap<String, String>,
}

impl Default for LabelConfig {
    fn default() -> Self {
        let mut aliases = IndexMap::new();
        aliases.insert("通知".to_string(), "announcements".to_string());
        Self {
            all: "全部".to_string(),
            aliases,
        }
    }
}

impl LabelConfig {
    /// Map a display label to the category it filters on
    pub fn storage_key<'a>(&'a self, label: &'a str) -> &'a str {
        self.aliases.get(label).map(String::as_str).unwrap_or(label)
    }

    /// Map a storage category back to its display label
    pub fn display_label<'a>(&'a self, category: &'a str) -> &'a str {
        self.aliases
            .iter()
            .find(|(_, key)| key.as_str() == category)
            .map(|(label, _)| label.as_str())
            .unwrap_or(category)
    }
}
