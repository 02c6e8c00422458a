//! Content index builder - scans category directories and writes `index.json`

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::WalkDir;

use super::item::MARKDOWN_EXT;
use super::{ContentIndex, ContentItem};
use crate::config::ItemDefaults;
use crate::Site;

/// Builds the content index from a content root
pub struct IndexBuilder {
    content_dir: PathBuf,
    experiences_dir: String,
    categories: Vec<String>,
    defaults: ItemDefaults,
    excerpt_length: usize,
}

impl IndexBuilder {
    /// Create a builder over `content_dir` with categories in declared order
    pub fn new<P: AsRef<Path>>(content_dir: P, categories: Vec<String>) -> Self {
        Self {
            content_dir: content_dir.as_ref().to_path_buf(),
            experiences_dir: "experiences".to_string(),
            categories,
            defaults: ItemDefaults::default(),
            excerpt_length: super::excerpt::DEFAULT_LENGTH,
        }
    }

    /// Create a builder configured from the site
    pub fn for_site(site: &Site) -> Self {
        let config = &site.config;
        Self {
            content_dir: site.content_dir.clone(),
            experiences_dir: config.experiences_dir.clone(),
            categories: config.categories.clone(),
            defaults: config.item_defaults.clone(),
            excerpt_length: config.excerpt_length,
        }
    }

    /// Scan every category and assemble the index
    pub fn build(&self) -> Result<ContentIndex> {
        let mut index = ContentIndex::new();
        let experiences = self.content_dir.join(&self.experiences_dir);

        if !experiences.is_dir() {
            tracing::warn!("No experiences directory at {:?}", experiences);
            return Ok(index);
        }

        for category in &self.categories {
            let dir = experiences.join(category);
            if !dir.is_dir() {
                tracing::debug!("Skipping missing category {:?}", dir);
                continue;
            }

            let items = self.load_category(category, &dir)?;
            tracing::debug!("Indexed {} items in {}", items.len(), category);
            index.push_category(category, items);
        }

        Ok(index)
    }

    /// Build the index and write it to `<content_dir>/<index_file>`
    pub fn write(&self, index_file: &str) -> Result<ContentIndex> {
        let index = self.build()?;
        let path = self.content_dir.join(index_file);

        fs::create_dir_all(&self.content_dir)?;
        fs::write(&path, serde_json::to_string_pretty(&index)?)?;

        tracing::info!("Wrote content index to {:?}", path);
        self.log_summary(&index);
        Ok(index)
    }

    /// Load one category's markdown files, most recently modified first
    fn load_category(&self, category: &str, dir: &Path) -> Result<Vec<ContentItem>> {
        let mut files: Vec<(String, PathBuf, SystemTime)> = Vec::new();

        for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().to_string();
            if !entry.file_type().is_file() || !name.ends_with(MARKDOWN_EXT) {
                continue;
            }
            let modified = entry.metadata()?.modified()?;
            files.push((name, entry.into_path(), modified));
        }

        // Stable, so equal mtimes stay in name order
        files.sort_by(|a, b| b.2.cmp(&a.2));

        let mut items = Vec::with_capacity(files.len());
        for (name, path, _) in files {
            // Invalid UTF-8 is replaced with U+FFFD, not rejected
            let bytes = fs::read(&path)?;
            let raw = String::from_utf8_lossy(&bytes);
            let file = format!("{}/{}/{}", self.experiences_dir, category, name);
            items.push(ContentItem::from_markdown(
                &raw,
                &name,
                category,
                file,
                &self.defaults,
                self.excerpt_length,
            ));
        }

        Ok(items)
    }

    fn log_summary(&self, index: &ContentIndex) {
        tracing::info!("Indexed {} posts", index.experiences.all.len());
        for category in &self.categories {
            tracing::info!("  - {}: {}", category, index.category(category).len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;

    fn write_with_mtime(path: &Path, content: &str, secs_ago: u64) {
        fs::write(path, content).unwrap();
        let mtime = SystemTime::now() - Duration::from_secs(secs_ago);
        fs::File::options()
            .write(true)
            .open(path)
            .unwrap()
            .set_modified(mtime)
            .unwrap();
    }

    fn setup(categories: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for c in categories {
            fs::create_dir_all(dir.path().join("experiences").join(c)).unwrap();
        }
        dir
    }

    #[test]
    fn test_build_category_with_and_without_frontmatter() {
        let dir = setup(&["X"]);
        let cat = dir.path().join("experiences/X");
        write_with_mtime(
            &cat.join("first.md"),
            "---\ntitle: \"T1\"\ntags: [a,b]\n---\nHello",
            10,
        );
        write_with_mtime(&cat.join("plain-post.md"), "No header at all.", 100);

        let builder = IndexBuilder::new(dir.path(), vec!["X".to_string()]);
        let index = builder.build().unwrap();

        let items = index.category("X");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "T1");
        assert_eq!(items[0].tags, vec!["a", "b"]);
        assert_eq!(items[1].title, "plain-post");
        assert_eq!(items[1].file, "experiences/X/plain-post.md");
    }

    #[test]
    fn test_sorted_by_mtime_not_date_field() {
        let dir = setup(&["就业"]);
        let cat = dir.path().join("experiences/就业");
        write_with_mtime(&cat.join("old.md"), "---\ndate: 2030-01-01\n---\n", 500);
        write_with_mtime(&cat.join("new.md"), "---\ndate: 2000-01-01\n---\n", 5);

        let index = IndexBuilder::new(dir.path(), vec!["就业".into()])
            .build()
            .unwrap();
        let titles: Vec<_> = index.category("就业").iter().map(|i| &i.title).collect();
        assert_eq!(titles, vec!["new", "old"]);
    }

    #[test]
    fn test_non_utf8_post_is_indexed_lossily() {
        let dir = setup(&["保研"]);
        let cat = dir.path().join("experiences/保研");
        write_with_mtime(&cat.join("ok.md"), "---\ntitle: 正常\n---\n内容", 5);
        // "保研" in GBK
        fs::write(cat.join("gbk.md"), [0xB1u8, 0xA3, 0xD1, 0xD0]).unwrap();
        let mtime = SystemTime::now() - Duration::from_secs(50);
        fs::File::options()
            .write(true)
            .open(cat.join("gbk.md"))
            .unwrap()
            .set_modified(mtime)
            .unwrap();

        let index = IndexBuilder::new(dir.path(), vec!["保研".into()])
            .build()
            .unwrap();

        let items = index.category("保研");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "正常");
        assert_eq!(items[1].title, "gbk");
        assert!(items[1].excerpt.contains('\u{FFFD}'));
    }

    #[test]
    fn test_missing_categories_are_absent() {
        let dir = setup(&["保研", "announcements"]);
        fs::write(dir.path().join("experiences/保研/a.md"), "a").unwrap();
        fs::write(dir.path().join("experiences/announcements/b.md"), "b").unwrap();

        let categories = vec!["保研".into(), "就业".into(), "announcements".into()];
        let index = IndexBuilder::new(dir.path(), categories).build().unwrap();

        let keys: Vec<_> = index.experiences.categories.keys().cloned().collect();
        assert_eq!(keys, vec!["保研", "announcements"]);
        let all: Vec<_> = index.experiences.all.iter().map(|i| &i.title).collect();
        assert_eq!(all, vec!["a", "b"]);
    }

    #[test]
    fn test_non_markdown_entries_are_ignored() {
        let dir = setup(&["实习"]);
        let cat = dir.path().join("experiences/实习");
        fs::write(cat.join("note.txt"), "text").unwrap();
        fs::write(cat.join("image.png"), [0u8; 4]).unwrap();
        fs::create_dir(cat.join("drafts")).unwrap();
        fs::write(cat.join("drafts/nested.md"), "nested").unwrap();
        fs::write(cat.join("post.md"), "post").unwrap();

        let index = IndexBuilder::new(dir.path(), vec!["实习".into()])
            .build()
            .unwrap();
        let items = index.category("实习");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "post");
    }

    #[test]
    fn test_empty_category_is_present() {
        let dir = setup(&["考研"]);
        let index = IndexBuilder::new(dir.path(), vec!["考研".into()])
            .build()
            .unwrap();
        assert_eq!(index.experiences.categories.get("考研"), Some(&Vec::new()));
    }

    #[test]
    fn test_write_overwrites_previous_index() {
        let dir = setup(&["留学"]);
        let cat = dir.path().join("experiences/留学");
        fs::write(cat.join("a.md"), "a").unwrap();
        fs::write(cat.join("b.md"), "b").unwrap();

        let builder = IndexBuilder::new(dir.path(), vec!["留学".into()]);
        builder.write("index.json").unwrap();

        fs::remove_file(cat.join("a.md")).unwrap();
        builder.write("index.json").unwrap();

        let written = fs::read_to_string(dir.path().join("index.json")).unwrap();
        let index: ContentIndex = serde_json::from_str(&written).unwrap();
        assert_eq!(index.experiences.all.len(), 1);
        assert_eq!(index.experiences.all[0].title, "b");
        assert!(written.contains("\n  \"experiences\""));
    }

    #[test]
    fn test_no_experiences_dir_gives_empty_index() {
        let dir = TempDir::new().unwrap();
        let index = IndexBuilder::new(dir.path(), vec!["保研".into()])
            .build()
            .unwrap();
        assert!(index.experiences.categories.is_empty());
        assert!(index.experiences.all.is_empty());
    }
}
