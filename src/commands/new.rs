//! Create a new post

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::content::MARKDOWN_EXT;
use crate::Site;

/// Create a post skeleton in a category directory
pub fn create_post(site: &Site, category: &str, title: &str) -> Result<PathBuf> {
    if !site.config.has_category(category) {
        anyhow::bail!(
            "Unknown category: {}. Available: {}",
            category,
            site.config.categories.join(", ")
        );
    }

    let target_dir = site.category_dir(category);
    fs::create_dir_all(&target_dir)?;

    let mut slug = slug::slugify(title);
    if slug.is_empty() {
        slug = chrono::Local::now().format("%Y%m%d%H%M%S").to_string();
    }
    let file_path = target_dir.join(format!("{}{}", slug, MARKDOWN_EXT));

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let now = chrono::Local::now();
    let content = format!(
        "---\ntitle: \"{}\"\nauthor: {}\nyear: {}\ndate: {}\ntags: []\n---\n\n",
        title.replace('"', "'"),
        site.config.item_defaults.author,
        now.format("%Y"),
        now.format("%Y-%m-%d"),
    );

    fs::write(&file_path, content)?;
    tracing::info!("Created {:?}", file_path);

    Ok(file_path)
}
