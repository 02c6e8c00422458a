//! List indexed content

use anyhow::{Context, Result};
use std::fs;

use crate::content::{ContentIndex, ContentItem};
use crate::helpers::{
    self, category_stats, display_timestamp, empty_message, filter_by_category, filter_labels,
};
use crate::Site;

/// Read the generated index, building it first if it does not exist yet
pub fn load_index(site: &Site) -> Result<ContentIndex> {
    let path = site.index_path();
    if !path.exists() {
        tracing::info!("No index at {:?}, building it", path);
        return super::build::run(site);
    }
    let content = fs::read_to_string(&path)?;
    serde_json::from_str(&content).with_context(|| format!("Invalid index file {:?}", path))
}

/// List posts matching a filter label (the "all" label when omitted)
pub fn run(site: &Site, label: Option<&str>, html: bool) -> Result<()> {
    let index = load_index(site)?;
    if html {
        println!("{}", render_listing(site, &index, label));
    } else {
        print_listing(site, &index, label);
    }
    Ok(())
}

/// Listing cards for a filter label, or the empty-state block
pub fn render_listing(site: &Site, index: &ContentIndex, label: Option<&str>) -> String {
    let labels = &site.config.labels;
    let label = label.unwrap_or(&labels.all);
    let items = filter_by_category(&index.experiences.all, label, labels);
    helpers::listing(&items, label, labels)
}

/// List the most recent announcements by date
pub fn latest(site: &Site, limit: Option<usize>) -> Result<()> {
    let index = load_index(site)?;
    let limit = limit.unwrap_or(site.config.latest_limit);
    let recent = helpers::latest(index.category(&site.config.announcement_category), limit);

    println!("Latest ({}):", recent.len());
    for item in &recent {
        print_item(item);
    }
    Ok(())
}

/// Print a filtered listing with per-label counts
pub fn print_listing(site: &Site, index: &ContentIndex, label: Option<&str>) {
    let labels = &site.config.labels;
    let label = label.unwrap_or(&labels.all);

    println!(
        "Index updated {}",
        display_timestamp(&index.last_updated)
    );
    let stats = category_stats(index, &site.config.categories, labels);
    let counts: Vec<String> = stats
        .iter()
        .map(|(name, count)| format!("{} {}", name, count))
        .collect();
    println!("  {}", counts.join(" | "));
    println!(
        "  Filters: {}",
        filter_labels(&site.config.categories, labels).join(", ")
    );

    let items = filter_by_category(&index.experiences.all, label, labels);
    if items.is_empty() {
        println!("{}", empty_message(label, labels));
        return;
    }

    println!("{} ({}):", label, items.len());
    for item in items {
        print_item(item);
    }
}

fn print_item(item: &ContentItem) {
    let tags = if item.tags.is_empty() {
        String::new()
    } else {
        format!(" #{}", item.tags.join(" #"))
    };
    println!(
        "  {} - {} ({}, {}) [{}]{}",
        item.date, item.title, item.author, item.category, item.file, tags
    );
}
