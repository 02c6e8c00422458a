//! Build the content index

use anyhow::Result;
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode};
use std::path::{Path, PathBuf};
use std::sync::mpsc::channel;
use std::time::{Duration, Instant};

use crate::content::{ContentIndex, IndexBuilder};
use crate::Site;

/// Regenerate `index.json`, overwriting any previous version
pub fn run(site: &Site) -> Result<ContentIndex> {
    let start = Instant::now();

    let index = IndexBuilder::for_site(site).write(&site.config.index_file)?;

    tracing::info!("Built index in {:.2}s", start.elapsed().as_secs_f64());
    Ok(index)
}

/// Print the per-category summary of a freshly built index
pub fn print_summary(site: &Site, index: &ContentIndex) {
    println!("Content index written to {}", site.index_path().display());
    println!("- Posts: {}", index.experiences.all.len());
    for category in &site.config.categories {
        println!("  - {}: {}", category, index.category(category).len());
    }
}

/// Whether a change notification should trigger a rebuild
fn is_relevant(paths: &[PathBuf], index_path: &Path) -> bool {
    // Our own index write shows up here too
    paths.iter().any(|p| p != index_path)
}

/// Rebuild the index if any changed path is not the index itself
fn rebuild_if_relevant(site: &Site, paths: &[PathBuf]) -> Option<ContentIndex> {
    if !is_relevant(paths, &site.index_path()) {
        return None;
    }
    for path in paths {
        tracing::debug!("File changed: {}", path.display());
    }

    tracing::info!("Content changed, rebuilding index...");
    match run(site) {
        Ok(index) => Some(index),
        Err(e) => {
            tracing::error!("Index build failed: {}", e);
            None
        }
    }
}

fn watch_blocking(site: Site) -> Result<()> {
    let (tx, rx) = channel();
    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;
    debouncer
        .watcher()
        .watch(&site.content_dir, RecursiveMode::Recursive)?;

    tracing::info!("Watching {:?} for changes. Press Ctrl+C to stop.", site.content_dir);

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                let paths: Vec<PathBuf> = events.into_iter().map(|e| e.path).collect();
                rebuild_if_relevant(&site, &paths);
            }
            Ok(Err(e)) => {
                tracing::error!("Watch error: {:?}", e);
            }
            Err(e) => {
                tracing::error!("Channel error: {:?}", e);
                break;
            }
        }
    }

    Ok(())
}

/// Watch the content directory and rebuild on changes
pub async fn watch(site: &Site) -> Result<()> {
    let site = site.clone();
    tokio::task::spawn_blocking(move || watch_blocking(site)).await?
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_writes_index() {
        let dir = TempDir::new().unwrap();
        let site = Site::new(dir.path()).unwrap();
        fs::create_dir_all(site.category_dir("技术栈")).unwrap();
        fs::write(
            site.category_dir("技术栈").join("rust.md"),
            "---\ntitle: Rust 入门\n---\n内容",
        )
        .unwrap();

        let index = run(&site).unwrap();
        assert_eq!(index.category("技术栈").len(), 1);
        assert_eq!(
            index.category("技术栈")[0].file,
            "experiences/技术栈/rust.md"
        );
        assert!(site.index_path().exists());
    }

    #[test]
    fn test_index_write_is_not_relevant() {
        let index = Path::new("/site/public/content/index.json");
        assert!(!is_relevant(&[index.to_path_buf()], index));
        assert!(is_relevant(
            &[Path::new("/site/public/content/experiences/保研/a.md").to_path_buf()],
            index
        ));
    }

    #[test]
    fn test_rebuild_picks_up_changed_post() {
        let dir = TempDir::new().unwrap();
        let site = Site::new(dir.path()).unwrap();
        let post = site.category_dir("就业").join("offer.md");
        fs::create_dir_all(post.parent().unwrap()).unwrap();
        fs::write(&post, "").unwrap();
        run(&site).unwrap();

        // Second write lands after the first build; the batch must still rebuild
        fs::write(&post, "---\ntitle: 拿到 offer\n---\n过程").unwrap();
        let index = rebuild_if_relevant(&site, &[post.clone(), post.clone()]).unwrap();
        assert_eq!(index.category("就业")[0].title, "拿到 offer");

        let written = fs::read_to_string(site.index_path()).unwrap();
        assert!(written.contains("拿到 offer"));
    }

    #[test]
    fn test_index_only_batch_skips_rebuild() {
        let dir = TempDir::new().unwrap();
        let site = Site::new(dir.path()).unwrap();
        fs::create_dir_all(&site.content_dir).unwrap();

        assert!(rebuild_if_relevant(&site, &[site.index_path()]).is_none());
        assert!(!site.index_path().exists());
    }
}
