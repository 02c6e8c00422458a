//! clubsite: content tooling for the 711Club static site
//!
//! Markdown posts with a small front-matter header live under
//! `public/content/experiences/<category>/`. This crate builds the
//! `index.json` the site reads at runtime, fetches and renders that index and
//! individual posts over HTTP, and serves the static output for preview.

pub mod client;
pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod server;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// The site being built or served
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Served root
    pub public_dir: PathBuf,
    /// Content root holding category directories and the index
    pub content_dir: PathBuf,
}

impl Site {
    /// Open a site rooted at a directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Open a site with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let public_dir = base_dir.join(&config.public_dir);
        let content_dir = public_dir.join(&config.content_dir);

        Self {
            config,
            base_dir,
            public_dir,
            content_dir,
        }
    }

    /// Path of the generated index
    pub fn index_path(&self) -> PathBuf {
        self.content_dir.join(&self.config.index_file)
    }

    /// Directory holding one category's posts
    pub fn category_dir(&self, category: &str) -> PathBuf {
        self.content_dir
            .join(&self.config.experiences_dir)
            .join(category)
    }

    /// Regenerate the content index
    pub fn build(&self) -> Result<content::ContentIndex> {
        commands::build::run(self)
    }

    /// Remove the generated index
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }

    /// Scaffold a new post
    pub fn new_post(&self, category: &str, title: &str) -> Result<PathBuf> {
        commands::new::create_post(self, category, title)
    }
}
