//! Remove the generated index

use anyhow::Result;
use std::fs;

use crate::Site;

/// Delete `index.json`; posts are left alone
pub fn run(site: &Site) -> Result<()> {
    let path = site.index_path();
    if path.exists() {
        fs::remove_file(&path)?;
        tracing::info!("Deleted: {:?}", path);
    }
    Ok(())
}
