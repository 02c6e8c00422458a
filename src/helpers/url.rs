//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::SiteConfig;
use crate::content::ContentItem;

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Join `path` onto `base`, encoding each segment
///
/// # Examples
/// ```ignore
/// join_url("http://localhost:4000/", "content/保研/a.md")
/// // -> "http://localhost:4000/content/%E4%BF%9D%E7%A0%94/a.md"
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    let encoded: Vec<String> = path
        .trim_start_matches('/')
        .split('/')
        .map(encode_segment)
        .collect();
    format!("{}/{}", base.trim_end_matches('/'), encoded.join("/"))
}

/// Percent-encode a single path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// URL of a file under the served content root
pub fn content_url(config: &SiteConfig, path: &str) -> String {
    join_url(
        &config.url,
        &format!("{}/{}", config.content_dir.trim_matches('/'), path),
    )
}

/// URL of the generated content index
pub fn index_url(config: &SiteConfig) -> String {
    content_url(config, &config.index_file)
}

/// URL of the member list
pub fn members_url(config: &SiteConfig) -> String {
    join_url(&config.url, &config.members_file)
}

/// Site route of an item's detail view
///
/// # Examples
/// ```ignore
/// read_more_path(&item) // -> "/content/experiences/保研/a.md"
/// ```
pub fn read_more_path(item: &ContentItem) -> String {
    format!(
        "/content/experiences/{}/{}",
        item.category,
        item.filename()
    )
}
