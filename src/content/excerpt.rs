//! Plain-text excerpts for posts without an explicit `excerpt` field

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HEADING_RE: Regex = Regex::new(r"#+\s+").unwrap();
    static ref LINK_RE: Regex = Regex::new(r"\[(.+?)\]\(.+?\)").unwrap();
}

/// Appended to every generated excerpt
pub const ELLIPSIS: &str = "...";

/// Default excerpt length in characters
pub const DEFAULT_LENGTH: usize = 150;

/// Strip markdown markup from `body` and cut it to `length` characters.
///
/// The ellipsis is always appended, even when nothing was cut, and the cut
/// may land mid-word.
pub fn generate(body: &str, length: usize) -> String {
    let text = HEADING_RE.replace_all(body, "");
    let text = text.replace("**", "").replace(['*', '`'], "");
    let text = LINK_RE.replace_all(&text, "$1");

    let mut excerpt: String = text.trim().chars().take(length).collect();
    excerpt.push_str(ELLIPSIS);
    excerpt
}
