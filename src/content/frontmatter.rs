//! Front-matter parsing
//!
//! Posts carry a small `key: value` header between two `---` lines. This is
//! not YAML: every line is matched on its own, values are plain strings and
//! only `tags` is split into a list. Parsing never fails; anything that does
//! not look like a header is left in the body.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Opening `---` line, header block, closing `---` line
    static ref BLOCK_RE: Regex =
        Regex::new(r"(?s)\A---\s*\n(.*?)\n---[ \t]*(?:\r?\n|\z)").unwrap();
    static ref LINE_RE: Regex = Regex::new(r"^([A-Za-z0-9_]+):\s*(.+)$").unwrap();
}

/// The key whose value is split into a list
const TAGS_KEY: &str = "tags";

/// A single front-matter value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FrontValue {
    Text(String),
    List(Vec<String>),
}

/// Front-matter data from a markdown file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontMatter {
    fields: IndexMap<String, FrontValue>,
}

impl FrontMatter {
    /// Split content into front-matter and body.
    ///
    /// The body has the header block and surrounding whitespace removed.
    /// Without a header the input is returned untouched as the body.
    pub fn parse(content: &str) -> (Self, &str) {
        let Some(caps) = BLOCK_RE.captures(content) else {
            return (Self::default(), content);
        };

        let whole = caps.get(0).map(|m| m.end()).unwrap_or(0);
        let block = caps.get(1).map(|m| m.as_str()).unwrap_or("");

        let mut fm = Self::default();
        for line in block.split('\n') {
            if let Some((key, value)) = parse_line(line) {
                fm.fields.insert(key.to_string(), value);
            }
        }

        if fm.fields.is_empty() {
            tracing::debug!("Front-matter block has no key lines");
        }

        (fm, content[whole..].trim())
    }

    /// Raw value for a key
    pub fn get(&self, key: &str) -> Option<&FrontValue> {
        self.fields.get(key)
    }

    /// Non-empty string value for a key
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.fields.get(key) {
            Some(FrontValue::Text(s)) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    /// Parsed tags, if a `tags` line was present
    pub fn tags(&self) -> Option<&[String]> {
        match self.fields.get(TAGS_KEY) {
            Some(FrontValue::List(tags)) => Some(tags),
            _ => None,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Match one header line; lines that are not `key: value` yield `None`
fn parse_line(line: &str) -> Option<(&str, FrontValue)> {
    let caps = LINE_RE.captures(line.trim())?;
    let key = caps.get(1)?.as_str();
    let value = strip_quotes(caps.get(2)?.as_str().trim());

    if key == TAGS_KEY {
        return Some((key, FrontValue::List(split_tags(value))));
    }
    Some((key, FrontValue::Text(value.to_string())))
}

/// Remove one layer of matching single or double quotes
fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.starts_with(quote) && value.ends_with(quote) {
            // A lone quote character counts as both ends
            return value.get(1..value.len().saturating_sub(1)).unwrap_or("");
        }
    }
    value
}

fn split_tags(value: &str) -> Vec<String> {
    let inner = value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .unwrap_or(value);

    inner
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
