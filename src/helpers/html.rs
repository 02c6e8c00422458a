//! HTML helper functions for listing cards and article views

use super::url::read_more_path;
use crate::config::LabelConfig;
use crate::content::{ContentItem, DocumentMeta, Member};

/// Tags shown on a listing card
const CARD_TAG_LIMIT: usize = 3;

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Render one listing card
pub fn card(item: &ContentItem, labels: &LabelConfig) -> String {
    let tags: String = item
        .tags
        .iter()
        .take(CARD_TAG_LIMIT)
        .map(|tag| format!(r#"<span class="tag">{}</span>"#, html_escape(tag)))
        .collect();

    format!(
        concat!(
            r#"<article class="card">"#,
            r#"<span class="card-category">{category}</span>"#,
            r#"<h3 class="card-title">{title}</h3>"#,
            r#"<div class="card-meta"><span>{author}</span><span>{year}</span><span>{date}</span></div>"#,
            r#"<p class="card-excerpt">{excerpt}</p>"#,
            r#"<div class="card-tags">{tags}</div>"#,
            r#"<a class="card-link" href="{href}">阅读全文</a>"#,
            r#"</article>"#
        ),
        category = html_escape(labels.display_label(&item.category)),
        title = html_escape(&item.title),
        author = html_escape(&item.author),
        year = html_escape(&item.year),
        date = html_escape(&item.date),
        excerpt = html_escape(&item.excerpt),
        tags = tags,
        href = html_escape(&read_more_path(item)),
    )
}

/// Render a filtered listing, or the empty-state message
pub fn listing(items: &[&ContentItem], label: &str, labels: &LabelConfig) -> String {
    if items.is_empty() {
        return empty_state(label, labels);
    }
    let cards: String = items.iter().map(|item| card(item, labels)).collect();
    format!(r#"<section class="listing">{}</section>"#, cards)
}

/// Message shown when a filter matches nothing
pub fn empty_message(label: &str, labels: &LabelConfig) -> String {
    if label == labels.all {
        "暂无经验分享内容".to_string()
    } else {
        format!("暂无{}类经验分享", label)
    }
}

pub fn empty_state(label: &str, labels: &LabelConfig) -> String {
    format!(
        r#"<p class="empty">{}</p>"#,
        html_escape(&empty_message(label, labels))
    )
}

/// Render an article: metadata header followed by the rendered body
pub fn article(meta: &DocumentMeta, body_html: &str) -> String {
    let tags: String = meta
        .tags
        .iter()
        .map(|tag| format!(r#"<span class="tag">{}</span>"#, html_escape(tag)))
        .collect();

    format!(
        concat!(
            r#"<article class="post">"#,
            r#"<header><span class="post-category">{category}</span>"#,
            r#"<h1 class="post-title">{title}</h1>"#,
            r#"<div class="post-meta"><span>{author}</span><time>{date}</time></div>"#,
            r#"<div class="post-tags">{tags}</div></header>"#,
            r#"<div class="prose">{body}</div>"#,
            r#"</article>"#
        ),
        category = html_escape(&meta.category),
        title = html_escape(&meta.title),
        author = html_escape(&meta.author),
        date = html_escape(&meta.date),
        tags = tags,
        body = body_html,
    )
}

/// Spinner placeholder while a fetch is in flight
pub fn loading() -> String {
    r#"<div class="loading"><div class="spinner"></div><p>加载中...</p></div>"#.to_string()
}

/// Error message with a manual retry control
pub fn error_block(message: &str) -> String {
    format!(
        r#"<div class="error"><p>加载内容时出错: {}</p><button onclick="window.location.reload()">重新加载</button></div>"#,
        html_escape(message)
    )
}

/// Render the member grid
pub fn members(members: &[Member]) -> String {
    let cards: String = members
        .iter()
        .map(|m| {
            let bio = m
                .bio
                .as_deref()
                .map(|b| format!(r#"<p class="member-bio">{}</p>"#, html_escape(b)))
                .unwrap_or_default();
            format!(
                r#"<a class="member" href="{}" target="_blank" rel="noopener"><img src="{}" alt="{}"><span>{}</span>{}</a>"#,
                html_escape(&m.homepage),
                html_escape(&m.avatar),
                html_escape(&m.name),
                html_escape(&m.name),
                bio
            )
        })
        .collect();
    format!(r#"<div class="members">{}</div>"#, cards)
}
