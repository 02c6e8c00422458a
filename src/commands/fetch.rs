//! Fetch content from a running site

use anyhow::Result;

use crate::client::{ContentClient, FetchState};
use crate::content::{DocumentRoute, MarkdownRenderer};
use crate::helpers;
use crate::Site;

/// What to fetch
#[derive(Debug, Clone)]
pub enum FetchTarget {
    /// The content index, optionally filtered by label
    Index { label: Option<String>, html: bool },
    /// One markdown document
    Document { route: DocumentRoute, html: bool },
    /// The member list
    Members { html: bool },
}

/// Fetch from the site at `url` (the configured URL when omitted) and print
pub async fn run(site: &Site, url: Option<&str>, target: FetchTarget) -> Result<()> {
    let mut config = site.config.clone();
    if let Some(url) = url {
        config.url = url.to_string();
    }
    let client = ContentClient::new(config);

    match target {
        FetchTarget::Index { label, html } => {
            let state = client.load_index().await;
            if html {
                let rendered = state.render(|index| {
                    super::list::render_listing(site, index, label.as_deref())
                });
                println!("{}", rendered);
            }
            match state {
                FetchState::Ready(index) if !html => {
                    super::list::print_listing(site, &index, label.as_deref());
                }
                FetchState::Failed(message) => anyhow::bail!(message),
                _ => {}
            }
        }

        FetchTarget::Document { route, html } => {
            let doc = match client.load_document(&route).await {
                FetchState::Ready(doc) => doc,
                FetchState::Failed(message) => anyhow::bail!(message),
                FetchState::Loading => return Ok(()),
            };

            if html {
                let body = MarkdownRenderer::new().render(&doc.body)?;
                println!("{}", helpers::article(&doc.meta, &body));
            } else {
                println!("{}", doc.meta.title);
                println!(
                    "{} | {} | {}",
                    doc.meta.category, doc.meta.author, doc.meta.date
                );
                if !doc.meta.tags.is_empty() {
                    println!("#{}", doc.meta.tags.join(" #"));
                }
                println!();
                println!("{}", doc.body);
            }
        }

        FetchTarget::Members { html } => {
            let members = client.fetch_members().await;
            if html {
                println!("{}", helpers::members(&members));
            } else {
                println!("Members ({}):", members.len());
                for m in &members {
                    println!("  {} <{}>", m.name, m.homepage);
                }
            }
        }
    }

    Ok(())
}
