//! Content client - fetches the generated index and markdown documents
//! from a running site over HTTP.
//!
//! Each fetch is independent: there is no shared cache, no retry and no
//! timeout beyond the transport's own. A failed index or document fetch
//! becomes a single error message; a failed member-list fetch degrades to
//! an empty list.

mod state;

pub use state::FetchState;

use serde::de::DeserializeOwned;

use crate::config::SiteConfig;
use crate::content::{ContentIndex, Document, DocumentRoute, Member};
use crate::error::ClientError;
use crate::helpers::{content_url, index_url, members_url};

/// HTTP client for a deployed or locally served site
#[derive(Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    config: SiteConfig,
}

impl ContentClient {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Fetch and decode `index.json`
    pub async fn fetch_index(&self) -> Result<ContentIndex, ClientError> {
        let url = index_url(&self.config);
        tracing::debug!("Fetching content index from {}", url);
        self.get_json(&url).await
    }

    /// Fetch one markdown document and split off its front-matter
    pub async fn fetch_document(&self, route: &DocumentRoute) -> Result<Document, ClientError> {
        let url = content_url(&self.config, &route.path());
        tracing::debug!("Fetching document {}", url);
        let raw = self.get_text(&url).await?;
        Ok(Document::parse(&raw, route, &self.config.viewer_defaults))
    }

    /// Fetch the member list; any failure yields an empty list
    pub async fn fetch_members(&self) -> Vec<Member> {
        let url = members_url(&self.config);
        match self.get_json::<Vec<Member>>(&url).await {
            Ok(members) => members,
            Err(e) => {
                tracing::warn!("Failed to load member list: {}", e);
                Vec::new()
            }
        }
    }

    /// Index fetch folded into a view state
    pub async fn load_index(&self) -> FetchState<ContentIndex> {
        FetchState::from_result(self.fetch_index().await)
    }

    /// Document fetch folded into a view state
    pub async fn load_document(&self, route: &DocumentRoute) -> FetchState<Document> {
        FetchState::from_result(self.fetch_document(route).await)
    }

    async fn get_text(&self, url: &str) -> Result<String, ClientError> {
        let transport = |source: reqwest::Error| ClientError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self.http.get(url).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                url: url.to_string(),
                status,
            });
        }
        response.text().await.map_err(transport)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ClientError> {
        let body = self.get_text(url).await?;
        serde_json::from_str(&body).map_err(|source| ClientError::Decode {
            url: url.to_string(),
            source,
        })
    }
}
