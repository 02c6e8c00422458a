//! Per-view fetch state

use crate::error::ClientError;
use crate::helpers;

/// Lifecycle of a single fetch: loading, then exactly one terminal state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState<T> {
    Loading,
    Ready(T),
    /// User-visible error message
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn from_result(result: Result<T, ClientError>) -> Self {
        match result {
            Ok(value) => FetchState::Ready(value),
            Err(e) => {
                tracing::warn!("Fetch failed: {}", e);
                FetchState::Failed(e.to_string())
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            FetchState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Render the loading spinner, the error block, or the ready value
    pub fn render<F>(&self, ready: F) -> String
    where
        F: FnOnce(&T) -> String,
    {
        match self {
            FetchState::Loading => helpers::loading(),
            FetchState::Ready(value) => ready(value),
            FetchState::Failed(message) => helpers::error_block(message),
        }
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Loading
    }
}
