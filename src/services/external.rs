//! External catalog search (Open Library) with local fallback
//!
//! The remote call is never surfaced as an error: on any failure the local
//! catalog answers instead, with the same 200 and a bare array.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    config::ExternalConfig,
    error::{AppError, AppResult},
    models::{
        external::OpenLibrarySearchResponse, ExternalBook, ExternalSearchResult, SearchField,
    },
    repository::Repository,
};

/// A remote book search backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookSearchProvider: Send + Sync {
    async fn search(&self, field: SearchField, term: &str) -> AppResult<Vec<ExternalBook>>;
}

/// Open Library `search.json` client
#[derive(Clone)]
pub struct OpenLibraryClient {
    client: reqwest::Client,
    base_url: String,
    limit: u32,
}

impl OpenLibraryClient {
    pub fn new(config: &ExternalConfig) -> AppResult<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("bookreview-server/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            limit: config.search_limit,
        })
    }
}

#[async_trait]
impl BookSearchProvider for OpenLibraryClient {
    async fn search(&self, field: SearchField, term: &str) -> AppResult<Vec<ExternalBook>> {
        let url = format!("{}/search.json", self.base_url);
        let limit = self.limit.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[(field.as_str(), term), ("limit", limit.as_str())])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| AppError::Upstream(format!("Open Library request failed: {}", e)))?;

        let body: OpenLibrarySearchResponse = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("Malformed Open Library response: {}", e)))?;

        Ok(body.docs.into_iter().map(ExternalBook::from).collect())
    }
}

#[derive(Clone)]
pub struct ExternalSearchService {
    provider: Arc<dyn BookSearchProvider>,
    repository: Repository,
}

impl ExternalSearchService {
    pub fn new(provider: Arc<dyn BookSearchProvider>, repository: Repository) -> Self {
        Self {
            provider,
            repository,
        }
    }

    /// Search the remote catalog, falling back to the local one on failure
    pub async fn search(&self, field: SearchField, term: &str) -> ExternalSearchResult {
        match self.provider.search(field, term).await {
            Ok(books) => {
                tracing::debug!("External {} search for {:?}: {} results", field, term, books.len());
                ExternalSearchResult::Remote(books)
            }
            Err(e) => {
                tracing::warn!("External {} search failed, using local catalog: {}", field, e);
                ExternalSearchResult::Local(self.repository.books.search(field, term).await)
            }
        }
    }
}
