//! Business logic services

pub mod auth;
pub mod catalog;
pub mod external;
pub mod reviews;

use std::sync::Arc;

use crate::{config::AppConfig, error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub catalog: catalog::CatalogService,
    pub reviews: reviews::ReviewsService,
    pub external: external::ExternalSearchService,
}

impl Services {
    /// Create all services, searching Open Library for external lookups
    pub fn new(repository: Repository, config: &AppConfig) -> AppResult<Self> {
        let provider = external::OpenLibraryClient::new(&config.external)?;
        Ok(Self::with_search_provider(repository, config, Arc::new(provider)))
    }

    /// Create all services around a given external search backend
    pub fn with_search_provider(
        repository: Repository,
        config: &AppConfig,
        provider: Arc<dyn external::BookSearchProvider>,
    ) -> Self {
        Self {
            auth: auth::AuthService::new(repository.clone(), config.auth.clone()),
            catalog: catalog::CatalogService::new(
                repository.clone(),
                config.catalog.simulated_delay(),
            ),
            reviews: reviews::ReviewsService::new(repository.clone()),
            external: external::ExternalSearchService::new(provider, repository),
        }
    }
}
