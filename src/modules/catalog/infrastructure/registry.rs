use std::{collections::HashMap, sync::Arc};
use tracing::info;

use crate::modules::catalog::domain::CatalogApi;
use crate::modules::catalog::infrastructure::adapters::TmdbAdapter;
use crate::shared::config::CatalogConfig;
use crate::shared::domain::CatalogProvider;
use crate::shared::errors::{AppError, AppResult};

/// Maps each provider kind to its client instance.
///
/// Built once at startup; lookups never construct clients.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    clients: HashMap<CatalogProvider, Arc<dyn CatalogApi>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the client for the configured provider
    pub fn from_config(config: &CatalogConfig) -> Self {
        let mut registry = Self::new();
        let client: Arc<dyn CatalogApi> = match config.provider {
            CatalogProvider::Tmdb => Arc::new(TmdbAdapter::new(config)),
        };
        registry.register(client);
        info!("Registered catalog provider {} at {}", config.provider, config.base_url);
        registry
    }

    /// Register a client under the provider it reports; replaces any previous one
    pub fn register(&mut self, client: Arc<dyn CatalogApi>) {
        self.clients.insert(client.provider(), client);
    }

    pub fn get(&self, provider: CatalogProvider) -> AppResult<Arc<dyn CatalogApi>> {
        self.clients.get(&provider).cloned().ok_or_else(|| {
            AppError::ConfigError(format!("No client registered for provider {}", provider))
        })
    }
}
