//! Runtime configuration for the catalog pipeline
//!
//! Values come from the process environment (optionally seeded from a `.env`
//! file by the caller via `dotenvy`).

use std::time::Duration;

use crate::shared::domain::CatalogProvider;
use crate::shared::errors::{AppError, AppResult};

pub const DEFAULT_WORKER_POOL_SIZE: usize = 10;
pub const DEFAULT_POPULAR_TV_SINCE: &str = "2025-01-01";
pub const DEFAULT_ANIME_SINCE: &str = "2023-01-01";
pub const DEFAULT_ANIME_MIN_VOTES: u32 = 100;

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub provider: CatalogProvider,
    pub api_key: String,
    pub base_url: String,
    /// Capacity of the process-wide worker pool for provider calls
    pub worker_pool_size: usize,
    /// Per-call timeout. `None` means a hung provider call blocks its fan-in forever.
    pub subfetch_timeout: Option<Duration>,
    /// Lower bound on first air date for the popular TV feed
    pub popular_tv_since: String,
    /// Lower bound on first air date for the anime feed
    pub anime_since: String,
    pub anime_min_votes: u32,
    pub user_agent: String,
}

impl CatalogConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        let provider = CatalogProvider::default();
        Self {
            provider,
            api_key: api_key.into(),
            base_url: provider.default_base_url().to_string(),
            worker_pool_size: DEFAULT_WORKER_POOL_SIZE,
            subfetch_timeout: None,
            popular_tv_since: DEFAULT_POPULAR_TV_SINCE.to_string(),
            anime_since: DEFAULT_ANIME_SINCE.to_string(),
            anime_min_votes: DEFAULT_ANIME_MIN_VOTES,
            user_agent: format!("showcase/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_worker_pool_size(mut self, size: usize) -> Self {
        self.worker_pool_size = size;
        self
    }

    pub fn with_subfetch_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.subfetch_timeout = timeout;
        self
    }

    /// Load configuration from process environment variables
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("TMDB_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AppError::ConfigError("TMDB_API_KEY is not set".to_string()))?;

        let mut config = Self::new(api_key.trim());

        if let Some(raw) = lookup("CATALOG_PROVIDER") {
            let provider: CatalogProvider = raw
                .parse()
                .map_err(|_| AppError::ConfigError(format!("Unknown CATALOG_PROVIDER: {}", raw)))?;
            config.provider = provider;
            config.base_url = provider.default_base_url().to_string();
        }

        if let Some(base_url) = lookup("TMDB_BASE_URL") {
            config = config.with_base_url(base_url.trim());
        }

        if let Some(raw) = lookup("CATALOG_WORKER_POOL_SIZE") {
            let size: usize = raw.trim().parse().map_err(|_| {
                AppError::ConfigError(format!("CATALOG_WORKER_POOL_SIZE is not a number: {}", raw))
            })?;
            config.worker_pool_size = size;
        }

        if let Some(raw) = lookup("CATALOG_SUBFETCH_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                AppError::ConfigError(format!(
                    "CATALOG_SUBFETCH_TIMEOUT_SECS is not a number: {}",
                    raw
                ))
            })?;
            config.subfetch_timeout = Some(Duration::from_secs(secs));
        }

        if let Some(since) = lookup("CATALOG_POPULAR_TV_SINCE") {
            config.popular_tv_since = since.trim().to_string();
        }

        if let Some(since) = lookup("CATALOG_ANIME_SINCE") {
            config.anime_since = since.trim().to_string();
        }

        if let Some(raw) = lookup("CATALOG_ANIME_MIN_VOTES") {
            config.anime_min_votes = raw.trim().parse().map_err(|_| {
                AppError::ConfigError(format!("CATALOG_ANIME_MIN_VOTES is not a number: {}", raw))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.worker_pool_size == 0 {
            return Err(AppError::ConfigError(
                "Worker pool size must be at least 1".to_string(),
            ));
        }
        if let Some(timeout) = self.subfetch_timeout {
            if timeout.is_zero() {
                return Err(AppError::ConfigError(
                    "Sub-fetch timeout must be positive when set".to_string(),
                ));
            }
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(AppError::ConfigError(format!(
                "Base URL must be http(s): {}",
                self.base_url
            )));
        }
        Ok(())
    }
}
