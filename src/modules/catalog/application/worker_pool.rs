use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;

use crate::shared::config::CatalogConfig;
use crate::shared::errors::{AppError, AppResult};

/// Process-wide bound on concurrent provider calls.
///
/// A permit covers one provider call and nothing else, so a task that is
/// itself fanning out never holds a permit while waiting on its children.
/// Clones share the same permits.
#[derive(Debug, Clone)]
pub struct WorkerPool {
    semaphore: Arc<Semaphore>,
    capacity: usize,
    call_timeout: Option<Duration>,
}

impl WorkerPool {
    pub fn new(capacity: usize, call_timeout: Option<Duration>) -> Self {
        let capacity = capacity.max(1);
        Self {
            semaphore: Arc::new(Semaphore::new(capacity)),
            capacity,
            call_timeout,
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(config.worker_pool_size, config.subfetch_timeout)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn call_timeout(&self) -> Option<Duration> {
        self.call_timeout
    }

    /// Permits not currently held by a running call
    pub fn available(&self) -> usize {
        self.semaphore.available_permits()
    }

    /// Run one provider call under a permit.
    ///
    /// With a configured timeout an elapsed call fails as `ProviderUnavailable`.
    pub async fn run<F, T>(&self, label: &str, call: F) -> AppResult<T>
    where
        F: Future<Output = AppResult<T>>,
    {
        let _permit = self.semaphore.acquire().await.map_err(|_| {
            AppError::ProviderUnavailable(format!("Worker pool closed before {}", label))
        })?;

        match self.call_timeout {
            Some(limit) => match tokio::time::timeout(limit, call).await {
                Ok(result) => result,
                Err(_) => {
                    log::warn!("Provider call {} timed out after {:?}", label, limit);
                    Err(AppError::ProviderUnavailable(format!(
                        "{} timed out after {:?}",
                        label, limit
                    )))
                }
            },
            None => call.await,
        }
    }
}

impl Default for WorkerPool {
    fn default() -> Self {
        Self::new(crate::shared::config::DEFAULT_WORKER_POOL_SIZE, None)
    }
}
