use std::sync::Arc;

use crate::modules::catalog::domain::CatalogApi;

use super::worker_pool::WorkerPool;

/// Looks up a person's IMDb id
#[derive(Clone)]
pub struct IdentityResolver {
    api: Arc<dyn CatalogApi>,
    pool: WorkerPool,
}

impl IdentityResolver {
    pub fn new(api: Arc<dyn CatalogApi>, pool: WorkerPool) -> Self {
        Self { api, pool }
    }

    /// `None` when the person has no id or the lookup failed; never retried
    pub async fn resolve_external_id(&self, person_id: u64) -> Option<String> {
        match self
            .pool
            .run("person external ids", self.api.person_imdb_id(person_id))
            .await
        {
            Ok(id) => id,
            Err(e) => {
                log::warn!("External id lookup failed for person {}: {}", person_id, e);
                None
            }
        }
    }
}
