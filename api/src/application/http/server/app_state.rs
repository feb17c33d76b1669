use std::sync::{Arc, Mutex};

use leftover_chef_core::application::{LeftoverChefService, LeftoverChefStore};
use tracing::error;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: LeftoverChefService,
    pub saved_items: Arc<Mutex<LeftoverChefStore>>,
}

impl AppState {
    pub fn new(
        args: Arc<Args>,
        service: LeftoverChefService,
        saved_items: LeftoverChefStore,
    ) -> Self {
        Self {
            args,
            service,
            saved_items: Arc::new(Mutex::new(saved_items)),
        }
    }

    /// Runs `operation` against the locked store on the blocking thread pool.
    /// Each store operation runs to completion while the lock is held.
    pub async fn with_saved_items<F, T>(&self, operation: F) -> Result<T, ApiError>
    where
        F: FnOnce(&LeftoverChefStore) -> T + Send + 'static,
        T: Send + 'static,
    {
        let saved_items = Arc::clone(&self.saved_items);

        tokio::task::spawn_blocking(move || {
            let store = saved_items.lock().map_err(|e| {
                error!("Saved items store lock poisoned: {}", e);
                ApiError::InternalServerError("Saved items are unavailable".to_string())
            })?;

            Ok::<T, ApiError>(operation(&store))
        })
        .await
        .map_err(|e| {
            error!("Saved items task failed: {}", e);
            ApiError::InternalServerError("Saved items are unavailable".to_string())
        })?
    }
}
