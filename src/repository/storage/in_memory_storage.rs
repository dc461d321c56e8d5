use super::Storage;
use crate::repository::{self, StoreEntity};
use axum::async_trait;
use tokio::sync::Mutex;

///
/// Storage that lives only as long as the process does
///
#[derive(Default)]
pub struct InMemoryStorage {
    store: Mutex<StoreEntity>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn load(&self) -> Result<StoreEntity, repository::Error> {
        Ok(self.store.lock().await.clone())
    }

    async fn save(&self, store: &StoreEntity) -> Result<(), repository::Error> {
        *self.store.lock().await = store.clone();
        Ok(())
    }
}
