use super::{Error, Storage, StoreEntity};
use std::sync::Arc;
use tokio::sync::Mutex;

///
/// Serializes every access to [Storage].
///
/// Each mutation is a full read-modify-write of the collection, so it runs
/// under a single lock. Otherwise two overlapping mutations would each write
/// back their own copy and one of them would be lost.
///
pub struct Store {
    storage: Arc<dyn Storage>,
    lock: Mutex<()>,
}

impl Store {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            lock: Mutex::new(()),
        }
    }

    ///
    /// Runs `f` on the current collection.
    ///
    /// Collection that cannot be loaded is treated as empty.
    ///
    pub async fn read<T>(&self, f: impl FnOnce(&StoreEntity) -> T) -> T {
        let _guard = self.lock.lock().await;
        let store = self.load().await;

        f(&store)
    }

    ///
    /// Runs `f` on the current collection and saves the result
    /// when `f` returns [Some]. On [None] nothing is written.
    ///
    /// ### Errors
    /// - when saving fails. The persisted state is unknown afterwards
    ///   and the next call re-reads it.
    ///
    pub async fn modify<T>(
        &self,
        f: impl FnOnce(&mut StoreEntity) -> Option<T>,
    ) -> Result<Option<T>, Error> {
        let _guard = self.lock.lock().await;
        let mut store = self.load().await;

        let Some(result) = f(&mut store) else {
            return Ok(None);
        };

        self.storage.save(&store).await?;

        Ok(Some(result))
    }

    async fn load(&self) -> StoreEntity {
        match self.storage.load().await {
            Ok(store) => store,
            Err(err) => {
                tracing::warn!(%err, "cannot load store, treating it as empty");
                StoreEntity::default()
            }
        }
    }
}
