use crate::repository::{self, StoreEntity};
use axum::async_trait;

///
/// Backend that holds the whole persisted collection.
///
/// Implementations load and save the collection as a unit. They don't
/// synchronize anything, [crate::repository::Store] serializes access.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Storage: Send + Sync {
    ///
    /// Loads the collection.
    ///
    /// Absence of the collection is not an error, an empty collection
    /// is returned instead.
    ///
    async fn load(&self) -> Result<StoreEntity, repository::Error>;

    ///
    /// Replaces whole persisted collection with `store`
    ///
    async fn save(&self, store: &StoreEntity) -> Result<(), repository::Error>;
}
