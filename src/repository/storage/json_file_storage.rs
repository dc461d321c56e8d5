use super::Storage;
use crate::repository::{self, StoreEntity};
use axum::async_trait;
use std::{
    ffi::OsString,
    io::ErrorKind,
    path::{Path, PathBuf},
};

///
/// Storage that keeps the collection as a human readable JSON file.
///
/// Saving writes a sibling temporary file first and renames it over
/// the target, so the previous version survives a failed write.
///
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temporary_path(&self) -> PathBuf {
        let mut file_name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();
        file_name.push(".tmp");

        self.path.with_file_name(file_name)
    }
}

#[async_trait]
impl Storage for JsonFileStorage {
    async fn load(&self) -> Result<StoreEntity, repository::Error> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "store file not exist");
                return Ok(StoreEntity::default());
            }
            Err(err) => return Err(err.into()),
        };

        let store = serde_json::from_slice::<StoreEntity>(&bytes)?;
        tracing::debug!(
            path = %self.path.display(),
            tickets = store.tickets.len(),
            users = store.users.len(),
            "loaded store file"
        );

        Ok(store)
    }

    async fn save(&self, store: &StoreEntity) -> Result<(), repository::Error> {
        let bytes = serde_json::to_vec_pretty(store)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let temporary_path = self.temporary_path();
        tokio::fs::write(&temporary_path, &bytes).await?;
        tokio::fs::rename(&temporary_path, &self.path).await?;
        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "saved store file");

        Ok(())
    }
}
