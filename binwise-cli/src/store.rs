use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use binwise_core::{BinwiseError, LocationStore, SavedLocation};
use tokio::fs;
use tracing::debug;

/// Location store backed by a single JSON file.
pub(crate) struct JsonFileLocationStore {
    path: PathBuf,
}

impl JsonFileLocationStore {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl LocationStore for JsonFileLocationStore {
    async fn load(&self) -> Result<Option<SavedLocation>, BinwiseError> {
        match fs::read_to_string(&self.path).await {
            Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no saved location");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn save(&self, location: &SavedLocation) -> Result<(), BinwiseError> {
        let json = serde_json::to_string_pretty(location)?;
        fs::write(&self.path, json).await?;
        debug!(path = %self.path.display(), "saved location written");
        Ok(())
    }

    async fn clear(&self) -> Result<(), BinwiseError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
