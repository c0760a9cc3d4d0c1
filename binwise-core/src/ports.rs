//! Error type and the storage port for the user's saved location.

use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Error as JsonError;

use crate::model::{ItemId, SavedLocation, TownId};

#[derive(thiserror::Error, Debug)]
/// Errors raised by binwise libraries.
pub enum BinwiseError {
    /// No town is registered under the identifier.
    #[error("Unknown town: {0}")]
    UnknownTown(TownId),
    /// No item is registered under the identifier.
    #[error("Unknown item: {0}")]
    UnknownItem(ItemId),
    /// Reference data or a stored record could not be parsed.
    #[error("Data error: {0}")]
    Data(#[from] JsonError),
    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A season bound is not written as `MM-DD`.
    #[error("Invalid season day: {0}")]
    InvalidSeasonDay(String),
    /// The location store failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

#[async_trait]
/// Persistence of the single saved-location record.
pub trait LocationStore: Send + Sync {
    /// Read the saved location, `None` until the user picked one.
    ///
    /// # Errors
    ///
    /// Returns a [`BinwiseError`] when the record cannot be read.
    async fn load(&self) -> Result<Option<SavedLocation>, BinwiseError>;

    /// Replace the saved location.
    ///
    /// # Errors
    ///
    /// Returns a [`BinwiseError`] when the record cannot be written.
    async fn save(&self, location: &SavedLocation) -> Result<(), BinwiseError>;

    /// Forget the saved location.
    ///
    /// # Errors
    ///
    /// Returns a [`BinwiseError`] when the record cannot be removed.
    async fn clear(&self) -> Result<(), BinwiseError>;
}

#[derive(Debug, Default)]
/// Location store keeping the record in memory.
pub struct MemoryLocationStore {
    location: RwLock<Option<SavedLocation>>,
}

impl MemoryLocationStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_err: T) -> BinwiseError {
    BinwiseError::Storage("location lock poisoned".to_owned())
}

#[async_trait]
impl LocationStore for MemoryLocationStore {
    async fn load(&self) -> Result<Option<SavedLocation>, BinwiseError> {
        Ok(self.location.read().map_err(poisoned)?.clone())
    }

    async fn save(&self, location: &SavedLocation) -> Result<(), BinwiseError> {
        *self.location.write().map_err(poisoned)? = Some(location.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), BinwiseError> {
        *self.location.write().map_err(poisoned)? = None;
        Ok(())
    }
}
