use async_trait::async_trait;
use range_core::model::HandColorEntry;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by catalog sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("catalog source returned no data")]
    EmptyResponse,

    #[error("catalog contained no valid rows (skipped {skipped})")]
    NoValidRows { skipped: usize },

    #[error("connection error: {0}")]
    Connection(String),

    #[error("catalog source did not answer within {0:?}")]
    Timeout(std::time::Duration),

    #[error("invalid catalog url: {0}")]
    InvalidUrl(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Supplier of reference `(hand, color)` rows.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch every valid entry the source holds.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the source is unreachable or yields no valid rows.
    async fn fetch_entries(&self) -> Result<Vec<HandColorEntry>, StorageError>;

    /// Human-readable location used in diagnostics.
    fn describe(&self) -> String;
}

/// Simple in-memory catalog for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    entries: Arc<Mutex<Vec<HandColorEntry>>>,
}

impl InMemoryCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entries(entries: Vec<HandColorEntry>) -> Self {
        Self {
            entries: Arc::new(Mutex::new(entries)),
        }
    }

    /// Replace the stored entries.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn replace(&self, entries: Vec<HandColorEntry>) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = entries;
        Ok(())
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalog {
    async fn fetch_entries(&self) -> Result<Vec<HandColorEntry>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        if guard.is_empty() {
            return Err(StorageError::EmptyResponse);
        }
        Ok(guard.clone())
    }

    fn describe(&self) -> String {
        "in-memory catalog".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use range_core::model::Color;

    #[tokio::test]
    async fn returns_stored_entries() {
        let repo = InMemoryCatalog::with_entries(vec![HandColorEntry::new("AA", Color::Navy)]);
        let entries = repo.fetch_entries().await.unwrap();
        assert_eq!(entries, vec![HandColorEntry::new("AA", Color::Navy)]);
    }

    #[tokio::test]
    async fn empty_catalog_is_an_error() {
        let repo = InMemoryCatalog::new();
        let err = repo.fetch_entries().await.unwrap_err();
        assert!(matches!(err, StorageError::EmptyResponse));

        repo.replace(vec![HandColorEntry::new("KK", Color::Navy)])
            .unwrap();
        assert_eq!(repo.fetch_entries().await.unwrap().len(), 1);
    }
}
