use std::path::{Path, PathBuf};

use async_trait::async_trait;
use range_core::model::HandColorEntry;

use crate::csv::parse_catalog;
use crate::repository::{CatalogSource, StorageError};

/// Catalog read from a `hand,color` CSV file on disk.
#[derive(Debug, Clone)]
pub struct CsvFileCatalog {
    path: PathBuf,
}

impl CsvFileCatalog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for CsvFileCatalog {
    async fn fetch_entries(&self) -> Result<Vec<HandColorEntry>, StorageError> {
        let text = tokio::fs::read_to_string(&self.path).await?;
        parse_catalog(&text)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
