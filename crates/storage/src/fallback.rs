//! Embedded default catalog and the load-or-fallback policy.

use std::time::Duration;

use range_core::model::{Color, HandColorCatalog, HandColorEntry};

use crate::repository::{CatalogSource, StorageError};

/// Upper bound on a single catalog fetch before the bundled table is used.
pub const DEFAULT_LOAD_TIMEOUT: Duration = Duration::from_secs(5);

const DEFAULT_ROWS: [(&str, Color); 9] = [
    ("AA", Color::Navy),
    ("AKs", Color::Navy),
    ("AQs", Color::Red),
    ("KQo", Color::Yellow),
    ("T9s", Color::Green),
    ("65s", Color::White),
    ("22", Color::LightBlue),
    ("QJo", Color::LightBlue),
    ("A2s", Color::Green),
];

/// Entries bundled with the crate, used whenever the real table cannot be loaded.
#[must_use]
pub fn default_entries() -> Vec<HandColorEntry> {
    DEFAULT_ROWS
        .iter()
        .map(|(hand, color)| HandColorEntry::new(*hand, *color))
        .collect()
}

/// The bundled catalog.
///
/// # Panics
///
/// Panics if the bundled rows are empty, which `DEFAULT_ROWS` rules out.
#[must_use]
pub fn default_catalog() -> HandColorCatalog {
    HandColorCatalog::new(default_entries()).expect("bundled catalog should be non-empty")
}

/// Whether a loaded catalog came from its source or from the bundled fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogOrigin {
    Source,
    Fallback,
}

/// Load from `source`, falling back to [`default_catalog`] on any failure.
///
/// Failures are logged at `warn` and never returned. A fetch running longer
/// than [`DEFAULT_LOAD_TIMEOUT`] counts as a failure.
pub async fn load_catalog_or_default(
    source: &dyn CatalogSource,
) -> (HandColorCatalog, CatalogOrigin) {
    load_catalog_with_timeout(source, DEFAULT_LOAD_TIMEOUT).await
}

/// [`load_catalog_or_default`] with an explicit fetch bound.
pub async fn load_catalog_with_timeout(
    source: &dyn CatalogSource,
    limit: Duration,
) -> (HandColorCatalog, CatalogOrigin) {
    let location = source.describe();
    let fetched = match tokio::time::timeout(limit, source.fetch_entries()).await {
        Ok(result) => result,
        Err(_) => Err(StorageError::Timeout(limit)),
    };
    match fetched {
        Ok(entries) => match HandColorCatalog::new(entries) {
            Ok(catalog) => {
                tracing::debug!(source = %location, entries = catalog.len(), "loaded hand catalog");
                (catalog, CatalogOrigin::Source)
            }
            Err(error) => {
                tracing::warn!(source = %location, %error, "catalog source empty, using bundled default");
                (default_catalog(), CatalogOrigin::Fallback)
            }
        },
        Err(error) => {
            tracing::warn!(source = %location, %error, "failed to load catalog, using bundled default");
            (default_catalog(), CatalogOrigin::Fallback)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemoryCatalog;
    use std::collections::HashSet;

    #[test]
    fn default_catalog_is_consistent() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 9);
        assert!(!catalog.has_duplicate_hands());
        for entry in catalog.entries() {
            assert!(range_core::model::HandNotation::parse(&entry.hand).is_ok());
        }
        let colors: HashSet<_> = catalog.entries().iter().map(|e| e.color).collect();
        assert!(colors.len() > 1);
    }

    #[tokio::test]
    async fn uses_source_when_available() {
        let source = InMemoryCatalog::with_entries(vec![HandColorEntry::new("72o", Color::Gray)]);
        let (catalog, origin) = load_catalog_or_default(&source).await;
        assert_eq!(origin, CatalogOrigin::Source);
        assert_eq!(catalog.entries()[0].hand, "72o");
    }

    #[tokio::test]
    async fn falls_back_when_source_fails() {
        let source = InMemoryCatalog::new();
        let (catalog, origin) = load_catalog_or_default(&source).await;
        assert_eq!(origin, CatalogOrigin::Fallback);
        assert_eq!(catalog, default_catalog());
    }

    struct StalledCatalog;

    #[async_trait::async_trait]
    impl CatalogSource for StalledCatalog {
        async fn fetch_entries(&self) -> Result<Vec<HandColorEntry>, StorageError> {
            std::future::pending().await
        }

        fn describe(&self) -> String {
            "stalled".into()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn stalled_source_times_out_to_fallback() {
        let (catalog, origin) = load_catalog_or_default(&StalledCatalog).await;
        assert_eq!(origin, CatalogOrigin::Fallback);
        assert_eq!(catalog, default_catalog());
    }
}
