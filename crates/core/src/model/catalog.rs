use std::collections::HashSet;
use thiserror::Error;

use crate::model::entry::HandColorEntry;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("hand color catalog is empty")]
    Empty,
}

/// Read-only, non-empty set of reference entries a drill samples from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandColorCatalog {
    entries: Vec<HandColorEntry>,
}

impl HandColorCatalog {
    /// Wrap a list of entries.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` if `entries` is empty.
    pub fn new(entries: Vec<HandColorEntry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { entries })
    }

    #[must_use]
    pub fn entries(&self) -> &[HandColorEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if any hand appears more than once.
    #[must_use]
    pub fn has_duplicate_hands(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.entries.len());
        !self.entries.iter().all(|e| seen.insert(e.hand.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Color;

    #[test]
    fn empty_catalog_is_rejected() {
        assert_eq!(HandColorCatalog::new(Vec::new()), Err(CatalogError::Empty));
    }

    #[test]
    fn detects_duplicate_hands() {
        let unique = HandColorCatalog::new(vec![
            HandColorEntry::new("AA", Color::Navy),
            HandColorEntry::new("KK", Color::Navy),
        ])
        .unwrap();
        assert!(!unique.has_duplicate_hands());
        assert_eq!(unique.len(), 2);

        let dup = HandColorCatalog::new(vec![
            HandColorEntry::new("AA", Color::Navy),
            HandColorEntry::new("AA", Color::Red),
        ])
        .unwrap();
        assert!(dup.has_duplicate_hands());
    }
}
