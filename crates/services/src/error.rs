//! Shared error types for the services crate.

use thiserror::Error;

use range_core::model::{CatalogError, SettingsError};

/// Errors emitted by drill session services.
///
/// Catalog load failures never appear here: they are absorbed by the bundled
/// fallback catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for session")]
    Empty,
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}
