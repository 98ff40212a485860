#![forbid(unsafe_code)]

pub mod csv;
pub mod fallback;
pub mod file;
pub mod http;
pub mod repository;

pub use fallback::{
    CatalogOrigin, DEFAULT_LOAD_TIMEOUT, default_catalog, default_entries, load_catalog_or_default,
    load_catalog_with_timeout,
};
pub use file::CsvFileCatalog;
pub use http::HttpCatalog;
pub use repository::{CatalogSource, InMemoryCatalog, StorageError};
