use thiserror::Error;

use crate::model::{CatalogError, ColorParseError, HandParseError, SettingsError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Color(#[from] ColorParseError),
    #[error(transparent)]
    Hand(#[from] HandParseError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}
