mod catalog;
mod color;
mod entry;
mod hand;
mod ids;
mod settings;
mod summary;

pub use ids::{ParseIdError, SessionId};

pub use catalog::{CatalogError, HandColorCatalog};
pub use color::{Color, ColorParseError};
pub use entry::{Answer, HandColorEntry, Question};
pub use hand::{HandKind, HandNotation, HandParseError, Rank};
pub use settings::{DrillSettings, ENV_REVEAL_MS, ENV_SAMPLE_SIZE, SettingsError};
pub use summary::ResultSummary;
