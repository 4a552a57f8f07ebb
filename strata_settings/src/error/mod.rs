//! Error types produced by the settings engine.

mod malformed;
mod missing;
mod types;

pub use malformed::{DocumentSlot, MalformedSettingFile, NonMappingDocument};
pub use missing::MissingSettings;
pub use types::SettingsError;
