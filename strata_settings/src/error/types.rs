//! Primary error enum for settings resolution flows.

use camino::Utf8PathBuf;
use thiserror::Error;

use super::{MalformedSettingFile, MissingSettings};

/// Errors that can occur while resolving settings.
///
/// None of these are caught or retried internally; configuration problems
/// must stop the process before any traffic-generating work begins.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SettingsError {
    /// Structural violation in a settings source.
    #[error("malformed settings file: {0}")]
    Malformed(#[from] MalformedSettingFile),

    /// One or more declared-required keys are absent or null.
    #[error(transparent)]
    MissingRequired(#[from] MissingSettings),

    /// Error annotated with the settings file it originated from.
    #[error("settings file error in '{path}': {source}")]
    File {
        /// Path of the settings file that triggered the failure.
        path: Utf8PathBuf,
        /// Underlying error reported while loading the file.
        #[source]
        source: Box<SettingsError>,
    },

    /// A settings file could not be read.
    #[error("failed to read settings file '{path}': {source}")]
    Io {
        /// Path of the unreadable settings file.
        path: Utf8PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },

    /// A settings document could not be rendered as YAML.
    #[error("failed to render settings as YAML: {source}")]
    Emit {
        /// Underlying YAML emitter error.
        #[source]
        source: serde_yaml::Error,
    },

    /// The resolver was initialized a second time in the same process.
    #[error("settings have already been initialized in this process")]
    AlreadyInitialized,

    /// No settings file name can be derived from the caller identifier.
    #[error("cannot derive a settings file name from caller id '{caller_id}'")]
    InvalidCallerId {
        /// The identifier that defeated the naming convention.
        caller_id: String,
    },
}

impl SettingsError {
    /// Annotate an error with the path of the settings file it came from.
    #[must_use]
    pub fn in_file(path: impl Into<Utf8PathBuf>, source: Self) -> Self {
        Self::File {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// Wrap a filesystem error with the path that produced it.
    #[must_use]
    pub fn io(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
