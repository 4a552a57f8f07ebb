//! Error type for the `merge_settings` binary.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Failures the merge tool can exit with.
#[derive(Debug, Error)]
pub enum MergeError {
    /// The settings engine rejected or could not load an input file.
    #[error(transparent)]
    Settings(#[from] strata_settings::SettingsError),

    /// An input file could not be read for passthrough.
    #[error("failed to read '{path}': {source}")]
    Read {
        /// Path of the unreadable input.
        path: Utf8PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },

    /// Writing merged output to stdout failed.
    #[error("failed to write to stdout: {0}")]
    Stdout(#[source] std::io::Error),

    /// Writing a diagnostic to stderr failed.
    #[error("failed to write to stderr: {0}")]
    Stderr(#[source] std::io::Error),
}

impl MergeError {
    /// Wrap a read failure with the offending path.
    #[must_use]
    pub fn read(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}
