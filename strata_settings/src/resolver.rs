//! Per-caller settings resolution with write-once process state.

use std::sync::OnceLock;

use camino::Utf8PathBuf;
use serde_yaml::Mapping;

use crate::error::SettingsError;
use crate::validate::RequiredKeys;
use crate::Settings;

/// Conventional directory holding per-caller settings files.
pub const SETTINGS_DIR: &str = "settings_files";

/// Locates, loads, and validates the single settings source for a caller,
/// then holds it as read-only state for the rest of the process.
///
/// Construct one resolver at startup and pass it by reference to everything
/// that reads configuration. The slot is write-once: a second
/// [`Resolver::init`] fails with [`SettingsError::AlreadyInitialized`]
/// rather than silently reconfiguring a running process.
#[derive(Debug)]
pub struct Resolver {
    settings_dir: Utf8PathBuf,
    slot: OnceLock<Settings>,
}

impl Resolver {
    /// Resolver reading settings files from the given directory.
    pub fn new(settings_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            settings_dir: settings_dir.into(),
            slot: OnceLock::new(),
        }
    }

    /// Resolver reading from the conventional [`SETTINGS_DIR`] directory at
    /// the package root.
    #[must_use]
    pub fn conventional() -> Self {
        Self::new(SETTINGS_DIR)
    }

    /// Path of the settings file serving `caller_id`.
    ///
    /// The file name is the second-to-last dot-separated segment of the
    /// caller identifier with a `.yml` extension: `loadtests.lms.locustfile`
    /// reads `settings_files/lms.yml`. This convention is an external
    /// contract with every script consuming the engine and must not change.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidCallerId`] when the identifier has no
    /// usable second-to-last segment.
    pub fn settings_path(&self, caller_id: &str) -> Result<Utf8PathBuf, SettingsError> {
        let stem = settings_file_stem(caller_id)?;
        Ok(self.settings_dir.join(format!("{stem}.yml")))
    }

    /// Load, validate, and publish the settings for `caller_id`.
    ///
    /// Reads the caller's settings file exactly once, checks the declared
    /// required keys, and stores the result in the write-once slot. Public
    /// settings are logged at debug level for later reference; secret values
    /// are never logged.
    ///
    /// # Errors
    ///
    /// Fails with [`SettingsError::AlreadyInitialized`] on a second call,
    /// with a path-annotated error when the source is unreadable or
    /// malformed, and with [`SettingsError::MissingRequired`] when declared
    /// required keys are absent or null.
    pub fn init(&self, caller_id: &str, required: &RequiredKeys) -> Result<(), SettingsError> {
        if self.slot.get().is_some() {
            return Err(SettingsError::AlreadyInitialized);
        }

        let path = self.settings_path(caller_id)?;
        tracing::info!(path = %path, "using settings file");
        let settings = Settings::from_path(&path)?;
        settings.validate_required(required)?;

        if settings.secret().is_empty() {
            tracing::info!("no secrets were specified in the settings file");
        } else {
            tracing::info!("secrets loaded from the settings file");
        }
        tracing::debug!(settings = ?settings.public(), "loaded public settings");

        self.slot
            .set(settings)
            .map_err(|_settings| SettingsError::AlreadyInitialized)
    }

    /// The resolved settings, once initialization has happened.
    #[must_use]
    pub fn settings(&self) -> Option<&Settings> {
        self.slot.get()
    }

    /// The resolved public tree, once initialization has happened.
    #[must_use]
    pub fn public(&self) -> Option<&Mapping> {
        self.settings().map(Settings::public)
    }

    /// The resolved secret tree, once initialization has happened.
    #[must_use]
    pub fn secret(&self) -> Option<&Mapping> {
        self.settings().map(Settings::secret)
    }
}

/// Second-to-last dot-separated segment of a caller identifier.
fn settings_file_stem(caller_id: &str) -> Result<&str, SettingsError> {
    let mut segments = caller_id.rsplit('.');
    segments.next();
    segments
        .next()
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| SettingsError::InvalidCallerId {
            caller_id: caller_id.to_owned(),
        })
}
